//! # Summerlin Core
//!
//! Core types and errors shared by the Summerlin West Homes services.
//!
//! This crate provides the foundational building blocks used throughout the workspace:
//!
//! - **Types**: Domain newtypes like [`Money`], [`AnnualRate`], [`LoanTerm`]
//! - **Listings**: The [`Listing`] record and its classification enums
//! - **Leads**: Contact, valuation and sell-your-home request shapes
//! - **Errors**: [`SummerlinError`] and the [`SummerlinResult`] alias
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes keep rates, terms and amounts from being mixed up
//! - **Validate at the edge**: Constructors reject values the engine cannot use
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use summerlin_core::prelude::*;
//!
//! let rate = AnnualRate::from_percent(6.5).unwrap();
//! let term = LoanTerm::THIRTY_YEARS;
//! assert_eq!(term.months(), 360);
//! assert!((rate.monthly_decimal() - 0.065 / 12.0).abs() < 1e-15);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SummerlinError, SummerlinResult};
    pub use crate::types::{
        AnnualRate, ContactInfo, ContactMethod, ContactRequest, Lead, LeadKind, Listing,
        ListingStatus, LoanTerm, Money, PropertyDetails, PropertyType, SellRequest, Timeline,
        ValuationRequest,
    };
}

// Re-export commonly used types at crate root
pub use error::{SummerlinError, SummerlinResult};
pub use types::{AnnualRate, Listing, LoanTerm, Money};

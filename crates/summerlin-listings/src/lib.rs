//! # Summerlin Listings
//!
//! Listing catalog and search for Summerlin West Homes.
//!
//! - [`ListingFilter`]: optional criteria, all of which must hold
//! - [`ListingSource`]: async lookup and search seam
//! - [`InMemoryListingStore`]: DashMap-backed store, seeded from [`catalog`]
//!
//! ## Usage
//!
//! ```rust
//! use summerlin_listings::prelude::*;
//! use summerlin_listings::sample_listings;
//!
//! let filter = ListingFilter::new().village("The Ridges").min_beds(5);
//! let found: Vec<_> = sample_listings()
//!     .into_iter()
//!     .filter(|l| filter.matches(l))
//!     .collect();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].mls, "2418448");
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod source;
pub mod store;

pub use catalog::{sample_listings, VILLAGES};
pub use error::{ListingError, ListingResult};
pub use filter::ListingFilter;
pub use source::ListingSource;
pub use store::InMemoryListingStore;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ListingError, ListingResult};
    pub use crate::filter::ListingFilter;
    pub use crate::source::ListingSource;
    pub use crate::store::InMemoryListingStore;
}

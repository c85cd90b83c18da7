//! Domain types for the Summerlin services.
//!
//! - [`Money`]: USD amount held as a decimal, rounded to cents for display
//! - [`AnnualRate`]: Nominal annual interest rate in percent
//! - [`LoanTerm`]: Loan term in whole years
//! - [`Listing`]: A property listing with its classification enums
//! - [`Lead`]: Contact, valuation and sell-your-home requests

mod lead;
mod listing;
mod money;
mod rate;
mod term;

pub use lead::{
    ContactInfo, ContactMethod, ContactRequest, Lead, LeadKind, PropertyDetails, SellRequest,
    Timeline, ValuationRequest,
};
pub use listing::{Listing, ListingStatus, PropertyType};
pub use money::{round_cents, Money};
pub use rate::AnnualRate;
pub use term::LoanTerm;

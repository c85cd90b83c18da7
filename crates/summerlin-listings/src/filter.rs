//! Listing search filter.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use summerlin_core::types::{ListingStatus, PropertyType};
use summerlin_core::Listing;

use crate::error::{ListingError, ListingResult};

/// Search criteria for listings.
///
/// Every field is optional and an absent field never excludes a listing.
/// Numeric bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingFilter {
    /// Village name, case-insensitive exact match
    pub village: Option<String>,
    /// Minimum price
    pub min_price: Option<u64>,
    /// Maximum price
    pub max_price: Option<u64>,
    /// Minimum bedrooms
    pub min_beds: Option<u8>,
    /// Minimum bathrooms
    pub min_baths: Option<u8>,
    /// Minimum square feet
    pub min_sqft: Option<u32>,
    /// Maximum square feet
    pub max_sqft: Option<u32>,
    /// Property type
    pub property_type: Option<PropertyType>,
    /// Market status
    pub status: Option<ListingStatus>,
    /// Only listings that can still be bought (for sale or coming soon)
    pub available_only: bool,
    /// Features that must all be present (substring, case-insensitive)
    pub features: Vec<String>,
    /// Free text over title, address, village and MLS number
    pub text: Option<String>,
}

impl ListingFilter {
    /// Creates an empty filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a village.
    #[must_use]
    pub fn village(mut self, village: impl Into<String>) -> Self {
        self.village = Some(village.into());
        self
    }

    /// Restricts to a price band.
    #[must_use]
    pub fn price_between(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Requires a minimum number of bedrooms.
    #[must_use]
    pub fn min_beds(mut self, beds: u8) -> Self {
        self.min_beds = Some(beds);
        self
    }

    /// Restricts to a property type.
    #[must_use]
    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    /// Restricts to a status.
    #[must_use]
    pub fn status(mut self, status: ListingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Drops listings that are under contract, sold or off the market.
    #[must_use]
    pub fn available_only(mut self) -> Self {
        self.available_only = true;
        self
    }

    /// Requires a feature.
    #[must_use]
    pub fn feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Adds a free-text query.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Checks that the bounds are consistent.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::InvalidFilter` when a minimum exceeds its maximum.
    pub fn validate(&self) -> ListingResult<()> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ListingError::InvalidFilter(format!(
                    "min_price {min} exceeds max_price {max}"
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min_sqft, self.max_sqft) {
            if min > max {
                return Err(ListingError::InvalidFilter(format!(
                    "min_sqft {min} exceeds max_sqft {max}"
                )));
            }
        }
        Ok(())
    }

    /// Returns true if the listing satisfies every criterion.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(ref village) = self.village {
            if !listing.village.eq_ignore_ascii_case(village.trim()) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if listing.price > max {
                return false;
            }
        }
        if let Some(beds) = self.min_beds {
            if listing.beds < beds {
                return false;
            }
        }
        if let Some(baths) = self.min_baths {
            if listing.baths < baths {
                return false;
            }
        }
        if let Some(min) = self.min_sqft {
            if listing.sqft < min {
                return false;
            }
        }
        if let Some(max) = self.max_sqft {
            if listing.sqft > max {
                return false;
            }
        }
        if let Some(property_type) = self.property_type {
            if listing.property_type != property_type {
                return false;
            }
        }
        if let Some(status) = self.status {
            if listing.status != status {
                return false;
            }
        }
        if self.available_only && !listing.status.is_available() {
            return false;
        }
        if !self.features.iter().all(|f| listing.has_feature(f)) {
            return false;
        }
        if let Some(ref text) = self.text {
            let needle = text.trim().to_lowercase();
            let matches = listing.title.to_lowercase().contains(&needle)
                || listing.address.to_lowercase().contains(&needle)
                || listing.village.to_lowercase().contains(&needle)
                || listing.mls.contains(&needle);
            if !matches {
                return false;
            }
        }

        true
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Result ordering: most expensive first, ties broken by id.
pub fn result_order(a: &Listing, b: &Listing) -> Ordering {
    b.price.cmp(&a.price).then_with(|| a.id.cmp(&b.id))
}

/// Filters, orders and paginates a slice of listings.
#[must_use]
pub fn apply(filter: &ListingFilter, listings: &[Listing], limit: usize, offset: usize) -> Vec<Listing> {
    let mut results: Vec<Listing> = listings.iter().filter(|l| filter.matches(l)).cloned().collect();
    results.sort_by(result_order);
    results.into_iter().skip(offset).take(limit).collect()
}

//! Property listing records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SummerlinError;

/// Kind of property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    /// Detached single-family home
    SingleFamily,
    /// Luxury estate
    LuxuryEstate,
    /// Home on or fronting a golf course
    GolfCourseHome,
    /// Condominium
    Condo,
    /// Townhome
    Townhome,
    /// 55+ active adult community
    #[serde(rename = "active-adult-55")]
    ActiveAdult55,
}

impl PropertyType {
    /// All property types, in display order.
    pub const ALL: [PropertyType; 6] = [
        PropertyType::SingleFamily,
        PropertyType::LuxuryEstate,
        PropertyType::GolfCourseHome,
        PropertyType::Condo,
        PropertyType::Townhome,
        PropertyType::ActiveAdult55,
    ];

    /// Returns the human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "Single Family",
            PropertyType::LuxuryEstate => "Luxury Estate",
            PropertyType::GolfCourseHome => "Golf Course Home",
            PropertyType::Condo => "Condo",
            PropertyType::Townhome => "Townhome",
            PropertyType::ActiveAdult55 => "55+ Active Adult",
        }
    }

    /// Returns the URL/API slug.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single-family",
            PropertyType::LuxuryEstate => "luxury-estate",
            PropertyType::GolfCourseHome => "golf-course-home",
            PropertyType::Condo => "condo",
            PropertyType::Townhome => "townhome",
            PropertyType::ActiveAdult55 => "active-adult-55",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PropertyType {
    type Err = SummerlinError;

    /// Accepts either the slug or the label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.slug() == needle || t.label().to_lowercase() == needle)
            .ok_or_else(|| SummerlinError::invalid_input(format!("unknown property type: {s}")))
    }
}

/// Market status of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingStatus {
    /// Actively for sale
    #[default]
    ForSale,
    /// Accepted offer, not yet closed
    UnderContract,
    /// Closed
    Sold,
    /// Announced, not yet listed
    ComingSoon,
    /// Withdrawn from the market
    OffMarket,
}

impl ListingStatus {
    /// All statuses.
    pub const ALL: [ListingStatus; 5] = [
        ListingStatus::ForSale,
        ListingStatus::UnderContract,
        ListingStatus::Sold,
        ListingStatus::ComingSoon,
        ListingStatus::OffMarket,
    ];

    /// Returns the URL/API slug.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            ListingStatus::ForSale => "for-sale",
            ListingStatus::UnderContract => "under-contract",
            ListingStatus::Sold => "sold",
            ListingStatus::ComingSoon => "coming-soon",
            ListingStatus::OffMarket => "off-market",
        }
    }

    /// Returns true if the property can still be bought.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, ListingStatus::ForSale | ListingStatus::ComingSoon)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for ListingStatus {
    type Err = SummerlinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|st| st.slug() == needle)
            .ok_or_else(|| SummerlinError::invalid_input(format!("unknown listing status: {s}")))
    }
}

/// A property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Internal identifier
    pub id: String,
    /// MLS number
    pub mls: String,
    /// Headline
    pub title: String,
    /// Asking price in whole dollars
    pub price: u64,
    /// Street address
    pub address: String,
    /// Summerlin West village
    pub village: String,
    /// Bedrooms
    pub beds: u8,
    /// Bathrooms
    pub baths: u8,
    /// Living area in square feet
    pub sqft: u32,
    /// Lot size in acres
    pub lot_size_acres: f64,
    /// Year built
    pub year_built: u16,
    /// Property type
    pub property_type: PropertyType,
    /// Market status
    #[serde(default)]
    pub status: ListingStatus,
    /// Marketing features ("Guard Gated", "Pool & Spa", ...)
    #[serde(default)]
    pub features: Vec<String>,
    /// Days since the listing went live
    #[serde(default)]
    pub days_on_market: u32,
}

impl Listing {
    /// Price per square foot, rounded to whole dollars. Zero when the area is unknown.
    #[must_use]
    pub fn price_per_sqft(&self) -> u64 {
        if self.sqft == 0 {
            return 0;
        }
        (self.price as f64 / f64::from(self.sqft)).round() as u64
    }

    /// Returns true if any feature contains `needle`, case-insensitively.
    #[must_use]
    pub fn has_feature(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.features
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
    }
}

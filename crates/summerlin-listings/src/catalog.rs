//! Seed catalog of Summerlin West listings.

use summerlin_core::types::{ListingStatus, PropertyType};
use summerlin_core::Listing;

/// Summerlin West villages, west to east.
pub const VILLAGES: [&str; 10] = [
    "The Ridges",
    "The Summit",
    "Red Rock Country Club",
    "Reverence",
    "The Paseos",
    "The Vistas",
    "Mesa",
    "Stonebridge",
    "Redpoint",
    "Shelbourne",
];

/// Returns true if `name` is a known village, ignoring case.
#[must_use]
pub fn is_village(name: &str) -> bool {
    VILLAGES.iter().any(|v| v.eq_ignore_ascii_case(name.trim()))
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    mls: &str,
    title: &str,
    price: u64,
    address: &str,
    village: &str,
    (beds, baths, sqft): (u8, u8, u32),
    lot_size_acres: f64,
    year_built: u16,
    property_type: PropertyType,
    status: ListingStatus,
    features: &[&str],
    days_on_market: u32,
) -> Listing {
    Listing {
        id: id.to_string(),
        mls: mls.to_string(),
        title: title.to_string(),
        price,
        address: address.to_string(),
        village: village.to_string(),
        beds,
        baths,
        sqft,
        lot_size_acres,
        year_built,
        property_type,
        status,
        features: features.iter().map(|f| (*f).to_string()).collect(),
        days_on_market,
    }
}

/// The listings the site ships with.
#[must_use]
pub fn sample_listings() -> Vec<Listing> {
    vec![
        listing(
            "1",
            "2418448",
            "Luxury Estate in The Ridges",
            2_495_000,
            "12345 Ridges Peak Dr",
            "The Ridges",
            (5, 6, 5200),
            0.75,
            2023,
            PropertyType::LuxuryEstate,
            ListingStatus::ForSale,
            &["Golf Course View", "Guard Gated", "Red Rock Views", "Pool & Spa"],
            12,
        ),
        listing(
            "2",
            "2418449",
            "Modern Villa in The Summit",
            1_850_000,
            "6789 Summit View Ln",
            "The Summit",
            (4, 4, 4100),
            0.5,
            2022,
            PropertyType::SingleFamily,
            ListingStatus::ForSale,
            &["Mountain Views", "Smart Home", "Chef's Kitchen", "3-Car Garage"],
            8,
        ),
        listing(
            "3",
            "2418450",
            "Red Rock Country Club Estate",
            3_200_000,
            "9876 Golf Club Dr",
            "Red Rock Country Club",
            (6, 7, 6800),
            1.2,
            2021,
            PropertyType::LuxuryEstate,
            ListingStatus::ForSale,
            &["Golf Course Frontage", "Private Golf Club", "Butler's Pantry", "Guest House"],
            15,
        ),
        listing(
            "4",
            "2418451",
            "Reverence Townhome near Trails",
            689_000,
            "11245 Reverence Pkwy",
            "Reverence",
            (3, 3, 2100),
            0.08,
            2020,
            PropertyType::Townhome,
            ListingStatus::UnderContract,
            &["Community Pool", "Trail Access", "Mountain Views"],
            21,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let listings = sample_listings();
        let ids: HashSet<_> = listings.iter().map(|l| l.id.as_str()).collect();
        let mls: HashSet<_> = listings.iter().map(|l| l.mls.as_str()).collect();
        assert_eq!(ids.len(), listings.len());
        assert_eq!(mls.len(), listings.len());
    }

    #[test]
    fn test_catalog_villages_known() {
        assert!(sample_listings().iter().all(|l| is_village(&l.village)));
        assert!(is_village("the paseos"));
        assert!(!is_village("Henderson"));
    }
}

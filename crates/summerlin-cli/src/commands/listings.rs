//! Listings command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use summerlin_core::types::{ListingStatus, PropertyType};
use summerlin_core::Listing;
use summerlin_listings::filter::apply;
use summerlin_listings::{sample_listings, ListingFilter};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_json, print_note, print_output, whole_dollars};

/// Arguments for the listings command.
#[derive(Args, Debug, Default)]
pub struct ListingsArgs {
    /// Village name
    #[arg(long)]
    pub village: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<u64>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<u64>,

    /// Minimum bedrooms
    #[arg(long)]
    pub min_beds: Option<u8>,

    /// Minimum bathrooms
    #[arg(long)]
    pub min_baths: Option<u8>,

    /// Minimum square feet
    #[arg(long)]
    pub min_sqft: Option<u32>,

    /// Maximum square feet
    #[arg(long)]
    pub max_sqft: Option<u32>,

    /// Property type (e.g. luxury-estate, single-family)
    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// Status (for-sale, under-contract, sold, coming-soon, off-market)
    #[arg(long)]
    pub status: Option<String>,

    /// Only listings still for sale or coming soon
    #[arg(long)]
    pub available: bool,

    /// Required feature; repeat for several
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Free text over title, address, village and MLS number
    #[arg(long)]
    pub text: Option<String>,

    /// Maximum number of listings to show
    #[arg(long, default_value = "50")]
    pub limit: usize,
}

impl ListingsArgs {
    /// Builds the search filter from the flags.
    pub fn to_filter(&self) -> CliResult<ListingFilter> {
        let property_type = self
            .property_type
            .as_deref()
            .map(|t| t.parse::<PropertyType>())
            .transpose()
            .map_err(|e| CliError::invalid("type", e.to_string()))?;
        let status = self
            .status
            .as_deref()
            .map(|s| s.parse::<ListingStatus>())
            .transpose()
            .map_err(|e| CliError::invalid("status", e.to_string()))?;

        let filter = ListingFilter {
            village: self.village.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_beds: self.min_beds,
            min_baths: self.min_baths,
            min_sqft: self.min_sqft,
            max_sqft: self.max_sqft,
            property_type,
            status,
            available_only: self.available,
            features: self.features.clone(),
            text: self.text.clone(),
        };
        filter.validate()?;
        Ok(filter)
    }
}

#[derive(Serialize, Tabled)]
struct ListingRow {
    #[tabled(rename = "MLS")]
    mls: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Village")]
    village: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Beds")]
    beds: u8,
    #[tabled(rename = "Baths")]
    baths: u8,
    #[tabled(rename = "Sq Ft")]
    sqft: u32,
    #[tabled(rename = "Type")]
    property_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Features")]
    features: String,
}

impl ListingRow {
    fn from_listing(listing: &Listing) -> CliResult<Self> {
        Ok(Self {
            mls: listing.mls.clone(),
            title: listing.title.clone(),
            village: listing.village.clone(),
            price: whole_dollars(listing.price as f64)?,
            beds: listing.beds,
            baths: listing.baths,
            sqft: listing.sqft,
            property_type: listing.property_type.label().to_string(),
            status: listing.status.slug().to_string(),
            features: listing.features.join("; "),
        })
    }
}

/// Execute the listings command.
pub fn execute(args: ListingsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let filter = args.to_filter()?;
    let listings = apply(&filter, &sample_listings(), args.limit, 0);

    match format {
        OutputFormat::Json => print_json(&listings)?,
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            let rows = listings
                .iter()
                .map(ListingRow::from_listing)
                .collect::<CliResult<Vec<_>>>()?;
            if format == OutputFormat::Table && !quiet {
                print_header("Summerlin West Listings");
            }
            print_output(&rows, format)?;
            if format == OutputFormat::Table && !quiet {
                print_note(&format!("{} listing(s) found", rows.len()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_flags() {
        let args = ListingsArgs {
            property_type: Some("Luxury Estate".into()),
            features: vec!["golf".into()],
            limit: 50,
            ..ListingsArgs::default()
        };
        let filter = args.to_filter().unwrap();
        assert_eq!(filter.property_type, Some(PropertyType::LuxuryEstate));
        assert_eq!(apply(&filter, &sample_listings(), 50, 0).len(), 2);
    }

    #[test]
    fn test_bad_flags() {
        let bad_type = ListingsArgs {
            property_type: Some("castle".into()),
            ..ListingsArgs::default()
        };
        assert!(bad_type.to_filter().is_err());

        let bad_range = ListingsArgs {
            min_sqft: Some(9000),
            max_sqft: Some(1000),
            ..ListingsArgs::default()
        };
        assert!(bad_range.to_filter().is_err());
    }

    #[test]
    fn test_row_formatting() {
        let row = ListingRow::from_listing(&sample_listings()[0]).unwrap();
        assert_eq!(row.price, "$2,495,000");
        assert_eq!(row.property_type, "Luxury Estate");
        assert!(row.features.contains("Guard Gated"));
    }
}

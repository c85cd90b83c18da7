//! Lead request shapes submitted from the site's forms.
//!
//! Validation lives in `summerlin-leads`; these are plain data.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PropertyType;

/// How the prospect wants to be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    /// Email
    #[default]
    Email,
    /// Phone call
    Phone,
    /// Text message
    Text,
}

impl ContactMethod {
    /// Returns true if this method needs a phone number on file.
    #[must_use]
    pub fn needs_phone(&self) -> bool {
        matches!(self, ContactMethod::Phone | ContactMethod::Text)
    }
}

/// When the prospect expects to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    /// As soon as possible
    #[serde(rename = "asap")]
    Asap,
    /// Within three months
    #[serde(rename = "within-3-months")]
    Within3Months,
    /// Within six months
    #[serde(rename = "within-6-months")]
    Within6Months,
    /// Within a year
    #[serde(rename = "within-12-months")]
    Within12Months,
    /// No plans yet
    #[serde(rename = "just-curious")]
    JustCurious,
}

/// Contact block shared by every form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Phone number, any punctuation
    #[serde(default)]
    pub phone: Option<String>,
    /// Preferred contact method
    #[serde(default)]
    pub preferred_contact: ContactMethod,
    /// Free-form message
    #[serde(default)]
    pub message: Option<String>,
}

fn default_city() -> String {
    "Las Vegas".to_string()
}

fn default_state() -> String {
    "NV".to_string()
}

fn default_property_type() -> PropertyType {
    PropertyType::SingleFamily
}

/// Property block used by the valuation and sell forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetails {
    /// Street address
    pub address: String,
    /// City
    #[serde(default = "default_city")]
    pub city: String,
    /// State abbreviation
    #[serde(default = "default_state")]
    pub state: String,
    /// ZIP code
    pub zip_code: String,
    /// Property type
    #[serde(default = "default_property_type")]
    pub property_type: PropertyType,
    /// Bedrooms
    #[serde(default)]
    pub bedrooms: Option<u8>,
    /// Bathrooms
    #[serde(default)]
    pub bathrooms: Option<u8>,
    /// Living area in square feet
    #[serde(default)]
    pub square_feet: Option<u32>,
    /// Year built
    #[serde(default)]
    pub year_built: Option<u16>,
}

/// General contact form, optionally about a specific listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Who is asking
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// Listing the inquiry is about
    #[serde(default)]
    pub listing_id: Option<String>,
}

fn default_valuation_timeline() -> Timeline {
    Timeline::Within6Months
}

/// Home valuation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// Who is asking
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// The home to value
    #[serde(flatten)]
    pub property: PropertyDetails,
    /// When the owner might sell
    #[serde(default = "default_valuation_timeline")]
    pub timeline: Timeline,
}

fn default_sell_timeline() -> Timeline {
    Timeline::Within3Months
}

/// Sell-your-home request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellRequest {
    /// Who is asking
    #[serde(flatten)]
    pub contact: ContactInfo,
    /// The home to sell
    #[serde(flatten)]
    pub property: PropertyDetails,
    /// Owner's estimate in whole dollars
    #[serde(default)]
    pub estimated_value: Option<u64>,
    /// When the owner wants to sell
    #[serde(default = "default_sell_timeline")]
    pub timeline: Timeline,
}

/// Which form a lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadKind {
    /// General contact form
    Contact,
    /// Home valuation form
    Valuation,
    /// Sell-your-home form
    Sell,
}

impl fmt::Display for LeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeadKind::Contact => "contact",
            LeadKind::Valuation => "valuation",
            LeadKind::Sell => "sell",
        };
        write!(f, "{name}")
    }
}

/// Any submitted lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lead {
    /// General contact form
    Contact(ContactRequest),
    /// Home valuation form
    Valuation(ValuationRequest),
    /// Sell-your-home form
    Sell(SellRequest),
}

impl Lead {
    /// Returns the form this lead came from.
    #[must_use]
    pub fn kind(&self) -> LeadKind {
        match self {
            Lead::Contact(_) => LeadKind::Contact,
            Lead::Valuation(_) => LeadKind::Valuation,
            Lead::Sell(_) => LeadKind::Sell,
        }
    }

    /// Returns the contact block.
    #[must_use]
    pub fn contact(&self) -> &ContactInfo {
        match self {
            Lead::Contact(r) => &r.contact,
            Lead::Valuation(r) => &r.contact,
            Lead::Sell(r) => &r.contact,
        }
    }

    /// Returns the property block, if the form has one.
    #[must_use]
    pub fn property(&self) -> Option<&PropertyDetails> {
        match self {
            Lead::Contact(_) => None,
            Lead::Valuation(r) => Some(&r.property),
            Lead::Sell(r) => Some(&r.property),
        }
    }
}

impl From<ContactRequest> for Lead {
    fn from(r: ContactRequest) -> Self {
        Lead::Contact(r)
    }
}

impl From<ValuationRequest> for Lead {
    fn from(r: ValuationRequest) -> Self {
        Lead::Valuation(r)
    }
}

impl From<SellRequest> for Lead {
    fn from(r: SellRequest) -> Self {
        Lead::Sell(r)
    }
}

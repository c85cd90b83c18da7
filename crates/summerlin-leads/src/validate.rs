//! Field validation for the lead forms.

use once_cell::sync::Lazy;
use regex::Regex;
use summerlin_core::types::{
    ContactInfo, ContactRequest, Lead, PropertyDetails, SellRequest, ValuationRequest,
};

use crate::error::{LeadError, LeadResult};

static EMAIL: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").ok());

static ZIP_CODE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\d{5}$").ok());

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Something a visitor submitted that must be checked before it is accepted.
pub trait Validate {
    /// Reports the first invalid field.
    ///
    /// # Errors
    ///
    /// Returns `LeadError::Validation` naming the field.
    fn validate(&self) -> LeadResult<()>;
}

fn matches(pattern: &Lazy<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// Requires a non-blank value.
pub fn validate_required(field: &str, value: &str) -> LeadResult<()> {
    if value.trim().is_empty() {
        return Err(LeadError::validation(field, "is required"));
    }
    Ok(())
}

/// Requires a `local@domain.tld` shaped address.
pub fn validate_email(field: &str, value: &str) -> LeadResult<()> {
    validate_required(field, value)?;
    if !matches(&EMAIL, value.trim()) {
        return Err(LeadError::validation(field, "must look like name@example.com"));
    }
    Ok(())
}

/// Requires 10 to 15 digits once spaces, dashes, dots, parentheses and `+` are removed.
pub fn validate_phone(field: &str, value: &str) -> LeadResult<()> {
    let mut digits = 0usize;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' | '+' => {}
            other => {
                return Err(LeadError::validation(
                    field,
                    format!("unexpected character '{other}'"),
                ))
            }
        }
    }
    if !(PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        return Err(LeadError::validation(
            field,
            format!("must have {PHONE_MIN_DIGITS} to {PHONE_MAX_DIGITS} digits, got {digits}"),
        ));
    }
    Ok(())
}

/// Requires a five-digit US ZIP code.
pub fn validate_zip(field: &str, value: &str) -> LeadResult<()> {
    if !matches(&ZIP_CODE, value.trim()) {
        return Err(LeadError::validation(field, "must be a 5-digit ZIP code"));
    }
    Ok(())
}

fn validate_positive<T: Into<u64> + Copy>(field: &str, value: Option<T>) -> LeadResult<()> {
    match value {
        Some(v) if v.into() == 0 => Err(LeadError::validation(field, "must be greater than zero")),
        _ => Ok(()),
    }
}

impl Validate for ContactInfo {
    fn validate(&self) -> LeadResult<()> {
        validate_required("name", &self.name)?;
        validate_email("email", &self.email)?;

        let phone = self.phone.as_deref().filter(|p| !p.trim().is_empty());
        match phone {
            Some(phone) => validate_phone("phone", phone)?,
            None if self.preferred_contact.needs_phone() => {
                return Err(LeadError::validation(
                    "phone",
                    format!("is required when contact by {:?} is preferred", self.preferred_contact)
                        .to_lowercase(),
                ));
            }
            None => {}
        }
        Ok(())
    }
}

impl Validate for PropertyDetails {
    fn validate(&self) -> LeadResult<()> {
        validate_required("address", &self.address)?;
        validate_zip("zip_code", &self.zip_code)?;
        validate_positive("bedrooms", self.bedrooms)?;
        validate_positive("bathrooms", self.bathrooms)?;
        validate_positive("square_feet", self.square_feet)?;
        validate_positive("year_built", self.year_built)?;
        Ok(())
    }
}

impl Validate for ContactRequest {
    fn validate(&self) -> LeadResult<()> {
        self.contact.validate()
    }
}

impl Validate for ValuationRequest {
    fn validate(&self) -> LeadResult<()> {
        self.contact.validate()?;
        self.property.validate()
    }
}

impl Validate for SellRequest {
    fn validate(&self) -> LeadResult<()> {
        self.contact.validate()?;
        self.property.validate()?;
        validate_positive("estimated_value", self.estimated_value)
    }
}

impl Validate for Lead {
    fn validate(&self) -> LeadResult<()> {
        match self {
            Lead::Contact(req) => req.validate(),
            Lead::Valuation(req) => req.validate(),
            Lead::Sell(req) => req.validate(),
        }
    }
}

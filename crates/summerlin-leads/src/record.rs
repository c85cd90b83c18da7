//! Accepted lead records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use summerlin_core::types::{Lead, LeadKind};
use uuid::Uuid;

/// A lead that passed validation, stamped for hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    /// Unique lead identifier
    pub id: Uuid,
    /// Which form it came from
    pub kind: LeadKind,
    /// When the lead was accepted
    pub received_at: DateTime<Utc>,
    /// The submission itself
    pub lead: Lead,
}

impl LeadRecord {
    /// Stamps a lead with a fresh id and the current time.
    #[must_use]
    pub fn new(lead: Lead) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: lead.kind(),
            received_at: Utc::now(),
            lead,
        }
    }

    /// Contact email of the submitter.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.lead.contact().email
    }
}

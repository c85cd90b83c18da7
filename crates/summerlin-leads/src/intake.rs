//! Lead intake pipeline.

use std::sync::Arc;

use log::{debug, warn};
use summerlin_core::types::Lead;

use crate::error::LeadResult;
use crate::record::LeadRecord;
use crate::sink::LeadSink;
use crate::validate::Validate;

/// Validates leads and hands them to a sink.
#[derive(Clone)]
pub struct LeadIntake {
    sink: Arc<dyn LeadSink>,
}

impl LeadIntake {
    /// Creates an intake feeding `sink`.
    pub fn new(sink: Arc<dyn LeadSink>) -> Self {
        Self { sink }
    }

    /// Validates, stamps and submits a lead.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a bad form, or a sink error if the
    /// hand-off fails. Nothing reaches the sink when validation fails.
    pub async fn submit(&self, lead: impl Into<Lead>) -> LeadResult<LeadRecord> {
        let lead = lead.into();
        if let Err(e) = lead.validate() {
            debug!("rejected {} lead: {}", lead.kind(), e);
            return Err(e);
        }

        let record = LeadRecord::new(lead);
        if let Err(e) = self.sink.submit(&record).await {
            warn!("lead {} could not be delivered: {}", record.id, e);
            return Err(e);
        }
        Ok(record)
    }

    /// Leads retained by the sink.
    pub fn recent(&self) -> Vec<LeadRecord> {
        self.sink.recent()
    }
}

impl std::fmt::Debug for LeadIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadIntake").finish_non_exhaustive()
    }
}

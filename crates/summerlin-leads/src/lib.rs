//! # Summerlin Leads
//!
//! Intake for the site's three lead forms: contact an agent, request a home
//! valuation and list a home for sale.
//!
//! Submissions are validated field by field, stamped with an id and a
//! timestamp, and handed to a [`LeadSink`]. The default sink writes a
//! structured `tracing` event per lead.

#![warn(missing_docs)]

pub mod error;
pub mod intake;
pub mod record;
pub mod sink;
pub mod validate;

pub use error::{LeadError, LeadResult};
pub use intake::LeadIntake;
pub use record::LeadRecord;
pub use sink::{LeadSink, MemoryLeadSink, RecordingLeadSink, TracingLeadSink};
pub use validate::Validate;

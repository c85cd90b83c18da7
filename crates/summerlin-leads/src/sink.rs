//! Lead sinks.
//!
//! A sink is wherever accepted leads go next. The site has no CRM yet, so the
//! default sink writes a structured log event and the memory sink keeps
//! records for inspection.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::LeadResult;
use crate::record::LeadRecord;

/// Destination for accepted leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Hands off one lead.
    async fn submit(&self, record: &LeadRecord) -> LeadResult<()>;

    /// Returns the leads this sink has retained, newest last.
    ///
    /// Sinks that forward leads elsewhere retain nothing.
    fn recent(&self) -> Vec<LeadRecord> {
        Vec::new()
    }
}

/// Writes each lead as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLeadSink;

#[async_trait]
impl LeadSink for TracingLeadSink {
    async fn submit(&self, record: &LeadRecord) -> LeadResult<()> {
        tracing::info!(
            lead_id = %record.id,
            kind = %record.kind,
            email = record.email(),
            received_at = %record.received_at.to_rfc3339(),
            "lead received"
        );
        Ok(())
    }
}

/// Keeps the most recent leads in memory.
///
/// Holds at most `capacity` records; once full, each new lead evicts the
/// oldest.
#[derive(Debug, Clone)]
pub struct MemoryLeadSink {
    records: Arc<Mutex<VecDeque<LeadRecord>>>,
    capacity: usize,
}

impl MemoryLeadSink {
    /// Records retained by [`MemoryLeadSink::new`].
    pub const DEFAULT_CAPACITY: usize = 500;

    /// Creates an empty sink with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty sink holding at most `capacity` leads (minimum one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(64)))),
            capacity,
        }
    }

    /// Maximum number of leads held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of leads held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns true if no lead is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of the held leads, oldest first.
    #[must_use]
    pub fn records(&self) -> Vec<LeadRecord> {
        self.records.lock().iter().cloned().collect()
    }
}

impl Default for MemoryLeadSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeadSink for MemoryLeadSink {
    async fn submit(&self, record: &LeadRecord) -> LeadResult<()> {
        let mut records = self.records.lock();
        if records.len() == self.capacity {
            if let Some(evicted) = records.pop_front() {
                log::debug!("memory sink full, evicting lead {}", evicted.id);
            }
        }
        records.push_back(record.clone());
        Ok(())
    }

    fn recent(&self) -> Vec<LeadRecord> {
        self.records()
    }
}

/// Logs every lead and keeps it in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingLeadSink {
    log: TracingLeadSink,
    memory: MemoryLeadSink,
}

impl RecordingLeadSink {
    /// Creates an empty recording sink with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recording sink retaining at most `capacity` leads.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            log: TracingLeadSink,
            memory: MemoryLeadSink::with_capacity(capacity),
        }
    }
}

#[async_trait]
impl LeadSink for RecordingLeadSink {
    async fn submit(&self, record: &LeadRecord) -> LeadResult<()> {
        self.log.submit(record).await?;
        self.memory.submit(record).await
    }

    fn recent(&self) -> Vec<LeadRecord> {
        self.memory.recent()
    }
}

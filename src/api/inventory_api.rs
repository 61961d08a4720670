// ==========================================
// Warehouse FEFO Core - Inventory API
// ==========================================
// Responsibility: in-process facade for the UI/data-fetching layer.
// Bundles the two engines with the configured thresholds; performs no
// I/O and holds no inventory state. Persisting post-withdrawal
// quantities back to the system of record is the caller's job, as is
// serializing read-modify-write cycles against it.
// ==========================================

use crate::config::EngineConfig;
use crate::domain::alert::{BatchSummary, ExpiryAlert};
use crate::domain::allocation::AllocationLine;
use crate::domain::batch::Batch;
use crate::engine::{ExpiryMonitor, FefoAllocator};
use crate::error::EngineResult;
use crate::importer::record::RawBatchRecord;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

// ==========================================
// ScreeningResult - admission outcome for one raw record
// ==========================================
#[derive(Debug)]
pub struct ScreeningResult {
    /// Records that passed admission, as engine-ready batches.
    pub accepted: Vec<Batch>,
    /// (input index, violations) for every rejected record.
    pub rejected: Vec<(usize, Vec<String>)>,
}

// ==========================================
// InventoryApi - facade over allocator + monitor
// ==========================================
pub struct InventoryApi {
    config: EngineConfig,
    allocator: FefoAllocator,
    monitor: ExpiryMonitor,
}

impl InventoryApi {
    pub fn new(config: EngineConfig) -> Self {
        let monitor = ExpiryMonitor::with_config(&config);
        Self {
            config,
            allocator: FefoAllocator::new(),
            monitor,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ==========================================
    // Withdrawal operations
    // ==========================================

    /// Compute a withdrawal plan without committing anything. Safe to
    /// call speculatively, e.g. to show the user what a withdrawal
    /// would draw from which lots.
    pub fn preview_withdrawal(
        &self,
        requested_quantity: f64,
        batches: &[Batch],
    ) -> EngineResult<Vec<AllocationLine>> {
        self.allocator.allocate(requested_quantity, batches)
    }

    /// Commit a withdrawal against a snapshot of the batch pool.
    /// Returns the updated pool with exhausted lots pruned; the caller
    /// persists the result.
    #[instrument(skip(self, batches))]
    pub fn commit_withdrawal(
        &self,
        batches: Vec<Batch>,
        requested_quantity: f64,
    ) -> EngineResult<Vec<Batch>> {
        let updated = self.allocator.apply_withdrawal(batches, requested_quantity)?;
        info!(remaining_lots = updated.len(), "withdrawal applied");
        Ok(updated)
    }

    // ==========================================
    // Monitoring operations
    // ==========================================

    /// Expiry alerts using the configured alert window.
    pub fn expiry_alerts(&self, batches: &[Batch], now: DateTime<Utc>) -> Vec<ExpiryAlert> {
        self.monitor
            .check_expirations(batches, self.config.alert_window_days, now)
    }

    /// Aggregate statistics for dashboard display.
    pub fn batch_summary(&self, batches: &[Batch], now: DateTime<Utc>) -> BatchSummary {
        self.monitor.summarize(batches, now)
    }

    // ==========================================
    // Record admission
    // ==========================================

    /// Screen raw upstream records, splitting them into engine-ready
    /// batches and rejected records with their violations.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn screen_records(&self, records: &[RawBatchRecord]) -> ScreeningResult {
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let violations = self.monitor.validate_batch(record);
            if violations.is_empty() {
                match Batch::from_record(record) {
                    Ok(batch) => accepted.push(batch),
                    Err(err) => rejected.push((index, vec![err.to_string()])),
                }
            } else {
                rejected.push((index, violations));
            }
        }

        ScreeningResult { accepted, rejected }
    }
}

impl Default for InventoryApi {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

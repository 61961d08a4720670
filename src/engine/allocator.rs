// ==========================================
// Warehouse FEFO Core - FEFO Allocation Engine
// ==========================================
// Responsibility: compute a withdrawal plan that always draws from the
// soonest-to-expire stock first, minimizing spoilage.
// Input: requested quantity + batch pool snapshot
// Output: ordered allocation plan, or a typed shortage error
// Red line: all-or-nothing; no partial plan ever escapes, and
// `allocate` never mutates its inputs.
// ==========================================

use crate::domain::allocation::AllocationLine;
use crate::domain::batch::Batch;
use crate::error::{EngineError, EngineResult};
use std::collections::HashSet;
use tracing::instrument;

// ==========================================
// FefoAllocator - First-Expired-First-Out planner
// ==========================================
pub struct FefoAllocator;

impl FefoAllocator {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // Plan computation (pure, speculative-safe)
    // ==========================================

    /// Compute a FEFO withdrawal plan.
    ///
    /// Rules:
    /// 1) batches are ordered ascending by expiry date; equal expiry
    ///    dates keep their input order (stable sort)
    /// 2) each batch contributes min(available, remaining); lines are
    ///    only emitted for draws > 0, so empty lots are skipped
    /// 3) the walk stops as soon as the request is covered
    ///
    /// Errors:
    /// - non-positive request → Validation
    /// - empty pool → NoBatchesAvailable
    /// - duplicate batch ids in the pool → Validation (plan application
    ///   indexes updates by id)
    /// - uncovered remainder → InsufficientStock, carrying the request
    ///   and the quantity the pool could actually satisfy
    #[instrument(skip(self, batches), fields(pool = batches.len()))]
    pub fn allocate(
        &self,
        requested_quantity: f64,
        batches: &[Batch],
    ) -> EngineResult<Vec<AllocationLine>> {
        if requested_quantity <= 0.0 || !requested_quantity.is_finite() {
            return Err(EngineError::Validation(format!(
                "requested quantity must be positive, got {}",
                requested_quantity
            )));
        }
        if batches.is_empty() {
            return Err(EngineError::NoBatchesAvailable);
        }
        self.ensure_unique_ids(batches)?;

        // Stable sort keeps input order among equal expiry dates
        // (oldest-inserted-first for same-expiry lots).
        let mut ordered: Vec<&Batch> = batches.iter().collect();
        ordered.sort_by_key(|b| b.expiry_date());

        let mut plan = Vec::new();
        let mut remaining = requested_quantity;

        for batch in ordered {
            if remaining <= 0.0 {
                break;
            }
            let drawn = batch.available_quantity().min(remaining);
            if drawn > 0.0 {
                plan.push(AllocationLine::new(
                    batch.batch_id(),
                    drawn,
                    batch.expiry_date(),
                ));
                remaining -= drawn;
            }
        }

        if remaining > 0.0 {
            return Err(EngineError::InsufficientStock {
                requested: requested_quantity,
                satisfiable: requested_quantity - remaining,
            });
        }

        Ok(plan)
    }

    // ==========================================
    // Plan application (the committing variant)
    // ==========================================

    /// Apply a withdrawal to a batch collection.
    ///
    /// Plans via `allocate`; any planning failure propagates untouched
    /// and nothing is mutated. On success the matching batches are
    /// drawn down and exhausted lots (quantity 0) are pruned from the
    /// returned collection.
    #[instrument(skip(self, batches), fields(pool = batches.len()))]
    pub fn apply_withdrawal(
        &self,
        batches: Vec<Batch>,
        requested_quantity: f64,
    ) -> EngineResult<Vec<Batch>> {
        let plan = self.allocate(requested_quantity, &batches)?;
        self.apply_plan(batches, &plan)
    }

    /// Apply an already computed plan to a batch collection.
    ///
    /// A plan line whose batch id is absent from the collection means
    /// the plan and the snapshot have drifted apart (e.g. a previewed
    /// plan applied after the pool was reloaded); this fails with
    /// InconsistentBatchState and must be treated as fatal for the
    /// operation (abort and reload, do not retry).
    pub fn apply_plan(
        &self,
        batches: Vec<Batch>,
        plan: &[AllocationLine],
    ) -> EngineResult<Vec<Batch>> {
        let mut updated = batches;
        for line in plan {
            let batch = updated
                .iter_mut()
                .find(|b| b.batch_id() == line.batch_id)
                .ok_or_else(|| EngineError::InconsistentBatchState {
                    batch_id: line.batch_id.clone(),
                })?;
            batch.draw(line.quantity_drawn)?;
        }

        updated.retain(|b| !b.is_exhausted());
        Ok(updated)
    }

    /// Plan application indexes by batch id; duplicates would make the
    /// decrement ambiguous.
    fn ensure_unique_ids(&self, batches: &[Batch]) -> EngineResult<()> {
        let mut seen = HashSet::with_capacity(batches.len());
        for batch in batches {
            if !seen.insert(batch.batch_id()) {
                return Err(EngineError::Validation(format!(
                    "duplicate batch id in allocation pool: {}",
                    batch.batch_id()
                )));
            }
        }
        Ok(())
    }
}

impl Default for FefoAllocator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// Warehouse FEFO Core - Allocation Plan Model
// ==========================================
// One line of a withdrawal plan. Plain data for downstream rendering;
// carries no behavior.
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// AllocationLine - one (batch, quantity) pair of a plan
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationLine {
    pub batch_id: String,
    pub quantity_drawn: f64,    // always > 0
    pub expiry_date: NaiveDate, // copied from the source batch at plan time
}

impl AllocationLine {
    pub fn new(batch_id: impl Into<String>, quantity_drawn: f64, expiry_date: NaiveDate) -> Self {
        Self {
            batch_id: batch_id.into(),
            quantity_drawn,
            expiry_date,
        }
    }
}

impl fmt::Display for AllocationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} unidades del Lote {} (Vence: {})",
            self.quantity_drawn, self.batch_id, self.expiry_date
        )
    }
}

// ==========================================
// Warehouse FEFO Core - Alert and Summary Models
// ==========================================
// Outputs of the expiry monitor, consumed by dashboard rendering.
// The `message` field is localized display text; the typed fields are
// the hard contract.
// ==========================================

use crate::domain::types::{AlertKind, Severity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ExpiryAlert - one actionable expiry finding
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryAlert {
    pub kind: AlertKind,
    pub batch_id: String,
    pub quantity_affected: f64,
    pub expiry_date: NaiveDate,
    pub severity: Severity,
    pub message: String, // localized, not part of the hard contract
}

// ==========================================
// BatchSummary - aggregate statistics for the dashboard
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_batches: usize,           // includes exhausted and expired lots
    pub total_quantity: f64,            // sum of available quantities
    pub expired_count: usize,           // expired as of "now"
    pub near_expiry_count: usize,       // not expired, inside the summary window
    pub active_count: usize,            // available quantity > 0
    pub next_expiry_date: Option<NaiveDate>, // earliest expiry among active lots
}

// ==========================================
// Warehouse FEFO Core - Import Layer
// ==========================================
// Responsibility: shapes and normalization for data arriving from
// upstream systems, before domain admission.
// ==========================================

pub mod record;

pub use record::{parse_expiry_date, RawBatchRecord};

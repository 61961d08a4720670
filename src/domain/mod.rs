// ==========================================
// Warehouse FEFO Core - Domain Layer
// ==========================================
// Responsibility: entities and value types for lot tracking.
// Red line: no data access logic, no engine logic.
// ==========================================

pub mod alert;
pub mod allocation;
pub mod batch;
pub mod types;

// Re-export core types
pub use alert::{BatchSummary, ExpiryAlert};
pub use allocation::AllocationLine;
pub use batch::Batch;
pub use types::{AlertKind, Severity};

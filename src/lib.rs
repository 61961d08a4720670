// ==========================================
// Warehouse FEFO Core - Library Root
// ==========================================
// Computation core of the warehouse-inventory dashboard: a pure,
// synchronous library that plans expiry-ordered (FEFO) withdrawals
// and classifies lots into expiry alerts. No I/O, no storage, no
// transport; callers hand in batch snapshots and an explicit "now".
// ==========================================

// Initialize the i18n system
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Engine layer - business rules
pub mod engine;

// Import layer - raw upstream records
pub mod importer;

// Configuration layer - engine thresholds
pub mod config;

// API layer - in-process facade
pub mod api;

// Error taxonomy
pub mod error;

// Logging
pub mod logging;

// Internationalization
pub mod i18n;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::types::{AlertKind, Severity};

// Domain entities
pub use domain::{AllocationLine, Batch, BatchSummary, ExpiryAlert};

// Engines
pub use engine::{ExpiryMonitor, FefoAllocator};

// API
pub use api::InventoryApi;

// Import records
pub use importer::RawBatchRecord;

// Configuration
pub use config::EngineConfig;

// Errors
pub use error::{EngineError, EngineResult};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Product name
pub const APP_NAME: &str = "Sistema de Inventario de Almacén";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

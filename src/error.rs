// ==========================================
// Warehouse FEFO Core - Error Types
// ==========================================
// Responsibility: single typed error taxonomy for the engines.
// Every error carries an explicit reason; nothing is swallowed or
// logged here - translation for the user is a collaborator concern.
// ==========================================

use thiserror::Error;

/// Core engine error taxonomy.
#[derive(Error, Debug)]
pub enum EngineError {
    // ==========================================
    // Input errors (recoverable: reject the record)
    // ==========================================
    /// Malformed batch input or non-positive requested quantity.
    #[error("validation failed: {0}")]
    Validation(String),

    // ==========================================
    // Business errors (recoverable: surface to the user)
    // ==========================================
    /// Allocation requested against an empty batch pool.
    #[error("no batches available for allocation")]
    NoBatchesAvailable,

    /// Pool holds some stock, but not enough to satisfy the request.
    /// Carries both amounts so the caller can offer partial fulfillment.
    #[error("insufficient stock: requested={requested}, satisfiable={satisfiable}")]
    InsufficientStock { requested: f64, satisfiable: f64 },

    // ==========================================
    // Integration errors (fatal for the operation)
    // ==========================================
    /// A plan line references a batch absent from the mutation target.
    /// Indicates a stale snapshot on the caller side; abort and reload,
    /// do not retry blindly.
    #[error("inconsistent batch state: plan references unknown batch {batch_id}")]
    InconsistentBatchState { batch_id: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for the engines.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_stock_message_carries_both_amounts() {
        let err = EngineError::InsufficientStock {
            requested: 25.0,
            satisfiable: 20.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("25"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn test_inconsistent_state_names_the_batch() {
        let err = EngineError::InconsistentBatchState {
            batch_id: "LOT-9".to_string(),
        };
        assert!(err.to_string().contains("LOT-9"));
    }
}

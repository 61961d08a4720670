// ==========================================
// Warehouse FEFO Core - Domain Type Definitions
// ==========================================
// Alert kinds and severities used by the expiry monitor.
// Serialization format: SCREAMING_SNAKE_CASE (matches the API vocabulary).
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// AlertKind - expiry alert classification
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Expired,    // past its expiry date
    NearExpiry, // inside the alert window
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Expired => write!(f, "EXPIRED"),
            AlertKind::NearExpiry => write!(f, "NEAR_EXPIRY"),
        }
    }
}

// ==========================================
// Severity - alert severity levels
// ==========================================
// Level system, not a score system. Downstream merge steps rank
// HIGH > MEDIUM > LOW; `rank` is the authoritative ordering table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Merge-ordering rank: {HIGH: 3, MEDIUM: 2, LOW: 1}, descending.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

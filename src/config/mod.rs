// ==========================================
// Warehouse FEFO Core - Configuration Layer
// ==========================================
// Responsibility: engine thresholds, overridable by the embedding
// application (the core itself reads no environment and no storage).
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Default thresholds
// ==========================================
// The alert window and the summary window look unifiable but are kept
// as separate knobs: upstream versions diverged on which one call
// sites actually vary.
pub mod defaults {
    /// Near-expiry alert window handed to `check_expirations` call sites.
    pub const ALERT_WINDOW_DAYS: i64 = 30;
    /// Inside this many days a near-expiry alert escalates to HIGH.
    pub const HIGH_SEVERITY_WINDOW_DAYS: i64 = 7;
    /// Fixed window for the `near_expiry_count` summary aggregate.
    pub const SUMMARY_NEAR_EXPIRY_DAYS: i64 = 30;
}

// ==========================================
// EngineConfig - threshold set for the engines
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub alert_window_days: i64,
    pub high_severity_window_days: i64,
    pub summary_near_expiry_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alert_window_days: defaults::ALERT_WINDOW_DAYS,
            high_severity_window_days: defaults::HIGH_SEVERITY_WINDOW_DAYS,
            summary_near_expiry_days: defaults::SUMMARY_NEAR_EXPIRY_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.alert_window_days, 30);
        assert_eq!(config.high_severity_window_days, 7);
        assert_eq!(config.summary_near_expiry_days, 30);
    }

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"alert_window_days": 45}"#).unwrap();
        assert_eq!(config.alert_window_days, 45);
        assert_eq!(config.high_severity_window_days, 7);
        assert_eq!(config.summary_near_expiry_days, 30);
    }
}

// ==========================================
// Warehouse FEFO Core - Expiry Monitoring Engine
// ==========================================
// Responsibility: classify a batch pool into actionable alerts and
// compute aggregate statistics for the dashboard.
// Input: batch pool + caller-supplied "now"
// Output: alert list (input order) / summary record
// Red line: every alert carries a localized, human-readable message.
// ==========================================

use crate::config::EngineConfig;
use crate::domain::alert::{BatchSummary, ExpiryAlert};
use crate::domain::batch::Batch;
use crate::domain::types::{AlertKind, Severity};
use crate::i18n::t_with_args;
use crate::importer::record::{parse_expiry_date, RawBatchRecord};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::instrument;

// ==========================================
// ExpiryMonitor - expiry classification engine
// ==========================================
// The near-expiry alert window is caller-supplied per call; the HIGH
// severity sub-threshold and the summary aggregate window are engine
// configuration. The two windows are deliberately independent.
pub struct ExpiryMonitor {
    high_severity_window_days: i64,
    summary_near_expiry_days: i64,
}

impl ExpiryMonitor {
    /// Monitor with the standard thresholds (HIGH within 7 days,
    /// summary window 30 days).
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            high_severity_window_days: config.high_severity_window_days,
            summary_near_expiry_days: config.summary_near_expiry_days,
        }
    }

    // ==========================================
    // Alert classification
    // ==========================================

    /// Classify every batch in the pool.
    ///
    /// Rules (per batch, first hit wins):
    /// 1) expired → EXPIRED / HIGH, message carries days overdue
    /// 2) days until expiry <= alert_window_days → NEAR_EXPIRY;
    ///    HIGH inside the high-severity sub-threshold, MEDIUM beyond it
    /// 3) strictly beyond the window → no alert
    ///
    /// Output order follows input order; callers rank by severity
    /// downstream when merging alert sources.
    #[instrument(skip(self, batches), fields(pool = batches.len()))]
    pub fn check_expirations(
        &self,
        batches: &[Batch],
        alert_window_days: i64,
        now: DateTime<Utc>,
    ) -> Vec<ExpiryAlert> {
        let mut alerts = Vec::new();

        for batch in batches {
            let days_remaining = batch.days_until_expiry(now);

            if batch.is_expired(now) {
                alerts.push(ExpiryAlert {
                    kind: AlertKind::Expired,
                    batch_id: batch.batch_id().to_string(),
                    quantity_affected: batch.available_quantity(),
                    expiry_date: batch.expiry_date(),
                    severity: Severity::High,
                    message: t_with_args(
                        "alerts.expired",
                        &[
                            ("batch", batch.batch_id()),
                            ("days", &days_remaining.abs().to_string()),
                        ],
                    ),
                });
            } else if days_remaining <= alert_window_days {
                let severity = if days_remaining <= self.high_severity_window_days {
                    Severity::High
                } else {
                    Severity::Medium
                };
                alerts.push(ExpiryAlert {
                    kind: AlertKind::NearExpiry,
                    batch_id: batch.batch_id().to_string(),
                    quantity_affected: batch.available_quantity(),
                    expiry_date: batch.expiry_date(),
                    severity,
                    message: t_with_args(
                        "alerts.near_expiry",
                        &[
                            ("batch", batch.batch_id()),
                            ("days", &days_remaining.to_string()),
                        ],
                    ),
                });
            }
        }

        alerts
    }

    /// Merge alerts from several sources into one list ranked by
    /// severity, descending ({HIGH: 3, MEDIUM: 2, LOW: 1}). The sort is
    /// stable: same-severity alerts keep their source order.
    pub fn merge_alerts(&self, sources: Vec<Vec<ExpiryAlert>>) -> Vec<ExpiryAlert> {
        let mut merged: Vec<ExpiryAlert> = sources.into_iter().flatten().collect();
        merged.sort_by(|a, b| b.severity.rank().cmp(&a.severity.rank()));
        merged
    }

    // ==========================================
    // Aggregate statistics
    // ==========================================

    /// Dashboard summary over the whole pool, exhausted and expired
    /// lots included.
    #[instrument(skip(self, batches), fields(pool = batches.len()))]
    pub fn summarize(&self, batches: &[Batch], now: DateTime<Utc>) -> BatchSummary {
        let expired_count = batches.iter().filter(|b| b.is_expired(now)).count();
        let near_expiry_count = batches
            .iter()
            .filter(|b| {
                !b.is_expired(now) && b.days_until_expiry(now) <= self.summary_near_expiry_days
            })
            .count();

        BatchSummary {
            total_batches: batches.len(),
            total_quantity: batches.iter().map(Batch::available_quantity).sum(),
            expired_count,
            near_expiry_count,
            active_count: batches.iter().filter(|b| !b.is_exhausted()).count(),
            next_expiry_date: self.next_expiry_date(batches),
        }
    }

    /// Earliest expiry date among batches that still hold stock, or
    /// None when nothing is active.
    pub fn next_expiry_date(&self, batches: &[Batch]) -> Option<NaiveDate> {
        batches
            .iter()
            .filter(|b| !b.is_exhausted())
            .map(Batch::expiry_date)
            .min()
    }

    // ==========================================
    // Defensive input validation (non-throwing)
    // ==========================================

    /// Collect human-readable violations for a raw record. An empty
    /// list means the record can be admitted as a batch.
    pub fn validate_batch(&self, record: &RawBatchRecord) -> Vec<String> {
        let mut violations = Vec::new();

        if record
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .is_none()
        {
            violations.push(crate::i18n::t("validation.missing_id"));
        }

        match record.expiry_date.as_deref() {
            None => violations.push(crate::i18n::t("validation.missing_expiry")),
            Some(raw) if parse_expiry_date(raw).is_none() => {
                violations.push(t_with_args("validation.invalid_expiry", &[("value", raw)]));
            }
            Some(_) => {}
        }

        if record.quantity < 0.0 || !record.quantity.is_finite() {
            violations.push(crate::i18n::t("validation.negative_quantity"));
        }

        violations
    }
}

impl Default for ExpiryMonitor {
    fn default() -> Self {
        Self::new()
    }
}

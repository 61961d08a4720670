// ==========================================
// ExpiryMonitor Engine Integration Tests
// ==========================================
// Target: alert classification and summary aggregates
// Coverage: EXPIRED/HIGH, NEAR_EXPIRY HIGH/MEDIUM split, window
// boundaries, summary counts, localized messages
// ==========================================

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use fefo_core::{AlertKind, Batch, EngineConfig, ExpiryMonitor, InventoryApi, Severity};

// ==========================================
// Test helpers
// ==========================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 26, 12, 0, 0).unwrap()
}

fn in_days(days: i64) -> NaiveDate {
    now().date_naive() + Duration::days(days)
}

fn batch(id: &str, qty: f64, expiry: NaiveDate) -> Batch {
    Batch::new(id, expiry, qty, None).unwrap()
}

// ==========================================
// Alert classification
// ==========================================

#[test]
fn test_expired_batch_raises_high_alert_with_days_overdue() {
    let monitor = ExpiryMonitor::new();
    let pool = vec![batch("L1", 8.0, in_days(-3))];

    let alerts = monitor.check_expirations(&pool, 30, now());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Expired);
    assert_eq!(alerts[0].severity, Severity::High);
    assert_eq!(alerts[0].batch_id, "L1");
    assert_eq!(alerts[0].quantity_affected, 8.0);
    assert!(alerts[0].message.contains('3'), "message should carry the overdue days");
}

#[test]
fn test_five_days_out_is_near_expiry_high() {
    let monitor = ExpiryMonitor::new();
    let pool = vec![batch("L1", 8.0, in_days(5))];

    let alerts = monitor.check_expirations(&pool, 30, now());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::NearExpiry);
    assert_eq!(alerts[0].severity, Severity::High);
}

#[test]
fn test_twenty_days_out_is_near_expiry_medium() {
    let monitor = ExpiryMonitor::new();
    let pool = vec![batch("L1", 8.0, in_days(20))];

    let alerts = monitor.check_expirations(&pool, 30, now());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::NearExpiry);
    assert_eq!(alerts[0].severity, Severity::Medium);
}

#[test]
fn test_beyond_the_window_is_silent() {
    let monitor = ExpiryMonitor::new();
    let pool = vec![batch("L1", 8.0, in_days(31))];
    assert!(monitor.check_expirations(&pool, 30, now()).is_empty());

    // The window is caller-supplied: widen it and the same lot alerts.
    let alerts = monitor.check_expirations(&pool, 60, now());
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].severity, Severity::Medium);
}

#[test]
fn test_alerts_follow_input_order() {
    let monitor = ExpiryMonitor::new();
    let pool = vec![
        batch("medium", 1.0, in_days(20)),
        batch("expired", 1.0, in_days(-1)),
        batch("high", 1.0, in_days(2)),
    ];
    let alerts = monitor.check_expirations(&pool, 30, now());
    let ids: Vec<&str> = alerts.iter().map(|a| a.batch_id.as_str()).collect();
    assert_eq!(ids, vec!["medium", "expired", "high"]);
}

#[test]
fn test_custom_high_severity_threshold() {
    let config = EngineConfig {
        high_severity_window_days: 14,
        ..EngineConfig::default()
    };
    let monitor = ExpiryMonitor::with_config(&config);
    let pool = vec![batch("L1", 8.0, in_days(10))];

    let alerts = monitor.check_expirations(&pool, 30, now());
    assert_eq!(alerts[0].severity, Severity::High);
}

// ==========================================
// Summary aggregates
// ==========================================

#[test]
fn test_summary_counts() {
    let monitor = ExpiryMonitor::new();
    let pool = vec![
        batch("expired", 3.0, in_days(-2)),
        batch("near", 5.0, in_days(10)),
        batch("healthy", 7.0, in_days(120)),
        batch("exhausted", 0.0, in_days(60)),
    ];

    let summary = monitor.summarize(&pool, now());
    assert_eq!(summary.total_batches, 4);
    assert_eq!(summary.total_quantity, 15.0);
    assert_eq!(summary.expired_count, 1);
    assert_eq!(summary.near_expiry_count, 1);
    assert_eq!(summary.active_count, 3);
    // Exhausted lots never drive the next expiry date.
    assert_eq!(summary.next_expiry_date, Some(in_days(-2)));
}

#[test]
fn test_summary_of_empty_pool() {
    let monitor = ExpiryMonitor::new();
    let summary = monitor.summarize(&[], now());
    assert_eq!(summary.total_batches, 0);
    assert_eq!(summary.total_quantity, 0.0);
    assert_eq!(summary.next_expiry_date, None);
}

#[test]
fn test_summary_window_is_independent_of_alert_window() {
    // A lot 40 days out: silent for a 30-day alert window, and also
    // outside the 30-day summary aggregate, even when the caller uses
    // a 60-day alert window.
    let monitor = ExpiryMonitor::new();
    let pool = vec![batch("L1", 8.0, in_days(40))];

    assert_eq!(monitor.check_expirations(&pool, 60, now()).len(), 1);
    let summary = monitor.summarize(&pool, now());
    assert_eq!(summary.near_expiry_count, 0);
}

// ==========================================
// Facade wiring
// ==========================================

#[test]
fn test_facade_uses_configured_alert_window() {
    let api = InventoryApi::new(EngineConfig {
        alert_window_days: 10,
        ..EngineConfig::default()
    });
    let pool = vec![batch("L1", 8.0, in_days(20))];
    assert!(api.expiry_alerts(&pool, now()).is_empty());

    let api = InventoryApi::default();
    assert_eq!(api.expiry_alerts(&pool, now()).len(), 1);
}

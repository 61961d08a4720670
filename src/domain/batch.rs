// ==========================================
// Warehouse FEFO Core - Batch Domain Model
// ==========================================
// Responsibility: represent one stock lot and answer point-in-time
// expiry queries against a caller-supplied "now".
// Invariants: identity and expiry date are immutable after
// construction; available quantity only moves down, never below 0,
// and only through `draw` (allocation engine use).
// ==========================================

use crate::error::{EngineError, EngineResult};
use crate::importer::record::RawBatchRecord;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const SECONDS_PER_DAY: i64 = 86_400;

// ==========================================
// Batch - one stock lot with its own expiry
// ==========================================
// Admission is centralized here: a record that cannot produce a valid
// Batch never reaches the engines. Call sites must not re-implement
// the "is this a trackable batch" predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBatchRecord")]
pub struct Batch {
    // Serialized under the upstream field names so emitted batches are
    // re-admissible as raw records.
    #[serde(rename = "id")]
    batch_id: String, // unique within one allocation call
    expiry_date: NaiveDate, // immutable once constructed
    #[serde(rename = "quantity")]
    available_quantity: f64, // >= 0 at all times
    intake_date: Option<NaiveDate>, // informational, not used in ordering
}

impl Batch {
    /// Construct a batch, validating identity and quantity.
    pub fn new(
        batch_id: impl Into<String>,
        expiry_date: NaiveDate,
        available_quantity: f64,
        intake_date: Option<NaiveDate>,
    ) -> EngineResult<Self> {
        let batch_id = batch_id.into();
        if batch_id.trim().is_empty() {
            return Err(EngineError::Validation("batch id must not be empty".to_string()));
        }
        if available_quantity < 0.0 || !available_quantity.is_finite() {
            return Err(EngineError::Validation(format!(
                "batch {}: available quantity must be a non-negative number, got {}",
                batch_id, available_quantity
            )));
        }
        Ok(Self {
            batch_id,
            expiry_date,
            available_quantity,
            intake_date,
        })
    }

    /// Construct a batch from a raw upstream record.
    ///
    /// Accepts both bare dates (YYYY-MM-DD) and full timestamps for the
    /// expiry field, normalizing to a date-only value; upstream systems
    /// supply one or the other inconsistently.
    pub fn from_record(record: &RawBatchRecord) -> EngineResult<Self> {
        let id = record
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| EngineError::Validation("batch record is missing an id".to_string()))?;

        let raw_expiry = record.expiry_date.as_deref().ok_or_else(|| {
            EngineError::Validation(format!("batch {}: missing expiry date", id))
        })?;
        let expiry = crate::importer::record::parse_expiry_date(raw_expiry).ok_or_else(|| {
            EngineError::Validation(format!(
                "batch {}: unparseable expiry date '{}'",
                id, raw_expiry
            ))
        })?;

        Self::new(id, expiry, record.quantity, record.intake_date)
    }

    /// Intake factory: register a fresh lot for a product.
    ///
    /// Generates a `LOT-{product}-{uuid}` identifier when the caller has
    /// no lot number from the supplier.
    pub fn for_intake(
        product_id: &str,
        quantity: f64,
        expiry_date: NaiveDate,
        intake_date: NaiveDate,
    ) -> EngineResult<Self> {
        let lot_id = format!("LOT-{}-{}", product_id, Uuid::new_v4().simple());
        Self::new(lot_id, expiry_date, quantity, Some(intake_date))
    }

    // ==========================================
    // Accessors
    // ==========================================

    pub fn batch_id(&self) -> &str {
        &self.batch_id
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    pub fn available_quantity(&self) -> f64 {
        self.available_quantity
    }

    pub fn intake_date(&self) -> Option<NaiveDate> {
        self.intake_date
    }

    /// A batch at exactly 0 is exhausted and leaves the working set.
    pub fn is_exhausted(&self) -> bool {
        self.available_quantity <= 0.0
    }

    // ==========================================
    // Expiry queries (relative to the moment of evaluation)
    // ==========================================

    /// True iff the expiry date lies strictly before today.
    /// Expiring today is NOT expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date < now.date_naive()
    }

    /// Whole days until expiry, ceiling-rounded: any partial day still
    /// remaining counts as a full day. Negative for expired batches;
    /// the magnitude is the days overdue.
    pub fn days_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        let expiry_midnight = self.expiry_date.and_time(NaiveTime::MIN).and_utc();
        let secs = (expiry_midnight - now).num_seconds();
        let days = secs.div_euclid(SECONDS_PER_DAY);
        if secs.rem_euclid(SECONDS_PER_DAY) > 0 {
            days + 1
        } else {
            days
        }
    }

    // ==========================================
    // Mutation (allocation engine only)
    // ==========================================

    /// Draw stock from the batch. The single mutation entry point;
    /// rejects draws that would leave the quantity negative.
    pub(crate) fn draw(&mut self, quantity: f64) -> EngineResult<()> {
        if quantity <= 0.0 || quantity > self.available_quantity {
            return Err(EngineError::Validation(format!(
                "batch {}: cannot draw {} from {} available",
                self.batch_id, quantity, self.available_quantity
            )));
        }
        self.available_quantity -= quantity;
        Ok(())
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lote {} - Vence: {} - Disponible: {}",
            self.batch_id, self.expiry_date, self.available_quantity
        )
    }
}

impl TryFrom<RawBatchRecord> for Batch {
    type Error = EngineError;

    fn try_from(record: RawBatchRecord) -> Result<Self, Self::Error> {
        Self::from_record(&record)
    }
}

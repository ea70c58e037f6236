use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fallback currency code used whenever the input is absent or blank.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Sort order for trade listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TradeSortOrder {
    /// Newest first (default for display)
    DateDesc,
    /// Oldest first
    DateAsc,
    /// Largest profit first
    PnlDesc,
    /// Largest loss first
    PnlAsc,
    /// Alphabetical by currency code
    CurrencyAsc,
    /// Reverse alphabetical by currency code
    CurrencyDesc,
}

/// A single logged profit/loss event.
///
/// Trades are immutable once recorded — the journal only appends new
/// trades or removes existing ones, never edits in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Unique identifier, assigned at creation and never reused
    pub id: String,

    /// The instant the trade closed, always UTC
    #[serde(rename = "dateTime", with = "iso_millis")]
    pub date_time: DateTime<Utc>,

    /// Signed profit (positive) or loss (negative), in `currency` units
    pub pnl: f64,

    /// Upper-case currency code, e.g. "EUR"
    pub currency: String,
}

/// Form input for a new trade, before id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInput {
    /// Calendar date of the trade
    pub date: NaiveDate,

    /// Wall-clock time of day; seconds are discarded
    pub time: NaiveTime,

    /// Signed profit or loss
    pub pnl: f64,

    /// Currency code; blank falls back to "EUR"
    pub currency: String,
}

impl Trade {
    /// Build a trade from form input. The timestamp is the given calendar
    /// date and time at UTC, truncated to minute precision.
    pub fn new(date: NaiveDate, time: NaiveTime, pnl: f64, currency: &str) -> Self {
        let minute_precision =
            NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);
        Self {
            id: Uuid::new_v4().to_string(),
            date_time: date.and_time(minute_precision).and_utc(),
            pnl,
            currency: normalize_currency(currency),
        }
    }

    /// The UTC calendar day this trade falls on (for date bucketing).
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.date_time.date_naive()
    }

    /// The UTC calendar month this trade falls on, as a sortable
    /// "YYYY-MM" key.
    #[must_use]
    pub fn month_key(&self) -> String {
        self.date_time.format("%Y-%m").to_string()
    }
}

/// Trim and upper-case a currency code, falling back to "EUR" when the
/// result would be empty.
pub fn normalize_currency(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CURRENCY.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Parse a persisted timestamp. Accepts a full ISO-8601 instant with an
/// offset, a bare date-time (assumed UTC), or a bare calendar date
/// (midnight UTC). Returns `None` for anything unresolvable.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Serde adapter persisting timestamps as ISO-8601 with millisecond
/// precision and a `Z` suffix, e.g. "2024-06-01T09:30:00.000Z".
mod iso_millis {
    use super::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unresolvable instant: {raw}")))
    }
}

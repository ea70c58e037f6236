use serde::Deserialize;

use crate::models::trade::{normalize_currency, parse_instant, Trade};

/// Canonical persisted shape: `{id, dateTime, pnl, currency}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CanonicalRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "dateTime")]
    pub date_time: String,

    pub pnl: f64,

    #[serde(default)]
    pub currency: Option<String>,
}

/// Historical persisted shape, read-only and never written back: a
/// calendar `date` (usually without a time portion) and a `symbol`
/// field in place of `currency`.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRecord {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub pnl: Option<f64>,

    #[serde(default)]
    pub symbol: Option<String>,

    #[serde(default)]
    pub currency: Option<String>,
}

/// One element of the persisted array, in either of the two schema
/// shapes the store has ever written. Detection is a capability check:
/// a `dateTime` field marks the canonical shape, everything else is
/// treated as legacy.
#[derive(Debug, Clone)]
pub enum StoredRecord {
    Canonical(CanonicalRecord),
    Legacy(LegacyRecord),
}

impl StoredRecord {
    /// Classify and decode one raw array element. Returns `None` for
    /// elements that are not objects or fail to decode in their
    /// detected shape.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        if obj.contains_key("dateTime") {
            serde_json::from_value(value.clone())
                .ok()
                .map(StoredRecord::Canonical)
        } else {
            serde_json::from_value(value.clone())
                .ok()
                .map(StoredRecord::Legacy)
        }
    }

    /// Normalize into a canonical trade. Records without an id or a
    /// resolvable timestamp are dropped (`None`), never kept partial.
    pub fn into_trade(self) -> Option<Trade> {
        match self {
            StoredRecord::Canonical(record) => record.into_trade(),
            StoredRecord::Legacy(record) => record.into_trade(),
        }
    }
}

impl CanonicalRecord {
    pub fn into_trade(self) -> Option<Trade> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let date_time = parse_instant(self.date_time.trim())?;
        let currency = normalize_currency(self.currency.as_deref().unwrap_or(""));
        Some(Trade {
            id,
            date_time,
            pnl: self.pnl,
            currency,
        })
    }
}

impl LegacyRecord {
    pub fn into_trade(self) -> Option<Trade> {
        let id = self.id.filter(|id| !id.is_empty())?;
        let raw_date = self.date.filter(|d| !d.trim().is_empty())?;
        // A bare calendar date resolves to midnight UTC.
        let date_time = parse_instant(raw_date.trim())?;
        let currency = normalize_currency(
            self.symbol
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .or(self.currency.as_deref())
                .unwrap_or(""),
        );
        Some(Trade {
            id,
            date_time,
            pnl: self.pnl.unwrap_or(0.0),
            currency,
        })
    }
}

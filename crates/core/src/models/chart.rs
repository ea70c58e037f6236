use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One point of the equity-curve series.
///
/// The core computes all the numbers — the frontend only renders.
/// Days with no trades produce no point; carrying the last value across
/// gaps (or showing a break) is the renderer's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// UTC calendar day
    pub date: NaiveDate,

    /// Running total of pnl as of the last trade on or before the end
    /// of this day
    pub pnl: f64,
}

/// Summed pnl for a single currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencySlice {
    /// Upper-case currency code
    pub currency: String,

    /// Total pnl across all trades in this currency, unconverted
    pub pnl: f64,
}

/// Summed pnl for a single calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSlice {
    /// Sortable month key, "YYYY-MM"
    pub key: String,

    /// Human-readable label for display, e.g. "Jun 2024"
    pub label: String,

    /// Total pnl across all trades in this month
    pub pnl: f64,
}

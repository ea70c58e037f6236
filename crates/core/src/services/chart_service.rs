use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::chart::{CumulativePoint, CurrencySlice, MonthSlice};
use crate::models::trade::Trade;

/// Most currency groups ever returned by the currency rollup.
pub const TOP_CURRENCIES: usize = 10;

/// Most months ever returned by the monthly rollup.
pub const MONTHS_SHOWN: usize = 12;

/// Generates chart-ready series from the trade collection.
///
/// The core computes all the numbers — the frontend only renders.
/// All three series are pure functions of the current collection.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Equity-curve series: running pnl total bucketed by UTC calendar
    /// day.
    ///
    /// Trades are walked in ascending instant order; each traded day
    /// appears exactly once, carrying the running total after the last
    /// trade of that day. Days with no trades produce no point.
    pub fn cumulative_series(&self, trades: &[Trade]) -> Vec<CumulativePoint> {
        let mut sorted: Vec<&Trade> = trades.iter().collect();
        sorted.sort_by_key(|t| t.date_time);

        let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        let mut running = 0.0;
        for trade in sorted {
            running += trade.pnl;
            by_day.insert(trade.day(), running);
        }

        by_day
            .into_iter()
            .map(|(date, pnl)| CumulativePoint { date, pnl })
            .collect()
    }

    /// Total pnl per currency, largest first, at most `TOP_CURRENCIES`
    /// groups. Amounts are summed raw — no conversion across currencies.
    ///
    /// Groups accumulate in a `BTreeMap` and the descending sort is
    /// stable, so currencies with equal totals appear in alphabetical
    /// order.
    pub fn currency_rollup(&self, trades: &[Trade]) -> Vec<CurrencySlice> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for trade in trades {
            *totals.entry(trade.currency.clone()).or_insert(0.0) += trade.pnl;
        }

        let mut slices: Vec<CurrencySlice> = totals
            .into_iter()
            .map(|(currency, pnl)| CurrencySlice { currency, pnl })
            .collect();
        slices.sort_by(|a, b| {
            b.pnl
                .partial_cmp(&a.pnl)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        slices.truncate(TOP_CURRENCIES);
        slices
    }

    /// Total pnl per UTC calendar month, chronological, keeping only the
    /// last `MONTHS_SHOWN` months that actually contain trades — not the
    /// last twelve calendar months from today.
    pub fn monthly_rollup(&self, trades: &[Trade]) -> Vec<MonthSlice> {
        let mut totals: BTreeMap<String, f64> = BTreeMap::new();
        for trade in trades {
            *totals.entry(trade.month_key()).or_insert(0.0) += trade.pnl;
        }

        let skip = totals.len().saturating_sub(MONTHS_SHOWN);
        totals
            .into_iter()
            .skip(skip)
            .map(|(key, pnl)| MonthSlice {
                label: month_label(&key),
                key,
                pnl,
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// "2024-06" → "Jun 2024". Falls back to the raw key if it doesn't
/// parse as a month.
fn month_label(key: &str) -> String {
    NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d")
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| key.to_string())
}

use crate::models::journal::Journal;
use crate::models::trade::{Trade, TradeInput, TradeSortOrder};

/// Manages journal mutations (add/delete) and trade listings.
///
/// Pure business logic — no I/O. Persistence is the facade's concern.
pub struct JournalService;

impl JournalService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new trade built from form input, insertion order (new
    /// trades last). Returns the fresh id, or `None` — leaving the
    /// journal untouched — when the amount is not a finite number.
    pub fn add_trade(&self, journal: &mut Journal, input: &TradeInput) -> Option<String> {
        if !input.pnl.is_finite() {
            return None;
        }
        let trade = Trade::new(input.date, input.time, input.pnl, &input.currency);
        let id = trade.id.clone();
        journal.trades.push(trade);
        Some(id)
    }

    /// Remove the trade with the given id. Returns whether anything was
    /// removed; an unknown id is a no-op, not an error.
    pub fn delete_trade(&self, journal: &mut Journal, id: &str) -> bool {
        let before = journal.trades.len();
        journal.trades.retain(|t| t.id != id);
        journal.trades.len() != before
    }

    /// All trades sorted by instant (newest first for display).
    pub fn get_trades<'a>(&self, journal: &'a Journal) -> Vec<&'a Trade> {
        let mut trades: Vec<&Trade> = journal.trades.iter().collect();
        trades.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        trades
    }

    /// Trades sorted by a specific order.
    pub fn get_trades_sorted<'a>(
        &self,
        journal: &'a Journal,
        order: &TradeSortOrder,
    ) -> Vec<&'a Trade> {
        let mut trades: Vec<&Trade> = journal.trades.iter().collect();
        match order {
            TradeSortOrder::DateDesc => trades.sort_by(|a, b| b.date_time.cmp(&a.date_time)),
            TradeSortOrder::DateAsc => trades.sort_by(|a, b| a.date_time.cmp(&b.date_time)),
            TradeSortOrder::PnlDesc => trades.sort_by(|a, b| {
                b.pnl
                    .partial_cmp(&a.pnl)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TradeSortOrder::PnlAsc => trades.sort_by(|a, b| {
                a.pnl
                    .partial_cmp(&b.pnl)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            TradeSortOrder::CurrencyAsc => trades.sort_by(|a, b| a.currency.cmp(&b.currency)),
            TradeSortOrder::CurrencyDesc => trades.sort_by(|a, b| b.currency.cmp(&a.currency)),
        }
        trades
    }
}

impl Default for JournalService {
    fn default() -> Self {
        Self::new()
    }
}

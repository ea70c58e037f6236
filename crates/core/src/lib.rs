pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::{DateTime, Utc};
use models::{
    chart::{CumulativePoint, CurrencySlice, MonthSlice},
    journal::Journal,
    stats::SummaryStats,
    trade::{Trade, TradeInput, TradeSortOrder},
};
use services::{
    chart_service::ChartService, journal_service::JournalService, stats_service::StatsService,
};
use storage::manager::StorageManager;
use storage::store::KeyValueStore;

use errors::CoreError;

/// Main entry point for the trade-journal core library.
/// Owns the canonical trade collection and all services that operate on
/// it, plus the store it persists to.
#[must_use]
pub struct TradeJournal<S: KeyValueStore> {
    journal: Journal,
    store: S,
    journal_service: JournalService,
    stats_service: StatsService,
    chart_service: ChartService,
    /// Tracks whether any mutation has occurred since the last persist.
    dirty: bool,
}

impl<S: KeyValueStore> std::fmt::Debug for TradeJournal<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeJournal")
            .field("trades", &self.journal.trades.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl<S: KeyValueStore> TradeJournal<S> {
    /// Load the journal from the given store.
    ///
    /// Never fails: an absent slot or malformed persisted data yields an
    /// empty journal. Loading alone never writes back to the store, so
    /// existing data is never clobbered before the first mutation.
    pub fn load(store: S) -> Self {
        let journal = StorageManager::load(&store);
        Self {
            journal,
            store,
            journal_service: JournalService::new(),
            stats_service: StatsService::new(),
            chart_service: ChartService::new(),
            dirty: false,
        }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Record a new trade and persist immediately.
    ///
    /// Returns the fresh trade id, or `Ok(None)` — no record created,
    /// nothing written — when the amount is not a finite number.
    pub fn add_trade(&mut self, input: &TradeInput) -> Result<Option<String>, CoreError> {
        let Some(id) = self.journal_service.add_trade(&mut self.journal, input) else {
            return Ok(None);
        };
        self.dirty = true;
        self.persist_if_dirty()?;
        Ok(Some(id))
    }

    /// Remove the trade with the given id and persist. An unknown id is
    /// a no-op `Ok(false)` with no write.
    pub fn delete_trade(&mut self, id: &str) -> Result<bool, CoreError> {
        let removed = self.journal_service.delete_trade(&mut self.journal, id);
        if removed {
            self.dirty = true;
            self.persist_if_dirty()?;
        }
        Ok(removed)
    }

    /// Write the journal to the store if a mutation is unpersisted.
    /// Clears the unsaved-changes flag on success.
    pub fn persist_if_dirty(&mut self) -> Result<(), CoreError> {
        if self.dirty {
            StorageManager::save(&mut self.store, &self.journal)?;
            self.dirty = false;
        }
        Ok(())
    }

    /// Returns `true` if the journal has been modified since the last
    /// successful persist (i.e., a previous write failed).
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Reading ─────────────────────────────────────────────────────

    /// Current collection in storage (insertion) order.
    #[must_use]
    pub fn trades(&self) -> &[Trade] {
        &self.journal.trades
    }

    /// Total number of trades without materializing a sorted vector.
    #[must_use]
    pub fn trade_count(&self) -> usize {
        self.journal.trades.len()
    }

    /// Get a single trade by its id.
    #[must_use]
    pub fn get_trade(&self, id: &str) -> Option<&Trade> {
        self.journal.trades.iter().find(|t| t.id == id)
    }

    /// All trades, newest first.
    #[must_use]
    pub fn get_trades(&self) -> Vec<&Trade> {
        self.journal_service.get_trades(&self.journal)
    }

    /// Trades sorted by a specific order.
    #[must_use]
    pub fn get_trades_sorted(&self, order: &TradeSortOrder) -> Vec<&Trade> {
        self.journal_service.get_trades_sorted(&self.journal, order)
    }

    /// The `limit` most recent trades, newest first (the list view shows
    /// a bounded window).
    #[must_use]
    pub fn recent_trades(&self, limit: usize) -> Vec<&Trade> {
        let mut trades = self.journal_service.get_trades(&self.journal);
        trades.truncate(limit);
        trades
    }

    /// Trades filtered by currency code (case-insensitive), newest
    /// first.
    #[must_use]
    pub fn get_trades_for_currency(&self, currency: &str) -> Vec<&Trade> {
        let upper = currency.trim().to_uppercase();
        let mut trades: Vec<&Trade> = self
            .journal
            .trades
            .iter()
            .filter(|t| t.currency == upper)
            .collect();
        trades.sort_by(|a, b| b.date_time.cmp(&a.date_time));
        trades
    }

    /// The instant of the earliest trade in the journal.
    #[must_use]
    pub fn earliest_trade_time(&self) -> Option<DateTime<Utc>> {
        self.journal.trades.iter().map(|t| t.date_time).min()
    }

    /// The instant of the most recent trade in the journal.
    #[must_use]
    pub fn latest_trade_time(&self) -> Option<DateTime<Utc>> {
        self.journal.trades.iter().map(|t| t.date_time).max()
    }

    // ── Aggregations ────────────────────────────────────────────────

    /// Summary statistics over the full collection.
    #[must_use]
    pub fn summary_stats(&self) -> SummaryStats {
        self.stats_service.summary_stats(&self.journal.trades)
    }

    /// Equity-curve series: running pnl total per traded day, ascending.
    #[must_use]
    pub fn cumulative_series(&self) -> Vec<CumulativePoint> {
        self.chart_service.cumulative_series(&self.journal.trades)
    }

    /// Total pnl per currency, largest first, top 10.
    #[must_use]
    pub fn currency_rollup(&self) -> Vec<CurrencySlice> {
        self.chart_service.currency_rollup(&self.journal.trades)
    }

    /// Total pnl per month, chronological, last 12 occupied months.
    #[must_use]
    pub fn monthly_rollup(&self) -> Vec<MonthSlice> {
        self.chart_service.monthly_rollup(&self.journal.trades)
    }

    // ── Store access ────────────────────────────────────────────────

    /// Borrow the underlying store (e.g., to hand its payload to a host
    /// that marshals persistence itself).
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the journal and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

use crate::models::stats::{SummaryStats, PROFIT_FACTOR_CAP};
use crate::models::trade::Trade;

/// Computes summary statistics: total pnl, win/loss counts, win rate,
/// average win/loss, profit factor.
///
/// Everything is re-derived from the full collection on every call —
/// no incremental state is held between calls.
pub struct StatsService;

impl StatsService {
    pub fn new() -> Self {
        Self
    }

    /// Summary statistics over the whole collection.
    ///
    /// Break-even trades (pnl exactly 0) count toward neither wins nor
    /// losses but do count in the win-rate denominator. An empty
    /// collection yields all zeroes.
    pub fn summary_stats(&self, trades: &[Trade]) -> SummaryStats {
        let total_pnl: f64 = trades.iter().map(|t| t.pnl).sum();

        let wins = trades.iter().filter(|t| t.pnl > 0.0).count();
        let losses = trades.iter().filter(|t| t.pnl < 0.0).count();

        let win_rate = if trades.is_empty() {
            0.0
        } else {
            wins as f64 / trades.len() as f64 * 100.0
        };

        let avg_win = if wins > 0 {
            trades.iter().filter(|t| t.pnl > 0.0).map(|t| t.pnl).sum::<f64>() / wins as f64
        } else {
            0.0
        };
        let avg_loss = if losses > 0 {
            trades.iter().filter(|t| t.pnl < 0.0).map(|t| t.pnl).sum::<f64>() / losses as f64
        } else {
            0.0
        };

        // Profit factor is undefined without losses; with wins it is
        // reported as the cap, without wins as 0.
        let profit_factor = if avg_loss != 0.0 {
            (avg_win * wins as f64 / (avg_loss * losses as f64)).abs()
        } else if wins > 0 {
            PROFIT_FACTOR_CAP
        } else {
            0.0
        };

        SummaryStats {
            total_pnl,
            wins,
            losses,
            win_rate,
            avg_win,
            avg_loss,
            profit_factor,
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

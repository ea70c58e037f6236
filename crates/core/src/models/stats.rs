use serde::{Deserialize, Serialize};

/// Profit factor reported for a journal with wins and no losses, where
/// the ratio is undefined. A display cap, not a principled number.
pub const PROFIT_FACTOR_CAP: f64 = 999.0;

/// Summary statistics over the whole journal.
///
/// All values are re-derived from the full collection on every call; an
/// empty journal yields all zeroes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Sum of every trade's profit/loss, summed raw across currencies
    pub total_pnl: f64,

    /// Number of trades with positive pnl
    pub wins: usize,

    /// Number of trades with negative pnl
    pub losses: usize,

    /// wins / total trades × 100; break-even trades count in the
    /// denominator only. Always within [0, 100].
    pub win_rate: f64,

    /// Mean of positive pnl values (0 with no wins)
    pub avg_win: f64,

    /// Mean of negative pnl values (0 with no losses; otherwise negative)
    pub avg_loss: f64,

    /// |avg_win × wins / (avg_loss × losses)|, capped at
    /// `PROFIT_FACTOR_CAP` when there are wins but no losses
    pub profit_factor: f64,
}

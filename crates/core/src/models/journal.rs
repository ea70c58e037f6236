use serde::{Deserialize, Serialize};

use super::trade::Trade;

/// The canonical in-memory collection of trades.
///
/// Storage order is insertion order (new trades last). Display and
/// aggregation always sort explicitly and never rely on this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    /// All recorded trades
    pub trades: Vec<Trade>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trades.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

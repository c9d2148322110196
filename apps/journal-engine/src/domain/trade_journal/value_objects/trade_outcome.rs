//! Realized outcome of a closed trade.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Classification of a realized P&L.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeOutcome {
    /// Net P&L > 0.
    Win,
    /// Net P&L < 0.
    Loss,
    /// Net P&L == 0.
    Breakeven,
}

impl TradeOutcome {
    /// Classify a net P&L amount.
    #[must_use]
    pub fn from_pnl(net_pnl: Decimal) -> Self {
        if net_pnl > Decimal::ZERO {
            Self::Win
        } else if net_pnl < Decimal::ZERO {
            Self::Loss
        } else {
            Self::Breakeven
        }
    }
}

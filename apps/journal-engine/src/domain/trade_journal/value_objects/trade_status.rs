//! Trade status in the journal lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a journaled trade.
///
/// Only `Closed` trades carry a realized P&L and feed the performance
/// aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Planned but not yet entered.
    Pending,
    /// Position is live.
    Open,
    /// Position exited, P&L realized.
    Closed,
    /// Plan abandoned before entry.
    Cancelled,
}

impl TradeStatus {
    /// Returns true if the trade has a realized result.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true if the position is currently live.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_closed_is_closed() {
        assert!(TradeStatus::Closed.is_closed());
        assert!(!TradeStatus::Open.is_closed());
        assert!(!TradeStatus::Pending.is_closed());
        assert!(!TradeStatus::Cancelled.is_closed());
    }

    #[test]
    fn trade_status_display_matches_serde() {
        for status in [
            TradeStatus::Pending,
            TradeStatus::Open,
            TradeStatus::Closed,
            TradeStatus::Cancelled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }
}

//! Whether a trade was taken with real money or replayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading mode of a journal entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeMode {
    /// Real account.
    #[default]
    Live,
    /// Manual backtest / replay session.
    Backtest,
}

impl fmt::Display for TradeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => write!(f, "LIVE"),
            Self::Backtest => write!(f, "BACKTEST"),
        }
    }
}

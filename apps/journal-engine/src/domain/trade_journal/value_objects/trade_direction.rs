//! Trade direction (long or short).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a journaled trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    /// Bought first, profits when price rises.
    Long,
    /// Sold first, profits when price falls.
    Short,
}

impl TradeDirection {
    /// Returns the sign applied to a price move.
    ///
    /// Long = +1, Short = -1
    #[must_use]
    pub const fn sign(&self) -> i32 {
        match self {
            Self::Long => 1,
            Self::Short => -1,
        }
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_direction_sign() {
        assert_eq!(TradeDirection::Long.sign(), 1);
        assert_eq!(TradeDirection::Short.sign(), -1);
    }

    #[test]
    fn trade_direction_serde() {
        let json = serde_json::to_string(&TradeDirection::Short).unwrap();
        assert_eq!(json, "\"SHORT\"");

        let parsed: TradeDirection = serde_json::from_str("\"LONG\"").unwrap();
        assert_eq!(parsed, TradeDirection::Long);
    }
}

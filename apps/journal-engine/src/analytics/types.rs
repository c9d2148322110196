//! Core types for journal performance statistics.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::constants::INFINITY_LABEL;

/// How a breakeven trade (net P&L = 0) affects the running streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakevenPolicy {
    /// A breakeven trade ends the current run; the next win or loss starts a new one.
    #[default]
    Reset,
    /// A breakeven trade is skipped; the run before it continues after it.
    Ignore,
}

/// Direction of the trailing streak.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakType {
    /// Consecutive winners.
    Winning,
    /// Consecutive losers.
    Losing,
    /// No trailing run (no closed trades, or last run was broken).
    #[default]
    None,
}

/// Gross profit divided by gross loss.
///
/// Unbounded when there are wins but no losses. Serialized as a decimal
/// string, or `"Infinity"` for the unbounded case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfitFactor {
    /// sum(wins) / |sum(losses)|.
    Finite(Decimal),
    /// Wins with no losses.
    Infinite,
}

impl ProfitFactor {
    /// Derive from the sum of winning P&L and the sum of losing P&L.
    ///
    /// `sum_losses` may be given with either sign; its magnitude is used.
    /// A ratio too large for `Decimal` is reported as unbounded.
    #[must_use]
    pub fn from_sums(sum_wins: Decimal, sum_losses: Decimal) -> Self {
        let gross_loss = sum_losses.abs();
        if gross_loss > Decimal::ZERO {
            sum_wins
                .checked_div(gross_loss)
                .map_or(Self::Infinite, Self::Finite)
        } else if sum_wins > Decimal::ZERO {
            Self::Infinite
        } else {
            Self::Finite(Decimal::ZERO)
        }
    }

    /// Finite value, `None` when unbounded.
    #[must_use]
    pub const fn value(&self) -> Option<Decimal> {
        match self {
            Self::Finite(v) => Some(*v),
            Self::Infinite => None,
        }
    }

    /// Returns true for the wins-without-losses case.
    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite)
    }
}

impl Default for ProfitFactor {
    fn default() -> Self {
        Self::Finite(Decimal::ZERO)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(v) => write!(f, "{v}"),
            Self::Infinite => f.write_str(INFINITY_LABEL),
        }
    }
}

impl Serialize for ProfitFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProfitFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(Decimal),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Self::Finite(v)),
            Raw::Text(s) if s.eq_ignore_ascii_case(INFINITY_LABEL) || s == "∞" => {
                Ok(Self::Infinite)
            }
            Raw::Text(s) => Decimal::from_str(&s)
                .map(Self::Finite)
                .map_err(D::Error::custom),
        }
    }
}

/// Aggregate statistics over one user's trades.
///
/// Derived on every request and never stored. P&L aggregates only consider
/// `CLOSED` trades; `total_trades` and `open_trades` count the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradingStats {
    // Counts
    /// Every trade in the input, whatever its status.
    pub total_trades: u64,
    /// Trades with status `OPEN`.
    pub open_trades: u64,
    /// Trades with status `CLOSED`.
    pub closed_trades: u64,
    /// Closed trades with net P&L > 0.
    pub winning_trades: u64,
    /// Closed trades with net P&L < 0.
    pub losing_trades: u64,
    /// Closed trades with net P&L = 0.
    pub breakeven_trades: u64,

    // Ratios
    /// Winning / closed, in percent (e.g. 80 = 80%).
    pub win_rate: Decimal,
    /// Sum of wins over the magnitude of the sum of losses.
    pub profit_factor: ProfitFactor,

    // Magnitudes
    /// Sum of net P&L over closed trades.
    pub net_pnl: Decimal,
    /// Sum of gross P&L over closed trades.
    pub gross_pnl: Decimal,
    /// Sum of fees over closed trades.
    pub total_fees: Decimal,
    /// Mean winning trade (positive).
    pub avg_win: Decimal,
    /// Mean losing trade (negative).
    pub avg_loss: Decimal,
    /// Best single trade, zero when there are no winners.
    pub largest_win: Decimal,
    /// Worst single trade (most negative), zero when there are no losers.
    pub largest_loss: Decimal,
    /// Net P&L per closed trade.
    pub expectancy: Decimal,
    /// Mean R-multiple over closed trades that recorded one.
    pub avg_r_multiple: Decimal,

    // Streaks
    /// Length of the trailing run.
    pub current_streak: u64,
    /// Direction of the trailing run.
    pub streak_type: StreakType,
    /// Longest run of winners.
    pub best_streak: u64,
    /// Longest run of losers.
    pub worst_streak: u64,
}

impl Default for TradingStats {
    fn default() -> Self {
        Self {
            total_trades: 0,
            open_trades: 0,
            closed_trades: 0,
            winning_trades: 0,
            losing_trades: 0,
            breakeven_trades: 0,
            win_rate: Decimal::ZERO,
            profit_factor: ProfitFactor::default(),
            net_pnl: Decimal::ZERO,
            gross_pnl: Decimal::ZERO,
            total_fees: Decimal::ZERO,
            avg_win: Decimal::ZERO,
            avg_loss: Decimal::ZERO,
            largest_win: Decimal::ZERO,
            largest_loss: Decimal::ZERO,
            expectancy: Decimal::ZERO,
            avg_r_multiple: Decimal::ZERO,
            current_streak: 0,
            streak_type: StreakType::None,
            best_streak: 0,
            worst_streak: 0,
        }
    }
}

//! Journaled trade record.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::value_objects::{TradeDirection, TradeMode, TradeOutcome, TradeStatus};

/// A single journal entry as supplied by the data-access layer.
///
/// Numeric fields that the journal may not have filled in yet are `Option`s;
/// the accessors below make the zero-defaulting explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    /// Opaque trade identifier.
    pub id: String,
    /// Instrument symbol (e.g. `EURUSD`).
    #[serde(default)]
    pub symbol: String,
    /// Long or short.
    pub direction: TradeDirection,
    /// Lifecycle status.
    pub status: TradeStatus,
    /// Live account or backtest session.
    #[serde(default)]
    pub mode: TradeMode,
    /// Owning portfolio, if any.
    #[serde(default)]
    pub portfolio_id: Option<String>,
    /// Strategy the trade was tagged with, if any.
    #[serde(default)]
    pub strategy_id: Option<String>,
    /// P&L after fees. Only meaningful once closed.
    #[serde(default)]
    pub net_pnl: Option<Decimal>,
    /// P&L before fees.
    #[serde(default)]
    pub gross_pnl: Option<Decimal>,
    /// Commissions and fees paid.
    #[serde(default)]
    pub fees: Option<Decimal>,
    /// Result expressed in units of initial risk.
    #[serde(default)]
    pub r_multiple: Option<Decimal>,
    /// Entry timestamp.
    pub entry_date: DateTime<Utc>,
    /// Exit timestamp, `None` while the position is open.
    #[serde(default)]
    pub exit_date: Option<DateTime<Utc>>,
}

impl Trade {
    /// Create a pending trade with no results attached.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        direction: TradeDirection,
        entry_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            direction,
            status: TradeStatus::Pending,
            mode: TradeMode::Live,
            portfolio_id: None,
            strategy_id: None,
            net_pnl: None,
            gross_pnl: None,
            fees: None,
            r_multiple: None,
            entry_date,
            exit_date: None,
        }
    }

    /// Mark the trade closed with a realized net P&L.
    #[must_use]
    pub fn closed(mut self, net_pnl: Decimal, exit_date: DateTime<Utc>) -> Self {
        self.status = TradeStatus::Closed;
        self.net_pnl = Some(net_pnl);
        self.exit_date = Some(exit_date);
        self
    }

    /// Attach fees.
    #[must_use]
    pub fn with_fees(mut self, fees: Decimal) -> Self {
        self.fees = Some(fees);
        self
    }

    /// Attach an R-multiple.
    #[must_use]
    pub fn with_r_multiple(mut self, r: Decimal) -> Self {
        self.r_multiple = Some(r);
        self
    }

    /// Set the lifecycle status.
    #[must_use]
    pub fn with_status(mut self, status: TradeStatus) -> Self {
        self.status = status;
        self
    }

    /// Tag the trade with a strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy_id: impl Into<String>) -> Self {
        self.strategy_id = Some(strategy_id.into());
        self
    }

    /// Assign the trade to a portfolio.
    #[must_use]
    pub fn with_portfolio(mut self, portfolio_id: impl Into<String>) -> Self {
        self.portfolio_id = Some(portfolio_id.into());
        self
    }

    /// Realized P&L after fees.
    ///
    /// Falls back to `gross_pnl - fees` when no net figure was recorded, and
    /// to zero when neither is present.
    #[must_use]
    pub fn realized_pnl(&self) -> Decimal {
        match (self.net_pnl, self.gross_pnl) {
            (Some(net), _) => net,
            (None, Some(gross)) => gross.saturating_sub(self.fees_or_zero()),
            (None, None) => Decimal::ZERO,
        }
    }

    /// Gross P&L, or zero when not recorded.
    #[must_use]
    pub fn gross_or_zero(&self) -> Decimal {
        self.gross_pnl.unwrap_or(Decimal::ZERO)
    }

    /// Fees, or zero when not recorded.
    #[must_use]
    pub fn fees_or_zero(&self) -> Decimal {
        self.fees.unwrap_or(Decimal::ZERO)
    }

    /// Outcome of the trade, `None` unless it is closed.
    #[must_use]
    pub fn outcome(&self) -> Option<TradeOutcome> {
        self.status
            .is_closed()
            .then(|| TradeOutcome::from_pnl(self.realized_pnl()))
    }

    /// Total order used for every sequence-dependent metric.
    ///
    /// Exit date ascending (a missing exit date sorts first), then entry
    /// date, then id.
    #[must_use]
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        self.exit_date
            .cmp(&other.exit_date)
            .then_with(|| self.entry_date.cmp(&other.entry_date))
            .then_with(|| self.id.cmp(&other.id))
    }
}

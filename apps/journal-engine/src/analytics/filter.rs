//! Trade selection for dashboard views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::trade_journal::{Trade, TradeMode};

/// Criteria narrowing a user's trades before aggregation.
///
/// Every field is optional; a trade is kept when all present criteria match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeFilter {
    /// Only trades in this portfolio.
    #[serde(default)]
    pub portfolio_id: Option<String>,
    /// Only trades tagged with this strategy.
    #[serde(default)]
    pub strategy_id: Option<String>,
    /// Only trades on this symbol (case-insensitive).
    #[serde(default)]
    pub symbol: Option<String>,
    /// Only live or only backtest trades.
    #[serde(default)]
    pub mode: Option<TradeMode>,
    /// Entered at or after this instant.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// Entered at or before this instant.
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

impl TradeFilter {
    /// A filter that keeps everything.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one portfolio.
    #[must_use]
    pub fn portfolio(mut self, portfolio_id: impl Into<String>) -> Self {
        self.portfolio_id = Some(portfolio_id.into());
        self
    }

    /// Restrict to one strategy.
    #[must_use]
    pub fn strategy(mut self, strategy_id: impl Into<String>) -> Self {
        self.strategy_id = Some(strategy_id.into());
        self
    }

    /// Restrict to one symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Restrict to one trading mode.
    #[must_use]
    pub const fn mode(mut self, mode: TradeMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Restrict entry dates to `[from, to]`; either bound may be open.
    #[must_use]
    pub const fn between(mut self, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.portfolio_id.is_none()
            && self.strategy_id.is_none()
            && self.symbol.is_none()
            && self.mode.is_none()
            && self.from.is_none()
            && self.to.is_none()
    }

    /// Check a single trade against every present criterion.
    #[must_use]
    pub fn matches(&self, trade: &Trade) -> bool {
        if let Some(portfolio_id) = &self.portfolio_id {
            if trade.portfolio_id.as_deref() != Some(portfolio_id.as_str()) {
                return false;
            }
        }

        if let Some(strategy_id) = &self.strategy_id {
            if trade.strategy_id.as_deref() != Some(strategy_id.as_str()) {
                return false;
            }
        }

        if let Some(symbol) = &self.symbol {
            if !trade.symbol.eq_ignore_ascii_case(symbol) {
                return false;
            }
        }

        if self.mode.is_some_and(|mode| trade.mode != mode) {
            return false;
        }

        if self.from.is_some_and(|from| trade.entry_date < from) {
            return false;
        }

        if self.to.is_some_and(|to| trade.entry_date > to) {
            return false;
        }

        true
    }

    /// Keep only matching trades.
    #[must_use]
    pub fn apply(&self, trades: Vec<Trade>) -> Vec<Trade> {
        if self.is_empty() {
            return trades;
        }
        trades.into_iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade_journal::TradeDirection;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, day, 10, 0, 0).unwrap()
    }

    fn trades() -> Vec<Trade> {
        let mut backtest = Trade::new("3", "btcusd", TradeDirection::Short, at(20));
        backtest.mode = TradeMode::Backtest;

        vec![
            Trade::new("1", "EURUSD", TradeDirection::Long, at(1))
                .with_portfolio("main")
                .with_strategy("breakout"),
            Trade::new("2", "EURUSD", TradeDirection::Long, at(10)).with_portfolio("prop"),
            backtest.with_portfolio("main"),
        ]
    }

    fn ids(trades: &[Trade]) -> Vec<&str> {
        trades.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = TradeFilter::all();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(trades()).len(), 3);
    }

    #[test]
    fn filters_by_portfolio_and_strategy() {
        let kept = TradeFilter::all().portfolio("main").apply(trades());
        assert_eq!(ids(&kept), vec!["1", "3"]);

        let kept = TradeFilter::all()
            .portfolio("main")
            .strategy("breakout")
            .apply(trades());
        assert_eq!(ids(&kept), vec!["1"]);
    }

    #[test]
    fn symbol_match_ignores_case() {
        let kept = TradeFilter::all().symbol("BTCUSD").apply(trades());
        assert_eq!(ids(&kept), vec!["3"]);
    }

    #[test]
    fn filters_by_mode() {
        let kept = TradeFilter::all().mode(TradeMode::Live).apply(trades());
        assert_eq!(ids(&kept), vec!["1", "2"]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let kept = TradeFilter::all()
            .between(Some(at(10)), Some(at(20)))
            .apply(trades());
        assert_eq!(ids(&kept), vec!["2", "3"]);

        let kept = TradeFilter::all().between(None, Some(at(1))).apply(trades());
        assert_eq!(ids(&kept), vec!["1"]);
    }
}

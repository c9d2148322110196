//! Journal DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{
    BreakevenPolicy, DayPnl, EquityPoint, MonthSummary, PerformanceBreakdown, StatsHeadline,
    TradeFilter, TradingStats,
};
use crate::domain::trade_journal::{Trade, TradeMode};

/// Request to compute statistics over an ad-hoc set of trades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeStatsRequestDto {
    /// Trades to aggregate.
    pub trades: Vec<Trade>,
    /// Overrides the configured breakeven policy.
    #[serde(default)]
    pub breakeven_policy: Option<BreakevenPolicy>,
}

/// Request to store trades for a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportTradesRequestDto {
    /// Trades to insert or replace.
    pub trades: Vec<Trade>,
}

/// Result of an import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTradesResponseDto {
    /// Number of trades written.
    pub imported: usize,
}

/// Dashboard query parameters.
///
/// Kept flat so it maps one-to-one onto a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    /// Portfolio filter.
    #[serde(default)]
    pub portfolio_id: Option<String>,
    /// Strategy filter.
    #[serde(default)]
    pub strategy_id: Option<String>,
    /// Symbol filter.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Live or backtest.
    #[serde(default)]
    pub mode: Option<TradeMode>,
    /// Earliest entry date.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    /// Latest entry date.
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    /// Year of the month summary.
    #[serde(default)]
    pub year: Option<i32>,
    /// Month (1-12) of the month summary.
    #[serde(default)]
    pub month: Option<u32>,
}

impl DashboardQuery {
    /// Trade filter described by this query.
    #[must_use]
    pub fn filter(&self) -> TradeFilter {
        TradeFilter {
            portfolio_id: self.portfolio_id.clone(),
            strategy_id: self.strategy_id.clone(),
            symbol: self.symbol.clone(),
            mode: self.mode,
            from: self.from,
            to: self.to,
        }
    }

    /// Requested month, when both year and month are given.
    #[must_use]
    pub fn month_period(&self) -> Option<(i32, u32)> {
        self.year.zip(self.month)
    }
}

/// Everything the dashboard renders for one user and filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Headline statistics.
    pub stats: TradingStats,
    /// Formatted headline figures.
    pub headline: StatsHeadline,
    /// Cumulative P&L per closed trade.
    pub equity_curve: Vec<EquityPoint>,
    /// Largest peak-to-trough decline of the equity curve.
    pub max_drawdown: Decimal,
    /// Daily P&L, oldest first.
    pub calendar: Vec<DayPnl>,
    /// Largest absolute daily P&L, for heat-map intensity.
    pub heatmap_scale: Decimal,
    /// Summary of the requested month.
    pub month: Option<MonthSummary>,
    /// Per-strategy performance.
    pub strategies: Vec<PerformanceBreakdown>,
    /// Per-symbol performance.
    pub symbols: Vec<PerformanceBreakdown>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_to_filter() {
        let query = DashboardQuery {
            symbol: Some("ES".to_string()),
            mode: Some(TradeMode::Backtest),
            ..Default::default()
        };
        let filter = query.filter();
        assert_eq!(filter.symbol.as_deref(), Some("ES"));
        assert_eq!(filter.mode, Some(TradeMode::Backtest));
        assert!(filter.portfolio_id.is_none());
    }

    #[test]
    fn test_month_period_needs_both_parts() {
        let mut query = DashboardQuery {
            year: Some(2024),
            ..Default::default()
        };
        assert_eq!(query.month_period(), None);

        query.month = Some(3);
        assert_eq!(query.month_period(), Some((2024, 3)));
    }

    #[test]
    fn test_compute_request_defaults_policy() {
        let dto: ComputeStatsRequestDto = serde_json::from_str(r#"{"trades": []}"#).unwrap();
        assert!(dto.trades.is_empty());
        assert!(dto.breakeven_policy.is_none());
    }
}

//! Performance analytics over journaled trades.
//!
//! Everything here is pure and synchronous: callers hand in a slice of
//! trades and get value types back.
//! - Trading statistics (win rate, profit factor, expectancy, streaks)
//! - Equity curve and maximum drawdown
//! - Daily P&L calendar and monthly summaries
//! - Per-strategy and per-symbol breakdowns
//! - Trade filters and display formatting

mod aggregator;
mod breakdown;
mod calendar;
mod constants;
mod equity;
mod filter;
mod format;
mod streaks;
mod types;

pub use aggregator::{StatsAggregator, compute_stats};
pub use breakdown::{PerformanceBreakdown, strategy_performance, symbol_performance};
pub use calendar::{DayPnl, MonthSummary, PnlCalendar, daily_pnl};
pub use equity::{EquityPoint, equity_curve, max_drawdown};
pub use filter::TradeFilter;
pub use format::{
    StatsHeadline, format_money, format_pct, format_profit_factor, format_r_multiple,
};
pub use streaks::{StreakSummary, summarize_streaks};
pub use types::{BreakevenPolicy, ProfitFactor, StreakType, TradingStats};

//! Compute Stats Use Case

use crate::analytics::{StatsAggregator, TradingStats};
use crate::application::dto::ComputeStatsRequestDto;

/// Use case for aggregating an ad-hoc list of trades without touching storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeStatsUseCase {
    aggregator: StatsAggregator,
}

impl ComputeStatsUseCase {
    /// Create a new `ComputeStatsUseCase` with the configured aggregator.
    #[must_use]
    pub const fn new(aggregator: StatsAggregator) -> Self {
        Self { aggregator }
    }

    /// Execute the use case. A policy in the request overrides the configured one.
    #[must_use]
    pub fn execute(&self, request: &ComputeStatsRequestDto) -> TradingStats {
        let aggregator = request
            .breakeven_policy
            .map_or(self.aggregator, StatsAggregator::new);

        tracing::debug!(
            trades = request.trades.len(),
            policy = ?aggregator.breakeven_policy(),
            "Computing ad-hoc stats"
        );

        aggregator.compute(&request.trades)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{BreakevenPolicy, StreakType};
    use crate::domain::trade_journal::{Trade, TradeDirection};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn closed(id: &str, pnl: Decimal, day: u32) -> Trade {
        let at = Utc.with_ymd_and_hms(2024, 7, day, 10, 0, 0).unwrap();
        Trade::new(id, "ES", TradeDirection::Long, at).closed(pnl, at)
    }

    fn request(policy: Option<BreakevenPolicy>) -> ComputeStatsRequestDto {
        ComputeStatsRequestDto {
            trades: vec![
                closed("1", dec!(10), 1),
                closed("2", dec!(10), 2),
                closed("3", dec!(0), 3),
            ],
            breakeven_policy: policy,
        }
    }

    #[test]
    fn test_uses_configured_policy() {
        let use_case = ComputeStatsUseCase::new(StatsAggregator::new(BreakevenPolicy::Ignore));
        let stats = use_case.execute(&request(None));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.streak_type, StreakType::Winning);
    }

    #[test]
    fn test_request_policy_overrides() {
        let use_case = ComputeStatsUseCase::new(StatsAggregator::new(BreakevenPolicy::Ignore));
        let stats = use_case.execute(&request(Some(BreakevenPolicy::Reset)));
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.streak_type, StreakType::None);
        assert_eq!(stats.breakeven_trades, 1);
    }
}

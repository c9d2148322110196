//! Dashboard Use Case

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::analytics::{
    StatsAggregator, StatsHeadline, daily_pnl, equity_curve, max_drawdown,
    strategy_performance, symbol_performance,
};
use crate::application::dto::{DashboardQuery, DashboardReport};
use crate::domain::trade_journal::TradeRepository;
use crate::error::JournalError;

/// Use case for building a user's dashboard from stored trades.
pub struct DashboardUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
    aggregator: StatsAggregator,
    starting_balance: Decimal,
}

impl<R> DashboardUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new `DashboardUseCase`.
    pub const fn new(
        trade_repo: Arc<R>,
        aggregator: StatsAggregator,
        starting_balance: Decimal,
    ) -> Self {
        Self {
            trade_repo,
            aggregator,
            starting_balance,
        }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_REQUEST` for an impossible month or an inverted date
    /// range, and `INTERNAL_ERROR` if the repository fails.
    #[tracing::instrument(skip_all, fields(user_id = %user_id))]
    pub async fn execute(
        &self,
        user_id: &str,
        query: &DashboardQuery,
    ) -> Result<DashboardReport, JournalError> {
        if let Some(month) = query.month {
            if !(1..=12).contains(&month) {
                return Err(JournalError::invalid_request(format!(
                    "month must be between 1 and 12, got {month}"
                )));
            }
        }
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(JournalError::invalid_request(
                    "'from' must not be after 'to'",
                ));
            }
        }

        let trades = query
            .filter()
            .apply(self.trade_repo.find_by_user(user_id).await?);

        let stats = self.aggregator.compute(&trades);
        let curve = equity_curve(&trades, self.starting_balance);
        let drawdown = max_drawdown(&curve, self.starting_balance);
        let calendar = daily_pnl(&trades);
        let month = query
            .month_period()
            .map(|(year, month)| calendar.month_summary(year, month));

        tracing::info!(
            trades = trades.len(),
            closed = stats.closed_trades,
            net_pnl = %stats.net_pnl,
            "Dashboard computed"
        );

        Ok(DashboardReport {
            strategies: strategy_performance(&trades, &self.aggregator),
            symbols: symbol_performance(&trades, &self.aggregator),
            headline: StatsHeadline::from(&stats),
            stats,
            equity_curve: curve,
            max_drawdown: drawdown,
            heatmap_scale: calendar.max_abs_pnl(),
            calendar: calendar.into_days(),
            month,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{BreakevenPolicy, ProfitFactor};
    use crate::domain::trade_journal::{Trade, TradeDirection, TradeMode, TradeStatus};
    use crate::error::ErrorCode;
    use crate::infrastructure::persistence::InMemoryTradeRepository;
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn at(month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, month, day, 15, 0, 0).unwrap()
    }

    fn closed(id: &str, symbol: &str, pnl: Decimal, month: u32, day: u32) -> Trade {
        Trade::new(id, symbol, TradeDirection::Long, at(month, day)).closed(pnl, at(month, day))
    }

    async fn use_case() -> DashboardUseCase<InMemoryTradeRepository> {
        let repo = Arc::new(InMemoryTradeRepository::new());
        let mut backtest = closed("bt", "NQ", dec!(999), 3, 9);
        backtest.mode = TradeMode::Backtest;

        repo.save_all(
            "alice",
            &[
                closed("1", "EURUSD", dec!(100), 3, 1).with_strategy("london"),
                closed("2", "EURUSD", dec!(-40), 3, 2).with_strategy("london"),
                closed("3", "NQ", dec!(60), 4, 2),
                Trade::new("4", "NQ", TradeDirection::Short, at(4, 3))
                    .with_status(TradeStatus::Open),
                backtest,
            ],
        )
        .await
        .unwrap();
        repo.save("bob", &closed("b1", "ES", dec!(-500), 3, 1))
            .await
            .unwrap();

        DashboardUseCase::new(repo, StatsAggregator::new(BreakevenPolicy::Reset), dec!(1000))
    }

    #[tokio::test]
    async fn test_dashboard_for_live_trades() {
        let use_case = use_case().await;
        let query = DashboardQuery {
            mode: Some(TradeMode::Live),
            year: Some(2024),
            month: Some(3),
            ..Default::default()
        };

        let report = use_case.execute("alice", &query).await.unwrap();

        assert_eq!(report.stats.total_trades, 4);
        assert_eq!(report.stats.open_trades, 1);
        assert_eq!(report.stats.closed_trades, 3);
        assert_eq!(report.stats.net_pnl, dec!(120));
        assert_eq!(report.stats.profit_factor, ProfitFactor::Finite(dec!(4)));

        assert_eq!(report.equity_curve.len(), 3);
        assert_eq!(report.equity_curve[2].cumulative_pnl, dec!(1120));
        assert_eq!(report.max_drawdown, dec!(40));

        assert_eq!(report.calendar.len(), 3);
        assert_eq!(report.heatmap_scale, dec!(100));
        assert_eq!(report.headline.net_pnl, "$120.00");
        assert_eq!(report.headline.win_rate, "66.67%");
        assert_eq!(report.headline.profit_factor, "4.00");
        let march = report.month.unwrap();
        assert_eq!(march.total_pnl, dec!(60));
        assert_eq!(march.total_trades, 2);

        assert_eq!(report.strategies.len(), 1);
        assert_eq!(report.strategies[0].key, "london");
        // Both symbols made 60; ties sort by key
        let symbols: Vec<&str> = report.symbols.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(symbols, vec!["EURUSD", "NQ"]);
    }

    #[tokio::test]
    async fn test_dashboard_is_scoped_to_user() {
        let use_case = use_case().await;
        let report = use_case
            .execute("bob", &DashboardQuery::default())
            .await
            .unwrap();

        assert_eq!(report.stats.closed_trades, 1);
        assert_eq!(report.stats.net_pnl, dec!(-500));
        assert!(report.month.is_none());
        assert!(report.strategies.is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_for_unknown_user_is_empty() {
        let use_case = use_case().await;
        let report = use_case
            .execute("nobody", &DashboardQuery::default())
            .await
            .unwrap();

        assert_eq!(report.stats.total_trades, 0);
        assert!(report.equity_curve.is_empty());
        assert_eq!(report.max_drawdown, Decimal::ZERO);
        assert_eq!(report.heatmap_scale, Decimal::ZERO);
        assert_eq!(report.headline.net_pnl, "$0.00");
    }

    #[tokio::test]
    async fn test_rejects_bad_month_and_range() {
        let use_case = use_case().await;

        let query = DashboardQuery {
            year: Some(2024),
            month: Some(13),
            ..Default::default()
        };
        let err = use_case.execute("alice", &query).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);

        let query = DashboardQuery {
            from: Some(at(5, 1)),
            to: Some(at(4, 1)),
            ..Default::default()
        };
        let err = use_case.execute("alice", &query).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}

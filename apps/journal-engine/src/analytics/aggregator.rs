//! Trade statistics aggregator.

use rust_decimal::Decimal;

use crate::domain::trade_journal::{Trade, TradeOutcome};

use super::constants::HUNDRED;
use super::streaks::summarize_streaks;
use super::types::{BreakevenPolicy, ProfitFactor, TradingStats};

/// Computes [`TradingStats`] from a user's trades.
///
/// Stateless apart from its breakeven policy; one instance can serve any
/// number of users concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsAggregator {
    breakeven_policy: BreakevenPolicy,
}

impl StatsAggregator {
    /// Create an aggregator with the given breakeven policy.
    #[must_use]
    pub const fn new(breakeven_policy: BreakevenPolicy) -> Self {
        Self { breakeven_policy }
    }

    /// Breakeven policy applied to streaks.
    #[must_use]
    pub const fn breakeven_policy(&self) -> BreakevenPolicy {
        self.breakeven_policy
    }

    /// Calculate all statistics.
    ///
    /// Input order does not matter: closed trades are put in chronological
    /// order (see [`Trade::chronological_cmp`]) before streaks are scanned.
    #[must_use]
    pub fn compute<'a, I>(&self, trades: I) -> TradingStats
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let trades: Vec<&Trade> = trades.into_iter().collect();
        let total_trades = trades.len() as u64;
        let open_trades = trades.iter().filter(|t| t.status.is_open()).count() as u64;
        let closed = closed_in_order(trades);

        if closed.is_empty() {
            return TradingStats {
                total_trades,
                open_trades,
                ..Default::default()
            };
        }

        let totals = ClosedTotals::accumulate(&closed);
        let closed_trades = closed.len() as u64;
        let closed_count = Decimal::from(closed_trades);

        let win_rate = Decimal::from(totals.winning) * HUNDRED / closed_count;

        let avg_win = if totals.winning > 0 {
            totals.sum_wins / Decimal::from(totals.winning)
        } else {
            Decimal::ZERO
        };

        let avg_loss = if totals.losing > 0 {
            totals.sum_losses / Decimal::from(totals.losing)
        } else {
            Decimal::ZERO
        };

        let avg_r_multiple = if totals.r_count > 0 {
            totals.sum_r / Decimal::from(totals.r_count)
        } else {
            Decimal::ZERO
        };

        let streaks = summarize_streaks(
            closed.iter().map(|t| TradeOutcome::from_pnl(t.realized_pnl())),
            self.breakeven_policy,
        );

        TradingStats {
            total_trades,
            open_trades,
            closed_trades,
            winning_trades: totals.winning,
            losing_trades: totals.losing,
            breakeven_trades: totals.breakeven,
            win_rate,
            profit_factor: ProfitFactor::from_sums(totals.sum_wins, totals.sum_losses),
            net_pnl: totals.net_pnl,
            gross_pnl: totals.gross_pnl,
            total_fees: totals.fees,
            avg_win,
            avg_loss,
            largest_win: totals.largest_win,
            largest_loss: totals.largest_loss,
            expectancy: totals.net_pnl / closed_count,
            avg_r_multiple,
            current_streak: streaks.current,
            streak_type: streaks.streak_type,
            best_streak: streaks.best,
            worst_streak: streaks.worst,
        }
    }
}

/// Calculate statistics with the default breakeven policy.
#[must_use]
pub fn compute_stats(trades: &[Trade]) -> TradingStats {
    StatsAggregator::default().compute(trades)
}

/// Closed trades of `trades`, oldest first.
pub(crate) fn closed_in_order<'a, I>(trades: I) -> Vec<&'a Trade>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut closed: Vec<&Trade> = trades.into_iter().filter(|t| t.status.is_closed()).collect();
    closed.sort_by(|a, b| a.chronological_cmp(b));
    closed
}

/// Running sums from a single pass over closed trades.
///
/// Sums saturate at the `Decimal` range instead of overflowing.
#[derive(Debug, Default)]
struct ClosedTotals {
    net_pnl: Decimal,
    gross_pnl: Decimal,
    fees: Decimal,
    sum_wins: Decimal,
    sum_losses: Decimal,
    largest_win: Decimal,
    largest_loss: Decimal,
    sum_r: Decimal,
    r_count: u64,
    winning: u64,
    losing: u64,
    breakeven: u64,
}

impl ClosedTotals {
    fn accumulate(closed: &[&Trade]) -> Self {
        let mut totals = Self::default();

        for trade in closed {
            let pnl = trade.realized_pnl();
            totals.net_pnl = totals.net_pnl.saturating_add(pnl);
            totals.gross_pnl = totals.gross_pnl.saturating_add(trade.gross_or_zero());
            totals.fees = totals.fees.saturating_add(trade.fees_or_zero());

            match TradeOutcome::from_pnl(pnl) {
                TradeOutcome::Win => {
                    totals.winning += 1;
                    totals.sum_wins = totals.sum_wins.saturating_add(pnl);
                    totals.largest_win = totals.largest_win.max(pnl);
                }
                TradeOutcome::Loss => {
                    totals.losing += 1;
                    totals.sum_losses = totals.sum_losses.saturating_add(pnl);
                    totals.largest_loss = totals.largest_loss.min(pnl);
                }
                TradeOutcome::Breakeven => totals.breakeven += 1,
            }

            if let Some(r) = trade.r_multiple {
                totals.sum_r = totals.sum_r.saturating_add(r);
                totals.r_count += 1;
            }
        }

        totals
    }
}

//! Equity curve over closed trades.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trade_journal::Trade;

use super::aggregator::closed_in_order;

/// One point of the cumulative P&L curve, one per closed trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// UTC day the trade was closed (entry day if no exit date was recorded).
    pub date: NaiveDate,
    /// Trade that produced this point.
    pub trade_id: String,
    /// Net P&L of that trade.
    pub pnl: Decimal,
    /// Starting balance plus all net P&L up to and including this trade.
    pub cumulative_pnl: Decimal,
    /// Number of closed trades so far.
    pub trade_count: u64,
}

/// Build the equity curve, starting from `starting_balance`.
pub fn equity_curve<'a, I>(trades: I, starting_balance: Decimal) -> Vec<EquityPoint>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut cumulative = starting_balance;

    closed_in_order(trades)
        .into_iter()
        .enumerate()
        .map(|(idx, trade)| {
            let pnl = trade.realized_pnl();
            cumulative = cumulative.saturating_add(pnl);
            EquityPoint {
                date: trade.exit_date.unwrap_or(trade.entry_date).date_naive(),
                trade_id: trade.id.clone(),
                pnl,
                cumulative_pnl: cumulative,
                trade_count: idx as u64 + 1,
            }
        })
        .collect()
}

/// Largest peak-to-trough decline of the curve, as a positive amount.
///
/// The running peak starts at `starting_balance`, so a curve that only ever
/// falls still reports its full decline.
pub fn max_drawdown(points: &[EquityPoint], starting_balance: Decimal) -> Decimal {
    let mut peak = starting_balance;
    let mut max_drawdown = Decimal::ZERO;

    for point in points {
        peak = peak.max(point.cumulative_pnl);
        max_drawdown = max_drawdown.max(peak.saturating_sub(point.cumulative_pnl));
    }

    max_drawdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade_journal::{TradeDirection, TradeStatus};
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 16, 0, 0).unwrap()
    }

    fn closed(id: &str, pnl: Decimal, day: u32) -> Trade {
        Trade::new(id, "XAUUSD", TradeDirection::Long, at(1)).closed(pnl, at(day))
    }

    #[test]
    fn test_curve_accumulates_in_exit_order() {
        let trades = vec![
            closed("b", dec!(-150), 8),
            closed("a", dec!(250), 5),
            Trade::new("open", "XAUUSD", TradeDirection::Long, at(9))
                .with_status(TradeStatus::Open),
            closed("c", dec!(500), 12),
        ];

        let curve = equity_curve(&trades, dec!(10000));

        assert_eq!(curve.len(), 3);
        assert_eq!(curve[0].trade_id, "a");
        assert_eq!(curve[0].cumulative_pnl, dec!(10250));
        assert_eq!(curve[1].cumulative_pnl, dec!(10100));
        assert_eq!(curve[2].cumulative_pnl, dec!(10600));
        assert_eq!(curve[2].trade_count, 3);
        assert_eq!(curve[2].date, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap());
    }

    #[test]
    fn test_empty_curve() {
        let none: Vec<Trade> = Vec::new();
        let curve = equity_curve(&none, Decimal::ZERO);
        assert!(curve.is_empty());
        assert_eq!(max_drawdown(&curve, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_drawdown_calculation() {
        let trades = vec![
            closed("1", dec!(10000), 2),
            closed("2", dec!(-5000), 3),
            closed("3", dec!(3000), 4),
            closed("4", dec!(-13000), 5),
            closed("5", dec!(5000), 6),
        ];

        let curve = equity_curve(&trades, dec!(100000));

        // Peak 110k, trough 95k
        assert_eq!(max_drawdown(&curve, dec!(100000)), dec!(15000));
    }

    #[test]
    fn test_drawdown_from_starting_balance() {
        let trades = vec![closed("1", dec!(-40), 2), closed("2", dec!(-10), 3)];
        let curve = equity_curve(&trades, Decimal::ZERO);

        assert_eq!(max_drawdown(&curve, Decimal::ZERO), dec!(50));
    }

    #[test]
    fn test_extreme_swings_saturate() {
        let trades = vec![
            closed("1", Decimal::MAX, 2),
            closed("2", Decimal::MIN, 3),
            closed("3", Decimal::MIN, 4),
        ];
        let curve = equity_curve(&trades, dec!(1000));

        assert_eq!(curve[0].cumulative_pnl, Decimal::MAX);
        assert_eq!(curve[1].cumulative_pnl, Decimal::ZERO);
        assert_eq!(curve[2].cumulative_pnl, Decimal::MIN);
        assert_eq!(max_drawdown(&curve, dec!(1000)), Decimal::MAX);
    }
}

//! Per-strategy and per-symbol performance tables.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trade_journal::Trade;

use super::aggregator::StatsAggregator;
use super::types::ProfitFactor;

/// Performance of one group of closed trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceBreakdown {
    /// Strategy id or upper-cased symbol.
    pub key: String,
    /// Net P&L of the group.
    pub total_pnl: Decimal,
    /// Closed trades in the group.
    pub trades: u64,
    /// Winning share of the group, in percent.
    pub win_rate: Decimal,
    /// Profit factor of the group.
    pub profit_factor: ProfitFactor,
    /// Mean R-multiple of the group's trades that recorded one.
    pub avg_r_multiple: Decimal,
}

/// Group closed trades by strategy. Untagged trades are left out.
pub fn strategy_performance<'a, I>(
    trades: I,
    aggregator: &StatsAggregator,
) -> Vec<PerformanceBreakdown>
where
    I: IntoIterator<Item = &'a Trade>,
{
    breakdown_by(trades, aggregator, |t| t.strategy_id.clone())
}

/// Group closed trades by symbol, ignoring case.
pub fn symbol_performance<'a, I>(
    trades: I,
    aggregator: &StatsAggregator,
) -> Vec<PerformanceBreakdown>
where
    I: IntoIterator<Item = &'a Trade>,
{
    breakdown_by(trades, aggregator, |t| {
        let symbol = t.symbol.trim();
        (!symbol.is_empty()).then(|| symbol.to_ascii_uppercase())
    })
}

/// Sorted by total P&L, best first; ties broken by key.
fn breakdown_by<'a, I, F>(
    trades: I,
    aggregator: &StatsAggregator,
    key_of: F,
) -> Vec<PerformanceBreakdown>
where
    I: IntoIterator<Item = &'a Trade>,
    F: Fn(&Trade) -> Option<String>,
{
    let mut groups: BTreeMap<String, Vec<&Trade>> = BTreeMap::new();
    for trade in trades.into_iter().filter(|t| t.status.is_closed()) {
        if let Some(key) = key_of(trade) {
            groups.entry(key).or_default().push(trade);
        }
    }

    let mut rows: Vec<PerformanceBreakdown> = groups
        .into_iter()
        .map(|(key, group)| {
            let stats = aggregator.compute(group.iter().copied());
            PerformanceBreakdown {
                key,
                total_pnl: stats.net_pnl,
                trades: stats.closed_trades,
                win_rate: stats.win_rate,
                profit_factor: stats.profit_factor,
                avg_r_multiple: stats.avg_r_multiple,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.total_pnl.cmp(&a.total_pnl).then_with(|| a.key.cmp(&b.key)));
    rows
}

//! Daily P&L calendar (heat-map data) and monthly summaries.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::trade_journal::Trade;

/// Realized P&L for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPnl {
    /// Exit day.
    pub date: NaiveDate,
    /// Sum of net P&L of trades closed that day.
    pub pnl: Decimal,
    /// Number of trades closed that day.
    pub trade_count: u64,
    /// Ids of those trades, oldest exit first.
    pub trade_ids: Vec<String>,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Sum of daily P&L in the month.
    pub total_pnl: Decimal,
    /// Days with positive P&L.
    pub win_days: u64,
    /// Days with negative P&L.
    pub loss_days: u64,
    /// Trades closed in the month.
    pub total_trades: u64,
}

/// Closed trades bucketed by UTC exit day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PnlCalendar {
    days: BTreeMap<NaiveDate, DayPnl>,
}

impl PnlCalendar {
    /// Bucket closed trades by exit day. Trades without an exit date are skipped.
    pub fn from_trades<'a, I>(trades: I) -> Self
    where
        I: IntoIterator<Item = &'a Trade>,
    {
        let mut closed: Vec<&Trade> = trades
            .into_iter()
            .filter(|t| t.status.is_closed() && t.exit_date.is_some())
            .collect();
        closed.sort_by(|a, b| a.chronological_cmp(b));

        let mut days: BTreeMap<NaiveDate, DayPnl> = BTreeMap::new();
        for trade in closed {
            let Some(exit) = trade.exit_date else {
                continue;
            };
            let date = exit.date_naive();
            let day = days.entry(date).or_insert_with(|| DayPnl {
                date,
                pnl: Decimal::ZERO,
                trade_count: 0,
                trade_ids: Vec::new(),
            });
            day.pnl = day.pnl.saturating_add(trade.realized_pnl());
            day.trade_count += 1;
            day.trade_ids.push(trade.id.clone());
        }

        Self { days }
    }

    /// Entry for a given day.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DayPnl> {
        self.days.get(&date)
    }

    /// Days with at least one closed trade, oldest first.
    pub fn days(&self) -> impl Iterator<Item = &DayPnl> {
        self.days.values()
    }

    /// Consume the calendar into its days, oldest first.
    #[must_use]
    pub fn into_days(self) -> Vec<DayPnl> {
        self.days.into_values().collect()
    }

    /// Number of trading days in the calendar.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns true if no trade has been closed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Largest absolute daily P&L, used to scale heat-map intensity.
    #[must_use]
    pub fn max_abs_pnl(&self) -> Decimal {
        self.days
            .values()
            .map(|d| d.pnl.abs())
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Totals for one month. An out-of-range month yields an empty summary.
    #[must_use]
    pub fn month_summary(&self, year: i32, month: u32) -> MonthSummary {
        let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return MonthSummary::default();
        };

        self.days
            .range(start..)
            .take_while(|(date, _)| date.year() == year && date.month() == month)
            .fold(MonthSummary::default(), |mut summary, (_, day)| {
                summary.total_pnl = summary.total_pnl.saturating_add(day.pnl);
                summary.total_trades += day.trade_count;
                if day.pnl > Decimal::ZERO {
                    summary.win_days += 1;
                } else if day.pnl < Decimal::ZERO {
                    summary.loss_days += 1;
                }
                summary
            })
    }
}

/// Bucket closed trades by UTC exit day.
pub fn daily_pnl<'a, I>(trades: I) -> PnlCalendar
where
    I: IntoIterator<Item = &'a Trade>,
{
    PnlCalendar::from_trades(trades)
}

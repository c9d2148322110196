//! Display formatting for journal statistics.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::constants::DISPLAY_DP;
use super::types::{ProfitFactor, TradingStats};

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a value that is already a percentage (e.g. `62.5` -> `"62.50%"`).
#[must_use]
pub fn format_pct(value: Decimal) -> String {
    format!("{:.2}%", round(value))
}

/// Format a currency amount with thousands separators (`"-$1,234.50"`).
#[must_use]
pub fn format_money(value: Decimal) -> String {
    let rounded = round(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac_part}")
}

/// Format a profit factor; the unbounded case renders as `"∞"`.
#[must_use]
pub fn format_profit_factor(value: ProfitFactor) -> String {
    match value {
        ProfitFactor::Finite(v) => format!("{:.2}", round(v)),
        ProfitFactor::Infinite => "∞".to_string(),
    }
}

/// Format an R-multiple (`"1.60R"`).
#[must_use]
pub fn format_r_multiple(value: Decimal) -> String {
    format!("{:.2}R", round(value))
}

/// Headline figures of [`TradingStats`], ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsHeadline {
    /// Net P&L, e.g. `"$1,234.50"`.
    pub net_pnl: String,
    /// Win rate, e.g. `"62.50%"`.
    pub win_rate: String,
    /// Profit factor, `"∞"` when unbounded.
    pub profit_factor: String,
    /// Mean R-multiple, e.g. `"1.60R"`.
    pub avg_r_multiple: String,
    /// Expectancy per closed trade.
    pub expectancy: String,
}

impl From<&TradingStats> for StatsHeadline {
    fn from(stats: &TradingStats) -> Self {
        Self {
            net_pnl: format_money(stats.net_pnl),
            win_rate: format_pct(stats.win_rate),
            profit_factor: format_profit_factor(stats.profit_factor),
            avg_r_multiple: format_r_multiple(stats.avg_r_multiple),
            expectancy: format_money(stats.expectancy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(0), "$0.00" ; "zero")]
    #[test_case(dec!(12.5), "$12.50" ; "small")]
    #[test_case(dec!(1234.5), "$1,234.50" ; "thousands")]
    #[test_case(dec!(-180.5), "-$180.50" ; "negative")]
    #[test_case(dec!(1234567.891), "$1,234,567.89" ; "millions")]
    #[test_case(dec!(-0.001), "$0.00" ; "negative rounds to zero")]
    #[test_case(dec!(999.995), "$1,000.00" ; "rounds up across group")]
    fn test_format_money(value: Decimal, expected: &str) {
        assert_eq!(format_money(value), expected);
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pct(dec!(62.5)), "62.50%");
        assert_eq!(format_pct(dec!(33.3333)), "33.33%");
        assert_eq!(format_r_multiple(dec!(1.6)), "1.60R");
        assert_eq!(format_r_multiple(dec!(-0.125)), "-0.13R");
        assert_eq!(format_profit_factor(ProfitFactor::Finite(dec!(2.4))), "2.40");
        assert_eq!(format_profit_factor(ProfitFactor::Infinite), "∞");
    }

    #[test]
    fn test_headline_from_stats() {
        let stats = TradingStats {
            net_pnl: dec!(-1234.5),
            win_rate: dec!(40),
            profit_factor: ProfitFactor::Finite(dec!(0.8)),
            avg_r_multiple: dec!(-0.25),
            expectancy: dec!(-246.9),
            ..TradingStats::default()
        };

        let headline = StatsHeadline::from(&stats);

        assert_eq!(headline.net_pnl, "-$1,234.50");
        assert_eq!(headline.win_rate, "40.00%");
        assert_eq!(headline.profit_factor, "0.80");
        assert_eq!(headline.avg_r_multiple, "-0.25R");
        assert_eq!(headline.expectancy, "-$246.90");
    }

    #[test]
    fn test_format_money_at_decimal_limit() {
        assert_eq!(
            format_money(Decimal::MAX),
            "$79,228,162,514,264,337,593,543,950,335.00"
        );
    }
}

//! Win/loss streak tracking over an ordered sequence of outcomes.

use crate::domain::trade_journal::TradeOutcome;

use super::types::{BreakevenPolicy, StreakType};

/// Result of a streak scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakSummary {
    /// Length of the run ending at the last outcome.
    pub current: u64,
    /// Direction of that run.
    pub streak_type: StreakType,
    /// Longest winning run seen.
    pub best: u64,
    /// Longest losing run seen.
    pub worst: u64,
}

/// Scan outcomes (oldest first) and report the trailing run and the longest runs.
pub fn summarize_streaks<I>(outcomes: I, policy: BreakevenPolicy) -> StreakSummary
where
    I: IntoIterator<Item = TradeOutcome>,
{
    let mut summary = StreakSummary::default();
    let mut run_type = StreakType::None;
    let mut run_len = 0u64;

    for outcome in outcomes {
        match outcome {
            TradeOutcome::Win => {
                if run_type == StreakType::Winning {
                    run_len += 1;
                } else {
                    run_type = StreakType::Winning;
                    run_len = 1;
                }
                summary.best = summary.best.max(run_len);
            }
            TradeOutcome::Loss => {
                if run_type == StreakType::Losing {
                    run_len += 1;
                } else {
                    run_type = StreakType::Losing;
                    run_len = 1;
                }
                summary.worst = summary.worst.max(run_len);
            }
            TradeOutcome::Breakeven => match policy {
                BreakevenPolicy::Reset => {
                    run_type = StreakType::None;
                    run_len = 0;
                }
                BreakevenPolicy::Ignore => {}
            },
        }
    }

    summary.current = run_len;
    summary.streak_type = run_type;
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade_journal::TradeOutcome::{Breakeven as B, Loss as L, Win as W};

    #[test]
    fn empty_sequence_has_no_streak() {
        let s = summarize_streaks(Vec::<TradeOutcome>::new(), BreakevenPolicy::Reset);
        assert_eq!(s, StreakSummary::default());
        assert_eq!(s.streak_type, StreakType::None);
    }

    #[test]
    fn tracks_longest_runs_and_trailing_run() {
        // W W W L L W L W W
        let s = summarize_streaks([W, W, W, L, L, W, L, W, W], BreakevenPolicy::Reset);
        assert_eq!(s.best, 3);
        assert_eq!(s.worst, 2);
        assert_eq!(s.current, 2);
        assert_eq!(s.streak_type, StreakType::Winning);
    }

    #[test]
    fn all_losses() {
        let s = summarize_streaks([L, L, L], BreakevenPolicy::Reset);
        assert_eq!(s.worst, 3);
        assert_eq!(s.best, 0);
        assert_eq!(s.current, 3);
        assert_eq!(s.streak_type, StreakType::Losing);
    }

    #[test]
    fn breakeven_resets_run_under_reset_policy() {
        let s = summarize_streaks([W, W, B, W], BreakevenPolicy::Reset);
        assert_eq!(s.best, 2);
        assert_eq!(s.current, 1);
        assert_eq!(s.streak_type, StreakType::Winning);

        let s = summarize_streaks([L, L, B], BreakevenPolicy::Reset);
        assert_eq!(s.worst, 2);
        assert_eq!(s.current, 0);
        assert_eq!(s.streak_type, StreakType::None);
    }

    #[test]
    fn breakeven_is_transparent_under_ignore_policy() {
        let s = summarize_streaks([W, W, B, W], BreakevenPolicy::Ignore);
        assert_eq!(s.best, 3);
        assert_eq!(s.current, 3);
        assert_eq!(s.streak_type, StreakType::Winning);

        let s = summarize_streaks([L, L, B], BreakevenPolicy::Ignore);
        assert_eq!(s.current, 2);
        assert_eq!(s.streak_type, StreakType::Losing);
    }

    #[test]
    fn only_breakevens() {
        for policy in [BreakevenPolicy::Reset, BreakevenPolicy::Ignore] {
            let s = summarize_streaks([B, B], policy);
            assert_eq!(s, StreakSummary::default());
        }
    }
}

//! Analytics configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analytics::{BreakevenPolicy, StatsAggregator};

/// Analytics configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// How breakeven trades affect streaks (`RESET` or `IGNORE`).
    #[serde(default)]
    pub breakeven_policy: BreakevenPolicy,
    /// Origin of the equity curve.
    #[serde(default)]
    pub starting_balance: Decimal,
}

impl AnalyticsConfig {
    /// Aggregator configured with this section's policy.
    #[must_use]
    pub const fn aggregator(&self) -> StatsAggregator {
        StatsAggregator::new(self.breakeven_policy)
    }
}

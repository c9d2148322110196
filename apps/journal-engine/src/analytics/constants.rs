//! Decimal constants for journal analytics.

use rust_decimal::Decimal;

pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Decimal places kept when rendering money and ratios.
pub const DISPLAY_DP: u32 = 2;

/// Text used for an unbounded profit factor on the wire.
pub const INFINITY_LABEL: &str = "Infinity";

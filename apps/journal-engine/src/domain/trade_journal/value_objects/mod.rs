//! Trade Journal Value Objects
//!
//! Immutable enums describing a journaled trade.

mod trade_direction;
mod trade_mode;
mod trade_outcome;
mod trade_status;

pub use trade_direction::TradeDirection;
pub use trade_mode::TradeMode;
pub use trade_outcome::TradeOutcome;
pub use trade_status::TradeStatus;

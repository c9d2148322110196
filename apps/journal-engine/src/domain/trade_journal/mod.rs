//! Trade Journal Bounded Context
//!
//! The trades a user logs, and the port through which the analytics
//! layer reads them.
//!
//! # Key Concepts
//!
//! - **Trade**: A journal entry; only `CLOSED` trades carry realized P&L
//! - **Outcome**: Win / loss / breakeven classification of a closed trade
//! - **Repository**: User-scoped access to the journal

pub mod errors;
pub mod repository;
pub mod trade;
pub mod value_objects;

pub use errors::RepositoryError;
pub use repository::TradeRepository;
pub use trade::Trade;
pub use value_objects::{TradeDirection, TradeMode, TradeOutcome, TradeStatus};

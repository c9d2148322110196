//! Trade journal errors.

use thiserror::Error;

/// Errors raised by trade repositories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No trade with this id belongs to the user.
    #[error("trade '{trade_id}' not found for user '{user_id}'")]
    TradeNotFound {
        /// Owner queried.
        user_id: String,
        /// Trade id queried.
        trade_id: String,
    },

    /// The backing store could not be read or written.
    #[error("trade storage unavailable: {0}")]
    Storage(String),
}

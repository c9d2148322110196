//! Trade Repository Trait
//!
//! Defines the data-access abstraction the analytics consume.
//! Every query is scoped to the owning user.

use async_trait::async_trait;

use super::errors::RepositoryError;
use super::trade::Trade;

/// Repository trait for journaled trades.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters.
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Return every trade owned by `user_id`, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Trade>, RepositoryError>;

    /// Save a trade (insert or replace by id).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, user_id: &str, trade: &Trade) -> Result<(), RepositoryError>;

    /// Save several trades at once.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save_all(&self, user_id: &str, trades: &[Trade]) -> Result<(), RepositoryError> {
        for trade in trades {
            self.save(user_id, trade).await?;
        }
        Ok(())
    }

    /// Delete a trade.
    ///
    /// # Errors
    ///
    /// Returns `TradeNotFound` if the user owns no trade with this id.
    async fn delete(&self, user_id: &str, trade_id: &str) -> Result<(), RepositoryError>;

    /// Number of trades owned by `user_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn count_for_user(&self, user_id: &str) -> Result<usize, RepositoryError> {
        Ok(self.find_by_user(user_id).await?.len())
    }
}

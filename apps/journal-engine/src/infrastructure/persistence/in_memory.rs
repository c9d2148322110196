//! In-memory trade repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::trade_journal::{RepositoryError, Trade, TradeRepository};

type UserTrades = HashMap<String, HashMap<String, Trade>>;

/// In-memory implementation of `TradeRepository`, keyed by user then trade id.
///
/// Suitable for testing and development. Not for production use.
#[derive(Debug, Default)]
pub struct InMemoryTradeRepository {
    trades: RwLock<UserTrades>,
}

fn poisoned<T>(_: PoisonError<T>) -> RepositoryError {
    RepositoryError::Storage("trade store lock poisoned".to_string())
}

impl InMemoryTradeRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of trades across all users.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let trades = self.trades.read().map_err(poisoned)?;
        Ok(trades.values().map(HashMap::len).sum())
    }

    /// Check if the repository holds no trades.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<Trade>, RepositoryError> {
        let trades = self.trades.read().map_err(poisoned)?;
        Ok(trades
            .get(user_id)
            .map(|by_id| by_id.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn save(&self, user_id: &str, trade: &Trade) -> Result<(), RepositoryError> {
        let mut trades = self.trades.write().map_err(poisoned)?;
        trades
            .entry(user_id.to_string())
            .or_default()
            .insert(trade.id.clone(), trade.clone());
        Ok(())
    }

    async fn save_all(&self, user_id: &str, batch: &[Trade]) -> Result<(), RepositoryError> {
        let mut trades = self.trades.write().map_err(poisoned)?;
        let by_id = trades.entry(user_id.to_string()).or_default();
        for trade in batch {
            by_id.insert(trade.id.clone(), trade.clone());
        }
        Ok(())
    }

    async fn delete(&self, user_id: &str, trade_id: &str) -> Result<(), RepositoryError> {
        let mut trades = self.trades.write().map_err(poisoned)?;
        trades
            .get_mut(user_id)
            .and_then(|by_id| by_id.remove(trade_id))
            .map(|_| ())
            .ok_or_else(|| RepositoryError::TradeNotFound {
                user_id: user_id.to_string(),
                trade_id: trade_id.to_string(),
            })
    }

    async fn count_for_user(&self, user_id: &str) -> Result<usize, RepositoryError> {
        let trades = self.trades.read().map_err(poisoned)?;
        Ok(trades.get(user_id).map_or(0, HashMap::len))
    }
}

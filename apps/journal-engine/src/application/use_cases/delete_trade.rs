//! Delete Trade Use Case

use std::sync::Arc;

use crate::domain::trade_journal::TradeRepository;
use crate::error::JournalError;

/// Use case for removing one trade from a user's journal.
pub struct DeleteTradeUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> DeleteTradeUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new `DeleteTradeUseCase`.
    pub const fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `TRADE_NOT_FOUND` if the user owns no such trade.
    #[tracing::instrument(skip_all, fields(user_id = %user_id, trade_id = %trade_id))]
    pub async fn execute(&self, user_id: &str, trade_id: &str) -> Result<(), JournalError> {
        self.trade_repo.delete(user_id, trade_id).await?;
        tracing::info!("Trade deleted");
        Ok(())
    }
}

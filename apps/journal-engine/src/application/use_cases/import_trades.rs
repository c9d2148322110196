//! Import Trades Use Case

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::dto::{ImportTradesRequestDto, ImportTradesResponseDto};
use crate::domain::trade_journal::TradeRepository;
use crate::error::JournalError;

/// Use case for storing a batch of trades for a user.
pub struct ImportTradesUseCase<R>
where
    R: TradeRepository,
{
    trade_repo: Arc<R>,
}

impl<R> ImportTradesUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new `ImportTradesUseCase`.
    pub const fn new(trade_repo: Arc<R>) -> Self {
        Self { trade_repo }
    }

    /// Execute the use case. Trades with an existing id are replaced.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_REQUEST` for an empty trade id or an id repeated
    /// within the batch, and `INTERNAL_ERROR` if the repository fails.
    #[tracing::instrument(skip_all, fields(user_id = %user_id, trades = request.trades.len()))]
    pub async fn execute(
        &self,
        user_id: &str,
        request: &ImportTradesRequestDto,
    ) -> Result<ImportTradesResponseDto, JournalError> {
        let mut seen = HashSet::with_capacity(request.trades.len());
        for trade in &request.trades {
            if trade.id.trim().is_empty() {
                return Err(JournalError::invalid_request("trade id must not be empty"));
            }
            if !seen.insert(trade.id.as_str()) {
                return Err(JournalError::invalid_request(format!(
                    "duplicate trade id '{}' in batch",
                    trade.id
                )));
            }
        }

        self.trade_repo.save_all(user_id, &request.trades).await?;

        tracing::info!(imported = request.trades.len(), "Trades imported");

        Ok(ImportTradesResponseDto {
            imported: request.trades.len(),
        })
    }
}

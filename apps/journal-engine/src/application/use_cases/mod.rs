//! Application Use Cases
//!
//! Use cases orchestrate repository access and analytics to fulfill
//! application requirements.

mod compute_stats;
mod dashboard;
mod delete_trade;
mod import_trades;

pub use compute_stats::ComputeStatsUseCase;
pub use dashboard::DashboardUseCase;
pub use delete_trade::DeleteTradeUseCase;
pub use import_trades::ImportTradesUseCase;

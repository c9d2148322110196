// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Journal Engine - Rust Core Library
//!
//! Performance analytics for a trading journal: win rate, profit factor,
//! expectancy, streaks, equity curve, P&L calendar and per-strategy
//! breakdowns computed from a user's trade history.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Trade records and the repository port
//!   - `trade_journal`: `Trade`, status/direction/outcome value objects,
//!     `TradeRepository`
//!
//! - **Analytics**: Pure computations over trades
//!   - `StatsAggregator`, equity curve, calendar, breakdowns, filters
//!
//! - **Application**: Use cases and orchestration
//!   - `use_cases`: `ComputeStats`, `Dashboard`, `ImportTrades`, `DeleteTrade`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory trade repository
//!   - `http`: Axum REST API

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business types with no framework dependencies.
pub mod domain;

/// Analytics - Pure statistics over journaled trades.
pub mod analytics;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Client-facing errors.
pub mod error;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::trade_journal::{
    RepositoryError, Trade, TradeDirection, TradeMode, TradeOutcome, TradeRepository, TradeStatus,
};

// Analytics re-exports
pub use analytics::{
    BreakevenPolicy, ProfitFactor, StatsAggregator, StreakType, TradingStats, compute_stats,
};

// Application re-exports
pub use application::dto::{DashboardQuery, DashboardReport};
pub use application::use_cases::{
    ComputeStatsUseCase, DashboardUseCase, DeleteTradeUseCase, ImportTradesUseCase,
};

// Infrastructure re-exports
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryTradeRepository;

// Cross-cutting re-exports
pub use error::{ErrorCode, JournalError};

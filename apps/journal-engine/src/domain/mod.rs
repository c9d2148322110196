//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`trade_journal`]: Journaled trades, their outcomes and the repository port

pub mod trade_journal;

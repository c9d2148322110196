//! Persistence Adapters
//!
//! Implementations of the trade repository trait.

pub mod in_memory;

pub use in_memory::InMemoryTradeRepository;

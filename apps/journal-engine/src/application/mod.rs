//! Application Layer
//!
//! The application layer orchestrates domain logic and analytics through
//! use cases. It defines:
//!
//! - **Use Cases**: Dashboard reporting, trade import and deletion
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;

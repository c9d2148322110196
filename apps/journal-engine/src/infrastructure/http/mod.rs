//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to application use cases.
//! Request bodies are the application DTOs; failures render as
//! [`HttpErrorResponse`](crate::error::HttpErrorResponse).

mod controller;
mod response;

pub use controller::{AppState, create_router};
pub use response::*;

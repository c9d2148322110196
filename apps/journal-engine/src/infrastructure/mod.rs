//! Infrastructure Layer
//!
//! Adapters for the ports defined in the domain layer:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: Trade repository implementations
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controllers

pub mod http;
pub mod persistence;

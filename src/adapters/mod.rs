//! Adapters - implementations of the ports.
//!
//! - `memory` - in-process storage for tests and local runs
//! - `postgres` - sqlx/PostgreSQL storage
//! - `http` - axum REST bindings

pub mod http;
pub mod memory;
pub mod postgres;

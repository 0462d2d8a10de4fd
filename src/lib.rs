//! Bounded KV - A capacity-bounded key/value store server
//!
//! Stores string entries in memory behind a single lock and rejects inserts
//! once the configured capacity is reached.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::GatewayError;
pub use store::BoundedStore;

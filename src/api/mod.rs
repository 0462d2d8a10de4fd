//! API Module
//!
//! HTTP handlers and routing for the key/value REST API.
//!
//! # Endpoints
//! - `POST /add` - Store a key-value pair
//! - `GET /get?key=` - Retrieve a value by key
//! - `DELETE /delete?key=` - Delete a key
//! - `GET /stats` - Store fill level
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

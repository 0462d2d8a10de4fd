//! Request and Response models for the key/value API
//!
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{AddRequest, KeyQuery};
pub use responses::{
    AddResponse, ErrorResponse, FetchResponse, HealthResponse, RemoveResponse, StatsResponse,
};

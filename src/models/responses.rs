//! Response DTOs for the key/value API
//!
//! Defines the structure of outgoing response bodies.

use serde::Serialize;

use crate::store::StoreStats;

/// Response body for the insert operation (POST /add)
#[derive(Debug, Clone, Serialize)]
pub struct AddResponse {
    /// Confirmation message
    pub message: String,
    /// The key that was stored
    pub key: String,
    /// The value that was stored
    pub value: String,
}

impl AddResponse {
    /// Creates a new AddResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        Self {
            message: format!("Added: {} -> {}", key, value),
            key,
            value,
        }
    }
}

/// Response body for the fetch operation (GET /get)
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl FetchResponse {
    /// Creates a new FetchResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the remove operation (DELETE /delete)
#[derive(Debug, Clone, Serialize)]
pub struct RemoveResponse {
    /// Confirmation message
    pub message: String,
    /// The key that was removed
    pub key: String,
}

impl RemoveResponse {
    /// Creates a new RemoveResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Deleted key: {}", key),
            key,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of entries
    pub entries: usize,
    /// Configured maximum number of entries
    pub capacity: usize,
    /// Entries that still fit before inserts are rejected
    pub available: usize,
    /// entries / capacity
    pub utilization: f64,
    /// Whether the next insert would be rejected
    pub full: bool,
}

impl From<StoreStats> for StatsResponse {
    fn from(stats: StoreStats) -> Self {
        Self {
            entries: stats.entries,
            capacity: stats.capacity,
            available: stats.available(),
            utilization: stats.utilization(),
            full: stats.is_full(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all rejections
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

//! Request DTOs for the key/value API
//!
//! Defines the structure of incoming request bodies and query strings.

use serde::Deserialize;

/// Request body for the insert operation (POST /add)
///
/// Missing fields read as empty strings; only a body that is not a JSON
/// object of strings is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddRequest {
    /// The key to store the value under
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: String,
}

impl AddRequest {
    /// Parses a request body as JSON, whatever content type it was sent with.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }
}

/// Key selected by the query string of fetch and remove (`?key=...`)
///
/// The first `key` parameter wins; a missing one reads as the empty key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyQuery {
    pub key: String,
}

impl From<Vec<(String, String)>> for KeyQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let key = pairs
            .into_iter()
            .find(|(name, _)| name == "key")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { key }
    }
}

//! API Handlers
//!
//! HTTP request handlers for each key/value endpoint. Each handler makes at
//! most one store call.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, Method, StatusCode},
    Json,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{GatewayError, Result};
use crate::models::{
    AddRequest, AddResponse, FetchResponse, HealthResponse, KeyQuery, RemoveResponse,
    StatsResponse,
};
use crate::store::BoundedStore;

/// Raw query parameters, kept as pairs so repeated names do not fail parsing.
pub type QueryPairs = std::result::Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Application state shared across all handlers.
///
/// The store synchronizes itself, so the handle is a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared bounded store
    pub store: Arc<BoundedStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: BoundedStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState with a store sized from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self::new(BoundedStore::new(config.capacity))
    }
}

/// Handler for POST /add
///
/// Stores a key-value pair. Replies 201 on success and 409 when the store is full.
/// The body is parsed as JSON regardless of its content type.
pub async fn add_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<AddResponse>)> {
    let req = AddRequest::from_json(&body)
        .map_err(|err| GatewayError::MalformedRequest(err.to_string()))?;

    if !state.store.insert(req.key.clone(), req.value.clone()) {
        warn!(key = %req.key, "Insert rejected: store is full");
        return Err(GatewayError::CapacityExceeded);
    }

    debug!(key = %req.key, "Entry stored");
    Ok((StatusCode::CREATED, Json(AddResponse::new(req.key, req.value))))
}

/// Handler for GET /get?key=...
///
/// Retrieves a value by key.
pub async fn get_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<FetchResponse>> {
    let KeyQuery { key } = key_query(query)?;

    match state.store.fetch(&key) {
        Some(value) => Ok(Json(FetchResponse::new(key, value))),
        None => Err(GatewayError::NotFound(key)),
    }
}

/// Handler for DELETE /delete?key=...
///
/// Deletes a key from the store.
pub async fn delete_handler(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<RemoveResponse>> {
    let KeyQuery { key } = key_query(query)?;

    if !state.store.remove(&key) {
        return Err(GatewayError::NotFound(key));
    }

    debug!(key = %key, "Entry removed");
    Ok(Json(RemoveResponse::new(key)))
}

/// Handler for GET /stats
///
/// Returns how full the store is.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.store.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for a known route called with the wrong method.
///
/// `allow` lists the methods the route accepts and is sent back in the
/// `Allow` header.
pub async fn method_not_allowed(
    method: Method,
    allow: &'static str,
) -> ([(HeaderName, &'static str); 1], GatewayError) {
    warn!(%method, "Rejected request with invalid method");
    ([(header::ALLOW, allow)], GatewayError::MethodNotAllowed(method))
}

fn key_query(query: QueryPairs) -> Result<KeyQuery> {
    let Query(pairs) =
        query.map_err(|rejection| GatewayError::MalformedRequest(rejection.body_text()))?;
    Ok(KeyQuery::from(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn add_body(key: &str, value: &str) -> Bytes {
        Bytes::from(serde_json::json!({ "key": key, "value": value }).to_string())
    }

    fn query(raw: &[(&str, &str)]) -> QueryPairs {
        Ok(Query(
            raw.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = AppState::new(BoundedStore::new(100));

        let body = add_body("test_key", "test_value");
        let (status, response) = assert_ok!(add_handler(State(state.clone()), body).await);
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.message, "Added: test_key -> test_value");

        let response = assert_ok!(get_handler(State(state), query(&[("key", "test_key")])).await);
        assert_eq!(response.value, "test_value");
    }

    #[tokio::test]
    async fn test_add_handler_missing_value() {
        let state = AppState::new(BoundedStore::new(100));

        let body = Bytes::from_static(br#"{"key":"k"}"#);
        let (status, response) = assert_ok!(add_handler(State(state.clone()), body).await);

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.value, "");
        assert_eq!(state.store.fetch("k").as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_add_handler_unparseable_body() {
        let state = AppState::new(BoundedStore::new(100));

        let body = Bytes::from_static(b"key=k&value=v");
        let err = assert_err!(add_handler(State(state.clone()), body).await);

        assert!(matches!(err, GatewayError::MalformedRequest(_)));
        assert!(state.store.is_empty());
    }

    #[tokio::test]
    async fn test_add_handler_store_full() {
        let state = AppState::new(BoundedStore::new(1));

        assert_ok!(add_handler(State(state.clone()), add_body("a", "1")).await);
        let err = assert_err!(add_handler(State(state.clone()), add_body("b", "2")).await);

        assert!(matches!(err, GatewayError::CapacityExceeded));
        assert_eq!(state.store.len(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = AppState::new(BoundedStore::new(100));

        let err = assert_err!(get_handler(State(state), query(&[("key", "nonexistent")])).await);
        assert!(matches!(err, GatewayError::NotFound(key) if key == "nonexistent"));
    }

    #[tokio::test]
    async fn test_get_repeated_key_uses_first() {
        let state = AppState::new(BoundedStore::new(100));
        state.store.insert("a", "1");
        state.store.insert("b", "2");

        let pairs = query(&[("key", "a"), ("key", "b")]);
        let response = assert_ok!(get_handler(State(state), pairs).await);
        assert_eq!(response.value, "1");
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = AppState::new(BoundedStore::new(100));
        assert_ok!(add_handler(State(state.clone()), add_body("to_delete", "value")).await);

        let pairs = query(&[("key", "to_delete")]);
        let response = assert_ok!(delete_handler(State(state.clone()), pairs).await);
        assert_eq!(response.message, "Deleted key: to_delete");

        assert_err!(get_handler(State(state), query(&[("key", "to_delete")])).await);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_key() {
        let state = AppState::new(BoundedStore::new(100));

        let err = assert_err!(delete_handler(State(state), query(&[("key", "missing")])).await);
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::new(BoundedStore::new(10));
        assert_ok!(add_handler(State(state.clone()), add_body("a", "1")).await);

        let response = stats_handler(State(state)).await;
        assert_eq!(response.entries, 1);
        assert_eq!(response.capacity, 10);
        assert_eq!(response.available, 9);
        assert!(!response.full);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_method_not_allowed() {
        let ([(name, allow)], err) = method_not_allowed(Method::PUT, "POST").await;

        assert_eq!(name, header::ALLOW);
        assert_eq!(allow, "POST");
        assert!(matches!(err, GatewayError::MethodNotAllowed(m) if m == Method::PUT));
    }

    #[test]
    fn test_state_from_config() {
        let state = AppState::from_config(&Config::default().with_capacity(7));
        assert_eq!(state.store.capacity(), 7);
    }
}

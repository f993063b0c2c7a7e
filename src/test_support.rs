//! Shared fixtures for unit tests: a Postgres-flavoured mock store, row
//! builders and an in-process HTTP client.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Transaction, Value};
use tower::ServiceExt;

use crate::{config::AppConfig, password::PasswordScheme, routes::create_app, state::AppState};

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::Postgres)
}

pub fn row<const N: usize>(pairs: [(&'static str, Value); N]) -> BTreeMap<&'static str, Value> {
    BTreeMap::from(pairs)
}

/// Deterministic stand-in so tests can assert on stored hashes.
pub struct MarkedScheme;

impl PasswordScheme for MarkedScheme {
    fn hash(&self, password: &str) -> anyhow::Result<String> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, stored_hash: &str) -> anyhow::Result<bool> {
        Ok(stored_hash == format!("hashed:{password}"))
    }
}

pub fn test_config(debug_routes: bool) -> AppConfig {
    AppConfig {
        database_url: "postgres://mock".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        debug_routes,
    }
}

/// Reads the statements a shared mock store has seen. Every router built on
/// `conn` must already be dropped.
pub fn transaction_log(conn: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(conn)
        .ok()
        .expect("mock store is still shared")
        .into_transaction_log()
}

pub fn test_app(conn: impl Into<Arc<DatabaseConnection>>) -> Router {
    create_app(
        AppState::new(conn, Arc::new(MarkedScheme)),
        &test_config(false),
    )
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn json(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

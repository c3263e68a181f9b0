//! HTTP routes of the stocks API.
//!
//! Three endpoints, all read-only against the shared [`QuoteStore`]:
//!
//! - `GET /health` — constant liveness probe.
//! - `GET /stocks?symbols=AAPL,MSFT` — filter the store against a
//!   comma-separated symbol list; unknown symbols are silently dropped and
//!   the response is always `200`.
//! - `GET /stocks/{symbol}` — exact single-symbol lookup; a miss is a `404`
//!   with a structured error body.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{SecondsFormat, Utc};
use log::debug;
use serde::Deserialize;
use stocks_common::quote::{ErrorResponse, HealthResponse, QuoteListResponse, QuoteResponse};
use thiserror::Error;

use crate::model::store::QuoteStore;

/// Shared read-only application state.
pub type AppState = Arc<QuoteStore>;

/// Errors surfaced to API clients as structured JSON bodies.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The requested symbol has no record in the store.
    #[error("Symbol {0} not found")]
    SymbolNotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::SymbolNotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Query string accepted by the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct StocksQuery {
    /// Comma-separated ticker symbols. A missing parameter means an empty
    /// selection.
    symbols: Option<String>,
}

/// Build the application router with every API route attached to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stocks", get(list_stocks))
        .route("/stocks/{symbol}", get(get_stock))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

async fn list_stocks(
    State(store): State<AppState>,
    Query(query): Query<StocksQuery>,
) -> Json<QuoteListResponse> {
    let symbols_param = query.symbols.unwrap_or_default();
    let data = store.lookup_list(&symbols_param);
    debug!("GET /stocks symbols={:?} -> {} records", symbols_param, data.len());

    Json(QuoteListResponse {
        count: data.len(),
        data,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

async fn get_stock(
    State(store): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let symbol = symbol.to_uppercase();
    debug!("GET /stocks/{}", symbol);

    match store.get(&symbol) {
        Some(record) => Ok(Json(QuoteResponse {
            data: record.clone(),
        })),
        None => Err(ApiError::SymbolNotFound(symbol)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        router(Arc::new(QuoteStore::seeded()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn list_drops_unknown_symbols_and_preserves_order() {
        let (status, body) = get_json("/stocks?symbols=AAPL,ZZZZ,MSFT").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
        assert_eq!(body["data"][0]["symbol"], "AAPL");
        assert_eq!(body["data"][1]["symbol"], "MSFT");
    }

    #[tokio::test]
    async fn list_without_parameter_is_empty_but_ok() {
        let (status, body) = get_json("/stocks").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn list_with_empty_parameter_is_empty_but_ok() {
        let (status, body) = get_json("/stocks?symbols=").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 0);
    }

    #[tokio::test]
    async fn list_trims_and_keeps_repeated_symbols() {
        let (_, body) = get_json("/stocks?symbols=%20aapl%20,msft,aapl").await;
        assert_eq!(body["count"], 3);
        assert_eq!(body["data"][0]["symbol"], "AAPL");
        assert_eq!(body["data"][1]["symbol"], "MSFT");
        assert_eq!(body["data"][2]["symbol"], "AAPL");
    }

    #[tokio::test]
    async fn list_carries_an_iso8601_timestamp() {
        let (_, body) = get_json("/stocks?symbols=AAPL").await;
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(timestamp.ends_with('Z'));
        assert!(timestamp.contains('T'));
    }

    #[tokio::test]
    async fn single_lookup_is_case_insensitive() {
        let (status, lower) = get_json("/stocks/aapl").await;
        assert_eq!(status, StatusCode::OK);
        let (_, upper) = get_json("/stocks/AAPL").await;
        assert_eq!(lower["data"], upper["data"]);
        assert_eq!(lower["data"]["displayName"], "Apple Inc.");
    }

    #[tokio::test]
    async fn unknown_symbol_is_a_structured_404() {
        let (status, body) = get_json("/stocks/ZZZZ").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Symbol ZZZZ not found");
    }
}

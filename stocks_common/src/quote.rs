//! Quote record and JSON response envelopes shared by server and client.
//!
//! The wire format uses camelCase field names (`displayName`,
//! `regularMarketPrice`, ...). The server serializes these types and the
//! client deserializes the very same ones, so both sides always agree on the
//! envelope shape.

use serde::{Deserialize, Serialize};

/// Market quote for a single ticker symbol.
///
/// Records are immutable once constructed; the server owns one per known
/// symbol for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    /// Ticker symbol in uppercase (e.g., `AAPL`). Unique key.
    pub symbol: String,
    /// Human-readable company name.
    pub display_name: String,
    /// Last regular-session price.
    pub regular_market_price: f64,
    /// ISO-like 3-letter currency code (e.g., `USD`).
    pub currency: String,
    /// Total market capitalization in `currency` units.
    pub market_cap: f64,
    /// Absolute price change for the session. Signed.
    pub regular_market_change: f64,
    /// Relative price change for the session, in percent. Signed.
    pub regular_market_change_percent: f64,
}

impl QuoteRecord {
    /// Construct a record from its raw fields.
    pub fn new(
        symbol: &str,
        display_name: &str,
        regular_market_price: f64,
        currency: &str,
        market_cap: f64,
        regular_market_change: f64,
        regular_market_change_percent: f64,
    ) -> Self {
        Self {
            symbol: symbol.to_string(),
            display_name: display_name.to_string(),
            regular_market_price,
            currency: currency.to_string(),
            market_cap,
            regular_market_change,
            regular_market_change_percent,
        }
    }
}

/// Envelope returned by the quote listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteListResponse {
    /// Matched records, in request order.
    pub data: Vec<QuoteRecord>,
    /// Number of records in `data`.
    pub count: usize,
    /// ISO8601 timestamp of when the response was produced.
    pub timestamp: String,
}

/// Envelope returned by the single-quote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The matched record.
    pub data: QuoteRecord,
}

/// Structured error body returned for failed lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Body returned by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Constant `"ok"` while the process is serving.
    pub status: String,
}

impl HealthResponse {
    /// The canonical healthy response.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_fields() {
        let record = QuoteRecord::new("AAPL", "Apple Inc.", 195.35, "USD", 3.02e12, 2.15, 1.11);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["symbol"], "AAPL");
        assert_eq!(json["displayName"], "Apple Inc.");
        assert_eq!(json["regularMarketPrice"], 195.35);
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["marketCap"], 3.02e12);
        assert_eq!(json["regularMarketChange"], 2.15);
        assert_eq!(json["regularMarketChangePercent"], 1.11);
    }

    #[test]
    fn list_envelope_decodes_from_wire_json() {
        let body = r#"{
            "data": [{
                "symbol": "TSLA",
                "displayName": "Tesla Inc.",
                "regularMarketPrice": 238.9,
                "currency": "USD",
                "marketCap": 756000000000.0,
                "regularMarketChange": -1.5,
                "regularMarketChangePercent": -0.62
            }],
            "count": 1,
            "timestamp": "2026-08-07T00:00:00.000Z"
        }"#;

        let envelope: QuoteListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.count, 1);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].symbol, "TSLA");
        assert_eq!(envelope.data[0].regular_market_change, -1.5);
    }

    #[test]
    fn health_body_is_ok() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}

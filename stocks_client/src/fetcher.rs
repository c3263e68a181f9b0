//! Fetching quote records from the stock API server.
//!
//! This module provides a small wrapper around a blocking `reqwest` client
//! that performs the single listing request and unwraps the response
//! envelope.
use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use stocks_common::QuoteRecord;
use stocks_common::quote::QuoteListResponse;
use thiserror::Error;

/// Errors raised while fetching quotes from the server.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The TCP connection to the server could not be established.
    #[error("Could not connect to {0}")]
    ConnectionRefused(String),

    /// The server answered with a non-success HTTP status.
    #[error("Server responded with status {0}")]
    Status(StatusCode),

    /// Any other transport or body-decoding failure from the HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// HTTP client for the `/stocks` listing endpoint.
pub struct QuoteFetcher {
    base_url: String,
    client: Client,
}

impl QuoteFetcher {
    /// Create a fetcher for the given server base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Fetch quote records for `symbols` in a single request.
    ///
    /// The symbols are joined with commas exactly once and sent as one
    /// `symbols` query parameter. The `data` array of the response envelope
    /// is returned as-is: the server decides filtering and ordering, and the
    /// client does not second-guess it.
    pub fn get_stock_quotes(&self, symbols: &[String]) -> Result<Vec<QuoteRecord>, FetchError> {
        let symbols_query = symbols.join(",");
        let url = format!("{}/stocks", self.base_url);
        debug!("GET {} symbols={}", url, symbols_query);

        let response = self
            .client
            .get(&url)
            .query(&[("symbols", symbols_query.as_str())])
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let envelope: QuoteListResponse = response.json()?;
        Ok(envelope.data)
    }

    /// The server base URL this fetcher talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map connection failures to a dedicated variant so the caller can print
    /// remediation guidance; everything else keeps its original message.
    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_connect() {
            FetchError::ConnectionRefused(self.base_url.clone())
        } else {
            FetchError::Transport(err)
        }
    }
}

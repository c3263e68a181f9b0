//!
//! Common types and utilities shared by the stocks server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `tickers` — ticker symbols known to the service, shared by both sides.
//! - `quote` — the quote record and JSON response envelopes.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tickers;
pub mod quote;
pub mod net;

pub use error::QuoteError;
pub use result::Result;
pub use quote::QuoteRecord;

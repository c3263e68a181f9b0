//! Stocks CLI client — fetches quotes from the stock API server and prints a
//! formatted table to stdout. It resolves the server base URL, issues a
//! single request for the requested ticker symbols, and renders the returned
//! records as an aligned, color-coded table.
//!
//! Usage example (CLI):
//! ```bash
//! stocks_client --symbols aapl,msft --base-url http://localhost:3000
//! ```
//!
//! Without flags, the client fetches every symbol the server knows about and
//! reads the base URL from the `API_BASE_URL` environment variable, falling
//! back to a local default. Any fetch failure terminates the process with a
//! non-zero exit code.
#![warn(missing_docs)]
mod args;
mod display;
mod fetcher;

use std::env;
use std::process;

use clap::Parser;
use log::{error, info};
use stocks_common::net::{BASE_URL_ENV, DEFAULT_BASE_URL};

use crate::args::Args;
use crate::display::display_stocks;
use crate::fetcher::{FetchError, QuoteFetcher};

fn main() {
    init_logger();
    let args = Args::parse();

    let base_url = args
        .base_url
        .clone()
        .or_else(|| env::var(BASE_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let symbols: Vec<String> = args
        .symbols_or_default()
        .iter()
        .map(|ticker| ticker.to_string())
        .collect();

    info!("Fetching stock data from {}...", base_url);

    let fetcher = QuoteFetcher::new(&base_url);
    match fetcher.get_stock_quotes(&symbols) {
        Ok(quotes) => display_stocks(&quotes),
        Err(e) => {
            error!("Error fetching stock quotes: {}", e);
            if matches!(e, FetchError::ConnectionRefused(_)) {
                error!("Make sure to start the server first:");
                error!("  cargo run -p stocks_server");
            }
            error!("Failed to fetch stock data");
            process::exit(1);
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

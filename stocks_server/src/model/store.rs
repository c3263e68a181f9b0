//! Immutable in-memory quote store.
//!
//! The store maps uppercase ticker symbols to their [`QuoteRecord`]s. It is
//! seeded once at startup with one record per [`Ticker`] and never mutated
//! afterwards, so request handlers can share it behind an `Arc` without any
//! further synchronization.

use std::collections::HashMap;

use stocks_common::QuoteRecord;
use stocks_common::tickers::Ticker;

/// Read-only mapping from uppercase ticker symbol to its quote record.
pub struct QuoteStore {
    quotes: HashMap<String, QuoteRecord>,
}

impl QuoteStore {
    /// Build the store with one static record per known ticker.
    pub fn seeded() -> Self {
        let quotes = Ticker::all()
            .into_iter()
            .map(|ticker| {
                let record = seed_quote(ticker);
                (record.symbol.clone(), record)
            })
            .collect();
        Self { quotes }
    }

    /// Single-symbol lookup. The symbol is uppercased before the lookup, so
    /// `get("aapl")` and `get("AAPL")` resolve to the same record.
    pub fn get(&self, symbol: &str) -> Option<&QuoteRecord> {
        self.quotes.get(&symbol.to_uppercase())
    }

    /// Filter a comma-separated symbols parameter against the store.
    ///
    /// Each piece is trimmed and uppercased; pieces without a matching record
    /// are dropped. Input order is preserved and repeated symbols are not
    /// deduplicated. An empty parameter yields an empty list.
    pub fn lookup_list(&self, symbols_param: &str) -> Vec<QuoteRecord> {
        symbols_param
            .split(',')
            .map(|piece| piece.trim().to_uppercase())
            .filter_map(|symbol| self.quotes.get(&symbol).cloned())
            .collect()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Static quote used to seed the store for `ticker`.
fn seed_quote(ticker: Ticker) -> QuoteRecord {
    match ticker {
        Ticker::AAPL => QuoteRecord::new("AAPL", "Apple Inc.", 195.35, "USD", 3.02e12, 2.15, 1.11),
        Ticker::GOOGL => {
            QuoteRecord::new("GOOGL", "Alphabet Inc.", 142.80, "USD", 1.78e12, 1.25, 0.88)
        }
        Ticker::MSFT => {
            QuoteRecord::new("MSFT", "Microsoft Corporation", 423.50, "USD", 3.15e12, 3.45, 0.82)
        }
        Ticker::AMZN => {
            QuoteRecord::new("AMZN", "Amazon.com Inc.", 180.75, "USD", 1.88e12, 2.30, 1.28)
        }
        Ticker::TSLA => QuoteRecord::new("TSLA", "Tesla Inc.", 238.90, "USD", 756e9, -1.50, -0.62),
        Ticker::META => {
            QuoteRecord::new("META", "Meta Platforms Inc.", 485.20, "USD", 1.24e12, 5.10, 1.06)
        }
        Ticker::NVDA => {
            QuoteRecord::new("NVDA", "NVIDIA Corporation", 874.35, "USD", 2.15e12, 12.45, 1.44)
        }
        Ticker::AMD => {
            QuoteRecord::new("AMD", "Advanced Micro Devices", 167.50, "USD", 271e9, -2.30, -1.35)
        }
    }
}

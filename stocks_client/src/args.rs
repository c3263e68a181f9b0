//! Command-line arguments for the stocks client.
//!
//! This module defines the CLI interface using `clap`. See `main` for
//! end-to-end usage.
use clap::Parser;
use stocks_common::tickers::Ticker;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Ticker symbols to fetch, comma-separated (case-insensitive).
    /// Defaults to every symbol the server knows about.
    #[clap(long, value_delimiter = ',', num_args = 1.., ignore_case = true)]
    pub symbols: Vec<Ticker>,

    /// Base URL of the stock API server. Takes precedence over the
    /// API_BASE_URL environment variable.
    #[clap(long)]
    pub base_url: Option<String>,
}

impl Args {
    /// The requested symbols, falling back to the full known set.
    pub fn symbols_or_default(&self) -> Vec<Ticker> {
        if self.symbols.is_empty() {
            Ticker::all()
        } else {
            self.symbols.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_parse_from_comma_separated_list() {
        let args = Args::parse_from(["stocks_client", "--symbols", "aapl,MSFT"]);
        assert_eq!(args.symbols, [Ticker::AAPL, Ticker::MSFT]);
    }

    #[test]
    fn missing_symbols_fall_back_to_full_set() {
        let args = Args::parse_from(["stocks_client"]);
        assert_eq!(args.symbols_or_default(), Ticker::all());
    }

    #[test]
    fn unknown_symbol_is_rejected_at_parse_time() {
        assert!(Args::try_parse_from(["stocks_client", "--symbols", "zzzz"]).is_err());
    }
}

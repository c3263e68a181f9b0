//! Ticker symbols and helpers shared between client and server.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Set of ticker symbols the quote service knows about.
///
/// Parsing is case-insensitive (`"aapl"` resolves to [`Ticker::AAPL`]) and
/// `Display` renders the canonical uppercase symbol.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumIter,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "lower")]
#[strum(ascii_case_insensitive)]
pub enum Ticker {
    AAPL,
    GOOGL,
    MSFT,
    AMZN,
    TSLA,
    META,
    NVDA,
    AMD,
}

impl Ticker {
    /// Every known ticker, in declaration order.
    pub fn all() -> Vec<Ticker> {
        Ticker::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(<Ticker as FromStr>::from_str("aapl").unwrap(), Ticker::AAPL);
        assert_eq!(<Ticker as FromStr>::from_str("AAPL").unwrap(), Ticker::AAPL);
        assert_eq!(<Ticker as FromStr>::from_str("NvDa").unwrap(), Ticker::NVDA);
        assert!(<Ticker as FromStr>::from_str("ZZZZ").is_err());
    }

    #[test]
    fn display_renders_uppercase_symbol() {
        assert_eq!(Ticker::MSFT.to_string(), "MSFT");
        assert_eq!(Ticker::AMD.to_string(), "AMD");
    }

    #[test]
    fn all_lists_every_symbol_in_order() {
        let all = Ticker::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all.first(), Some(&Ticker::AAPL));
        assert_eq!(all.last(), Some(&Ticker::AMD));
    }
}

//! Rendering quote records as an aligned, color-coded console table.

use stocks_common::QuoteRecord;

/// ANSI escape for green text (non-negative change).
const GREEN: &str = "\x1b[32m";
/// ANSI escape for red text (negative change).
const RED: &str = "\x1b[31m";
/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Width of the horizontal rules framing the table.
const RULE_WIDTH: usize = 100;

/// Abbreviate a market capitalization with a T/B/M suffix.
///
/// Thresholds are checked in descending order and are inclusive, so exactly
/// 1e12 renders in trillions. Values below a million pass through with no
/// formatting beyond the `$` prefix.
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap >= 1e12 {
        format!("${:.2}T", market_cap / 1e12)
    } else if market_cap >= 1e9 {
        format!("${:.2}B", market_cap / 1e9)
    } else if market_cap >= 1e6 {
        format!("${:.2}M", market_cap / 1e6)
    } else {
        format!("${}", market_cap)
    }
}

/// Render one table row, colorized by the sign of the daily change.
///
/// The change column is padded to 30 characters with the ANSI escapes
/// included in the width, which keeps the visible columns aligned.
fn format_row(quote: &QuoteRecord) -> String {
    let up = quote.regular_market_change >= 0.0;
    let glyph = if up { '↑' } else { '↓' };
    let color = if up { GREEN } else { RED };

    let name: String = quote.display_name.chars().take(28).collect();
    let price = format!("{} {:.2}", quote.currency, quote.regular_market_price);
    let change = format!("{}{} {:.2}{}", color, glyph, quote.regular_market_change, RESET);
    let percent = format!("{:.2}%", quote.regular_market_change_percent);

    format!(
        "{:<10}{:<30}{:<15}{:<30}{:<12}{}",
        quote.symbol,
        name,
        price,
        change,
        percent,
        format_market_cap(quote.market_cap),
    )
}

/// Print the table to stdout, one row per record in input order.
pub fn display_stocks(quotes: &[QuoteRecord]) {
    let rule = "─".repeat(RULE_WIDTH);

    println!("\nStock Market Data\n");
    println!("{}", rule);
    println!(
        "{:<10}{:<30}{:<15}{:<15}{:<12}{}",
        "Symbol", "Name", "Price", "Change", "Change %", "Market Cap"
    );
    println!("{}", rule);

    for quote in quotes {
        println!("{}", format_row(quote));
    }

    println!("{}\n", rule);
}

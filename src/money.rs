//! Display formatting for monetary figures and percentages.
//!
//! The aggregator itself never rounds; these helpers exist for the
//! commentary and Q&A text, which quote currency figures with thousands
//! separators and percentages to one decimal place.

/// Returns the display symbol for an ISO currency code, if one is known.
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "GBP" => Some("£"),
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

/// Formats a monetary value with thousands separators, prefixed by the
/// currency symbol ("£1,234"). Unknown codes fall back to "1,234 XYZ".
/// Whole amounts drop the decimals; fractional amounts keep two.
pub fn format_currency(code: &str, value: f64) -> String {
    let amount = format_grouped(value);
    match currency_symbol(code) {
        Some(symbol) => {
            if value < 0.0 {
                format!("-{}{}", symbol, amount.trim_start_matches('-'))
            } else {
                format!("{symbol}{amount}")
            }
        }
        None => format!("{amount} {code}"),
    }
}

/// Formats a fraction (0.6 => "60.0%") to one decimal place.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format a number with comma thousands separators.
fn format_grouped(value: f64) -> String {
    // Round to cents before splitting so the fraction never carries past 99.
    let total_cents = (value.abs() * 100.0).round() as u64;
    let whole = total_cents / 100;
    let cents = total_cents % 100;
    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if cents == 0 {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents:02}")
    }
}

//! Pattern-matched answers for a small closed set of question shapes.
//!
//! This is a deterministic stand-in for the AI path, not an NLP engine:
//! rules match case-insensitive substrings, first match wins, and anything
//! else gets the sentinel.

use crate::money::{format_currency, format_percent};
use crate::report::compute_totals;
use crate::schema::ProfitAndLoss;

/// Returned when no rule matches the question.
pub const NOT_AVAILABLE: &str = "Not available in the dataset.";

/// Answers a free-text question from the aggregate result alone.
pub fn answer_question(question: &str, pl: &ProfitAndLoss) -> String {
    let q = question.to_lowercase();
    let totals = compute_totals(pl);
    let ccy = pl.period.currency.as_str();
    let last = totals.last_index();

    if q.contains("why") && q.contains("utilities") {
        if let Some(answer) = utilities_delta(pl) {
            return answer;
        }
        // Fewer than two months of data for Utilities: fall through.
    }

    if q.contains("gross") && q.contains("margin") {
        return format!(
            "Gross margin in {} is {}.",
            totals.months[last],
            format_percent(totals.gm_pct[last])
        );
    }

    if q.contains("revenue") {
        return format!(
            "Revenue in {}: {}.",
            totals.months[last],
            format_currency(ccy, totals.rev_total[last])
        );
    }

    NOT_AVAILABLE.to_string()
}

/// Month-over-month movement of the opex account literally named
/// "Utilities", when it has at least two months of data.
fn utilities_delta(pl: &ProfitAndLoss) -> Option<String> {
    let values = pl.opex.get("Utilities")?;
    if values.len() < 2 {
        return None;
    }
    let current = values[values.len() - 1];
    let previous = values[values.len() - 2];
    let delta = current - previous;
    let ccy = pl.period.currency.as_str();
    let direction = if delta >= 0.0 { "increased" } else { "decreased" };
    Some(format!(
        "Utilities {direction} by {} month-on-month (from {} to {}). \
         The dataset does not explain the cause.",
        format_currency(ccy, delta.abs()),
        format_currency(ccy, previous),
        format_currency(ccy, current)
    ))
}

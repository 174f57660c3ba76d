//! Deterministic narrative commentary derived from the aggregated report.
//!
//! This is the fallback path when the AI collaborator is unavailable, and
//! doubles as the reference for the shape an AI response is normalized to.

use log::debug;

use crate::money::{format_currency, format_percent};
use crate::report::{compute_totals, value_at};
use crate::schema::{AccountSeries, Commentary, ProfitAndLoss};

/// Shown when a model response carries nothing usable.
pub const UNAVAILABLE_SUMMARY: &str = "AI analysis temporarily unavailable. \
    The financial data shows performance across the specified period with \
    various revenue streams and expense categories.";

const DEFAULT_BULLET: &str = "Analysis completed based on provided financial data.";

/// Account with the largest signed month-over-month delta. Comparison is
/// strictly greater, so the first account in document order wins ties.
fn top_mover(series: &AccountSeries, last: usize, prev: usize) -> Option<(&str, f64)> {
    let mut top: Option<(&str, f64)> = None;
    for (name, values) in series {
        let delta = value_at(values, last) - value_at(values, prev);
        match top {
            Some((_, best)) if delta <= best => {}
            _ => top = Some((name.as_str(), delta)),
        }
    }
    top
}

/// Produces a summary and bullet insights using only arithmetic over the
/// aggregate result. Never fails; a single-month document compares the sole
/// month against itself and reports zero change.
pub fn generate_commentary(pl: &ProfitAndLoss) -> Commentary {
    let totals = compute_totals(pl);
    let ccy = pl.period.currency.as_str();
    let last = totals.last_index();
    let prev = last.saturating_sub(1);

    let rev_change = if totals.rev_total[prev] != 0.0 {
        (totals.rev_total[last] - totals.rev_total[prev]) / totals.rev_total[prev]
    } else {
        0.0
    };
    let gm_change = totals.gm_pct[last] - totals.gm_pct[prev];
    debug!(
        "Commentary for {}: rev change {:.4}, margin change {:.4}",
        totals.months[last], rev_change, gm_change
    );

    let mut drivers = Vec::new();
    if let Some((name, delta)) = top_mover(&pl.revenue, last, prev) {
        let verb = if delta >= 0.0 { "rose" } else { "fell" };
        drivers.push(format!(
            "{name} {verb} by {}.",
            format_currency(ccy, delta.abs())
        ));
    }
    if let Some((name, delta)) = top_mover(&pl.opex, last, prev) {
        // A shrinking expense is not a driver.
        if delta > 0.0 {
            drivers.push(format!(
                "{name} increased by {}.",
                format_currency(ccy, delta)
            ));
        }
    }

    let bullets = vec![
        format!(
            "Revenue {} {} month-on-month.",
            if rev_change >= 0.0 { "up" } else { "down" },
            format_percent(rev_change.abs())
        ),
        format!(
            "Gross margin {} to {}.",
            if gm_change >= 0.0 { "improved" } else { "declined" },
            format_percent(totals.gm_pct[last])
        ),
        format!(
            "Net profit in {}: {}.",
            totals.months[last],
            format_currency(ccy, totals.net_profit[last])
        ),
    ];

    let sentences = [
        format!(
            "Overall revenue for {} was {}, {} of {} from {}.",
            totals.months[last],
            format_currency(ccy, totals.rev_total[last]),
            if rev_change >= 0.0 { "an increase" } else { "a decrease" },
            format_percent(rev_change.abs()),
            totals.months[prev]
        ),
        format!(
            "COGS totaled {}, yielding gross profit of {} ({} margin).",
            format_currency(ccy, totals.cogs_total[last]),
            format_currency(ccy, totals.gross_profit[last]),
            format_percent(totals.gm_pct[last])
        ),
        if drivers.is_empty() {
            "Key drivers are unclear from the dataset.".to_string()
        } else {
            format!("Key drivers: {}", drivers.join(" "))
        },
        format!(
            "Operating expenses were {}. Net profit closed at {}.",
            format_currency(ccy, totals.opex_total[last]),
            format_currency(ccy, totals.net_profit[last])
        ),
    ];

    Commentary {
        summary: sentences.join(" "),
        bullets,
    }
}

/// A model response after best-effort deserialization: either the expected
/// structured shape or the raw text it sent instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCommentary {
    Structured(Commentary),
    Unstructured { raw_text: String },
}

/// Attempts to read a model response as structured commentary. Tolerates a
/// surrounding Markdown code fence; anything that still fails to parse is
/// kept as raw text for [`ParsedCommentary::normalize`].
pub fn parse_commentary(text: &str) -> ParsedCommentary {
    let trimmed = strip_code_fence(text.trim());
    match serde_json::from_str::<Commentary>(trimmed) {
        Ok(commentary) => ParsedCommentary::Structured(commentary),
        Err(_) => ParsedCommentary::Unstructured {
            raw_text: text.trim().to_string(),
        },
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // The rest of the fence line is a language tag in whatever casing the
    // model chose; drop the line wholesale rather than matching the tag.
    let body = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

impl ParsedCommentary {
    /// Collapses to the one shape callers see. Unstructured text is split
    /// heuristically: bullet-marker lines become bullets, the first
    /// sufficiently long plain line becomes the summary. Empty responses
    /// degrade to the static unavailable text.
    pub fn normalize(self) -> Commentary {
        match self {
            Self::Structured(commentary) => commentary,
            Self::Unstructured { raw_text } => {
                let lines: Vec<&str> = raw_text
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .collect();

                let bullets: Vec<String> = lines
                    .iter()
                    .filter(|line| is_bullet_line(line))
                    .map(|line| {
                        line.trim_start_matches(['•', '-', '*'])
                            .trim_start()
                            .to_string()
                    })
                    .collect();

                let summary = lines
                    .iter()
                    .find(|line| !is_bullet_line(line) && line.len() > 50)
                    .map(|line| line.to_string())
                    .unwrap_or_else(|| raw_text.clone());

                Commentary {
                    summary: if summary.is_empty() {
                        UNAVAILABLE_SUMMARY.to_string()
                    } else {
                        summary
                    },
                    bullets: if bullets.is_empty() {
                        vec![DEFAULT_BULLET.to_string()]
                    } else {
                        bullets
                    },
                }
            }
        }
    }
}

fn is_bullet_line(line: &str) -> bool {
    line.starts_with('•') || line.starts_with('-') || line.starts_with('*')
}

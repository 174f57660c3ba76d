use chrono::NaiveDate;
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Per-category account values: account name -> one value per month.
///
/// `IndexMap` keeps accounts in document order, which also fixes the
/// tie-break when selecting the top mover (first account wins).
pub type AccountSeries = IndexMap<String, Vec<f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// ISO 4217 currency code (e.g. "GBP").
    pub currency: String,
}

/// Comparison baseline; read-only, never adjusted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub revenue_total: Vec<f64>,
    pub net_profit: Vec<f64>,
}

/// A fixed-shape Profit & Loss document.
///
/// `months` defines the index space: every value array under the category
/// mappings is positionally aligned with it. Short or missing arrays are
/// read as zero at the absent indices rather than rejected, so partially
/// populated documents still aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitAndLoss {
    pub period: ReportingPeriod,
    pub months: Vec<String>,
    pub revenue: AccountSeries,
    pub cogs: AccountSeries,
    pub opex: AccountSeries,
    #[serde(default)]
    pub other_income: AccountSeries,
    #[serde(default)]
    pub other_expense: AccountSeries,
    #[serde(default)]
    pub budget: Option<Budget>,
}

impl ProfitAndLoss {
    pub fn from_json(json: &str) -> Result<Self> {
        let pl: Self = serde_json::from_str(json)?;
        debug!(
            "Parsed P&L document: {} months, {} revenue / {} cogs / {} opex accounts",
            pl.months.len(),
            pl.revenue.len(),
            pl.cogs.len(),
            pl.opex.len()
        );
        pl.log_ragged_series();
        Ok(pl)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        info!("Loading P&L document from {}", path.as_ref().display());
        Self::from_json(&raw)
    }

    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    fn log_ragged_series(&self) {
        let n = self.months.len();
        let categories = [
            ("revenue", &self.revenue),
            ("cogs", &self.cogs),
            ("opex", &self.opex),
            ("otherIncome", &self.other_income),
            ("otherExpense", &self.other_expense),
        ];
        for (label, series) in categories {
            for (account, values) in series {
                if values.len() != n {
                    log::warn!(
                        "{label} account '{account}' has {} values for {n} months; missing entries read as 0",
                        values.len()
                    );
                }
            }
        }
    }
}

/// Narrative commentary: a prose summary plus bullet insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commentary {
    pub summary: String,
    pub bullets: Vec<String>,
}

/// Payload of a question request: the free-text question plus the document
/// it is about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
    pub pl: ProfitAndLoss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Fixed-shape failure payload, distinguishable from success by the
/// presence of the `error` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

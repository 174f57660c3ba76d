//! # pl-insights
//!
//! Aggregation and lightweight analysis for fixed-shape Profit & Loss
//! reports, with an optional AI narrative layer.
//!
//! ## Core Concepts
//!
//! - **P&L Document**: months plus per-account value arrays for revenue,
//!   COGS, opex, and optional other income/expense categories
//! - **Aggregate Result**: per-month category totals, gross/net profit, and
//!   gross-margin percentage, recomputed fresh on every call
//! - **Heuristic Commentary / Q&A**: deterministic narrative and answers
//!   derived purely from the aggregate result
//! - **AI Boundary** (feature `openai`): formats the report as text, asks an
//!   external completion model, and always falls back to the heuristics on
//!   failure
//!
//! ## Example
//!
//! ```rust,ignore
//! use pl_insights::{compute_totals, generate_commentary, ProfitAndLoss};
//!
//! let pl = ProfitAndLoss::load("demos/data/pl.json")?;
//! let totals = compute_totals(&pl);
//! println!("Latest net profit: {}", totals.net_profit.last().unwrap());
//!
//! let commentary = generate_commentary(&pl);
//! println!("{}", commentary.summary);
//! ```

pub mod commentary;
pub mod error;
pub mod formatter;
pub mod history;
pub mod money;
pub mod qa;
pub mod report;
pub mod schema;

#[cfg(feature = "openai")]
pub mod llm;

pub use commentary::{generate_commentary, parse_commentary, ParsedCommentary};
pub use error::{PlInsightsError, Result};
pub use formatter::format_financial_data;
pub use history::{HistoryEntry, QuestionHistory};
pub use money::{format_currency, format_percent};
pub use qa::{answer_question, NOT_AVAILABLE};
pub use report::{compute_totals, PlTotals};
pub use schema::{
    AccountSeries, AnswerResponse, Budget, Commentary, ErrorResponse, ProfitAndLoss,
    QuestionRequest, ReportingPeriod,
};

#[cfg(feature = "openai")]
pub use llm::{AnalystService, OpenAiClient};

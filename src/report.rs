//! The report aggregator: monthly category totals, margins, and net profit
//! derived from a [`ProfitAndLoss`] document.

use serde::Serialize;

use crate::schema::{AccountSeries, ProfitAndLoss};

/// Derived monthly totals for a P&L document.
///
/// Recomputed fresh on every [`compute_totals`] call; all vectors share the
/// index space of `months`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlTotals {
    pub months: Vec<String>,
    pub rev_total: Vec<f64>,
    pub cogs_total: Vec<f64>,
    pub gross_profit: Vec<f64>,
    pub opex_total: Vec<f64>,
    pub other_income: Vec<f64>,
    pub other_expense: Vec<f64>,
    pub net_profit: Vec<f64>,
    /// Gross margin as a fraction of revenue; 0 when revenue is 0.
    pub gm_pct: Vec<f64>,
}

impl PlTotals {
    /// Index of the final month. Documents always carry at least one month,
    /// but an empty one degrades to index 0 rather than panicking.
    pub fn last_index(&self) -> usize {
        self.months.len().saturating_sub(1)
    }
}

/// Reads the value of an account series at a month index, treating missing
/// entries as zero. Applied uniformly to every category so short arrays in
/// partially populated documents aggregate instead of failing.
pub(crate) fn value_at(values: &[f64], index: usize) -> f64 {
    values.get(index).copied().unwrap_or(0.0)
}

fn category_total(series: &AccountSeries, index: usize) -> f64 {
    series.values().map(|values| value_at(values, index)).sum()
}

/// Sums each category across its accounts per month and derives gross
/// profit, net profit, and gross-margin percentage.
///
/// Pure and deterministic: no rounding, no side effects, no error paths.
pub fn compute_totals(pl: &ProfitAndLoss) -> PlTotals {
    let n = pl.months.len();

    let mut totals = PlTotals {
        months: pl.months.clone(),
        rev_total: Vec::with_capacity(n),
        cogs_total: Vec::with_capacity(n),
        gross_profit: Vec::with_capacity(n),
        opex_total: Vec::with_capacity(n),
        other_income: Vec::with_capacity(n),
        other_expense: Vec::with_capacity(n),
        net_profit: Vec::with_capacity(n),
        gm_pct: Vec::with_capacity(n),
    };

    for i in 0..n {
        let rev = category_total(&pl.revenue, i);
        let cogs = category_total(&pl.cogs, i);
        let opex = category_total(&pl.opex, i);
        let other_i = category_total(&pl.other_income, i);
        let other_e = category_total(&pl.other_expense, i);

        let gross = rev - cogs;
        let net = gross - opex + other_i - other_e;
        let gm = if rev != 0.0 { gross / rev } else { 0.0 };

        totals.rev_total.push(rev);
        totals.cogs_total.push(cogs);
        totals.gross_profit.push(gross);
        totals.opex_total.push(opex);
        totals.other_income.push(other_i);
        totals.other_expense.push(other_e);
        totals.net_profit.push(net);
        totals.gm_pct.push(gm);
    }

    totals
}

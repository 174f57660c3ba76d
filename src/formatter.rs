//! Renders a P&L document as a stable, human-readable text block.
//!
//! This text is the sole channel through which report data reaches the
//! external reasoning collaborator, so the layout is kept deliberately
//! boring: a period header, the month row, then one line per account under
//! each category heading.

use crate::money::format_currency;
use crate::schema::{AccountSeries, ProfitAndLoss};

pub fn format_financial_data(pl: &ProfitAndLoss) -> String {
    let ccy = pl.period.currency.as_str();
    let mut out = format!(
        "Financial Report Analysis for {} to {} ({})\n\n",
        pl.period.start, pl.period.end, ccy
    );

    out.push_str("MONTHLY DATA:\n");
    out.push_str(&format!("Months: {}\n\n", pl.months.join(" | ")));

    push_category(&mut out, "REVENUE:", &pl.revenue, ccy);
    push_category(&mut out, "\nCOST OF GOODS SOLD:", &pl.cogs, ccy);
    push_category(&mut out, "\nOPERATING EXPENSES:", &pl.opex, ccy);

    if !pl.other_income.is_empty() {
        push_category(&mut out, "\nOTHER INCOME:", &pl.other_income, ccy);
    }
    if !pl.other_expense.is_empty() {
        push_category(&mut out, "\nOTHER EXPENSES:", &pl.other_expense, ccy);
    }

    if let Some(budget) = &pl.budget {
        out.push_str("\nBUDGET COMPARISON:\n");
        out.push_str(&format!(
            "Budget Revenue Total: {}\n",
            join_values(&budget.revenue_total, ccy)
        ));
        out.push_str(&format!(
            "Budget Net Profit: {}\n",
            join_values(&budget.net_profit, ccy)
        ));
    }

    out
}

fn push_category(out: &mut String, heading: &str, series: &AccountSeries, ccy: &str) {
    out.push_str(heading);
    out.push('\n');
    for (account, values) in series {
        out.push_str(&format!("{account}: {}\n", join_values(values, ccy)));
    }
}

fn join_values(values: &[f64], ccy: &str) -> String {
    values
        .iter()
        .map(|v| format_currency(ccy, *v))
        .collect::<Vec<_>>()
        .join(" | ")
}

//! Generates AI commentary for the bundled demo report.
//!
//! Requires OPENAI_API_KEY (a .env file works). Run with:
//! `cargo run --example explain_report --features openai`

use anyhow::Result;
use pl_insights::{compute_totals, AnalystService, OpenAiClient, ProfitAndLoss};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let pl = ProfitAndLoss::load("demos/data/pl.json")?;
    let totals = compute_totals(&pl);
    let last = totals.last_index();
    println!(
        "Period {} to {} | latest net profit: {:.2} {}",
        pl.period.start, pl.period.end, totals.net_profit[last], pl.period.currency
    );

    let service = AnalystService::new(OpenAiClient::from_env()?);
    let commentary = service.explain(&pl).await;

    println!("\n{}\n", commentary.summary);
    for bullet in &commentary.bullets {
        println!("  - {bullet}");
    }

    Ok(())
}

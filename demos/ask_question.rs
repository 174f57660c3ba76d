//! Asks a free-text question about the bundled demo report.
//!
//! Run with:
//! `cargo run --example ask_question --features openai -- "Why did utilities increase?"`

use anyhow::Result;
use pl_insights::{AnalystService, OpenAiClient, ProfitAndLoss, QuestionHistory};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let question = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Why did utilities increase?".to_string());

    let pl = ProfitAndLoss::load("demos/data/pl.json")?;
    let service = AnalystService::new(OpenAiClient::from_env()?);

    let mut history = QuestionHistory::new();
    let answer = service.ask(&question, &pl).await;
    history.append(&question, &answer);

    println!("Q: {question}");
    println!("A: {answer}");
    println!("({} question(s) in session history)", history.len());

    Ok(())
}

//! Analyst prompts for the commentary and Q&A requests.

use crate::formatter::format_financial_data;
use crate::schema::ProfitAndLoss;

pub const SYSTEM_PROMPT_COMMENTARY: &str = "You are an expert financial analyst. \
Provide clear, actionable insights based on financial data. Always be specific \
with numbers and focus on business implications.";

pub const SYSTEM_PROMPT_QUESTION: &str = "You are an expert financial analyst. \
Answer questions about financial data with specific numbers and insights. If \
data is not available, clearly state this and suggest what information would \
be helpful.";

pub fn build_commentary_prompt(pl: &ProfitAndLoss) -> String {
    format!(
        "You are a financial analyst reviewing a Profit & Loss statement. \
Analyze the following financial data and provide:\n\n\
1. A comprehensive narrative summary (2-3 sentences) highlighting key \
performance trends, revenue changes, margin analysis, and overall financial health\n\
2. 3-4 bullet points with specific insights about the business performance\n\n\
Focus on month-over-month changes, identify key drivers of performance, and \
provide actionable insights. Be specific with numbers and percentages.\n\n\
{}\n\
Please respond in this JSON format:\n\
{{\n  \"summary\": \"Your narrative summary here\",\n  \"bullets\": [\"Bullet point 1\", \"Bullet point 2\", \"Bullet point 3\"]\n}}",
        format_financial_data(pl)
    )
}

pub fn build_question_prompt(question: &str, pl: &ProfitAndLoss) -> String {
    format!(
        "You are a financial analyst. A user is asking about the following \
financial data:\n\n{}\n\
User Question: \"{question}\"\n\n\
Please provide a specific, data-driven answer based on the financial \
information provided. If the question cannot be answered with the available \
data, explain what additional information would be needed. Be concise but thorough.",
        format_financial_data(pl)
    )
}

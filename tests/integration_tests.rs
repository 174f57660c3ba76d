use pl_insights::*;

const DEMO_JSON: &str = include_str!("../demos/data/pl.json");

fn demo_pl() -> ProfitAndLoss {
    ProfitAndLoss::from_json(DEMO_JSON).expect("demo document parses")
}

#[test]
fn test_demo_document_loads() {
    let pl = demo_pl();
    assert_eq!(pl.month_count(), 6);
    assert_eq!(pl.period.currency, "GBP");
    assert_eq!(pl.revenue.len(), 2);
    assert_eq!(pl.opex.len(), 5);
    assert!(pl.budget.is_some());
}

#[test]
fn test_aggregate_identities_hold_across_demo_data() {
    let totals = compute_totals(&demo_pl());
    for i in 0..totals.months.len() {
        assert_eq!(
            totals.gross_profit[i],
            totals.rev_total[i] - totals.cogs_total[i]
        );
        assert_eq!(
            totals.net_profit[i],
            totals.gross_profit[i] - totals.opex_total[i] + totals.other_income[i]
                - totals.other_expense[i]
        );
        assert!(totals.gm_pct[i].is_finite());
    }
}

#[test]
fn test_demo_june_totals() {
    let totals = compute_totals(&demo_pl());
    let last = totals.last_index();
    assert_eq!(totals.months[last], "Jun");
    assert_eq!(totals.rev_total[last], 68_800.0);
    assert_eq!(totals.cogs_total[last], 28_000.0);
    assert_eq!(totals.gross_profit[last], 40_800.0);
    assert_eq!(totals.opex_total[last], 24_590.0);
    assert_eq!(totals.net_profit[last], 16_255.0);
}

#[test]
fn test_commentary_names_the_demo_drivers() {
    let commentary = generate_commentary(&demo_pl());
    assert_eq!(commentary.bullets.len(), 3);
    assert_eq!(commentary.bullets[0], "Revenue up 6.8% month-on-month.");
    assert!(commentary.summary.contains("Overall revenue for Jun was £68,800"));
    // Product Sales gains £3,700 May-to-June, the largest revenue move.
    assert!(commentary.summary.contains("Product Sales rose by £3,700."));
    // Payroll and Marketing tie at +£700; the first account in document
    // order must win.
    assert!(commentary.summary.contains("Payroll increased by £700."));
}

#[test]
fn test_question_answers_over_demo_data() {
    let pl = demo_pl();
    assert_eq!(
        answer_question("Why did utilities increase?", &pl),
        "Utilities increased by £320 month-on-month (from £920 to £1,240). \
         The dataset does not explain the cause."
    );
    assert_eq!(
        answer_question("What is the gross margin?", &pl),
        "Gross margin in Jun is 59.3%."
    );
    assert_eq!(
        answer_question("What is the revenue?", &pl),
        "Revenue in Jun: £68,800."
    );
    assert_eq!(answer_question("Who is the CFO?", &pl), NOT_AVAILABLE);
}

#[test]
fn test_formatted_data_covers_every_account() {
    let pl = demo_pl();
    let text = format_financial_data(&pl);
    for account in pl
        .revenue
        .keys()
        .chain(pl.cogs.keys())
        .chain(pl.opex.keys())
        .chain(pl.other_income.keys())
        .chain(pl.other_expense.keys())
    {
        assert!(text.contains(account.as_str()), "missing account {account}");
    }
    assert!(text.contains("BUDGET COMPARISON:"));
}

#[test]
fn test_model_response_normalization_pipeline() {
    // Structured response passes through untouched.
    let structured = parse_commentary(
        r#"{"summary":"Revenue grew 7% on strong product sales.","bullets":["Margin held at 59%"]}"#,
    )
    .normalize();
    assert_eq!(structured.bullets, vec!["Margin held at 59%".to_string()]);

    // Free text is split into summary and bullets.
    let unstructured = parse_commentary(
        "The business delivered steady growth with margins holding near sixty percent.\n\
         - Product sales were the main driver\n\
         - Utilities costs crept upward",
    )
    .normalize();
    assert!(unstructured.summary.starts_with("The business delivered"));
    assert_eq!(unstructured.bullets.len(), 2);
}

#[test]
fn test_error_payload_shape() {
    let payload = ErrorResponse {
        error: "Failed to generate commentary".to_string(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["error"], "Failed to generate commentary");

    let request = QuestionRequest {
        question: "What is the revenue?".to_string(),
        pl: demo_pl(),
    };
    let round_trip: QuestionRequest =
        serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
    assert_eq!(round_trip.question, request.question);
    assert_eq!(round_trip.pl, request.pl);
}

#[test]
fn test_history_session_flow() {
    let pl = demo_pl();
    let mut history = QuestionHistory::new();

    let first = history.append(
        "Why did utilities increase?",
        answer_question("Why did utilities increase?", &pl),
    );
    history.append("What is the revenue?", answer_question("What is the revenue?", &pl));
    assert_eq!(history.len(), 2);
    assert_eq!(history.latest().unwrap().question, "What is the revenue?");

    assert!(history.delete(first));
    assert_eq!(history.len(), 1);
    history.clear();
    assert!(history.is_empty());
}

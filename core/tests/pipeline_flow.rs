mod common;

use common::{empty_dataset, pipeline_with, plan_json, transactions_dataset, ScriptedBackend};
use insightx_core::api::PlanningError;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn partial_failure_never_aborts_other_tasks() {
    let dataset = transactions_dataset().await;
    let backend = ScriptedBackend::new([plan_json(&[
        (
            "Failed count",
            "SELECT COUNT(*) AS failed FROM transactions WHERE transaction_status = 'FAILED'",
        ),
        ("Cleanup", "DELETE FROM transactions"),
        (
            "Total amount",
            "SELECT SUM(amount_inr) AS total FROM transactions",
        ),
    ])]);

    let unified = pipeline_with(dataset, backend)
        .run_analysis("how healthy are weekend payments?")
        .await
        .unwrap();

    assert_eq!(unified.tasks.len(), 3);

    assert_eq!(unified.tasks[0].task_name, "Failed count");
    assert!(unified.tasks[0].error().is_none());
    assert_eq!(unified.tasks[0].rows()[0]["failed"], 4);

    assert_eq!(unified.tasks[1].task_name, "Cleanup");
    assert!(unified.tasks[1].rows().is_empty());
    let reason = unified.tasks[1].error().expect("task 2 must carry an error");
    assert!(!reason.is_empty());

    assert_eq!(unified.tasks[2].task_name, "Total amount");
    assert!(unified.tasks[2].error().is_none());
    assert_eq!(unified.tasks[2].rows()[0]["total"], 2140.0);
}

#[tokio::test]
async fn task_order_is_preserved_end_to_end() {
    let dataset = transactions_dataset().await;
    let specs: Vec<(String, String)> = (0..4)
        .map(|i| (format!("task-{i}"), format!("SELECT {i} AS n")))
        .collect();
    let specs_ref: Vec<(&str, &str)> = specs
        .iter()
        .map(|(n, s)| (n.as_str(), s.as_str()))
        .collect();
    let backend = ScriptedBackend::new([plan_json(&specs_ref)]);

    let unified = pipeline_with(dataset, backend)
        .run_analysis("four independent things")
        .await
        .unwrap();

    let names: Vec<&str> = unified.tasks.iter().map(|t| t.task_name.as_str()).collect();
    assert_eq!(names, ["task-0", "task-1", "task-2", "task-3"]);
}

#[tokio::test]
async fn planner_overflow_is_truncated_to_four() {
    let dataset = transactions_dataset().await;
    let specs: Vec<(String, String)> = (0..6)
        .map(|i| (format!("task-{i}"), format!("SELECT {i} AS n")))
        .collect();
    let specs_ref: Vec<(&str, &str)> = specs
        .iter()
        .map(|(n, s)| (n.as_str(), s.as_str()))
        .collect();
    let backend = ScriptedBackend::new([plan_json(&specs_ref)]);

    let unified = pipeline_with(dataset, backend)
        .run_analysis("an over-eager plan")
        .await
        .unwrap();

    assert_eq!(unified.tasks.len(), 4);
    assert_eq!(unified.tasks[3].task_name, "task-3");
}

#[tokio::test]
async fn planning_failure_produces_no_unified_result() {
    let dataset = transactions_dataset().await;
    let backend = ScriptedBackend::new([r#"{"tasks":[]}"#.to_string()]);

    let err = pipeline_with(dataset, backend)
        .run_analysis("anything")
        .await
        .unwrap_err();
    assert!(matches!(err, PlanningError::Empty));
}

#[tokio::test]
async fn empty_dataset_is_not_an_error() {
    let dataset = empty_dataset().await;
    let backend = ScriptedBackend::new([plan_json(&[(
        "By category",
        "SELECT merchant_category, SUM(amount_inr) AS total FROM transactions GROUP BY merchant_category",
    )])]);

    let unified = pipeline_with(dataset, backend)
        .run_analysis("totals by category")
        .await
        .unwrap();

    assert_eq!(unified.tasks.len(), 1);
    assert!(unified.tasks[0].error().is_none());
    assert!(unified.tasks[0].rows().is_empty());
}

#[tokio::test]
async fn unified_json_shape_is_fixed_across_outcomes() {
    let dataset = transactions_dataset().await;
    let backend = ScriptedBackend::new([plan_json(&[
        ("ok", "SELECT 1 AS n"),
        ("bad", "DROP TABLE transactions"),
    ])]);

    let unified = pipeline_with(dataset, backend)
        .run_analysis("shape check")
        .await
        .unwrap();

    let v = serde_json::to_value(&unified).unwrap();
    for task in v["tasks"].as_array().unwrap() {
        let obj = task.as_object().unwrap();
        let keys: Vec<&String> = obj.keys().collect();
        assert_eq!(
            keys,
            ["task_name", "task_description", "sql_query", "rows", "error"]
        );
        assert!(obj["rows"].is_array());
    }
    assert!(v["tasks"][0]["error"].is_null());
    assert_eq!(v["tasks"][1]["rows"], serde_json::json!([]));
    assert!(v["tasks"][1]["error"].is_string());
}

#[tokio::test]
async fn weekend_failure_question_end_to_end() {
    let dataset = transactions_dataset().await;
    let backend = ScriptedBackend::new([
        plan_json(&[(
            "Top categories by failed weekend amount",
            "SELECT merchant_category, SUM(amount_inr) AS failed_amount \
             FROM transactions \
             WHERE is_weekend = 1 AND transaction_status = 'FAILED' \
             GROUP BY merchant_category \
             ORDER BY failed_amount DESC \
             LIMIT 3",
        )]),
        "Travel leads weekend failures by merchant categories, with 900 INR at risk.".to_string(),
    ]);

    let report = pipeline_with(dataset, backend.clone())
        .run("What are the top 3 merchant categories by failed amount on weekends?")
        .await
        .unwrap();

    let task = &report.response.tasks[0];
    assert!(task.error().is_none());
    assert!(task.rows().len() <= 3);
    assert_eq!(task.rows()[0]["merchant_category"], "Travel");
    assert_eq!(task.rows()[0]["failed_amount"], 900.0);

    let answer = report.answer.expect("narrative should be generated");
    assert!(answer.contains("merchant categories"));
    assert!(answer.contains("INR"));
    assert!(report.composition_error.is_none());
}

#[tokio::test]
async fn composition_failure_keeps_unified_result() {
    let dataset = transactions_dataset().await;
    // One response only: the plan. The composer call finds the queue empty.
    let backend = ScriptedBackend::new([plan_json(&[("ok", "SELECT 1 AS n")])]);

    let report = pipeline_with(dataset, backend)
        .run("question")
        .await
        .unwrap();

    assert!(report.answer.is_none());
    let reason = report
        .composition_error
        .expect("composition failure must be recorded");
    assert!(!reason.is_empty());
    assert_eq!(report.response.tasks.len(), 1);
    assert!(report.response.tasks[0].error().is_none());
}

#[tokio::test]
async fn composer_context_includes_task_errors() {
    let dataset = transactions_dataset().await;
    let backend = ScriptedBackend::new([
        plan_json(&[("bad", "DELETE FROM transactions")]),
        "One task could not be answered.".to_string(),
    ]);

    let report = pipeline_with(dataset, backend.clone())
        .run("question")
        .await
        .unwrap();
    assert!(report.answer.is_some());

    let requests = backend.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    let composer_context = &requests[1]
        .iter()
        .find(|m| m.role == "user")
        .expect("composer sends a user message")
        .content;
    assert!(
        composer_context.contains("only SELECT queries are permitted"),
        "per-task errors must be visible to the composer"
    );
}

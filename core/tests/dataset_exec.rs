mod common;

use std::io::Write;

use common::transactions_dataset;
use insightx_core::api::{execute, validate, Dataset};
use insightx_core::dataset::load_schema_description;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn executor_is_idempotent_over_an_unchanged_dataset() {
    let dataset = transactions_dataset().await;
    let query = validate(
        "SELECT merchant_category, SUM(amount_inr) AS total \
         FROM transactions GROUP BY merchant_category ORDER BY total DESC",
    )
    .unwrap();

    let first = execute(&dataset, &query).await.unwrap();
    let second = execute(&dataset, &query).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0]["merchant_category"], "Travel");
}

#[tokio::test]
async fn engine_failure_carries_the_engine_message() {
    let dataset = transactions_dataset().await;
    let query = validate("SELECT no_such_column FROM transactions").unwrap();

    let err = execute(&dataset, &query).await.unwrap_err();
    assert!(err.message.contains("no_such_column"));
}

#[tokio::test]
async fn row_keys_are_dataset_columns_in_engine_order() {
    let dataset = transactions_dataset().await;
    let columns = dataset.column_names();
    let query = validate("SELECT * FROM transactions LIMIT 2").unwrap();

    let rows = execute(&dataset, &query).await.unwrap();
    assert_eq!(rows.len(), 2);
    for row in &rows {
        for key in row.keys() {
            assert!(columns.contains(key), "unexpected column {key}");
        }
    }
    let keys: Vec<&String> = rows[0].keys().collect();
    assert_eq!(keys, columns.iter().collect::<Vec<&String>>());
}

#[tokio::test]
async fn csv_source_loads_and_describes_itself() {
    let mut file = tempfile::NamedTempFile::with_suffix(".csv").unwrap();
    writeln!(file, "merchant_category,amount_inr").unwrap();
    writeln!(file, "Food,120.5").unwrap();
    writeln!(file, "Travel,88.0").unwrap();
    file.flush().unwrap();

    let dataset = Dataset::from_csv(file.path().to_str().unwrap(), "transactions")
        .await
        .unwrap();
    assert_eq!(
        dataset.column_names(),
        vec!["merchant_category".to_string(), "amount_inr".to_string()]
    );

    // No notes file: the generated overview names the table and columns.
    let description = load_schema_description("does-not-exist.txt", &dataset);
    assert!(description.contains("transactions"));
    assert!(description.contains("merchant_category"));

    let query = validate("SELECT COUNT(*) AS n FROM transactions").unwrap();
    let rows = execute(&dataset, &query).await.unwrap();
    assert_eq!(rows[0]["n"], 2);
}

#[tokio::test]
async fn missing_csv_is_fatal_at_load() {
    let err = Dataset::from_csv("no/such/file.csv", "transactions")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

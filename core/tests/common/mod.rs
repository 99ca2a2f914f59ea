//! Shared fixtures: a scripted collaborator backend and in-memory datasets.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use datafusion::arrow::array::{Float64Array, Int64Array, StringArray};
use datafusion::arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use datafusion::arrow::record_batch::RecordBatch;
use insightx_core::api::{ChatBackend, ChatMessage, Composer, Dataset, LlmError, Pipeline, Planner};

/// Collaborator fake: hands out queued responses in order and records every
/// request it sees.
pub struct ScriptedBackend {
    responses: Mutex<VecDeque<String>>,
    pub requests: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedBackend {
    pub fn new<I: IntoIterator<Item = S>, S: Into<String>>(responses: I) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait::async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _temperature: f32,
    ) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(messages.to_vec());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(LlmError::EmptyCompletion)
    }
}

pub fn transactions_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("merchant_category", DataType::Utf8, false),
        Field::new("transaction_status", DataType::Utf8, false),
        Field::new("is_weekend", DataType::Int64, false),
        Field::new("amount_inr", DataType::Float64, false),
    ]))
}

/// A small payments table with weekend failures spread across categories.
pub async fn transactions_dataset() -> Arc<Dataset> {
    let batch = RecordBatch::try_new(
        transactions_schema(),
        vec![
            Arc::new(StringArray::from(vec![
                "Food", "Food", "Travel", "Travel", "Retail", "Retail", "Fuel",
            ])),
            Arc::new(StringArray::from(vec![
                "FAILED", "SUCCESS", "FAILED", "FAILED", "FAILED", "SUCCESS", "SUCCESS",
            ])),
            Arc::new(Int64Array::from(vec![1, 1, 1, 0, 1, 0, 1])),
            Arc::new(Float64Array::from(vec![
                250.0, 100.0, 900.0, 450.0, 300.0, 80.0, 60.0,
            ])),
        ],
    )
    .unwrap();

    Arc::new(
        Dataset::from_batches("transactions", transactions_schema(), vec![batch])
            .await
            .unwrap(),
    )
}

/// Valid schema, zero rows.
pub async fn empty_dataset() -> Arc<Dataset> {
    Arc::new(
        Dataset::from_batches(
            "transactions",
            transactions_schema(),
            vec![RecordBatch::new_empty(transactions_schema())],
        )
        .await
        .unwrap(),
    )
}

pub fn pipeline_with(dataset: Arc<Dataset>, backend: Arc<ScriptedBackend>) -> Pipeline {
    let planner = Planner::new(backend.clone(), 0.0);
    let composer = Composer::new(backend, 0.2);
    let schema_description =
        "Table `transactions` with columns merchant_category, transaction_status, is_weekend, amount_inr"
            .to_string();
    Pipeline::new(dataset, planner, composer, schema_description)
}

/// A plan response in the collaborator's JSON shape.
pub fn plan_json(tasks: &[(&str, &str)]) -> String {
    let tasks: Vec<serde_json::Value> = tasks
        .iter()
        .map(|(name, sql)| {
            serde_json::json!({
                "task_name": name,
                "task_description": format!("computes {name}"),
                "sql_query": sql,
            })
        })
        .collect();
    serde_json::json!({ "tasks": tasks }).to_string()
}

//! RecordBatch → JSON row conversion for the unified contract.
//!
//! Rows are ordered mappings (column → value) preserving the engine's column
//! and row order; every cell goes through the single [`scalar_to_json`]
//! funnel. Timestamps render as `%Y-%m-%d %H:%M:%S` so the contract stays
//! readable for non-technical consumers.

use chrono::DateTime;
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::scalar::ScalarValue;
use serde_json::{Map, Number, Value};

use crate::error::ExecutionError;

/// One result row: ordered column→value mapping.
pub type Row = Map<String, Value>;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert collected batches into rows, preserving column order and row
/// order across batches. No sorting, no truncation.
pub fn batches_to_rows(batches: &[RecordBatch]) -> Result<Vec<Row>, ExecutionError> {
    let mut rows = Vec::new();

    for batch in batches {
        let schema = batch.schema();
        let column_names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();

        for row_idx in 0..batch.num_rows() {
            let mut row = Row::new();
            for (col_idx, name) in column_names.iter().enumerate() {
                let scalar = ScalarValue::try_from_array(batch.column(col_idx), row_idx)
                    .map_err(|e| ExecutionError::new(e.to_string()))?;
                row.insert((*name).to_string(), scalar_to_json(&scalar));
            }
            rows.push(row);
        }
    }

    Ok(rows)
}

fn scalar_to_json(scalar: &ScalarValue) -> Value {
    match scalar {
        ScalarValue::Null => Value::Null,
        ScalarValue::Boolean(v) => v.map(Value::Bool).unwrap_or(Value::Null),
        ScalarValue::Utf8(v) | ScalarValue::LargeUtf8(v) | ScalarValue::Utf8View(v) => v
            .as_ref()
            .map(|s| Value::String(s.clone()))
            .unwrap_or(Value::Null),
        ScalarValue::Int8(v) => int_json(v.map(i64::from)),
        ScalarValue::Int16(v) => int_json(v.map(i64::from)),
        ScalarValue::Int32(v) => int_json(v.map(i64::from)),
        ScalarValue::Int64(v) => int_json(*v),
        ScalarValue::UInt8(v) => int_json(v.map(i64::from)),
        ScalarValue::UInt16(v) => int_json(v.map(i64::from)),
        ScalarValue::UInt32(v) => int_json(v.map(i64::from)),
        ScalarValue::UInt64(v) => v
            .map(|n| Value::Number(Number::from(n)))
            .unwrap_or(Value::Null),
        ScalarValue::Float32(v) => float_json(v.map(f64::from)),
        ScalarValue::Float64(v) => float_json(*v),
        ScalarValue::TimestampSecond(v, _) => {
            timestamp_json(v.and_then(|s| DateTime::from_timestamp(s, 0)))
        }
        ScalarValue::TimestampMillisecond(v, _) => {
            timestamp_json(v.and_then(DateTime::from_timestamp_millis))
        }
        ScalarValue::TimestampMicrosecond(v, _) => {
            timestamp_json(v.and_then(DateTime::from_timestamp_micros))
        }
        ScalarValue::TimestampNanosecond(v, _) => {
            timestamp_json(v.map(DateTime::from_timestamp_nanos))
        }
        ScalarValue::Date32(v) => v
            .and_then(|days| DateTime::from_timestamp(i64::from(days) * 86_400, 0))
            .map(|dt| Value::String(dt.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
        ScalarValue::Date64(v) => v
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| Value::String(dt.format("%Y-%m-%d").to_string()))
            .unwrap_or(Value::Null),
        other => {
            // Uncommon engine types (decimals, intervals) still need a stable
            // representation in the contract.
            if other.is_null() {
                Value::Null
            } else {
                Value::String(other.to_string())
            }
        }
    }
}

fn int_json(v: Option<i64>) -> Value {
    v.map(|n| Value::Number(Number::from(n)))
        .unwrap_or(Value::Null)
}

fn float_json(v: Option<f64>) -> Value {
    // NaN / infinity have no JSON number form.
    v.and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn timestamp_json(dt: Option<DateTime<chrono::Utc>>) -> Value {
    dt.map(|dt| Value::String(dt.format(TIMESTAMP_FORMAT).to_string()))
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use datafusion::arrow::array::{Float64Array, Int64Array, StringArray};
    use datafusion::arrow::datatypes::{DataType, Field, Schema};

    use super::*;

    fn sample_batch() -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("merchant_category", DataType::Utf8, false),
            Field::new("failed_amount", DataType::Float64, false),
            Field::new("txn_count", DataType::Int64, false),
        ]));
        RecordBatch::try_new(
            schema,
            vec![
                Arc::new(StringArray::from(vec!["Food", "Travel"])),
                Arc::new(Float64Array::from(vec![120.5, 88.0])),
                Arc::new(Int64Array::from(vec![3, 2])),
            ],
        )
        .unwrap()
    }

    #[test]
    fn preserves_column_order_and_values() {
        let rows = batches_to_rows(&[sample_batch()]).unwrap();
        assert_eq!(rows.len(), 2);

        let keys: Vec<&String> = rows[0].keys().collect();
        assert_eq!(keys, ["merchant_category", "failed_amount", "txn_count"]);
        assert_eq!(rows[0]["merchant_category"], "Food");
        assert_eq!(rows[1]["txn_count"], 2);
    }

    #[test]
    fn empty_batch_list_yields_no_rows() {
        let rows = batches_to_rows(&[]).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn nan_becomes_null() {
        assert_eq!(float_json(Some(f64::NAN)), Value::Null);
        assert_eq!(float_json(Some(1.5)), Value::Number(Number::from_f64(1.5).unwrap()));
    }

    #[test]
    fn timestamp_renders_human_readable() {
        let v = scalar_to_json(&ScalarValue::TimestampSecond(Some(0), None));
        assert_eq!(v, Value::String("1970-01-01 00:00:00".to_string()));
    }
}

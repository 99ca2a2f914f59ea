use std::path::Path;

use super::load::Dataset;

/// Resolve the schema description supplied as planning context.
///
/// The notes file, when present, wins verbatim: it carries semantics
/// (valid categorical values, units) that the physical schema cannot.
/// Otherwise a column/type listing generated from the table schema is used
/// so planning still has accurate column names to work with.
pub fn load_schema_description(path: &str, dataset: &Dataset) -> String {
    if Path::new(path).exists() {
        match std::fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => return text,
            Ok(_) => {
                tracing::warn!(
                    target: "insightx.dataset",
                    stage = "schema.load",
                    path = %path,
                    "schema notes file is empty; falling back to generated overview"
                );
            }
            Err(e) => {
                tracing::warn!(
                    target: "insightx.dataset",
                    stage = "schema.load",
                    path = %path,
                    error = %e,
                    "schema notes file unreadable; falling back to generated overview"
                );
            }
        }
    }
    schema_overview(dataset)
}

/// Plain-text listing of the table's columns and types.
pub fn schema_overview(dataset: &Dataset) -> String {
    let mut out = format!(
        "Table `{}` with columns:\n",
        dataset.table_name()
    );
    for field in dataset.schema().fields() {
        out.push_str(&format!("- {} ({})\n", field.name(), field.data_type()));
    }
    out
}

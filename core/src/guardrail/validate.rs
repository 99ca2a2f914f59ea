use std::sync::OnceLock;

use regex::Regex;

use crate::error::GuardrailRejection;

/// A query string that has passed the read-only policy. The field is private
/// and the only constructor is [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuery(String);

impl ValidatedQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ValidatedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Statement-altering keywords rejected anywhere in the text, matched as
/// whole words so identifiers like `created_at` or `dataset` pass. The
/// baseline DML/DDL set is extended with the engine's statement vocabulary.
const DENYLIST: &[&str] = &[
    "INSERT", "UPDATE", "DELETE", "DROP", "ALTER", "CREATE", "ATTACH", "COPY", "PRAGMA", "EXEC",
    "CALL", "TRUNCATE", "MERGE", "GRANT", "REVOKE", "VACUUM", "INSTALL", "EXPORT", "SET",
];

fn denylist_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r"(?i)\b(?:{})\b", DENYLIST.join("|"));
        Regex::new(&pattern).expect("denylist pattern is valid")
    })
}

/// Validate a candidate query against the read-only policy.
///
/// Normalizes (trims whitespace, strips a single trailing `;`) and rejects:
/// - anything that does not begin with the keyword `SELECT` (leading
///   comments do not count);
/// - any denylisted statement keyword anywhere in the text;
/// - any remaining semicolon (multi-statement injection).
///
/// Rejection reasons are short and suitable for direct inclusion in a
/// task's `error` field.
pub fn validate(query_text: &str) -> Result<ValidatedQuery, GuardrailRejection> {
    let mut normalized = query_text.trim();
    if let Some(stripped) = normalized.strip_suffix(';') {
        normalized = stripped.trim_end();
    }

    if normalized.is_empty() {
        return Err(GuardrailRejection::new("empty query"));
    }

    if !starts_with_select(normalized) {
        return Err(GuardrailRejection::new(
            "only SELECT queries are permitted",
        ));
    }

    if let Some(m) = denylist_regex().find(normalized) {
        return Err(GuardrailRejection::new(format!(
            "forbidden keyword '{}' in query",
            m.as_str().to_uppercase()
        )));
    }

    if normalized.contains(';') {
        return Err(GuardrailRejection::new(
            "multiple statements are not permitted",
        ));
    }

    Ok(ValidatedQuery(normalized.to_string()))
}

fn starts_with_select(text: &str) -> bool {
    let Some(prefix) = text.get(..6) else {
        return false;
    };
    if !prefix.eq_ignore_ascii_case("select") {
        return false;
    }
    // Word boundary: "SELECTX ..." is not a SELECT statement.
    match text.as_bytes().get(6) {
        None => true,
        Some(b) => !b.is_ascii_alphanumeric() && *b != b'_',
    }
}

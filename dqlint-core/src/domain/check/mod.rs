// dqlint-core/src/domain/check/mod.rs

pub mod comparison;
pub mod condition;
pub mod severity;

// Re-exports
pub use comparison::ComparisonType;
pub use condition::{Comparator, ConditionError, NumericCondition};
pub use severity::Severity;

use serde_json::Value;

use crate::domain::check::comparison::check_coupling;

/// Fields every check definition must carry.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "check_id",
    "category",
    "sql_query",
    "description",
    "severity",
    "expected_output",
    "comparison_type",
    "active",
];

/// Fields a check definition may carry.
pub const OPTIONAL_FIELDS: [&str; 2] = ["impacted_downstream", "tags"];

/// JSON kind of a value, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Outcome of scanning a single check definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordScan {
    /// The record's `check_id`, or `UNKNOWN_CHECK_<index>` when unusable.
    pub check_id: String,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl RecordScan {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scan one raw record against the check schema.
///
/// Every rule runs independently: a missing field never suppresses the type
/// checks on the fields that are present. All findings are collected, none
/// abort the scan.
pub fn scan_record(raw: &Value, index: usize) -> RecordScan {
    let Some(check) = raw.as_object() else {
        return RecordScan {
            check_id: format!("UNKNOWN_CHECK_{}", index),
            errors: vec![format!(
                "Check at index {} must be a dictionary, got {}",
                index,
                value_kind(raw)
            )],
            warnings: vec![],
        };
    };

    let check_id = match check.get("check_id") {
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
        None => format!("UNKNOWN_CHECK_{}", index),
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Presence: one error listing every missing field together
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !check.contains_key(**field))
        .copied()
        .collect();
    if !missing.is_empty() {
        errors.push(format!("Missing required fields: {}", missing.join(", ")));
    }

    // Identity fields: non-empty strings
    for field in ["check_id", "category", "sql_query"] {
        if let Some(value) = check.get(field) {
            if !value.as_str().is_some_and(|s| !s.trim().is_empty()) {
                errors.push(format!("{} must be a non-empty string", field));
            }
        }
    }

    // Description may be empty, but must be a string
    if let Some(value) = check.get("description") {
        if !value.is_string() {
            errors.push(format!(
                "description must be a string, got {}",
                value_kind(value)
            ));
        }
    }

    if let Some(value) = check.get("severity") {
        match value.as_str() {
            None => errors.push(format!(
                "severity must be a string, got {}",
                value_kind(value)
            )),
            Some(raw_severity) => {
                if raw_severity.parse::<Severity>().is_err() {
                    errors.push(format!(
                        "Invalid severity '{}'. Must be one of: {}",
                        raw_severity,
                        Severity::allowed()
                    ));
                }
            }
        }
    }

    // Coupling only runs when both halves of the pair are present; an absent
    // half is already covered by the presence check above.
    if let (Some(comparison_type), Some(expected)) =
        (check.get("comparison_type"), check.get("expected_output"))
    {
        errors.extend(check_coupling(comparison_type, expected));
    }

    if let Some(value) = check.get("active") {
        if !value.is_boolean() {
            errors.push(format!(
                "active must be a boolean, got {}",
                value_kind(value)
            ));
        }
    }

    // Optional fields: wrong shape is only worth a warning
    for field in OPTIONAL_FIELDS {
        if let Some(value) = check.get(field) {
            if !value.is_array() {
                warnings.push(format!(
                    "{} should be a list, got {}",
                    field,
                    value_kind(value)
                ));
            }
        }
    }

    let unknown: Vec<&str> = check
        .keys()
        .map(String::as_str)
        .filter(|key| !REQUIRED_FIELDS.contains(key) && !OPTIONAL_FIELDS.contains(key))
        .collect();
    if !unknown.is_empty() {
        warnings.push(format!(
            "Unknown fields (will be ignored): {}",
            unknown.join(", ")
        ));
    }

    RecordScan {
        check_id,
        errors,
        warnings,
    }
}

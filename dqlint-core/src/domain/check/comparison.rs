// dqlint-core/src/domain/check/comparison.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::check::condition::{ConditionError, NumericCondition};
use crate::domain::check::value_kind;

/// How a check's query result is compared to `expected_output`.
///
/// Each variant fixes the shape `expected_output` must have, so shape
/// validation is a match on the variant rather than a chain of string
/// comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
    /// `expected_output` is a numeric condition string ("0", ">=10", ...).
    NumericCondition,
    /// `expected_output` is a non-empty list of values.
    SetMatch,
    /// `expected_output` is a non-empty list of values that must not appear.
    NotInResult,
    /// `expected_output` is a non-empty list of row objects.
    RowMatch,
}

impl ComparisonType {
    pub const ALL: [ComparisonType; 4] = [
        Self::NumericCondition,
        Self::SetMatch,
        Self::NotInResult,
        Self::RowMatch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NumericCondition => "numeric_condition",
            Self::SetMatch => "set_match",
            Self::NotInResult => "not_in_result",
            Self::RowMatch => "row_match",
        }
    }

    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Check that `expected` has the shape this comparison requires.
    /// Returns one message per violated rule.
    pub fn check_expected(&self, expected: &Value) -> Vec<String> {
        match self {
            Self::NumericCondition => check_numeric_condition(expected),
            Self::SetMatch | Self::NotInResult => check_value_list(*self, expected),
            Self::RowMatch => check_row_list(expected),
        }
    }
}

impl fmt::Display for ComparisonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ComparisonType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown comparison type: {}", s))
    }
}

/// Validate the `comparison_type`/`expected_output` pair of a check.
///
/// An unknown comparison type yields exactly one error and no shape checks.
pub fn check_coupling(comparison_type: &Value, expected: &Value) -> Vec<String> {
    let Some(raw) = comparison_type.as_str() else {
        return vec![format!(
            "comparison_type must be a string, got {}",
            value_kind(comparison_type)
        )];
    };

    match raw.parse::<ComparisonType>() {
        Ok(kind) => kind.check_expected(expected),
        Err(_) => vec![format!(
            "Invalid comparison_type '{}'. Must be one of: {}",
            raw,
            ComparisonType::allowed()
        )],
    }
}

fn check_numeric_condition(expected: &Value) -> Vec<String> {
    let Some(text) = expected.as_str() else {
        return vec![format!(
            "For comparison_type 'numeric_condition', expected_output must be a string, got {}",
            value_kind(expected)
        )];
    };

    match text.parse::<NumericCondition>() {
        Ok(_) => vec![],
        Err(ConditionError::Empty) => vec![
            "For comparison_type 'numeric_condition', expected_output cannot be empty".to_string(),
        ],
        Err(ConditionError::InvalidNumber { .. }) => vec![format!(
            "For comparison_type 'numeric_condition', expected_output '{}' has invalid numeric value after operator",
            text
        )],
        Err(ConditionError::NotANumber(_)) => vec![format!(
            "For comparison_type 'numeric_condition', expected_output '{}' must be a valid number or condition (e.g. '0', '>=10')",
            text
        )],
    }
}

fn check_value_list(kind: ComparisonType, expected: &Value) -> Vec<String> {
    match expected.as_array() {
        None => vec![format!(
            "For comparison_type '{}', expected_output must be a list, got {}",
            kind,
            value_kind(expected)
        )],
        Some(items) if items.is_empty() => vec![format!(
            "For comparison_type '{}', expected_output list cannot be empty",
            kind
        )],
        Some(_) => vec![],
    }
}

fn check_row_list(expected: &Value) -> Vec<String> {
    let Some(items) = expected.as_array() else {
        return vec![format!(
            "For comparison_type 'row_match', expected_output must be a list, got {}",
            value_kind(expected)
        )];
    };
    if items.is_empty() {
        return vec![
            "For comparison_type 'row_match', expected_output list cannot be empty".to_string(),
        ];
    }

    // Only the first offending element is reported
    items
        .iter()
        .enumerate()
        .find(|(_, item)| !item.is_object())
        .map(|(index, item)| {
            vec![format!(
                "For comparison_type 'row_match', expected_output must be a list of objects. \
                 Item at index {} is {}, not a dictionary",
                index,
                value_kind(item)
            )]
        })
        .unwrap_or_default()
}

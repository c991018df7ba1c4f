// dqlint-core/src/domain/check/condition.rs

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operator accepted in a numeric condition.
///
/// `ALL` lists the tokens longest first so that `>=` is never tokenized as
/// `>` followed by `=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Ge,
    Le,
    Eq,
    Ne,
    Gt,
    Lt,
}

impl Comparator {
    pub const ALL: [Comparator; 6] = [
        Self::Ge,
        Self::Le,
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Lt,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("numeric condition cannot be empty")]
    Empty,

    #[error("invalid numeric value '{value}' after operator '{operator}'")]
    InvalidNumber {
        operator: &'static str,
        value: String,
    },

    #[error("'{0}' is not a number or a comparison (e.g. '0', '>=10')")]
    NotANumber(String),
}

/// A parsed numeric condition: an optional comparator token immediately
/// followed by a float literal. A bare number means strict equality against
/// the query result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericCondition {
    pub comparator: Option<Comparator>,
    pub value: f64,
}

impl FromStr for NumericCondition {
    type Err = ConditionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConditionError::Empty);
        }

        if let Some(comparator) = Comparator::ALL
            .iter()
            .find(|c| trimmed.starts_with(c.token()))
        {
            let literal = trimmed[comparator.token().len()..].trim();
            let value = literal
                .parse::<f64>()
                .map_err(|_| ConditionError::InvalidNumber {
                    operator: comparator.token(),
                    value: literal.to_string(),
                })?;
            return Ok(Self {
                comparator: Some(*comparator),
                value,
            });
        }

        let value = trimmed
            .parse::<f64>()
            .map_err(|_| ConditionError::NotANumber(trimmed.to_string()))?;
        Ok(Self {
            comparator: None,
            value,
        })
    }
}

//! Filter value shapes and their validation.
//!
//! A predicate's `val` is one of three shapes: a single literal, a list of
//! literals, or a top-N descriptor restricting the filter to the leading N
//! values of the dimension by some metric. The resolver classifies the shape
//! and checks every literal against the dimension's value domain.

use crate::error::ValidationError;
use crate::metric::Metric;
use crate::registry::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar filter literal as it appears in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => f.write_str("null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => f.write_str(s),
        }
    }
}

/// Sort half of a top-N descriptor. The fields stay loosely typed at the
/// serde layer so validation can name the exact offending value instead of
/// surfacing a deserialization error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortConfig {
    #[serde(rename = "sortDimension")]
    pub sort_dimension: String,
    pub ordering: String,
}

/// A `{limit, sortedOn}` value requesting only the top N dimension values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopNSpec {
    pub limit: serde_json::Number,
    #[serde(rename = "sortedOn")]
    pub sorted_on: SortConfig,
}

impl TopNSpec {
    /// The limit as a positive integer, if it is one.
    pub fn positive_limit(&self) -> Option<i64> {
        self.limit.as_i64().filter(|n| *n > 0)
    }
}

/// The value of a filter predicate: literal, list, or top-N descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    TopN(TopNSpec),
    Many(Vec<Literal>),
    Single(Literal),
}

impl FilterValue {
    pub fn is_top_n(&self) -> bool {
        matches!(self, FilterValue::TopN(_))
    }
}

/// Classified shape of a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Single,
    Many,
    TopN,
}

/// Validate a predicate value against its dimension and classify its shape.
///
/// Free-form dimensions accept any literal; enum dimensions require every
/// literal (single or listed) to belong to their closed value set. Top-N
/// descriptors are checked structurally: positive integer limit, metric sort
/// dimension, Asc/Desc ordering.
pub fn resolve(dimension: &Dimension, value: &FilterValue) -> Result<ValueShape, ValidationError> {
    match value {
        FilterValue::TopN(spec) => {
            if spec.positive_limit().is_none() {
                return Err(ValidationError::InvalidTopNLimit {
                    field: dimension.name.to_string(),
                    limit: spec.limit.to_string(),
                });
            }
            if spec.sorted_on.sort_dimension.parse::<Metric>().is_err() {
                return Err(ValidationError::InvalidTopNSortDimension {
                    field: dimension.name.to_string(),
                    sort_dimension: spec.sorted_on.sort_dimension.clone(),
                });
            }
            if spec.sorted_on.ordering != "Asc" && spec.sorted_on.ordering != "Desc" {
                return Err(ValidationError::InvalidTopNOrdering {
                    field: dimension.name.to_string(),
                    ordering: spec.sorted_on.ordering.clone(),
                });
            }
            Ok(ValueShape::TopN)
        }
        FilterValue::Many(literals) => {
            if literals.is_empty() {
                return Err(ValidationError::EmptyValueList {
                    field: dimension.name.to_string(),
                });
            }
            for literal in literals {
                check_literal(dimension, literal)?;
            }
            Ok(ValueShape::Many)
        }
        FilterValue::Single(literal) => {
            check_literal(dimension, literal)?;
            Ok(ValueShape::Single)
        }
    }
}

fn check_literal(dimension: &Dimension, literal: &Literal) -> Result<(), ValidationError> {
    if dimension.values.contains(literal) {
        Ok(())
    } else {
        Err(ValidationError::ValueOutOfDomain {
            field: dimension.name.to_string(),
            value: literal.to_string(),
        })
    }
}

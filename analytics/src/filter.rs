//! Recursive AND/OR filter trees over field predicates.
//!
//! The tree is descriptive, not executable: it is validated here and then
//! shipped to the analytics backend verbatim, so left/right ordering carries
//! no evaluation semantics. Children are structurally non-optional; an
//! absent filter is expressed as `Option<Filter>` at the payload level, not
//! as an empty node.

use crate::error::ValidationError;
use crate::registry::DomainProfile;
use crate::value::{self, FilterValue, ValueShape};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison applied by a single predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    In,
    NotIn,
    Greater,
    GreaterThanEqual,
    LessThanEqual,
    Less,
}

impl Condition {
    /// Ordering comparisons only make sense against a single literal.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Condition::Greater
                | Condition::GreaterThanEqual
                | Condition::LessThanEqual
                | Condition::Less
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::In => "In",
            Condition::NotIn => "NotIn",
            Condition::Greater => "Greater",
            Condition::GreaterThanEqual => "GreaterThanEqual",
            Condition::LessThanEqual => "LessThanEqual",
            Condition::Less => "Less",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `{field, condition, val}` restriction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPredicate {
    pub field: String,
    pub condition: Condition,
    pub val: FilterValue,
}

impl FilterPredicate {
    /// Validate this predicate against a domain profile: the field must be a
    /// known, non-time dimension of the domain, the value must fit the
    /// field's value domain, and ordering conditions take single literals.
    pub fn validate(&self, profile: &DomainProfile) -> Result<(), ValidationError> {
        if profile.is_time_dimension(&self.field) {
            return Err(ValidationError::TimeDimensionFilter {
                field: self.field.clone(),
            });
        }

        let dimension =
            profile
                .dimension(&self.field)
                .ok_or_else(|| ValidationError::UnknownDimension {
                    field: self.field.clone(),
                    domain: profile.name,
                })?;

        let shape = value::resolve(dimension, &self.val)?;

        if self.condition.is_ordering() && shape != ValueShape::Single {
            return Err(ValidationError::ConditionValueMismatch {
                field: self.field.clone(),
                condition: self.condition.to_string(),
            });
        }

        Ok(())
    }
}

/// Two subtrees joined by a combinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedFilter {
    pub left: Filter,
    pub right: Filter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AndFilter {
    #[serde(rename = "and")]
    pub and: Box<CombinedFilter>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrFilter {
    #[serde(rename = "or")]
    pub or: Box<CombinedFilter>,
}

/// A filter tree: either a leaf predicate or an AND/OR over two subtrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Filter {
    And(AndFilter),
    Or(OrFilter),
    Leaf(FilterPredicate),
}

impl Filter {
    /// Validate the whole tree: every leaf individually, plus the tree-wide
    /// rule that at most one leaf may carry a top-N descriptor (sorting and
    /// limiting are request-level concepts, not per-branch ones).
    pub fn validate(&self, profile: &DomainProfile) -> Result<(), ValidationError> {
        let top_n = self.count_top_n();
        if top_n > 1 {
            return Err(ValidationError::MultipleTopNSpecs { count: top_n });
        }
        self.validate_leaves(profile)
    }

    fn validate_leaves(&self, profile: &DomainProfile) -> Result<(), ValidationError> {
        match self {
            Filter::And(node) => {
                node.and.left.validate_leaves(profile)?;
                node.and.right.validate_leaves(profile)
            }
            Filter::Or(node) => {
                node.or.left.validate_leaves(profile)?;
                node.or.right.validate_leaves(profile)
            }
            Filter::Leaf(predicate) => predicate.validate(profile),
        }
    }

    /// Number of top-N descriptors across the whole tree.
    pub fn count_top_n(&self) -> usize {
        match self {
            Filter::And(node) => node.and.left.count_top_n() + node.and.right.count_top_n(),
            Filter::Or(node) => node.or.left.count_top_n() + node.or.right.count_top_n(),
            Filter::Leaf(predicate) => usize::from(predicate.val.is_top_n()),
        }
    }

    /// Whether some leaf restricts the result to exactly one row.
    pub fn has_single_row_limit(&self) -> bool {
        match self {
            Filter::And(node) => {
                node.and.left.has_single_row_limit() || node.and.right.has_single_row_limit()
            }
            Filter::Or(node) => {
                node.or.left.has_single_row_limit() || node.or.right.has_single_row_limit()
            }
            Filter::Leaf(predicate) => match &predicate.val {
                FilterValue::TopN(spec) => spec.positive_limit() == Some(1),
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::KV_ORDERS;
    use serde_json::json;

    fn filter(v: serde_json::Value) -> Filter {
        serde_json::from_value(v).unwrap()
    }

    fn top_n(limit: i64) -> serde_json::Value {
        json!({
            "limit": limit,
            "sortedOn": {"sortDimension": "order_with_transactions", "ordering": "Desc"}
        })
    }

    #[test]
    fn test_leaf_round_trip() {
        let f = filter(json!({
            "field": "payment_gateway",
            "condition": "In",
            "val": ["RAZORPAY"]
        }));
        assert!(matches!(f, Filter::Leaf(_)));
        f.validate(&KV_ORDERS).unwrap();

        let wire = serde_json::to_value(&f).unwrap();
        assert_eq!(wire["condition"], "In");
        assert_eq!(wire["val"], json!(["RAZORPAY"]));
    }

    #[test]
    fn test_and_wire_shape() {
        let f = filter(json!({
            "and": {
                "left": {"field": "payment_gateway", "condition": "In", "val": ["RAZORPAY"]},
                "right": {"field": "card_brand", "condition": "NotIn", "val": ["AMEX"]}
            }
        }));
        f.validate(&KV_ORDERS).unwrap();

        let wire = serde_json::to_value(&f).unwrap();
        assert!(wire.get("and").is_some());
        assert_eq!(wire["and"]["left"]["field"], "payment_gateway");
    }

    #[test]
    fn test_nested_tree_validates() {
        let f = filter(json!({
            "or": {
                "left": {
                    "and": {
                        "left": {"field": "payment_method_type", "condition": "In", "val": ["UPI"]},
                        "right": {"field": "emi", "condition": "In", "val": [true]}
                    }
                },
                "right": {"field": "order_status", "condition": "In", "val": ["SUCCESS"]}
            }
        }));
        f.validate(&KV_ORDERS).unwrap();
    }

    #[test]
    fn test_unknown_dimension_rejected() {
        let f = filter(json!({
            "field": "not_a_dimension",
            "condition": "In",
            "val": ["x"]
        }));
        let err = f.validate(&KV_ORDERS).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownDimension { .. }));
    }

    #[test]
    fn test_enum_value_out_of_domain_rejected() {
        let f = filter(json!({
            "field": "payment_gateway",
            "condition": "In",
            "val": ["RAZORPAY", "NOT_A_GATEWAY"]
        }));
        let err = f.validate(&KV_ORDERS).unwrap_err();
        assert!(matches!(err, ValidationError::ValueOutOfDomain { .. }));
    }

    #[test]
    fn test_time_dimension_rejected_as_filter_field() {
        for field in ["order_created_at", "run_day_ist"] {
            let f = filter(json!({
                "field": field,
                "condition": "GreaterThanEqual",
                "val": "2024-01-01T00:00:00Z"
            }));
            let err = f.validate(&KV_ORDERS).unwrap_err();
            assert_eq!(
                err,
                ValidationError::TimeDimensionFilter {
                    field: field.into()
                }
            );
        }
    }

    #[test]
    fn test_single_top_n_allowed() {
        let f = filter(json!({
            "and": {
                "left": {"field": "error_message", "condition": "In", "val": top_n(3)},
                "right": {"field": "error_message", "condition": "NotIn", "val": [null]}
            }
        }));
        f.validate(&KV_ORDERS).unwrap();
        assert_eq!(f.count_top_n(), 1);
        assert!(!f.has_single_row_limit());
    }

    #[test]
    fn test_multiple_top_n_rejected() {
        let f = filter(json!({
            "and": {
                "left": {"field": "error_message", "condition": "In", "val": top_n(3)},
                "right": {"field": "bank", "condition": "In", "val": top_n(5)}
            }
        }));
        let err = f.validate(&KV_ORDERS).unwrap_err();
        assert_eq!(err, ValidationError::MultipleTopNSpecs { count: 2 });
    }

    #[test]
    fn test_single_row_limit_detection() {
        let f = filter(json!({
            "field": "error_message",
            "condition": "In",
            "val": top_n(1)
        }));
        f.validate(&KV_ORDERS).unwrap();
        assert!(f.has_single_row_limit());
    }

    #[test]
    fn test_ordering_condition_rejects_list_value() {
        let f = filter(json!({
            "field": "requeue_count",
            "condition": "Greater",
            "val": ["1", "2"]
        }));
        let err = f.validate(&KV_ORDERS).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ConditionValueMismatch {
                field: "requeue_count".into(),
                condition: "Greater".into(),
            }
        );
    }

    #[test]
    fn test_ordering_condition_accepts_single_value() {
        let f = filter(json!({
            "field": "requeue_count",
            "condition": "GreaterThanEqual",
            "val": "1"
        }));
        f.validate(&KV_ORDERS).unwrap();
    }

    #[test]
    fn test_invalid_condition_fails_to_parse() {
        let result: Result<Filter, _> = serde_json::from_value(json!({
            "field": "payment_gateway",
            "condition": "Between",
            "val": ["RAZORPAY"]
        }));
        assert!(result.is_err());
    }
}

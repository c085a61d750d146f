//! Static dimension registry.
//!
//! One authoritative table of queryable dimensions, shared by every backend
//! domain. Each dimension carries its literal value domain (closed sets for
//! enum dimensions, unbounded for free-form ones), a cardinality class used
//! by the value-discovery tool, and the set of backend domains it belongs
//! to. The table is populated once at process start and never mutated, so it
//! is safely shared across concurrent callers without locking.

mod values;

use crate::metric::{ALL_METRICS, Metric};
use crate::value::Literal;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use values::*;

/// Backend data domains with overlapping but distinct dimension sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Order-level analytics (the /q query endpoint).
    KvOrders,
    /// Transaction-level listing (orders/payment-link search).
    Txns,
}

/// The closed set of literals a dimension accepts, if any.
#[derive(Debug, Clone, Copy)]
pub enum ValueDomain {
    Strings(&'static [&'static str]),
    Bools(&'static [bool]),
    Ints(&'static [i64]),
    Unbounded,
}

impl ValueDomain {
    /// Whether a literal belongs to this domain. Unbounded accepts anything.
    pub fn contains(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (ValueDomain::Unbounded, _) => true,
            (ValueDomain::Strings(vals), Literal::String(s)) => vals.contains(&s.as_str()),
            (ValueDomain::Bools(vals), Literal::Bool(b)) => vals.contains(b),
            (ValueDomain::Ints(vals), Literal::Number(n)) => {
                n.as_i64().is_some_and(|i| vals.contains(&i))
            }
            _ => false,
        }
    }

    pub fn is_bounded(&self) -> bool {
        !matches!(self, ValueDomain::Unbounded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Too many distinct values to enumerate (bank names, error messages).
    High,
    Low,
    Unclassified,
}

/// A queryable grouping attribute known to the backend.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    pub name: &'static str,
    pub values: ValueDomain,
    pub cardinality: Cardinality,
    /// Time dimensions are only usable through the interval / trend buckets,
    /// never as filter fields.
    pub is_time: bool,
    pub domains: &'static [Domain],
}

const KV: &[Domain] = &[Domain::KvOrders];
const TX: &[Domain] = &[Domain::Txns];
const BOTH: &[Domain] = &[Domain::KvOrders, Domain::Txns];

const fn enum_str(name: &'static str, values: &'static [&'static str]) -> Dimension {
    Dimension {
        name,
        values: ValueDomain::Strings(values),
        cardinality: Cardinality::Low,
        is_time: false,
        domains: KV,
    }
}

const fn enum_bool(name: &'static str, values: &'static [bool]) -> Dimension {
    Dimension {
        name,
        values: ValueDomain::Bools(values),
        cardinality: Cardinality::Low,
        is_time: false,
        domains: KV,
    }
}

const fn enum_int(name: &'static str, values: &'static [i64]) -> Dimension {
    Dimension {
        name,
        values: ValueDomain::Ints(values),
        cardinality: Cardinality::Low,
        is_time: false,
        domains: KV,
    }
}

const fn free(name: &'static str) -> Dimension {
    Dimension {
        name,
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::Unclassified,
        is_time: false,
        domains: KV,
    }
}

const fn free_high(name: &'static str) -> Dimension {
    Dimension {
        name,
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::High,
        is_time: false,
        domains: KV,
    }
}

static DIMENSION_TABLE: &[Dimension] = &[
    enum_str("actual_order_status", ACTUAL_ORDER_STATUS),
    enum_str("actual_payment_status", ACTUAL_PAYMENT_STATUS),
    enum_int("allowed_requeue", ALLOWED_REQUEUE),
    enum_str("auth_type", AUTH_TYPE),
    free_high("bank"),
    free("business_region"),
    free("card_bin"),
    enum_str("card_brand", CARD_BRAND),
    free("card_exp_month"),
    free("card_exp_year"),
    free("card_issuer_country"),
    free("card_sub_type"),
    enum_str("card_type", CARD_TYPE),
    free("consent_page"),
    Dimension {
        name: "currency",
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::Unclassified,
        is_time: false,
        domains: BOTH,
    },
    Dimension {
        name: "date_created",
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::Unclassified,
        is_time: true,
        domains: TX,
    },
    enum_bool("emi", BOOL_ANY),
    free("emi_bank"),
    enum_str("emi_tenure", EMI_TENURE),
    enum_str("emi_type", EMI_TYPE),
    free_high("error_message"),
    Dimension {
        name: "gateway",
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::Low,
        is_time: false,
        domains: KV,
    },
    free("gateway_reference_id"),
    enum_str("industry", INDUSTRY),
    enum_bool("is_business_retry", BOOL_ANY),
    enum_bool("is_cvv_less_txn", BOOL_TRUE_ONLY),
    enum_bool("is_offer_txn", BOOL_ANY),
    enum_bool("is_requeued_order", BOOL_ANY),
    enum_bool("is_retargeted_order", BOOL_ANY),
    enum_bool("is_retried_order", BOOL_ANY),
    enum_bool("is_technical_retry", BOOL_ANY),
    enum_str("is_token_bin", IS_TOKEN_BIN),
    enum_bool("is_tokenized", BOOL_ANY),
    enum_bool("is_upicc", BOOL_ANY),
    enum_bool("issuer_token_reference", BOOL_ANY),
    free("issuer_tokenization_consent_failure_reason"),
    free("juspay_bank_code"),
    free("juspay_error_message"),
    free("juspay_response_code"),
    free("juspay_response_message"),
    free("lob"),
    enum_str("mandate_feature", MANDATE_FEATURE),
    Dimension {
        name: "merchant_id",
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::Unclassified,
        is_time: false,
        domains: BOTH,
    },
    free("ord_currency"),
    Dimension {
        name: "order_created_at",
        values: ValueDomain::Unbounded,
        cardinality: Cardinality::Unclassified,
        is_time: true,
        domains: KV,
    },
    enum_str("order_source_object", ORDER_SOURCE_OBJECT),
    enum_str("order_source_object_id", ORDER_SOURCE_OBJECT_ID),
    Dimension {
        name: "order_status",
        values: ValueDomain::Strings(ORDER_STATUS),
        cardinality: Cardinality::Low,
        is_time: false,
        domains: BOTH,
    },
    Dimension {
        name: "order_type",
        values: ValueDomain::Strings(ORDER_TYPE),
        cardinality: Cardinality::Low,
        is_time: false,
        domains: BOTH,
    },
    free("original_card_isin"),
    enum_int("os", OS),
    free("payment_flow"),
    enum_str("payment_gateway", PAYMENT_GATEWAY),
    enum_str("payment_instrument_group", PAYMENT_INSTRUMENT_GROUP),
    enum_str("payment_method_subtype", PAYMENT_METHOD_SUBTYPE),
    enum_str("payment_method_type", PAYMENT_METHOD_TYPE),
    Dimension {
        name: "payment_status",
        values: ValueDomain::Strings(PAYMENT_STATUS),
        cardinality: Cardinality::Low,
        is_time: false,
        domains: BOTH,
    },
    enum_str("platform", PLATFORM),
    free("prev_gateway_resp_code"),
    free("prev_gateway_resp_message"),
    enum_str("prev_order_status", PREV_ORDER_STATUS),
    enum_str("prev_txn_status", PREV_TXN_STATUS),
    free("previous_gateway_resp_code"),
    free("previous_gateway_resp_message"),
    enum_str("previous_order_status", PREV_ORDER_STATUS),
    enum_str("previous_txn_status", PREV_TXN_STATUS),
    free("priority_logic_tag"),
    free("requeue_count"),
    free("resp_code"),
    free("resp_message"),
    enum_str("status_sync_source", STATUS_SYNC_SOURCE),
    enum_str("stored_card_vault_provider", STORED_CARD_VAULT_PROVIDER),
    enum_str("ticket_size", TICKET_SIZE),
    free("token_reference"),
    enum_str("token_repeat", TOKEN_REPEAT),
    enum_bool("tokenization_consent", BOOL_ANY),
    free("tokenization_consent_failure_reason"),
    enum_bool("tokenization_consent_ui_presented", BOOL_ANY),
    enum_str("tokenization_eligibility", TOKENIZATION_ELIGIBILITY),
    enum_bool("tokenized_flow", BOOL_ANY),
    enum_str("txn_conflict", TXN_CONFLICT),
    enum_str("txn_flow_type", TXN_FLOW_TYPE),
    enum_str("txn_latency_enum", TXN_LATENCY_ENUM),
    enum_str("txn_object_type", TXN_OBJECT_TYPE),
    enum_str("txn_source_object", TXN_SOURCE_OBJECT),
    enum_str("txn_type", TXN_TYPE),
    free("udf1"),
    free("udf2"),
    free("udf3"),
    free("udf4"),
    free("udf5"),
    free("udf6"),
    free("udf7"),
    free("udf8"),
    free("udf9"),
    free("udf10"),
    enum_str("unified_response_category", UNIFIED_RESPONSE_CATEGORY),
    enum_str("user_opt_in", USER_OPT_IN),
    enum_bool("using_stored_card", BOOL_ANY),
    enum_str("using_token", USING_TOKEN),
];

static DIMENSIONS: Lazy<HashMap<&'static str, &'static Dimension>> = Lazy::new(|| {
    DIMENSION_TABLE.iter().map(|d| (d.name, d)).collect()
});

/// Look up a dimension across all domains.
pub fn lookup(name: &str) -> Option<&'static Dimension> {
    DIMENSIONS.get(name).copied()
}

/// All registered dimensions, table order.
pub fn dimensions() -> impl Iterator<Item = &'static Dimension> {
    DIMENSION_TABLE.iter()
}

/// Per-domain view of the registry: which dimensions are filterable, which
/// metrics exist, and which columns may carry the query interval.
#[derive(Debug)]
pub struct DomainProfile {
    pub domain: Domain,
    /// Domain tag as the backend expects it in the payload.
    pub name: &'static str,
    pub metrics: &'static [Metric],
    /// Bucketing pseudo-dimensions that only exist backend-side. They are
    /// not queryable and never valid as filter fields.
    pub virtual_time_dimensions: &'static [&'static str],
    pub interval_columns: &'static [&'static str],
    pub time_zone: &'static str,
}

pub static KV_ORDERS: DomainProfile = DomainProfile {
    domain: Domain::KvOrders,
    name: "kvorders",
    metrics: ALL_METRICS,
    virtual_time_dimensions: &["run_hour_ist", "run_day_ist", "run_week_ist", "run_month_ist"],
    interval_columns: &["order_created_at"],
    time_zone: "Asia/Kolkata",
};

pub static TXNS: DomainProfile = DomainProfile {
    domain: Domain::Txns,
    name: "txnsELS",
    metrics: &[],
    virtual_time_dimensions: &[],
    interval_columns: &["date_created"],
    time_zone: "Asia/Kolkata",
};

impl DomainProfile {
    /// Look up a dimension, restricted to this profile's domain.
    pub fn dimension(&self, name: &str) -> Option<&'static Dimension> {
        lookup(name).filter(|d| d.domains.contains(&self.domain))
    }

    pub fn has_metric(&self, metric: Metric) -> bool {
        self.metrics.contains(&metric)
    }

    /// Whether a field names a time dimension (real or backend-virtual) and
    /// therefore must be expressed through the interval, not filters.
    pub fn is_time_dimension(&self, name: &str) -> bool {
        if self.virtual_time_dimensions.contains(&name) {
            return true;
        }
        lookup(name).is_some_and(|d| d.is_time)
    }

    pub fn is_interval_column(&self, name: &str) -> bool {
        self.interval_columns.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_enum_dimension() {
        let dim = lookup("payment_gateway").unwrap();
        assert!(dim.values.is_bounded());
        assert!(dim.values.contains(&Literal::String("RAZORPAY".into())));
        assert!(!dim.values.contains(&Literal::String("NOT_A_GATEWAY".into())));
    }

    #[test]
    fn test_bool_and_int_domains() {
        let emi = lookup("emi").unwrap();
        assert!(emi.values.contains(&Literal::Bool(true)));
        assert!(!emi.values.contains(&Literal::String("true".into())));

        let requeue = lookup("allowed_requeue").unwrap();
        assert!(requeue.values.contains(&Literal::Number(0.into())));
        assert!(!requeue.values.contains(&Literal::Number(1.into())));

        // is_cvv_less_txn is only ever materialized as true
        let cvv_less = lookup("is_cvv_less_txn").unwrap();
        assert!(cvv_less.values.contains(&Literal::Bool(true)));
        assert!(!cvv_less.values.contains(&Literal::Bool(false)));
    }

    #[test]
    fn test_free_form_dimension_accepts_anything() {
        let udf = lookup("udf3").unwrap();
        assert!(udf.values.contains(&Literal::String("whatever".into())));
        assert!(udf.values.contains(&Literal::Null));
    }

    #[test]
    fn test_domain_membership() {
        assert!(KV_ORDERS.dimension("payment_gateway").is_some());
        assert!(TXNS.dimension("payment_gateway").is_none());

        assert!(TXNS.dimension("payment_status").is_some());
        assert!(TXNS.dimension("date_created").is_some());
        assert!(KV_ORDERS.dimension("date_created").is_none());
    }

    #[test]
    fn test_time_dimensions() {
        assert!(KV_ORDERS.is_time_dimension("order_created_at"));
        assert!(KV_ORDERS.is_time_dimension("run_day_ist"));
        assert!(!KV_ORDERS.is_time_dimension("payment_gateway"));
        assert!(TXNS.is_time_dimension("date_created"));
    }

    #[test]
    fn test_unknown_dimension_is_absent() {
        assert!(lookup("definitely_not_a_dimension").is_none());
    }
}

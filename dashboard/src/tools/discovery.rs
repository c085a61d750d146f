//! Dimension value discovery.
//!
//! Lets a caller find usable filter literals without guessing: for
//! dimensions with a closed value set the candidates come straight from the
//! registry, ranked by string similarity against each query. Unbounded
//! dimensions have nothing to enumerate locally and are rejected.

use crate::client::PortalClient;
use crate::tools::parse_payload;
use analytics::registry::{self, ValueDomain};
use common::{Error, Result};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use strsim::jaro_winkler;

const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Deserialize)]
struct DimensionLookupPayload {
    dimension: String,
    #[serde(default)]
    queries: Vec<String>,
    max_results: Option<usize>,
}

pub async fn lookup_values(_client: Arc<PortalClient>, payload: Value) -> Result<Value> {
    let parsed: DimensionLookupPayload = parse_payload(&payload)?;

    let dimension = registry::lookup(&parsed.dimension).ok_or_else(|| {
        Error::Validation(format!("unknown dimension '{}'", parsed.dimension))
    })?;

    let candidates = enumerate(&dimension.values).ok_or_else(|| {
        Error::Validation(format!(
            "dimension '{}' has no enumerable value set; filter it free-form instead",
            parsed.dimension
        ))
    })?;

    let max_results = parsed.max_results.unwrap_or(DEFAULT_MAX_RESULTS);
    let results: Vec<Vec<String>> = if parsed.queries.is_empty() {
        vec![candidates.iter().take(max_results).cloned().collect()]
    } else {
        parsed
            .queries
            .iter()
            .map(|query| rank(&candidates, query, max_results))
            .collect()
    };

    Ok(json!({
        "dimension": parsed.dimension,
        "results": results
    }))
}

fn enumerate(values: &ValueDomain) -> Option<Vec<String>> {
    match values {
        ValueDomain::Strings(vals) => Some(vals.iter().map(|v| v.to_string()).collect()),
        ValueDomain::Bools(vals) => Some(vals.iter().map(|v| v.to_string()).collect()),
        ValueDomain::Ints(vals) => Some(vals.iter().map(|v| v.to_string()).collect()),
        ValueDomain::Unbounded => None,
    }
}

/// Candidates ordered by similarity to the query, best first.
fn rank(candidates: &[String], query: &str, max_results: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut scored: Vec<(f64, &String)> = candidates
        .iter()
        .map(|candidate| (jaro_winkler(&candidate.to_lowercase(), &needle), candidate))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_results)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

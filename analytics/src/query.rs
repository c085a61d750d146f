//! Canonical query payload assembly.
//!
//! Merges metric(s), interval, dimension selectors, the optional filter tree
//! and the optional sort directive into the request object the analytics
//! backend expects, enforcing the cross-field invariants that cannot live on
//! any single component.

use crate::error::ValidationError;
use crate::filter::Filter;
use crate::interval::Interval;
use crate::metric::{Metric, MetricSelection};
use crate::registry::DomainProfile;
use serde::{Deserialize, Serialize};

/// Bucket width for trend queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Granularity {
    pub unit: GranularityUnit,
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GranularityUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// Time-bucketing selector: requests trend buckets over a time column
/// instead of flat grouping. Whether to include one is the caller's call —
/// a trend query carries one, an absolute-value query does not, and the
/// assembler does not infer either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    pub granularity: Granularity,
    #[serde(rename = "intervalCol")]
    pub interval_col: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

/// A requested grouping: a bare dimension name or a time bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimensionSelector {
    Name(String),
    TimeBucket(TimeBucket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordering {
    Asc,
    Desc,
}

/// Top-level sort directive. Required whenever the result can have more than
/// one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedOn {
    #[serde(rename = "sortDimension")]
    pub sort_dimension: Metric,
    pub ordering: Ordering,
}

/// Inbound analytics request as supplied by the caller, local-zone interval.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    pub metric: MetricSelection,
    pub interval: Interval,
    #[serde(default)]
    pub dimensions: Vec<DimensionSelector>,
    #[serde(default)]
    pub filters: Option<Filter>,
    #[serde(default, rename = "sortedOn")]
    pub sorted_on: Option<SortedOn>,
}

/// Canonical request object sent to the backend, backend-zone interval.
#[derive(Debug, Clone, Serialize)]
pub struct QueryPayload {
    pub domain: &'static str,
    pub metric: MetricSelection,
    pub interval: Interval,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filter>,
    pub dimensions: Vec<DimensionSelector>,
    #[serde(rename = "sortedOn", skip_serializing_if = "Option::is_none")]
    pub sorted_on: Option<SortedOn>,
}

/// Validate a request against a domain profile and assemble the canonical
/// payload. The interval is converted to the backend zone here; everything
/// else passes through structurally unchanged.
pub fn assemble(
    profile: &DomainProfile,
    request: QueryRequest,
) -> Result<QueryPayload, ValidationError> {
    for metric in request.metric.iter() {
        if !profile.has_metric(metric) {
            return Err(ValidationError::MetricNotInDomain {
                metric: metric.to_string(),
                domain: profile.name,
            });
        }
    }

    if let Some(filters) = &request.filters {
        filters.validate(profile)?;
    }

    for selector in &request.dimensions {
        validate_selector(profile, selector)?;
    }

    let single_row = request
        .filters
        .as_ref()
        .is_some_and(Filter::has_single_row_limit);

    match &request.sorted_on {
        Some(sorted_on) => {
            if !request.metric.contains(sorted_on.sort_dimension) {
                return Err(ValidationError::SortDimensionNotRequested {
                    sort_dimension: sorted_on.sort_dimension.to_string(),
                });
            }
        }
        None => {
            if !request.dimensions.is_empty() && !single_row {
                return Err(ValidationError::MissingSort);
            }
        }
    }

    Ok(QueryPayload {
        domain: profile.name,
        metric: request.metric,
        interval: request.interval.to_backend_zone(),
        filters: request.filters,
        dimensions: request.dimensions,
        sorted_on: request.sorted_on,
    })
}

fn validate_selector(
    profile: &DomainProfile,
    selector: &DimensionSelector,
) -> Result<(), ValidationError> {
    match selector {
        DimensionSelector::Name(name) => {
            // Time dimensions group through a TimeBucket, not a bare name,
            // but the bare form is what the backend's flat grouping takes.
            if profile.dimension(name).is_none() && !profile.is_time_dimension(name) {
                return Err(ValidationError::UnknownDimension {
                    field: name.clone(),
                    domain: profile.name,
                });
            }
            Ok(())
        }
        DimensionSelector::TimeBucket(bucket) => {
            if bucket.granularity.duration < 1 {
                return Err(ValidationError::InvalidGranularityDuration {
                    duration: bucket.granularity.duration,
                });
            }
            if !profile.is_interval_column(&bucket.interval_col) {
                return Err(ValidationError::InvalidIntervalColumn {
                    interval_col: bucket.interval_col.clone(),
                    domain: profile.name,
                });
            }
            if bucket.time_zone != profile.time_zone {
                return Err(ValidationError::UnsupportedTimeZone {
                    time_zone: bucket.time_zone.clone(),
                });
            }
            Ok(())
        }
    }
}

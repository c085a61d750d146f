use thiserror::Error;

/// Errors raised while validating a query against the dimension registry.
///
/// Every variant names the offending field or value so the caller can repair
/// the request without guessing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("unknown dimension '{field}' for domain '{domain}'")]
    UnknownDimension { field: String, domain: &'static str },

    #[error("value '{value}' is not a valid literal for dimension '{field}'")]
    ValueOutOfDomain { field: String, value: String },

    #[error("empty value list for dimension '{field}'")]
    EmptyValueList { field: String },

    #[error("top-N limit must be a positive integer, got '{limit}' on field '{field}'")]
    InvalidTopNLimit { field: String, limit: String },

    #[error("top-N sort dimension '{sort_dimension}' on field '{field}' is not a known metric")]
    InvalidTopNSortDimension {
        field: String,
        sort_dimension: String,
    },

    #[error("top-N ordering must be 'Asc' or 'Desc', got '{ordering}' on field '{field}'")]
    InvalidTopNOrdering { field: String, ordering: String },

    #[error("multiple top-N specs in one filter tree ({count} found); at most one is allowed")]
    MultipleTopNSpecs { count: usize },

    #[error("condition '{condition}' on field '{field}' requires a single literal value")]
    ConditionValueMismatch { field: String, condition: String },

    #[error("time dimension '{field}' cannot be used as a filter; use the interval instead")]
    TimeDimensionFilter { field: String },

    #[error("metric '{metric}' is not available for domain '{domain}'")]
    MetricNotInDomain { metric: String, domain: &'static str },

    #[error("sortedOn is required when dimensions are requested and no single-row limit applies")]
    MissingSort,

    #[error("sortedOn dimension '{sort_dimension}' is not among the requested metrics")]
    SortDimensionNotRequested { sort_dimension: String },

    #[error("granularity duration must be >= 1, got {duration}")]
    InvalidGranularityDuration { duration: u32 },

    #[error("'{interval_col}' is not a valid interval column for domain '{domain}'")]
    InvalidIntervalColumn {
        interval_col: String,
        domain: &'static str,
    },

    #[error("unsupported time zone '{time_zone}' for trend buckets")]
    UnsupportedTimeZone { time_zone: String },
}

impl From<ValidationError> for common::Error {
    fn from(err: ValidationError) -> Self {
        common::Error::Validation(err.to_string())
    }
}

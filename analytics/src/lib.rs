pub mod error;
pub mod filter;
pub mod interval;
pub mod metric;
pub mod query;
pub mod registry;
pub mod response;
pub mod value;

pub use error::ValidationError;
pub use filter::{Filter, FilterPredicate};
pub use interval::Interval;
pub use metric::{Metric, MetricSelection};
pub use query::{QueryPayload, QueryRequest, SortedOn};
pub use registry::DomainProfile;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregate measures the analytics backend can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Total amount of successful orders only (GMV / processed amount).
    TotalAmount,
    /// Number of orders with at least one successful transaction.
    SuccessVolume,
    /// Successful orders / all orders with transactions.
    SuccessRate,
    AvgTicketSize,
    ConflictTxnRate,
    AverageLatency,
    /// Orders with at least one attempted transaction, any outcome.
    OrderWithTransactions,
    /// Total amount across ALL orders, not just successful ones.
    OrderWithTransactionsGmv,
}

pub const ALL_METRICS: &[Metric] = &[
    Metric::TotalAmount,
    Metric::SuccessVolume,
    Metric::SuccessRate,
    Metric::AvgTicketSize,
    Metric::ConflictTxnRate,
    Metric::AverageLatency,
    Metric::OrderWithTransactions,
    Metric::OrderWithTransactionsGmv,
];

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::TotalAmount => "total_amount",
            Metric::SuccessVolume => "success_volume",
            Metric::SuccessRate => "success_rate",
            Metric::AvgTicketSize => "avg_ticket_size",
            Metric::ConflictTxnRate => "conflict_txn_rate",
            Metric::AverageLatency => "average_latency",
            Metric::OrderWithTransactions => "order_with_transactions",
            Metric::OrderWithTransactionsGmv => "order_with_transactions_gmv",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_METRICS
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or(())
    }
}

/// A query carries either a single metric or a list of metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricSelection {
    One(Metric),
    Many(Vec<Metric>),
}

impl MetricSelection {
    pub fn contains(&self, metric: Metric) -> bool {
        match self {
            MetricSelection::One(m) => *m == metric,
            MetricSelection::Many(ms) => ms.contains(&metric),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Metric> + '_ {
        match self {
            MetricSelection::One(m) => std::slice::from_ref(m).iter().copied(),
            MetricSelection::Many(ms) => ms.as_slice().iter().copied(),
        }
    }

    /// The first requested metric, used as the default sort dimension.
    pub fn primary(&self) -> Option<Metric> {
        self.iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_serde_names() {
        let json = serde_json::to_string(&Metric::OrderWithTransactionsGmv).unwrap();
        assert_eq!(json, "\"order_with_transactions_gmv\"");

        let parsed: Metric = serde_json::from_str("\"success_rate\"").unwrap();
        assert_eq!(parsed, Metric::SuccessRate);
    }

    #[test]
    fn test_metric_from_str_rejects_unknown() {
        assert!("run_day_ist".parse::<Metric>().is_err());
        assert_eq!("avg_ticket_size".parse::<Metric>(), Ok(Metric::AvgTicketSize));
    }

    #[test]
    fn test_selection_accepts_single_or_list() {
        let one: MetricSelection = serde_json::from_str("\"success_rate\"").unwrap();
        assert!(one.contains(Metric::SuccessRate));

        let many: MetricSelection =
            serde_json::from_str("[\"total_amount\", \"success_volume\"]").unwrap();
        assert!(many.contains(Metric::TotalAmount));
        assert!(!many.contains(Metric::SuccessRate));
        assert_eq!(many.primary(), Some(Metric::TotalAmount));
    }
}

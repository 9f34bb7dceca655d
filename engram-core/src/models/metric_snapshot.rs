use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::memory::Category;

/// A point-in-time capture of store-wide metrics. Appended to an ordered,
/// append-only sequence; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// When this snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// Total records in the store.
    pub total_records: usize,
    /// Per-category record counts.
    pub category_counts: HashMap<Category, usize>,
    /// 95th-percentile query latency over the collection interval.
    pub p95_query_latency_ms: f64,
}

impl MetricSnapshot {
    /// Metric name for the total record count series.
    pub const TOTAL_RECORDS: &'static str = "total_records";
    /// Metric name for the p95 query latency series.
    pub const P95_QUERY_LATENCY_MS: &'static str = "p95_query_latency_ms";

    /// Metric name for a per-category count series.
    pub fn category_metric(category: Category) -> String {
        format!("category:{}", category.as_str())
    }

    /// Extract a named metric value from this snapshot.
    ///
    /// A category absent from `category_counts` reads as 0 (the store holds
    /// no records of that category); an unknown name reads as `None`.
    pub fn metric_value(&self, name: &str) -> Option<f64> {
        match name {
            Self::TOTAL_RECORDS => Some(self.total_records as f64),
            Self::P95_QUERY_LATENCY_MS => Some(self.p95_query_latency_ms),
            _ => {
                let category = Category::parse(name.strip_prefix("category:")?)?;
                Some(self.category_counts.get(&category).copied().unwrap_or(0) as f64)
            }
        }
    }

    /// All metric series names this snapshot contributes to.
    pub fn metric_names(&self) -> Vec<String> {
        let mut names = vec![
            Self::TOTAL_RECORDS.to_string(),
            Self::P95_QUERY_LATENCY_MS.to_string(),
        ];
        let mut categories: Vec<&Category> = self.category_counts.keys().collect();
        categories.sort_by_key(|c| c.as_str());
        names.extend(categories.into_iter().map(|c| Self::category_metric(*c)));
        names
    }
}

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

/// Raw metric entry as returned by the service.
///
/// The shape is not interpreted beyond the optional `id` lookup; entries
/// are surfaced verbatim for human inspection.
pub type MetricRecord = Value;

/// One data point appended to a metric's series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSample {
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
    pub value: f64,
}

impl MetricSample {
    /// Sample stamped with the current wall clock.
    pub fn now(value: f64) -> MetricSample {
        MetricSample {
            timestamp: Utc::now().timestamp_millis(),
            value,
        }
    }
}

/// IDs of the given metrics, skipping entries that carry none.
pub fn metric_ids(metrics: &[MetricRecord]) -> Vec<String> {
    metrics
        .iter()
        .filter_map(|metric| metric.get("id"))
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}

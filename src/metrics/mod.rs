//! Metric recording for scheduling runs.
//!
//! The scheduler never records metrics itself. Callers own a sink, pass it
//! to [`report`] after each run, and export or discard it when done:
//!
//! ```
//! use u_cpusched::metrics::{report, MetricsRecorder, MODULE_NAME};
//! use u_cpusched::models::Workload;
//! use u_cpusched::scheduler::{schedule, Algorithm};
//!
//! let result = schedule(Workload::demo().processes(), Algorithm::RoundRobin, 2).unwrap();
//!
//! let mut recorder = MetricsRecorder::new();
//! report(&result, &mut recorder);
//! recorder.snapshot_at(MODULE_NAME, 0);
//!
//! assert_eq!(recorder.metrics(MODULE_NAME).len(), 5);
//! let json = recorder.export_json().unwrap();
//! assert!(json.contains("Context Switches"));
//! ```

mod recorder;

pub use recorder::{Aggregate, MetricsRecorder, MetricsSnapshot};

use serde::{Deserialize, Serialize};

use crate::scheduler::SchedulingResult;

/// Module name under which [`report`] records scheduler metrics.
pub const MODULE_NAME: &str = "cpu-scheduler";

/// Metric classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricCategory {
    /// Latency-style measures.
    Performance,
    /// Overhead measures.
    Efficiency,
    /// Resource busyness.
    Utilization,
    /// Failure counts.
    Error,
}

/// A named measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Display name; unique within a module.
    pub name: String,
    /// Measured value.
    pub value: f64,
    /// Unit label (may be empty).
    pub unit: String,
    /// Classification.
    pub category: MetricCategory,
}

impl Metric {
    /// Creates a metric.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        category: MetricCategory,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            category,
        }
    }
}

/// Destination for recorded metrics.
pub trait MetricsSink {
    /// Records `metric` under `module`.
    fn record(&mut self, module: &str, metric: Metric);
}

/// Records the five scheduler metrics of `result` into `sink`.
///
/// | Metric | Unit | Category |
/// |--------|------|----------|
/// | Avg Waiting Time | ms | performance |
/// | Avg Turnaround Time | ms | performance |
/// | CPU Utilization | % | utilization |
/// | Context Switches | | efficiency |
/// | Throughput | proc/ms | performance |
pub fn report<S: MetricsSink + ?Sized>(result: &SchedulingResult, sink: &mut S) {
    let m = &result.metrics;
    let metrics = [
        Metric::new(
            "Avg Waiting Time",
            m.avg_waiting_time,
            "ms",
            MetricCategory::Performance,
        ),
        Metric::new(
            "Avg Turnaround Time",
            m.avg_turnaround_time,
            "ms",
            MetricCategory::Performance,
        ),
        Metric::new(
            "CPU Utilization",
            m.cpu_utilization,
            "%",
            MetricCategory::Utilization,
        ),
        Metric::new(
            "Context Switches",
            f64::from(m.context_switches),
            "",
            MetricCategory::Efficiency,
        ),
        Metric::new(
            "Throughput",
            m.throughput,
            "proc/ms",
            MetricCategory::Performance,
        ),
    ];

    for metric in metrics {
        sink.record(MODULE_NAME, metric);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{schedule, Algorithm};

    #[derive(Default)]
    struct VecSink(Vec<(String, Metric)>);

    impl MetricsSink for VecSink {
        fn record(&mut self, module: &str, metric: Metric) {
            self.0.push((module.to_string(), metric));
        }
    }

    #[test]
    fn test_report_categories() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let result = schedule(&processes, Algorithm::Fcfs, 2).unwrap();

        let mut sink = VecSink::default();
        report(&result, &mut sink);

        assert_eq!(sink.0.len(), 5);
        assert!(sink.0.iter().all(|(module, _)| module == MODULE_NAME));

        let find = |name: &str| sink.0.iter().find(|(_, m)| m.name == name).unwrap().1.clone();
        assert_eq!(find("Avg Waiting Time").value, 2.0);
        assert_eq!(find("Throughput").category, MetricCategory::Performance);
        assert_eq!(find("Context Switches").category, MetricCategory::Efficiency);
        assert_eq!(find("Context Switches").value, 1.0);
        assert_eq!(find("CPU Utilization").category, MetricCategory::Utilization);
        assert_eq!(find("CPU Utilization").unit, "%");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&MetricCategory::Utilization).unwrap();
        assert_eq!(json, r#""utilization""#);
    }
}

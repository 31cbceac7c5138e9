//! In-memory metrics recorder.
//!
//! Keeps the latest value of each metric per module, plus point-in-time
//! snapshots that can be aggregated or exported as JSON.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::{Metric, MetricsSink};

/// Frozen copy of one module's metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Module the metrics belong to.
    pub module_name: String,
    /// Metrics at snapshot time.
    pub metrics: Vec<Metric>,
}

/// Reduction applied by [`MetricsRecorder::aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Arithmetic mean.
    Avg,
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Sum of values.
    Sum,
}

#[derive(Serialize)]
struct Export<'a> {
    snapshots: &'a [MetricsSnapshot],
    current_metrics: Vec<ModuleMetrics<'a>>,
}

#[derive(Serialize)]
struct ModuleMetrics<'a> {
    module: &'a str,
    metrics: &'a [Metric],
}

/// Metrics sink that keeps everything in memory.
#[derive(Debug, Clone, Default)]
pub struct MetricsRecorder {
    current: BTreeMap<String, Vec<Metric>>,
    snapshots: Vec<MetricsSnapshot>,
}

impl MetricsRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current metrics of a module, in first-recorded order.
    pub fn metrics(&self, module: &str) -> &[Metric] {
        self.current.get(module).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Snapshots the module's current metrics, stamped with the wall clock.
    pub fn snapshot(&mut self, module: &str) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.snapshot_at(module, timestamp);
    }

    /// Snapshots the module's current metrics with an explicit timestamp.
    pub fn snapshot_at(&mut self, module: &str, timestamp: u64) {
        let metrics = self.metrics(module).to_vec();
        self.snapshots.push(MetricsSnapshot {
            timestamp,
            module_name: module.to_string(),
            metrics,
        });
    }

    /// All snapshots in the order taken.
    pub fn snapshots(&self) -> &[MetricsSnapshot] {
        &self.snapshots
    }

    /// Snapshots of one module.
    pub fn snapshots_for(&self, module: &str) -> Vec<&MetricsSnapshot> {
        self.snapshots
            .iter()
            .filter(|s| s.module_name == module)
            .collect()
    }

    /// Reduces one metric across all of a module's snapshots.
    ///
    /// Returns 0 when no snapshot holds the metric.
    pub fn aggregate(&self, module: &str, name: &str, op: Aggregate) -> f64 {
        let values: Vec<f64> = self
            .snapshots_for(module)
            .into_iter()
            .flat_map(|s| s.metrics.iter())
            .filter(|m| m.name == name)
            .map(|m| m.value)
            .collect();

        if values.is_empty() {
            return 0.0;
        }

        match op {
            Aggregate::Avg => values.iter().sum::<f64>() / values.len() as f64,
            Aggregate::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Aggregate::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Aggregate::Sum => values.iter().sum(),
        }
    }

    /// Drops current metrics and snapshots for one module, or for all.
    pub fn clear(&mut self, module: Option<&str>) {
        match module {
            Some(module) => {
                self.current.remove(module);
                self.snapshots.retain(|s| s.module_name != module);
            }
            None => {
                self.current.clear();
                self.snapshots.clear();
            }
        }
    }

    /// Pretty-printed JSON with all snapshots and current metrics.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let export = Export {
            snapshots: &self.snapshots,
            current_metrics: self
                .current
                .iter()
                .map(|(module, metrics)| ModuleMetrics { module, metrics })
                .collect(),
        };
        serde_json::to_string_pretty(&export)
    }
}

impl MetricsSink for MetricsRecorder {
    /// Replaces a metric with the same name, or appends a new one.
    fn record(&mut self, module: &str, metric: Metric) {
        let metrics = self.current.entry(module.to_string()).or_default();
        match metrics.iter_mut().find(|m| m.name == metric.name) {
            Some(existing) => *existing = metric,
            None => metrics.push(metric),
        }
    }
}

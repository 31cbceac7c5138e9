//! Scheduling performance metrics.
//!
//! Reduces the completed process list of any policy into aggregate
//! statistics.
//!
//! # Metrics
//!
//! | Metric | Definition | Precision |
//! |--------|-----------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst) | 2 dp |
//! | Avg Turnaround Time | mean(completion - arrival) | 2 dp |
//! | CPU Utilization | 100 * sum(burst) / max(completion) | 2 dp |
//! | Context Switches | policy-specific hand-off count | exact |
//! | Throughput | count / max(completion) | 4 dp |
//!
//! Elapsed time is the latest completion tick, so any idle time before the
//! first arrival lowers utilization.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Aggregate statistics for one scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchedulingMetrics {
    /// Mean waiting time (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time (ticks).
    pub avg_turnaround_time: f64,
    /// Busy share of elapsed time (0..=100).
    pub cpu_utilization: f64,
    /// Number of CPU hand-offs counted by the policy.
    pub context_switches: u32,
    /// Processes completed per tick.
    pub throughput: f64,
}

impl SchedulingMetrics {
    /// Computes metrics from completed processes.
    ///
    /// Divisions by zero (no processes, or zero elapsed time) yield 0.
    pub fn calculate(processes: &[Process], context_switches: u32) -> Self {
        let count = processes.len();
        if count == 0 {
            return Self {
                context_switches,
                ..Self::default()
            };
        }

        let total_waiting: i64 = processes.iter().map(|p| p.waiting_time.unwrap_or(0)).sum();
        let total_turnaround: i64 = processes
            .iter()
            .map(|p| p.turnaround_time.unwrap_or(0))
            .sum();
        let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
        let elapsed = Self::elapsed_time(processes);

        let (cpu_utilization, throughput) = if elapsed > 0 {
            (
                total_burst as f64 / elapsed as f64 * 100.0,
                count as f64 / elapsed as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_waiting_time: round_to(total_waiting as f64 / count as f64, 2),
            avg_turnaround_time: round_to(total_turnaround as f64 / count as f64, 2),
            cpu_utilization: round_to(cpu_utilization, 2),
            context_switches,
            throughput: round_to(throughput, 4),
        }
    }

    /// Latest completion tick across `processes`, or 0.
    pub fn elapsed_time(processes: &[Process]) -> i64 {
        processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }
}

/// Rounds half away from zero to `places` decimal places.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

//! Scheduling run output.

use serde::{Deserialize, Serialize};

use super::{Algorithm, SchedulingMetrics};
use crate::models::{Process, ProcessState, Timeline};

/// Complete output of one scheduling run.
///
/// Immutable once returned; callers forward it to renderers and metric
/// sinks as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Coalesced execution timeline.
    pub gantt_chart: Timeline,
    /// Completed processes with derived timing fields.
    ///
    /// FCFS lists them in arrival order; every other policy in completion
    /// order.
    pub processes: Vec<Process>,
    /// Aggregate statistics.
    pub metrics: SchedulingMetrics,
}

impl SchedulingResult {
    /// Finds a completed process by id.
    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Latest completion tick.
    pub fn elapsed_time(&self) -> i64 {
        SchedulingMetrics::elapsed_time(&self.processes)
    }

    /// Lifecycle state of a process at `tick`, derived from the timeline.
    ///
    /// Returns `None` for an unknown id.
    pub fn state_at(&self, id: &str, tick: i64) -> Option<ProcessState> {
        let process = self.process(id)?;

        if tick < process.arrival_time {
            return Some(ProcessState::New);
        }
        if process.completion_time.is_some_and(|done| tick >= done) {
            return Some(ProcessState::Terminated);
        }
        let running = self
            .gantt_chart
            .entry_at(tick)
            .is_some_and(|e| e.process_id == id);
        Some(if running {
            ProcessState::Running
        } else {
            ProcessState::Ready
        })
    }
}

//! CPU scheduling engine and KPI evaluation.
//!
//! One entry point dispatches to six policy routines over a private working
//! copy of the input. Each routine produces a timeline, the completed
//! processes and a context-switch count, which the shared reducer
//! ([`SchedulingMetrics`]) turns into aggregate statistics.
//!
//! # Policies
//!
//! | Policy | Selection | Preemptive |
//! |--------|-----------|------------|
//! | FCFS | arrival order | no |
//! | SJF (non-preemptive) | shortest burst | no |
//! | SJF (preemptive) | shortest remaining | every tick |
//! | Round Robin | FIFO queue | every quantum |
//! | Priority (non-preemptive) | lowest priority value | no |
//! | Priority (preemptive) | lowest priority value | every tick |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod algorithm;
mod fcfs;
mod kpi;
mod non_preemptive;
mod preemptive;
mod result;
mod round_robin;

pub use algorithm::Algorithm;
pub use kpi::SchedulingMetrics;
pub use result::SchedulingResult;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dispatching::rules;
use crate::error::SchedulingError;
use crate::models::{Process, Timeline};
use crate::validation::validate_input;

/// Default Round Robin time quantum (ticks).
pub const DEFAULT_TIME_QUANTUM: i64 = 2;

/// Scheduler configuration.
///
/// Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Policy to run.
    pub algorithm: Algorithm,
    /// Round Robin slice length. Ignored by other policies.
    pub time_quantum: i64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fcfs,
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }
}

impl SchedulerConfig {
    /// Creates a config for `algorithm` with the default quantum.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.time_quantum = time_quantum;
        self
    }
}

/// Single-CPU process scheduler.
///
/// Holds only configuration, so one instance can be shared across threads.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{GanttEntry, Process};
/// use u_cpusched::scheduler::{Algorithm, CpuScheduler};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let scheduler = CpuScheduler::new().with_algorithm(Algorithm::Fcfs);
///
/// let result = scheduler.schedule(&processes).unwrap();
/// assert_eq!(
///     result.gantt_chart.entries(),
///     &[GanttEntry::new("P1", 0, 5), GanttEntry::new("P2", 5, 8)]
/// );
/// assert_eq!(result.process("P2").unwrap().waiting_time, Some(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpuScheduler {
    config: SchedulerConfig,
}

impl CpuScheduler {
    /// Creates an FCFS scheduler with the default quantum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from a config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Sets the policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: i64) -> Self {
        self.config.time_quantum = time_quantum;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs the configured policy over `processes`.
    ///
    /// The input is validated first and never modified; derived fields are
    /// computed on working copies.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidInput`] if the list is empty, holds a
    /// duplicate id, a burst below 1 or a negative arrival, or if Round
    /// Robin is given a quantum below 1.
    pub fn schedule(&self, processes: &[Process]) -> Result<SchedulingResult, SchedulingError> {
        let SchedulerConfig {
            algorithm,
            time_quantum,
        } = self.config;

        validate_input(processes, algorithm, time_quantum)?;

        let work: Vec<Process> = processes.iter().map(Process::working_copy).collect();
        let outcome = match algorithm {
            Algorithm::Fcfs => fcfs::run(work),
            Algorithm::SjfNonPreemptive => non_preemptive::run(&rules::ShortestBurst, work),
            Algorithm::SjfPreemptive => preemptive::run(&rules::ShortestRemaining, work),
            Algorithm::RoundRobin => round_robin::run(work, time_quantum),
            Algorithm::PriorityNonPreemptive => non_preemptive::run(&rules::HighestPriority, work),
            Algorithm::PriorityPreemptive => preemptive::run(&rules::HighestPriority, work),
        };

        let metrics = SchedulingMetrics::calculate(&outcome.processes, outcome.context_switches);
        info!(
            %algorithm,
            processes = outcome.processes.len(),
            elapsed = outcome.timeline.end_time(),
            context_switches = metrics.context_switches,
            "scheduling run complete"
        );

        Ok(SchedulingResult {
            algorithm,
            gantt_chart: outcome.timeline,
            processes: outcome.processes,
            metrics,
        })
    }
}

/// Runs `algorithm` over `processes`.
///
/// Shorthand for `CpuScheduler::with_config(..).schedule(processes)`.
/// `time_quantum` is ignored unless `algorithm` is Round Robin.
pub fn schedule(
    processes: &[Process],
    algorithm: Algorithm,
    time_quantum: i64,
) -> Result<SchedulingResult, SchedulingError> {
    CpuScheduler::with_config(SchedulerConfig::new(algorithm).with_time_quantum(time_quantum))
        .schedule(processes)
}

/// Raw output of a policy routine, before metric reduction.
#[derive(Debug)]
pub(crate) struct RunOutcome {
    pub(crate) processes: Vec<Process>,
    pub(crate) timeline: Timeline,
    pub(crate) context_switches: u32,
}

/// Earliest arrival strictly after `now`.
pub(crate) fn next_arrival(work: &[Process], now: i64) -> Option<i64> {
    work.iter()
        .map(|p| p.arrival_time)
        .filter(|&t| t > now)
        .min()
}

//! Process model.
//!
//! A process is a unit of CPU work submitted to the scheduler. Input
//! attributes (arrival, burst, priority) come from the caller; lifecycle
//! fields are filled in by the simulation.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Lifecycle label of a process.
///
/// Descriptive only: the simulation never branches on it. At any tick the
/// label can be recomputed from the timeline (see
/// [`SchedulingResult::state_at`](crate::scheduler::SchedulingResult::state_at)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Not yet arrived.
    #[default]
    New,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Holding the CPU.
    Running,
    /// Blocked. Never produced by the CPU-only policies.
    Waiting,
    /// Finished.
    Terminated,
}

/// A process to be scheduled on a single virtual CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Tick at which the process becomes available (>= 0).
    pub arrival_time: i64,
    /// Total CPU ticks required (>= 1).
    pub burst_time: i64,
    /// Scheduling priority (lower = more urgent).
    pub priority: i32,
    /// CPU ticks still owed. Counts down to 0.
    pub remaining_time: i64,
    /// Tick of first dispatch.
    pub start_time: Option<i64>,
    /// Tick at which `remaining_time` reached 0.
    pub completion_time: Option<i64>,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Option<i64>,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Option<i64>,
    /// Lifecycle label.
    pub state: ProcessState,
}

impl Process {
    /// Creates a new process with priority 0.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: None,
            turnaround_time: None,
            state: ProcessState::New,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time and resets the remaining time to match.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self.remaining_time = burst_time;
        self
    }

    /// Whether the process can be dispatched at tick `now`.
    #[inline]
    pub fn is_available_at(&self, now: i64) -> bool {
        self.arrival_time <= now && self.remaining_time > 0
    }

    /// Whether all CPU work has been done.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Returns a fresh copy with all derived fields cleared.
    ///
    /// Each run works on these copies; the caller's processes are never touched.
    pub fn working_copy(&self) -> Self {
        Self::new(self.id.clone(), self.arrival_time, self.burst_time).with_priority(self.priority)
    }

    /// Hands the CPU to this process at `now`.
    ///
    /// `start_time` is only stamped on the first dispatch.
    pub(crate) fn dispatch(&mut self, now: i64) {
        if self.start_time.is_none() {
            self.start_time = Some(now);
        }
        self.state = ProcessState::Running;
    }

    /// Consumes up to `ticks` of remaining work and returns the ticks used.
    pub(crate) fn execute(&mut self, ticks: i64) -> i64 {
        let used = ticks.min(self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Returns the process to the ready state after a preemption.
    pub(crate) fn preempt(&mut self) {
        self.state = ProcessState::Ready;
    }

    /// Stamps completion, turnaround and waiting time.
    pub(crate) fn complete(&mut self, now: i64) {
        debug_assert_eq!(self.remaining_time, 0, "process {} completed early", self.id);
        debug_assert!(self.completion_time.is_none(), "process {} completed twice", self.id);

        let turnaround = now - self.arrival_time;
        self.completion_time = Some(now);
        self.turnaround_time = Some(turnaround);
        self.waiting_time = Some(turnaround - self.burst_time);
        self.state = ProcessState::Terminated;
    }
}

//! Process workloads.
//!
//! A workload is an editable list of input processes: the built-in demo set,
//! processes appended with default attributes, or a seeded random batch.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::Process;

/// Default burst time for processes added with [`Workload::push_default`].
pub const DEFAULT_BURST_TIME: i64 = 5;
/// Default priority for processes added with [`Workload::push_default`].
pub const DEFAULT_PRIORITY: i32 = 1;

/// Bounds for randomly generated processes (all inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadLimits {
    /// Latest arrival tick.
    pub max_arrival: i64,
    /// Shortest burst.
    pub min_burst: i64,
    /// Longest burst.
    pub max_burst: i64,
    /// Largest (least urgent) priority value. Priorities start at 0.
    pub max_priority: i32,
}

impl Default for WorkloadLimits {
    fn default() -> Self {
        Self {
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: 5,
        }
    }
}

/// An ordered list of input processes.
///
/// Order matters: it is the tie-break for processes arriving on the same tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload {
    processes: Vec<Process>,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four-process demo set.
    ///
    /// | id | arrival | burst | priority |
    /// |----|---------|-------|----------|
    /// | P1 | 0 | 5 | 2 |
    /// | P2 | 1 | 3 | 1 |
    /// | P3 | 2 | 8 | 3 |
    /// | P4 | 3 | 6 | 2 |
    pub fn demo() -> Self {
        Self::from(vec![
            Process::new("P1", 0, 5).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 8).with_priority(3),
            Process::new("P4", 3, 6).with_priority(2),
        ])
    }

    /// Generates `count` processes named `P1..=Pn` within `limits`.
    ///
    /// Deterministic for a seeded `rng`.
    pub fn random<R: Rng>(rng: &mut R, count: usize, limits: &WorkloadLimits) -> Self {
        let max_arrival = limits.max_arrival.max(0);
        let min_burst = limits.min_burst.max(1);
        let max_burst = limits.max_burst.max(min_burst);
        let max_priority = limits.max_priority.max(0);

        let processes = (1..=count)
            .map(|n| {
                Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                )
                .with_priority(rng.random_range(0..=max_priority))
            })
            .collect();

        Self { processes }
    }

    /// Appends a process.
    pub fn push(&mut self, process: Process) {
        self.processes.push(process);
    }

    /// Appends a process with arrival 0 and default burst/priority, returning
    /// its id.
    ///
    /// The id is `P{n}`, where `n` starts at `len() + 1` and is bumped until
    /// it is unused.
    pub fn push_default(&mut self) -> String {
        let mut n = self.processes.len() + 1;
        while self.get(&format!("P{n}")).is_some() {
            n += 1;
        }
        let id = format!("P{n}");
        self.processes
            .push(Process::new(id.clone(), 0, DEFAULT_BURST_TIME).with_priority(DEFAULT_PRIORITY));
        id
    }

    /// Removes the process with the given id.
    pub fn remove(&mut self, id: &str) -> Option<Process> {
        let index = self.processes.iter().position(|p| p.id == id)?;
        Some(self.processes.remove(index))
    }

    /// Finds a process by id.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Finds a process by id for editing.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.id == id)
    }

    /// Input processes in submission order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Consumes the workload.
    pub fn into_processes(self) -> Vec<Process> {
        self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the workload is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst_time(&self) -> i64 {
        self.processes.iter().map(|p| p.burst_time).sum()
    }
}

impl From<Vec<Process>> for Workload {
    fn from(processes: Vec<Process>) -> Self {
        Self { processes }
    }
}

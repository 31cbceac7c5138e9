//! Built-in dispatching rules.
//!
//! - **Arrival**: FIFO
//! - **Length**: SJF (total burst), SRTF (remaining burst)
//! - **Priority**: lowest priority value first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First In, First Out.
///
/// Orders by arrival time. Used by FCFS and to admit processes into the
/// Round Robin ready queue.
#[derive(Debug, Clone, Copy)]
pub struct Fifo;

impl DispatchingRule for Fifo {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First In, First Out"
    }
}

/// Shortest Job First.
///
/// Scores by total burst time, so the choice does not change as a process
/// runs. Minimizes average waiting time when all jobs are available at once.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Scores by CPU time still owed. Used by the preemptive SJF policy.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Highest priority (lowest priority value) first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        RuleScore::from(process.priority)
    }

    fn description(&self) -> &'static str {
        "Lowest priority value first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo() {
        let first = Process::new("first", 1, 9);
        let second = Process::new("second", 3, 1);
        assert!(Fifo.evaluate(&first) < Fifo.evaluate(&second));
    }

    #[test]
    fn test_shortest_burst_ignores_progress() {
        let mut p = Process::new("P1", 0, 6);
        p.remaining_time = 1;
        assert_eq!(ShortestBurst.evaluate(&p), 6);
        assert_eq!(ShortestRemaining.evaluate(&p), 1);
    }

    #[test]
    fn test_priority() {
        let urgent = Process::new("urgent", 0, 1).with_priority(0);
        let relaxed = Process::new("relaxed", 0, 1).with_priority(4);
        assert!(HighestPriority.evaluate(&urgent) < HighestPriority.evaluate(&relaxed));
    }

    #[test]
    fn test_names() {
        assert_eq!(Fifo.name(), "FIFO");
        assert_eq!(ShortestBurst.description(), "Shortest Job First");
        assert_eq!(ShortestRemaining.name(), "SRTF");
        assert_eq!(HighestPriority.name(), "PRIORITY");
    }
}

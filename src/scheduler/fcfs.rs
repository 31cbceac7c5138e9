//! First-Come, First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time.
//! 2. Run each to completion in that order, idling until it arrives if the
//!    CPU is free earlier.
//!
//! One context switch is counted between every pair of consecutive
//! processes.

use tracing::debug;

use super::RunOutcome;
use crate::dispatching::{rules, sort_indices};
use crate::models::{Process, Timeline};

pub(crate) fn run(work: Vec<Process>) -> RunOutcome {
    let order = sort_indices(&rules::Fifo, &work);
    let mut slots: Vec<Option<Process>> = work.into_iter().map(Some).collect();

    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(slots.len());
    let mut context_switches = 0;
    let mut now = 0;

    for (position, &index) in order.iter().enumerate() {
        let Some(mut process) = slots[index].take() else {
            continue;
        };

        now = now.max(process.arrival_time);
        let start = now;
        process.dispatch(start);
        now += process.execute(process.burst_time);
        process.complete(now);

        debug!(process = %process.id, start, end = now, "dispatch");
        timeline.push(&process.id, start, now);
        completed.push(process);

        if position + 1 < order.len() {
            context_switches += 1;
        }
    }

    RunOutcome {
        processes: completed,
        timeline,
        context_switches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttEntry;

    #[test]
    fn test_fcfs_basic() {
        let out = run(vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)]);

        assert_eq!(
            out.timeline.entries(),
            &[GanttEntry::new("P1", 0, 5), GanttEntry::new("P2", 5, 8)]
        );
        assert_eq!(out.processes[0].waiting_time, Some(0));
        assert_eq!(out.processes[1].waiting_time, Some(4));
        assert_eq!(out.context_switches, 1);
    }

    #[test]
    fn test_fcfs_sorts_by_arrival_stably() {
        let out = run(vec![
            Process::new("late", 4, 1),
            Process::new("A", 0, 2),
            Process::new("B", 0, 1),
        ]);
        let ids: Vec<&str> = out.processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "late"]);
    }

    #[test]
    fn test_fcfs_idles_until_arrival() {
        let out = run(vec![Process::new("P1", 0, 2), Process::new("P2", 5, 1)]);
        assert_eq!(
            out.timeline.entries(),
            &[GanttEntry::new("P1", 0, 2), GanttEntry::new("P2", 5, 6)]
        );
        assert_eq!(out.processes[1].start_time, Some(5));
        assert_eq!(out.processes[1].waiting_time, Some(0));
        assert_eq!(out.timeline.idle_time(), 3);
    }
}

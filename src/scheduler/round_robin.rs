//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit arrived processes into a FIFO ready queue in arrival order.
//! 2. Pop the head and run it for `min(quantum, remaining)` ticks.
//! 3. Admit everything that arrived up to the end of the slice.
//! 4. Re-append the process just run if it still has work. New arrivals
//!    always queue ahead of it.
//!
//! Context switches: one per re-queue of an unfinished process, and one per
//! completion that leaves the queue non-empty.

use std::collections::VecDeque;

use tracing::debug;

use super::RunOutcome;
use crate::dispatching::{rules, sort_indices};
use crate::models::{Process, Timeline};

pub(crate) fn run(mut work: Vec<Process>, time_quantum: i64) -> RunOutcome {
    let quantum = time_quantum.max(1);
    let arrivals = sort_indices(&rules::Fifo, &work);

    let mut queue: VecDeque<usize> = VecDeque::with_capacity(work.len());
    let mut admitted = 0;
    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(work.len());
    let mut context_switches = 0;
    let mut now = 0;

    while completed.len() < work.len() {
        admit(&work, &arrivals, &mut admitted, &mut queue, now);

        let Some(index) = queue.pop_front() else {
            match arrivals.get(admitted) {
                Some(&next) => now = work[next].arrival_time,
                None => break,
            }
            continue;
        };

        let process = &mut work[index];
        let start = now;
        process.dispatch(start);
        now += process.execute(quantum);

        debug!(process = %process.id, start, end = now, "dispatch");
        timeline.push(&process.id, start, now);

        admit(&work, &arrivals, &mut admitted, &mut queue, now);

        let process = &mut work[index];
        if process.is_finished() {
            process.complete(now);
            completed.push(process.clone());
            if !queue.is_empty() {
                context_switches += 1;
            }
        } else {
            process.preempt();
            queue.push_back(index);
            context_switches += 1;
        }
    }

    RunOutcome {
        processes: completed,
        timeline,
        context_switches,
    }
}

/// Moves every process with `arrival_time <= now` into the ready queue.
fn admit(
    work: &[Process],
    arrivals: &[usize],
    admitted: &mut usize,
    queue: &mut VecDeque<usize>,
    now: i64,
) {
    while let Some(&index) = arrivals.get(*admitted) {
        if work[index].arrival_time > now {
            break;
        }
        queue.push_back(index);
        *admitted += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttEntry;

    #[test]
    fn test_round_robin_alternates() {
        let out = run(vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)], 2);

        assert_eq!(
            out.timeline.entries(),
            &[
                GanttEntry::new("P1", 0, 2),
                GanttEntry::new("P2", 2, 4),
                GanttEntry::new("P1", 4, 6),
                GanttEntry::new("P2", 6, 7),
                GanttEntry::new("P1", 7, 8),
            ]
        );
        assert_eq!(out.context_switches, 4);
    }

    #[test]
    fn test_new_arrival_queues_before_incumbent() {
        // P2 arrives exactly when P1's slice ends and must run before P1 resumes.
        let out = run(vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)], 2);
        assert_eq!(
            out.timeline.entries(),
            &[
                GanttEntry::new("P1", 0, 2),
                GanttEntry::new("P2", 2, 4),
                GanttEntry::new("P1", 4, 6),
            ]
        );
    }

    #[test]
    fn test_lone_process_slices_coalesce() {
        let out = run(vec![Process::new("P1", 0, 5)], 2);
        assert_eq!(out.timeline.entries(), &[GanttEntry::new("P1", 0, 5)]);
        // two re-queues are still counted
        assert_eq!(out.context_switches, 2);
        assert_eq!(out.processes[0].start_time, Some(0));
    }

    #[test]
    fn test_idle_until_next_arrival() {
        let out = run(vec![Process::new("P1", 0, 1), Process::new("P2", 4, 3)], 2);
        assert_eq!(
            out.timeline.entries(),
            &[GanttEntry::new("P1", 0, 1), GanttEntry::new("P2", 4, 7)]
        );
        assert_eq!(out.context_switches, 1);
    }

    #[test]
    fn test_large_quantum_behaves_like_fcfs() {
        let out = run(
            vec![
                Process::new("P1", 0, 5),
                Process::new("P2", 1, 3),
                Process::new("P3", 2, 8),
            ],
            100,
        );
        assert_eq!(
            out.timeline.entries(),
            &[
                GanttEntry::new("P1", 0, 5),
                GanttEntry::new("P2", 5, 8),
                GanttEntry::new("P3", 8, 16),
            ]
        );
        assert_eq!(out.context_switches, 2);
    }

    #[test]
    fn test_demo_workload_quantum_two() {
        let out = run(
            vec![
                Process::new("P1", 0, 5),
                Process::new("P2", 1, 3),
                Process::new("P3", 2, 8),
                Process::new("P4", 3, 6),
            ],
            2,
        );
        let ids: Vec<&str> = out.timeline.iter().map(|e| e.process_id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["P1", "P2", "P3", "P1", "P4", "P2", "P3", "P1", "P4", "P3", "P4", "P3"]
        );
        assert_eq!(out.timeline.end_time(), 22);
    }
}

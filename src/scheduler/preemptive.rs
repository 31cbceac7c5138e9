//! Preemptive rule-driven dispatch (SRTF, preemptive Priority).
//!
//! # Algorithm
//!
//! The rule is re-evaluated at every tick. Between two arrivals the choice
//! cannot change: the running process only gets better under SRTF, and
//! priorities are static. So the loop runs the current choice until the
//! next arrival or its completion, whichever is first, then re-selects.
//! The output is identical to a tick-by-tick loop.
//!
//! A context switch is counted whenever the dispatched process differs from
//! the one that ran last, including after an idle gap.

use tracing::debug;

use super::{next_arrival, RunOutcome};
use crate::dispatching::{select_best, DispatchingRule};
use crate::models::{Process, Timeline};

pub(crate) fn run<R: DispatchingRule + ?Sized>(rule: &R, mut work: Vec<Process>) -> RunOutcome {
    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(work.len());
    let mut context_switches = 0;
    let mut pending = work.len();
    let mut last: Option<usize> = None;
    let mut now = 0;

    while pending > 0 {
        let Some(index) = select_best(rule, &work, now) else {
            match next_arrival(&work, now) {
                Some(t) => now = t,
                None => break,
            }
            continue;
        };

        if let Some(prev) = last {
            if prev != index {
                context_switches += 1;
                if !work[prev].is_finished() {
                    work[prev].preempt();
                }
            }
        }
        last = Some(index);

        let horizon = next_arrival(&work, now);
        let process = &mut work[index];
        let budget = horizon.map_or(process.remaining_time, |t| t - now);
        let start = now;
        process.dispatch(start);
        now += process.execute(budget);

        debug!(rule = rule.name(), process = %process.id, start, end = now, "dispatch");
        timeline.push(&process.id, start, now);

        if process.is_finished() {
            process.complete(now);
            completed.push(process.clone());
            pending -= 1;
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
    use crate::dispatching::rules;
    use crate::models::GanttEntry;

    #[test]
    fn test_srtf_preempts_for_shorter_arrival() {
        let out = run(
            &rules::ShortestRemaining,
            vec![Process::new("P1", 0, 8), Process::new("P2", 1, 4)],
        );

        assert_eq!(
            out.timeline.entries(),
            &[
                GanttEntry::new("P1", 0, 1),
                GanttEntry::new("P2", 1, 5),
                GanttEntry::new("P1", 5, 12),
            ]
        );
        assert_eq!(out.context_switches, 2);

        let p1 = out.processes.iter().find(|p| p.id == "P1").unwrap();
        assert_eq!(p1.start_time, Some(0));
        assert_eq!(p1.completion_time, Some(12));
        assert_eq!(p1.waiting_time, Some(4));
    }

    #[test]
    fn test_srtf_textbook_example() {
        let out = run(
            &rules::ShortestRemaining,
            vec![
                Process::new("P1", 0, 8),
                Process::new("P2", 1, 4),
                Process::new("P3", 2, 9),
                Process::new("P4", 3, 5),
            ],
        );
        assert_eq!(
            out.timeline.entries(),
            &[
                GanttEntry::new("P1", 0, 1),
                GanttEntry::new("P2", 1, 5),
                GanttEntry::new("P4", 5, 10),
                GanttEntry::new("P1", 10, 17),
                GanttEntry::new("P3", 17, 26),
            ]
        );
        let total_wait: i64 = out.processes.iter().filter_map(|p| p.waiting_time).sum();
        assert_eq!(total_wait, 26);
        let ids: Vec<&str> = out.processes.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P2", "P4", "P1", "P3"]);
    }

    #[test]
    fn test_srtf_tie_keeps_submission_order() {
        // At t=2, P1 has 2 left and P2 needs 2: P1 is earlier and keeps running.
        let out = run(
            &rules::ShortestRemaining,
            vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)],
        );
        assert_eq!(
            out.timeline.entries(),
            &[GanttEntry::new("P1", 0, 4), GanttEntry::new("P2", 4, 6)]
        );
        assert_eq!(out.context_switches, 1);
    }

    #[test]
    fn test_priority_preemptive() {
        let out = run(
            &rules::HighestPriority,
            vec![
                Process::new("P1", 0, 5).with_priority(2),
                Process::new("P2", 1, 3).with_priority(1),
                Process::new("P3", 2, 8).with_priority(3),
                Process::new("P4", 3, 6).with_priority(2),
            ],
        );
        assert_eq!(
            out.timeline.entries(),
            &[
                GanttEntry::new("P1", 0, 1),
                GanttEntry::new("P2", 1, 4),
                GanttEntry::new("P1", 4, 8),
                GanttEntry::new("P4", 8, 14),
                GanttEntry::new("P3", 14, 22),
            ]
        );
        assert_eq!(out.context_switches, 4);
    }

    #[test]
    fn test_switch_counted_across_idle_gap() {
        let out = run(
            &rules::ShortestRemaining,
            vec![Process::new("P1", 0, 2), Process::new("P2", 5, 2)],
        );
        assert_eq!(
            out.timeline.entries(),
            &[GanttEntry::new("P1", 0, 2), GanttEntry::new("P2", 5, 7)]
        );
        assert_eq!(out.context_switches, 1);
    }

    #[test]
    fn test_arrivals_that_do_not_preempt_coalesce() {
        let out = run(
            &rules::HighestPriority,
            vec![
                Process::new("P1", 0, 6).with_priority(0),
                Process::new("P2", 2, 1).with_priority(5),
                Process::new("P3", 4, 1).with_priority(5),
            ],
        );
        assert_eq!(out.timeline.entries()[0], GanttEntry::new("P1", 0, 6));
        assert_eq!(out.timeline.len(), 3);
        assert_eq!(out.context_switches, 2);
    }
}

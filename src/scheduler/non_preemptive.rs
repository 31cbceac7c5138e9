//! Non-preemptive rule-driven dispatch (SJF, Priority).
//!
//! # Algorithm
//!
//! 1. Among processes that have arrived and are unfinished, pick the best
//!    by the dispatching rule (ties: submission order).
//! 2. Run it to completion.
//! 3. If nothing has arrived, jump to the next arrival.
//!
//! A context switch is counted after each completion that leaves
//! unfinished processes behind.

use tracing::debug;

use super::{next_arrival, RunOutcome};
use crate::dispatching::{select_best, DispatchingRule};
use crate::models::{Process, Timeline};

pub(crate) fn run<R: DispatchingRule + ?Sized>(rule: &R, mut work: Vec<Process>) -> RunOutcome {
    let mut timeline = Timeline::new();
    let mut completed = Vec::with_capacity(work.len());
    let mut context_switches = 0;
    let mut pending = work.len();
    let mut now = 0;

    while pending > 0 {
        let Some(index) = select_best(rule, &work, now) else {
            match next_arrival(&work, now) {
                Some(t) => now = t,
                None => break,
            }
            continue;
        };

        let process = &mut work[index];
        let start = now;
        process.dispatch(start);
        now += process.execute(process.burst_time);
        process.complete(now);

        debug!(rule = rule.name(), process = %process.id, start, end = now, "dispatch");
        timeline.push(&process.id, start, now);
        completed.push(process.clone());

        pending -= 1;
        if pending > 0 {
            context_switches += 1;
        }
    }

    RunOutcome {
        processes: completed,
        timeline,
        context_switches,
    }
}

//! Dispatching rules for CPU selection.
//!
//! A dispatching rule scores a process; the scheduler hands the CPU to the
//! available process with the lowest score. Ties go to the process that
//! appears first in the candidate list, which preserves the caller's
//! submission order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, select_best};
//! use u_cpusched::models::Process;
//!
//! let processes = vec![
//!     Process::new("long", 0, 8),
//!     Process::new("short", 0, 2),
//!     Process::new("later", 5, 1),
//! ];
//! // At t=0 only "long" and "short" have arrived.
//! assert_eq!(select_best(&rules::ShortestBurst, &processes, 0), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use std::fmt::Debug;

use crate::models::Process;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A rule that ranks processes competing for the CPU.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Scores a process. Lower = dispatched first.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Index of the best process available at `now`.
///
/// Only processes with `arrival_time <= now` and work remaining compete.
/// Among equal scores the lowest index wins. Returns `None` when nothing
/// is available.
pub fn select_best<R: DispatchingRule + ?Sized>(
    rule: &R,
    processes: &[Process],
    now: i64,
) -> Option<usize> {
    processes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_available_at(now))
        .min_by_key(|&(i, p)| (rule.evaluate(p), i))
        .map(|(i, _)| i)
}

/// Indices of all processes ordered by rule score.
///
/// The sort is stable: equal scores keep their relative input order.
pub fn sort_indices<R: DispatchingRule + ?Sized>(rule: &R, processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| rule.evaluate(&processes[i]));
    indices
}

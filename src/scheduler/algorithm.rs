//! Scheduling policy selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ParseAlgorithmError;

/// The six supported CPU scheduling policies.
///
/// Serialized as the canonical upper-case tag (e.g. `"ROUND_ROBIN"`).
/// Deserializing an unknown tag yields [`Algorithm::Fcfs`], the same as
/// [`Algorithm::from_tag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", from = "String")]
pub enum Algorithm {
    /// First-Come, First-Served.
    #[default]
    Fcfs,
    /// Shortest Job First, run to completion.
    SjfNonPreemptive,
    /// Shortest Remaining Time First.
    SjfPreemptive,
    /// Quantum-bounded FIFO rotation.
    RoundRobin,
    /// Lowest priority value first, run to completion.
    PriorityNonPreemptive,
    /// Lowest priority value first, re-evaluated every tick.
    PriorityPreemptive,
}

impl Algorithm {
    /// All policies in menu order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Fcfs,
        Algorithm::SjfNonPreemptive,
        Algorithm::SjfPreemptive,
        Algorithm::RoundRobin,
        Algorithm::PriorityNonPreemptive,
        Algorithm::PriorityPreemptive,
    ];

    /// Canonical tag.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::SjfNonPreemptive => "SJF_NON_PREEMPTIVE",
            Algorithm::SjfPreemptive => "SJF_PREEMPTIVE",
            Algorithm::RoundRobin => "ROUND_ROBIN",
            Algorithm::PriorityNonPreemptive => "PRIORITY_NON_PREEMPTIVE",
            Algorithm::PriorityPreemptive => "PRIORITY_PREEMPTIVE",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::SjfNonPreemptive => "SJF (Non-Preemptive)",
            Algorithm::SjfPreemptive => "SJF (Preemptive)",
            Algorithm::RoundRobin => "Round Robin",
            Algorithm::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Algorithm::PriorityPreemptive => "Priority (Preemptive)",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            Algorithm::SjfPreemptive | Algorithm::RoundRobin | Algorithm::PriorityPreemptive
        )
    }

    /// Whether the time quantum affects this policy.
    pub fn uses_time_quantum(self) -> bool {
        self == Algorithm::RoundRobin
    }

    /// Parses a tag, falling back to FCFS for anything unrecognized.
    ///
    /// The fallback is logged at `warn` level.
    pub fn from_tag(tag: &str) -> Self {
        match tag.parse() {
            Ok(algorithm) => algorithm,
            Err(err) => {
                warn!(%err, "falling back to FCFS");
                Algorithm::Fcfs
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Strict, case-insensitive parse of a canonical tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseAlgorithmError(tag.to_string()))
    }
}

impl From<Algorithm> for &'static str {
    fn from(algorithm: Algorithm) -> Self {
        algorithm.tag()
    }
}

impl From<String> for Algorithm {
    fn from(tag: String) -> Self {
        Algorithm::from_tag(&tag)
    }
}

//! Execution timeline (Gantt chart) model.
//!
//! A timeline is the ordered list of half-open `[start, end)` intervals
//! during which each process held the CPU. Contiguous intervals of the same
//! process are coalesced on insertion, so a process that keeps the CPU across
//! several ticks appears as a single entry.

use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Process holding the CPU.
    pub process_id: String,
    /// First tick of the interval (inclusive).
    pub start_time: i64,
    /// End of the interval (exclusive).
    pub end_time: i64,
}

impl GanttEntry {
    /// Creates a new entry.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether `tick` falls inside `[start_time, end_time)`.
    #[inline]
    pub fn contains(&self, tick: i64) -> bool {
        self.start_time <= tick && tick < self.end_time
    }
}

/// Ordered, non-overlapping sequence of [`GanttEntry`] values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `[start, end)` for `process_id`.
    ///
    /// Empty intervals are ignored. If the last entry belongs to the same
    /// process and ends at `start`, it is extended instead of adding a new
    /// entry.
    pub fn push(&mut self, process_id: &str, start: i64, end: i64) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.end_time() <= start,
            "timeline entry [{start}, {end}) for {process_id} overlaps previous entry"
        );

        if let Some(last) = self.entries.last_mut() {
            if last.process_id == process_id && last.end_time == start {
                last.end_time = end;
                return;
            }
        }
        self.entries.push(GanttEntry::new(process_id, start, end));
    }

    /// All entries in start-time order.
    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    /// Iterates over the entries.
    pub fn iter(&self) -> std::slice::Iter<'_, GanttEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last entry, or 0 for an empty timeline.
    pub fn end_time(&self) -> i64 {
        self.entries.last().map(|e| e.end_time).unwrap_or(0)
    }

    /// Total ticks the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.entries.iter().map(GanttEntry::duration).sum()
    }

    /// Total ticks the CPU sat idle between t=0 and the end of the last entry.
    pub fn idle_time(&self) -> i64 {
        self.end_time() - self.busy_time()
    }

    /// Entry covering `tick`, if the CPU was busy then.
    pub fn entry_at(&self, tick: i64) -> Option<&GanttEntry> {
        self.entries.iter().find(|e| e.contains(tick))
    }

    /// All entries belonging to one process.
    pub fn entries_for(&self, process_id: &str) -> Vec<&GanttEntry> {
        self.entries
            .iter()
            .filter(|e| e.process_id == process_id)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a GanttEntry;
    type IntoIter = std::slice::Iter<'a, GanttEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

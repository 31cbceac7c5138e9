//! Scheduling domain models.
//!
//! Provides the value types shared by every scheduling policy: the input
//! process, the execution timeline, and editable workloads.
//!
//! # Domain Mappings
//!
//! | u-cpusched | Textbook term | Gantt rendering |
//! |------------|---------------|-----------------|
//! | Process | Job / PCB | Row label |
//! | GanttEntry | CPU burst slice | Bar |
//! | Timeline | Gantt chart | Chart |
//! | Workload | Process table | Input table |

mod process;
mod timeline;
mod workload;

pub use process::{Process, ProcessState};
pub use timeline::{GanttEntry, Timeline};
pub use workload::{Workload, WorkloadLimits, DEFAULT_BURST_TIME, DEFAULT_PRIORITY};

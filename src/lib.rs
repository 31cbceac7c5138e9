//! Single-CPU process scheduling simulator.
//!
//! Runs a process set through one of six classic scheduling policies over
//! integer ticks, producing a coalesced Gantt timeline, per-process timing
//! and aggregate KPIs.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `GanttEntry`, `Timeline`, `Workload`
//! - **`dispatching`**: Selection rules (FIFO, SJF, SRTF, priority)
//! - **`scheduler`**: `CpuScheduler`, the policy routines and `SchedulingMetrics`
//! - **`metrics`**: `MetricsSink` seam and the in-memory `MetricsRecorder`
//! - **`validation`**: Input checks run before any simulation tick
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Workload;
//! use u_cpusched::scheduler::{schedule, Algorithm};
//!
//! let workload = Workload::demo();
//! let result = schedule(workload.processes(), Algorithm::SjfPreemptive, 2).unwrap();
//! assert_eq!(result.gantt_chart.busy_time(), workload.total_burst_time());
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod metrics;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{ParseAlgorithmError, SchedulingError};

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Throughput micro-benchmark harness for comparing implementation variants.
//!
//! Give the harness a set of named zero-argument functions and it reports how many operations
//! per second each of them sustains. Functions can be synchronous or return futures.
//!
//! This package is not meant for use in production, serving only as a development tool for
//! quick side-by-side comparisons.
//!
//! The core functionality includes:
//! - [`SyncTargets`] and [`AsyncTargets`] - The named functions to compare
//! - [`Settings`] - Batch size, cycle time and cycle counts, built via [`Settings::builder()`]
//! - [`run_synchronous()`] and [`run_asynchronous()`] - Execute the benchmark
//! - [`Report`] - The per-function scores, also printed through a [`Reporter`]
//!
//! # Operating principles
//!
//! ## Cycles
//!
//! A cycle runs one function repeatedly for `cycle_time` and yields one sample: the number of
//! completed operations divided by the elapsed time. The clock is only consulted once per
//! `call_batch_size` operations, so a cycle can overshoot `cycle_time` by one such pass.
//!
//! Synchronous functions are called back to back in an unrolled loop of 20 calls. Asynchronous
//! functions are called 20 at a time and all 20 futures are awaited together before the next
//! 20 calls are made.
//!
//! ## Phases
//!
//! The run first executes `warm_up_cycle_count` cycles per function and throws the samples away,
//! then executes `measurement_cycle_count` cycles per function and keeps the samples. In both
//! phases the functions take turns: cycle 1 of every function, then cycle 2 of every function
//! and so on. This spreads background noise evenly across the functions.
//!
//! ## Scores
//!
//! The score of a function is the sum of its `best_measurement_count` highest samples. Note
//! that this is a sum and not a mean. Scores are comparable between functions of the same run.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use cycle_bench::{Settings, SyncTargets};
//!
//! # fn main() -> Result<(), cycle_bench::Error> {
//! let mut targets = SyncTargets::new();
//! targets
//!     .add("vec_with_capacity", || Vec::<u64>::with_capacity(16))?
//!     .add("vec_new", || Vec::<u64>::new())?;
//!
//! let settings = Settings::builder()
//!     .cycle_time(Duration::from_millis(5))
//!     .warm_up_cycle_count(2)
//!     .measurement_cycle_count(10)
//!     .best_measurement_count(3)
//!     .build();
//!
//! // Prints the configuration, progress and one line per function, e.g.
//! // [vec_new] → 1,234,567,890 ops/sec
//! let report = cycle_bench::run(&targets, settings);
//!
//! assert_eq!(report.entries().len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! # Failures
//!
//! There is no failure handling. A function that panics aborts the whole run and a function
//! that never returns blocks it forever.

mod aggregate;
mod callable;
mod error;
mod executor;
mod format;
mod pal;
mod report;
mod reporter;
mod run;
mod scheduler;
mod settings;
mod settings_builder;
mod targets;

pub use aggregate::*;
pub use callable::{AsyncCallable, BATCH_WIDTH, SyncCallable};
pub use error::Error;
pub use report::*;
pub use reporter::*;
pub use run::*;
pub use settings::*;
pub use settings_builder::*;
pub use targets::{AsyncTargets, SyncTargets, Targets};

use futures::executor::block_on;

use crate::pal::PlatformFacade;
use crate::{AsyncTargets, Report, Reporter, Settings, StdoutReporter, SyncTargets, scheduler};

/// Measures synchronous targets and prints the results to stdout.
///
/// This is the same as [`run_synchronous()`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cycle_bench::{Settings, SyncTargets};
///
/// # fn main() -> Result<(), cycle_bench::Error> {
/// let mut targets = SyncTargets::new();
/// targets
///     .add("checked_add", || 40_u64.checked_add(2))?
///     .add("saturating_add", || 40_u64.saturating_add(2))?;
///
/// let settings = Settings::builder()
///     .cycle_time(Duration::from_millis(2))
///     .warm_up_cycle_count(1)
///     .measurement_cycle_count(5)
///     .best_measurement_count(2)
///     .build();
///
/// let report = cycle_bench::run(&targets, settings);
/// assert_eq!(report.entries().len(), 2);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn run(targets: &SyncTargets, settings: Settings) -> Report {
    run_synchronous(targets, settings)
}

/// Measures synchronous targets, calling each one back to back on the current thread, and
/// prints the results to stdout.
///
/// A panic in any target aborts the whole run.
pub fn run_synchronous(targets: &SyncTargets, settings: Settings) -> Report {
    run_synchronous_with(targets, settings, &mut StdoutReporter)
}

/// Measures synchronous targets, sending all output to the given reporter.
pub fn run_synchronous_with(
    targets: &SyncTargets,
    settings: Settings,
    reporter: &mut dyn Reporter,
) -> Report {
    // Sequential cycles never suspend, so this completes without ever parking the thread.
    block_on(scheduler::run(
        targets,
        &settings,
        &PlatformFacade::real(),
        reporter,
    ))
}

/// Measures asynchronous targets in concurrent batches and prints the results to stdout.
///
/// Each batch starts 20 calls and waits for all of their futures to complete before the next
/// batch starts. The returned future can be driven by any executor; it does not need to be
/// `Send`.
///
/// A panic in any target aborts the whole run.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cycle_bench::{AsyncTargets, Settings};
/// use futures::executor::block_on;
///
/// # fn main() -> Result<(), cycle_bench::Error> {
/// let mut targets = AsyncTargets::new();
/// targets.add("ready", async || 42)?;
///
/// let settings = Settings::builder()
///     .cycle_time(Duration::from_millis(2))
///     .warm_up_cycle_count(1)
///     .measurement_cycle_count(3)
///     .build();
///
/// let report = block_on(cycle_bench::run_asynchronous(&targets, settings));
/// assert!(report.score("ready").is_some());
/// # Ok(())
/// # }
/// ```
pub async fn run_asynchronous(targets: &AsyncTargets, settings: Settings) -> Report {
    run_asynchronous_with(targets, settings, &mut StdoutReporter).await
}

/// Measures asynchronous targets in concurrent batches, sending all output to the given
/// reporter.
pub async fn run_asynchronous_with(
    targets: &AsyncTargets,
    settings: Settings,
    reporter: &mut dyn Reporter,
) -> Report {
    scheduler::run(targets, &settings, &PlatformFacade::real(), reporter).await
}

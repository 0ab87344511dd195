//! Cycle executors: run one callable repeatedly for one cycle and turn the completed operation
//! count into a throughput sample.
//!
//! The clock is only checked between inner-loop passes, each of which attempts
//! `call_batch_size` operations, so a cycle may overshoot the configured cycle time by up to
//! one pass.

use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};
use crate::{AsyncCallable, BATCH_WIDTH, Settings, SyncCallable};

/// Runs a synchronous callable for one cycle, making every call on the current thread.
pub(crate) fn execute_sequential(
    callable: &SyncCallable,
    settings: &Settings,
    platform: &PlatformFacade,
) -> f64 {
    let mut operation_count: u64 = 0;

    let start = platform.now();

    let elapsed = loop {
        let elapsed = platform.now().saturating_duration_since(start);

        if elapsed >= settings.cycle_time() {
            break elapsed;
        }

        for _ in (0..settings.call_batch_size()).step_by(BATCH_WIDTH) {
            callable.call_batch();
        }

        operation_count = operation_count.saturating_add(settings.call_batch_size());
    };

    ops_per_second(operation_count, elapsed)
}

/// Runs an asynchronous callable for one cycle, keeping one batch of calls in flight at a time.
pub(crate) async fn execute_concurrent_batched(
    callable: &AsyncCallable,
    settings: &Settings,
    platform: &PlatformFacade,
) -> f64 {
    let mut operation_count: u64 = 0;

    let start = platform.now();

    let elapsed = loop {
        let elapsed = platform.now().saturating_duration_since(start);

        if elapsed >= settings.cycle_time() {
            break elapsed;
        }

        for _ in (0..settings.call_batch_size()).step_by(BATCH_WIDTH) {
            callable.call_batch().await;
        }

        operation_count = operation_count.saturating_add(settings.call_batch_size());
    };

    ops_per_second(operation_count, elapsed)
}

/// Zero operations over zero elapsed time yields NaN. This is passed through unchanged.
#[expect(
    clippy::cast_precision_loss,
    reason = "operation counts beyond 2^52 are not realistic within one cycle"
)]
fn ops_per_second(operation_count: u64, elapsed: Duration) -> f64 {
    operation_count as f64 / elapsed.as_secs_f64()
}

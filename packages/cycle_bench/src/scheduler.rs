//! The two-phase measurement protocol.
//!
//! Every phase is a sequence of rounds. In each round, every target runs exactly one cycle,
//! in registration order. Interleaving the targets this way spreads transient system noise
//! evenly over them instead of letting one target absorb a contiguous stretch of it.

use log::{debug, trace};

use crate::callable::Callable;
use crate::format::group_thousands;
use crate::pal::PlatformFacade;
use crate::{Report, ReportEntry, Reporter, Settings, Targets, aggregate};

/// Warms up and then measures every target, returning the aggregated results.
///
/// The scheduler owns one sample buffer per target. Buffers are emptied before the measurement
/// phase starts, so warm-up cycles never contribute to a score.
pub(crate) async fn run<C: Callable>(
    targets: &Targets<C>,
    settings: &Settings,
    platform: &PlatformFacade,
    reporter: &mut dyn Reporter,
) -> Report {
    report_settings(settings, reporter);

    let mut sample_buffers: Vec<Vec<f64>> = targets.iter().map(|_| Vec::new()).collect();

    reporter.emit_line(&format!(
        "Running warm up cycles ({}).",
        settings.warm_up_cycle_count()
    ));
    debug!(
        "warming up {} targets for {} cycles",
        targets.len(),
        settings.warm_up_cycle_count()
    );

    for _ in 0..settings.warm_up_cycle_count() {
        for target in targets.iter() {
            target.callable().execute_cycle(settings, platform).await;
        }
    }

    reporter.emit_line(&format!(
        "Running measurement cycles ({}).",
        settings.measurement_cycle_count()
    ));
    debug!(
        "measuring {} targets for {} cycles",
        targets.len(),
        settings.measurement_cycle_count()
    );

    let capacity = usize::try_from(settings.measurement_cycle_count()).unwrap_or_default();

    for buffer in &mut sample_buffers {
        buffer.clear();
        buffer.reserve(capacity);
    }

    for cycle in 0..settings.measurement_cycle_count() {
        for (target, buffer) in targets.iter().zip(sample_buffers.iter_mut()) {
            let sample = target.callable().execute_cycle(settings, platform).await;
            trace!("cycle {cycle} of '{}': {sample} ops/sec", target.name());
            buffer.push(sample);
        }
    }

    let entries = targets
        .iter()
        .zip(sample_buffers)
        .map(|(target, mut samples)| {
            let score = aggregate(&mut samples, settings.best_measurement_count());
            debug!(
                "'{}' scored {score} ops/sec from {} samples",
                target.name(),
                samples.len()
            );
            ReportEntry::new(target.name().to_owned(), score, samples)
        })
        .collect();

    let report = Report::new(*settings, entries);

    reporter.emit_line(&report.heading());

    for entry in report.entries() {
        reporter.emit_line(&entry.to_string());
    }

    report
}

fn report_settings(settings: &Settings, reporter: &mut dyn Reporter) {
    reporter.emit_line(&format!(
        "Running tests with batch size = {} ops",
        group_thousands(u128::from(settings.call_batch_size()))
    ));
    reporter.emit_line(&format!(
        "Warm up time per function = {} ms",
        group_thousands(settings.warm_up_duration().as_millis())
    ));
    reporter.emit_line(&format!(
        "Time per function = {} ms",
        group_thousands(settings.measurement_duration().as_millis())
    ));
    reporter.emit_line(&format!(
        "Cycle time = {} ms",
        group_thousands(settings.cycle_time().as_millis())
    ));
}

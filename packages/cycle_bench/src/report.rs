//! Benchmark results.

use std::fmt;

use crate::Settings;
use crate::format::format_score;

/// The outcome of a benchmark run: one entry per target, in registration order.
///
/// A report is returned by every run function in addition to the lines sent to the
/// [`Reporter`](crate::Reporter), so results can also be inspected programmatically.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cycle_bench::{Settings, SilentReporter, SyncTargets, run_synchronous_with};
///
/// # fn main() -> Result<(), cycle_bench::Error> {
/// let mut targets = SyncTargets::new();
/// targets.add("sum", || (0..100_u64).sum::<u64>())?;
///
/// let settings = Settings::builder()
///     .cycle_time(Duration::from_millis(1))
///     .warm_up_cycle_count(1)
///     .measurement_cycle_count(3)
///     .best_measurement_count(2)
///     .build();
///
/// let report = run_synchronous_with(&targets, settings, &mut SilentReporter);
///
/// for entry in report.entries() {
///     println!("{} scored {:.0} ops/sec", entry.name(), entry.score());
/// }
///
/// assert!(report.score("sum").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    settings: Settings,
    entries: Vec<ReportEntry>,
}

/// The aggregated result of a single target.
#[derive(Clone, Debug)]
pub struct ReportEntry {
    name: String,
    score: f64,
    samples: Vec<f64>,
}

impl Report {
    #[must_use]
    pub(crate) fn new(settings: Settings, entries: Vec<ReportEntry>) -> Self {
        Self { settings, entries }
    }

    /// The settings the run was executed with.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Results of all targets, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The score of the target with the given name, if it was part of the run.
    #[must_use]
    pub fn score(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(ReportEntry::score)
    }

    /// Whether the run had no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The heading line that precedes the per-target lines.
    pub(crate) fn heading(&self) -> String {
        format!(
            "Results (best {} measurements cycles):",
            self.settings.best_measurement_count()
        )
    }
}

impl ReportEntry {
    #[must_use]
    pub(crate) fn new(name: String, score: f64, samples: Vec<f64>) -> Self {
        Self {
            name,
            score,
            samples,
        }
    }

    /// The name the target was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of the best measurement samples, in operations per second.
    ///
    /// This is a total over `best_measurement_count` cycles, not a mean rate.
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// All measurement samples of this target in operations per second, highest first.
    ///
    /// Warm-up samples are not included.
    #[must_use]
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] → {} ops/sec", self.name, format_score(self.score))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }

        Ok(())
    }
}

use std::time::Duration;

use crate::SettingsBuilder;

/// Default number of operations attempted per inner-loop pass before the clock is re-checked.
pub const DEFAULT_CALL_BATCH_SIZE: u64 = 1_000;

/// Default duration of one cycle.
pub const DEFAULT_CYCLE_TIME: Duration = Duration::from_millis(100);

/// Default number of discarded warm-up cycles per target.
pub const DEFAULT_WARM_UP_CYCLE_COUNT: u32 = 10;

/// Default number of measured cycles per target.
pub const DEFAULT_MEASUREMENT_CYCLE_COUNT: u32 = 100;

/// Default number of best samples that are summed into a target's score.
pub const DEFAULT_BEST_MEASUREMENT_COUNT: u32 = 10;

/// Configuration of a benchmark run.
///
/// Start from [`Settings::default()`] and override individual fields via
/// [`Settings::builder()`]. Values are not validated: a `best_measurement_count` larger than
/// `measurement_cycle_count` simply selects every sample, and a `call_batch_size` that is not a
/// multiple of the inner batch width (20) still counts `call_batch_size` operations per pass.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cycle_bench::Settings;
///
/// let settings = Settings::builder()
///     .cycle_time(Duration::from_millis(50))
///     .measurement_cycle_count(20)
///     .build();
///
/// assert_eq!(settings.cycle_time(), Duration::from_millis(50));
/// assert_eq!(settings.measurement_cycle_count(), 20);
/// // Fields that were not overridden keep their defaults.
/// assert_eq!(settings.call_batch_size(), 1_000);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settings {
    pub(crate) call_batch_size: u64,
    pub(crate) cycle_time: Duration,
    pub(crate) warm_up_cycle_count: u32,
    pub(crate) measurement_cycle_count: u32,
    pub(crate) best_measurement_count: u32,
}

impl Settings {
    /// Starts configuring a new set of settings, pre-populated with the defaults.
    pub fn builder() -> SettingsBuilder {
        SettingsBuilder::new()
    }

    /// Number of operations attempted per inner-loop pass before the clock is re-checked.
    #[must_use]
    pub fn call_batch_size(&self) -> u64 {
        self.call_batch_size
    }

    /// How long one cycle runs before its throughput sample is taken.
    #[must_use]
    pub fn cycle_time(&self) -> Duration {
        self.cycle_time
    }

    /// Number of warm-up cycles per target. Their samples are discarded.
    #[must_use]
    pub fn warm_up_cycle_count(&self) -> u32 {
        self.warm_up_cycle_count
    }

    /// Number of measurement cycles per target. Each yields one sample.
    #[must_use]
    pub fn measurement_cycle_count(&self) -> u32 {
        self.measurement_cycle_count
    }

    /// Number of highest samples that are summed into each target's score.
    #[must_use]
    pub fn best_measurement_count(&self) -> u32 {
        self.best_measurement_count
    }

    /// Nominal warm-up time spent on each target.
    #[must_use]
    pub fn warm_up_duration(&self) -> Duration {
        self.cycle_time.saturating_mul(self.warm_up_cycle_count)
    }

    /// Nominal measurement time spent on each target.
    #[must_use]
    pub fn measurement_duration(&self) -> Duration {
        self.cycle_time.saturating_mul(self.measurement_cycle_count)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            call_batch_size: DEFAULT_CALL_BATCH_SIZE,
            cycle_time: DEFAULT_CYCLE_TIME,
            warm_up_cycle_count: DEFAULT_WARM_UP_CYCLE_COUNT,
            measurement_cycle_count: DEFAULT_MEASUREMENT_CYCLE_COUNT,
            best_measurement_count: DEFAULT_BEST_MEASUREMENT_COUNT,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Settings: Send, Sync, Copy);

    #[test]
    fn defaults() {
        let settings = Settings::default();

        assert_eq!(settings.call_batch_size(), 1_000);
        assert_eq!(settings.cycle_time(), Duration::from_millis(100));
        assert_eq!(settings.warm_up_cycle_count(), 10);
        assert_eq!(settings.measurement_cycle_count(), 100);
        assert_eq!(settings.best_measurement_count(), 10);
    }

    #[test]
    fn phase_durations_multiply_cycle_time() {
        let settings = Settings::default();

        assert_eq!(settings.warm_up_duration(), Duration::from_secs(1));
        assert_eq!(settings.measurement_duration(), Duration::from_secs(10));
    }

    #[test]
    fn phase_durations_saturate() {
        let settings = Settings::builder()
            .cycle_time(Duration::MAX)
            .warm_up_cycle_count(2)
            .build();

        assert_eq!(settings.warm_up_duration(), Duration::MAX);
    }
}

use std::time::Duration;

use crate::Settings;

/// Builder for creating an instance of [`Settings`].
///
/// Every field starts at its default, so only the fields you want to change need to be set.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cycle_bench::Settings;
///
/// let settings = Settings::builder()
///     .call_batch_size(20)
///     .cycle_time(Duration::from_millis(50))
///     .warm_up_cycle_count(1)
///     .measurement_cycle_count(3)
///     .best_measurement_count(2)
///     .build();
///
/// assert_eq!(settings.best_measurement_count(), 2);
/// ```
#[derive(Debug)]
#[must_use]
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub(crate) fn new() -> Self {
        Self {
            settings: Settings::default(),
        }
    }

    /// Sets how many operations are attempted per inner-loop pass before the clock is
    /// re-checked.
    ///
    /// The value is expected to be a multiple of 20, the width of one unrolled batch.
    /// This is not validated.
    pub fn call_batch_size(mut self, call_batch_size: u64) -> Self {
        self.settings.call_batch_size = call_batch_size;
        self
    }

    /// Sets how long one cycle runs.
    pub fn cycle_time(mut self, cycle_time: Duration) -> Self {
        self.settings.cycle_time = cycle_time;
        self
    }

    /// Sets how many discarded warm-up cycles run for each target.
    pub fn warm_up_cycle_count(mut self, count: u32) -> Self {
        self.settings.warm_up_cycle_count = count;
        self
    }

    /// Sets how many measured cycles run for each target.
    pub fn measurement_cycle_count(mut self, count: u32) -> Self {
        self.settings.measurement_cycle_count = count;
        self
    }

    /// Sets how many of the highest samples are summed into each target's score.
    pub fn best_measurement_count(mut self, count: u32) -> Self {
        self.settings.best_measurement_count = count;
        self
    }

    /// Finalizes the configuration.
    #[must_use]
    pub fn build(self) -> Settings {
        self.settings
    }
}

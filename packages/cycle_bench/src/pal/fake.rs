//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

const ERR_POISONED_LOCK: &str = "FakePlatform state lock should not be poisoned";

#[derive(Debug)]
struct FakePlatformState {
    origin: Instant,
    elapsed: Duration,
    step: Duration,
    readings: u64,
}

/// Fake clock whose every reading advances time by a fixed step.
///
/// Each call to `now()` returns the current fake time and then moves the fake time forward
/// by `step`. Cycle executors read the clock once at cycle start and once before every
/// inner-loop pass, so the step controls exactly how many passes fit into one cycle.
///
/// Clones share the same state, allowing a test to keep a handle while the code under test
/// owns another.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    state: Arc<Mutex<FakePlatformState>>,
}

impl FakePlatform {
    pub(crate) fn new(step: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakePlatformState {
                origin: Instant::now(),
                elapsed: Duration::ZERO,
                step,
                readings: 0,
            })),
        }
    }

    /// Changes how far time moves forward after each reading.
    pub(crate) fn set_step(&self, step: Duration) {
        self.state.lock().expect(ERR_POISONED_LOCK).step = step;
    }

    /// How many times the clock has been read.
    pub(crate) fn readings(&self) -> u64 {
        self.state.lock().expect(ERR_POISONED_LOCK).readings
    }
}

impl Platform for FakePlatform {
    fn now(&self) -> Instant {
        let mut state = self.state.lock().expect(ERR_POISONED_LOCK);

        let now = state
            .origin
            .checked_add(state.elapsed)
            .expect("fake time does not run for long enough to overflow Instant");

        state.elapsed = state.elapsed.saturating_add(state.step);
        state.readings = state.readings.saturating_add(1);

        now
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn each_reading_advances_by_step() {
        let platform = FakePlatform::new(Duration::from_millis(10));

        let first = platform.now();
        let second = platform.now();
        let third = platform.now();

        assert_eq!(second.duration_since(first), Duration::from_millis(10));
        assert_eq!(third.duration_since(first), Duration::from_millis(20));
        assert_eq!(platform.readings(), 3);
    }

    #[test]
    fn zero_step_freezes_time() {
        let platform = FakePlatform::new(Duration::ZERO);

        let first = platform.now();
        let second = platform.now();

        assert_eq!(first, second);
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new(Duration::from_millis(1));
        let platform2 = platform1.clone();

        let first = platform1.now();
        platform2.set_step(Duration::from_millis(5));
        let second = platform2.now();
        let third = platform1.now();

        assert_eq!(second.duration_since(first), Duration::from_millis(1));
        assert_eq!(third.duration_since(second), Duration::from_millis(5));
        assert_eq!(platform1.readings(), 3);
    }
}

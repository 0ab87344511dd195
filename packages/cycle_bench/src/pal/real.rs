use std::time::Instant;

use crate::pal::Platform;

/// Reads time from the operating system monotonic clock via [`Instant`].
#[derive(Debug, Default)]
pub(crate) struct RealPlatform;

impl Platform for RealPlatform {
    #[cfg_attr(test, mutants::skip)] // Real clock readings cannot be asserted exactly.
    fn now(&self) -> Instant {
        Instant::now()
    }
}

//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Instant;

/// Provides the monotonic time source used to bound cycle duration.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Reads the current time.
    ///
    /// Consecutive readings never go backwards.
    fn now(&self) -> Instant;
}

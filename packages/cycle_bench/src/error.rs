use thiserror::Error;

/// Errors that can occur when assembling a benchmark.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A target was registered under a name that is already taken in the same target set.
    ///
    /// Target names identify the results in the report, so they must be unique.
    #[error("a benchmark target named '{name}' is already registered")]
    DuplicateTarget {
        /// The name that was registered twice.
        name: String,
    },
}

/// A specialized `Result` type for `cycle_bench` operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn duplicate_target_names_the_target() {
        let error = Error::DuplicateTarget {
            name: "vec_push".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "a benchmark target named 'vec_push' is already registered"
        );
    }
}

use std::future::Future;
use std::slice;

use crate::error::Result;
use crate::{AsyncCallable, Error, SyncCallable};

/// A named callable registered for measurement.
#[derive(Debug)]
pub(crate) struct Target<C> {
    name: String,
    callable: C,
}

impl<C> Target<C> {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn callable(&self) -> &C {
        &self.callable
    }
}

/// The set of functions to compare in one benchmark run.
///
/// Targets are measured in registration order within every cycle. Each name may only be
/// registered once.
///
/// Use [`SyncTargets`] for plain functions and [`AsyncTargets`] for functions that return
/// futures.
///
/// # Examples
///
/// ```
/// use cycle_bench::SyncTargets;
///
/// # fn main() -> Result<(), cycle_bench::Error> {
/// let mut targets = SyncTargets::new();
/// targets
///     .add("format", || format!("{}", 42))?
///     .add("to_string", || 42.to_string())?;
///
/// assert_eq!(targets.names().collect::<Vec<_>>(), ["format", "to_string"]);
///
/// // Names must be unique.
/// assert!(targets.add("format", || ()).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Targets<C> {
    entries: Vec<Target<C>>,
}

/// Functions measured sequentially, one call after another.
pub type SyncTargets = Targets<SyncCallable>;

/// Functions measured in concurrent batches of in-flight futures.
pub type AsyncTargets = Targets<AsyncCallable>;

impl<C> Targets<C> {
    /// Creates an empty target set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a callable under a name that is not yet taken.
    pub(crate) fn insert(&mut self, name: String, callable: C) -> Result<&mut Self> {
        if self.entries.iter().any(|target| target.name == name) {
            return Err(Error::DuplicateTarget { name });
        }

        self.entries.push(Target { name, callable });
        Ok(self)
    }

    /// Number of registered targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no targets have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the registered targets in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Target::name)
    }

    pub(crate) fn iter(&self) -> slice::Iter<'_, Target<C>> {
        self.entries.iter()
    }
}

impl Targets<SyncCallable> {
    /// Registers a synchronous function under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTarget`] if the name is already registered.
    pub fn add<F, R>(&mut self, name: impl Into<String>, f: F) -> Result<&mut Self>
    where
        F: Fn() -> R + 'static,
    {
        self.insert(name.into(), SyncCallable::new(f))
    }
}

impl Targets<AsyncCallable> {
    /// Registers a future-returning function under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTarget`] if the name is already registered.
    pub fn add<F, Fut>(&mut self, name: impl Into<String>, f: F) -> Result<&mut Self>
    where
        F: Fn() -> Fut + 'static,
        Fut: Future + 'static,
    {
        self.insert(name.into(), AsyncCallable::new(f))
    }
}

impl<C> Default for Targets<C> {
    fn default() -> Self {
        Self::new()
    }
}

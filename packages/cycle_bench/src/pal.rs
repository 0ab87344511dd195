//! Platform abstraction layer for the benchmark clock.
//!
//! Cycle timing goes through this layer so that tests can substitute a fake clock whose
//! readings advance by a scripted step instead of following wall-clock time.

mod abstractions;
mod facade;
#[cfg(test)]
mod fake;
mod real;

pub(crate) use abstractions::Platform;
pub(crate) use facade::PlatformFacade;
#[cfg(test)]
pub(crate) use fake::FakePlatform;
pub(crate) use real::RealPlatform;

use std::array;
use std::future::Future;
use std::hint::black_box;

use futures::FutureExt;
use futures::future::{LocalBoxFuture, join_all};
use seq_macro::seq;

use crate::pal::PlatformFacade;
use crate::{Settings, executor};

/// How many calls one inner batch makes before the loop counter is advanced.
///
/// Sequential targets make this many calls back to back, unrolled at compile time. Asynchronous
/// targets start this many calls and join them all before the next batch.
pub const BATCH_WIDTH: usize = 20;

/// A callable that can run one benchmark cycle and turn it into a throughput sample.
pub(crate) trait Callable {
    async fn execute_cycle(&self, settings: &Settings, platform: &PlatformFacade) -> f64;
}

/// A synchronous zero-argument function under test.
///
/// The return value of every call is passed through [`black_box`] so that the compiler cannot
/// discard the work.
///
/// # Examples
///
/// ```
/// use cycle_bench::SyncCallable;
///
/// let callable = SyncCallable::new(|| (0..100_u64).sum::<u64>());
/// # drop(callable);
/// ```
#[derive(derive_more::Debug)]
pub struct SyncCallable {
    #[debug(skip)]
    batch: Box<dyn Fn()>,
}

impl SyncCallable {
    /// Wraps a function for sequential measurement.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + 'static,
    {
        // The unrolled width must match BATCH_WIDTH.
        let batch = move || {
            seq!(N in 0..20 {
                black_box(f());
            });
        };

        Self {
            batch: Box::new(batch),
        }
    }

    /// Makes [`BATCH_WIDTH`] calls to the wrapped function.
    pub(crate) fn call_batch(&self) {
        (self.batch)();
    }
}

impl Callable for SyncCallable {
    async fn execute_cycle(&self, settings: &Settings, platform: &PlatformFacade) -> f64 {
        executor::execute_sequential(self, settings, platform)
    }
}

/// An asynchronous zero-argument function under test.
///
/// Each call produces a future. Calls are made in batches of [`BATCH_WIDTH`] whose futures are
/// all in flight at the same time and joined together before the next batch starts.
///
/// # Examples
///
/// ```
/// use cycle_bench::AsyncCallable;
///
/// let callable = AsyncCallable::new(async || 42);
/// # drop(callable);
/// ```
#[derive(derive_more::Debug)]
pub struct AsyncCallable {
    #[debug(skip)]
    batch: Box<dyn Fn() -> LocalBoxFuture<'static, ()>>,
}

impl AsyncCallable {
    /// Wraps a future-returning function for concurrent-batched measurement.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future + 'static,
    {
        let batch = move || {
            // All calls happen before anything is awaited, so the whole batch is in flight.
            let in_flight = join_all(array::from_fn::<Fut, BATCH_WIDTH, _>(|_| f()));

            async move {
                black_box(in_flight.await);
            }
            .boxed_local()
        };

        Self {
            batch: Box::new(batch),
        }
    }

    /// Makes [`BATCH_WIDTH`] calls to the wrapped function and waits for all of them to
    /// complete.
    pub(crate) fn call_batch(&self) -> LocalBoxFuture<'static, ()> {
        (self.batch)()
    }
}

impl Callable for AsyncCallable {
    async fn execute_cycle(&self, settings: &Settings, platform: &PlatformFacade) -> f64 {
        executor::execute_concurrent_batched(self, settings, platform).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::future::poll_fn;
    use std::rc::Rc;
    use std::task::Poll;

    use futures::executor::block_on;

    use super::*;

    #[test]
    fn sync_batch_calls_batch_width_times() {
        let calls = Rc::new(Cell::new(0_usize));

        let callable = SyncCallable::new({
            let calls = Rc::clone(&calls);
            move || calls.set(calls.get().wrapping_add(1))
        });

        callable.call_batch();
        assert_eq!(calls.get(), BATCH_WIDTH);

        callable.call_batch();
        assert_eq!(calls.get(), BATCH_WIDTH.wrapping_mul(2));
    }

    #[test]
    fn async_batch_starts_all_calls_before_awaiting() {
        let started = Rc::new(Cell::new(0_usize));
        let completed = Rc::new(Cell::new(0_usize));

        let callable = AsyncCallable::new({
            let started = Rc::clone(&started);
            let completed = Rc::clone(&completed);
            move || {
                started.set(started.get().wrapping_add(1));
                let completed = Rc::clone(&completed);
                async move {
                    completed.set(completed.get().wrapping_add(1));
                }
            }
        });

        let batch = callable.call_batch();

        // The calls are made when the batch is created, none have been polled yet.
        assert_eq!(started.get(), BATCH_WIDTH);
        assert_eq!(completed.get(), 0);

        block_on(batch);

        assert_eq!(completed.get(), BATCH_WIDTH);
    }

    #[test]
    fn async_batch_waits_for_every_future() {
        let completed = Rc::new(Cell::new(0_usize));

        let callable = AsyncCallable::new({
            let completed = Rc::clone(&completed);
            move || {
                let completed = Rc::clone(&completed);
                let mut yielded = false;
                async move {
                    // Suspend once so the join has to come back for every future.
                    poll_fn(|cx| {
                        if yielded {
                            Poll::Ready(())
                        } else {
                            yielded = true;
                            cx.waker().wake_by_ref();
                            Poll::Pending
                        }
                    })
                    .await;
                    completed.set(completed.get().wrapping_add(1));
                }
            }
        });

        block_on(callable.call_batch());

        assert_eq!(completed.get(), BATCH_WIDTH);
    }

    #[test]
    fn debug_output_names_the_type() {
        let callable = SyncCallable::new(|| ());

        assert!(format!("{callable:?}").starts_with("SyncCallable"));
    }
}

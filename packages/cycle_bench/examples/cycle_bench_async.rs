//! Measures future-returning functions. Each batch of 20 calls is in flight at the same time
//! and joined before the next batch starts.

use std::time::Duration;

use cycle_bench::{AsyncTargets, Error, Settings, run_asynchronous};
use futures::executor::block_on;
use futures::future;

fn main() -> Result<(), Error> {
    let mut targets = AsyncTargets::new();

    targets
        .add("async_closure", async || 42_u64)?
        .add("future_ready", || future::ready(42_u64))?
        .add("lazy", || future::lazy(|_| 42_u64))?;

    let settings = Settings::builder()
        .cycle_time(Duration::from_millis(20))
        .warm_up_cycle_count(5)
        .measurement_cycle_count(25)
        .best_measurement_count(5)
        .build();

    let report = block_on(run_asynchronous(&targets, settings));

    if let Some(best) = report
        .entries()
        .iter()
        .max_by(|a, b| a.score().total_cmp(&b.score()))
    {
        println!("Fastest: {}", best.name());
    }

    Ok(())
}

//! Compares a few ways of building a short string, the way a library author would compare
//! implementation variants before picking one.

use std::fmt::Write;
use std::hint::black_box;
use std::time::Duration;

use cycle_bench::{Error, Settings, SyncTargets};

fn main() -> Result<(), Error> {
    let mut targets = SyncTargets::new();

    targets
        .add("format_macro", || format!("{}-{}", black_box(12), black_box(34)))?
        .add("push_str", || {
            let mut s = String::new();
            s.push_str(&black_box(12).to_string());
            s.push('-');
            s.push_str(&black_box(34).to_string());
            s
        })?
        .add("write_macro_with_capacity", || {
            let mut s = String::with_capacity(8);
            write!(s, "{}-{}", black_box(12), black_box(34))
                .expect("writing to a String cannot fail");
            s
        })?;

    let settings = Settings::builder()
        .cycle_time(Duration::from_millis(20))
        .warm_up_cycle_count(5)
        .measurement_cycle_count(25)
        .best_measurement_count(5)
        .build();

    let report = cycle_bench::run(&targets, settings);

    if let Some(best) = report
        .entries()
        .iter()
        .max_by(|a, b| a.score().total_cmp(&b.score()))
    {
        println!("Fastest: {}", best.name());
    }

    Ok(())
}

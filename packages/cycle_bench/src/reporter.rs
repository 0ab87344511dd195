/// Receives the human-readable lines that a benchmark run produces.
///
/// A run describes its configuration, announces each phase and finally lists the score of every
/// target, one line at a time. The lines carry no trailing newline.
///
/// Implementations are provided for printing to stdout ([`StdoutReporter`]), forwarding to the
/// `log` facade ([`LogReporter`]), discarding everything ([`SilentReporter`]) and capturing
/// into a `Vec<String>`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use cycle_bench::{Settings, SyncTargets, run_synchronous_with};
///
/// # fn main() -> Result<(), cycle_bench::Error> {
/// let mut targets = SyncTargets::new();
/// targets.add("noop", || ())?;
///
/// let settings = Settings::builder()
///     .call_batch_size(20)
///     .cycle_time(Duration::from_millis(1))
///     .warm_up_cycle_count(0)
///     .measurement_cycle_count(2)
///     .build();
///
/// let mut lines: Vec<String> = Vec::new();
/// run_synchronous_with(&targets, settings, &mut lines);
///
/// assert!(lines.iter().any(|line| line.starts_with("[noop]")));
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait Reporter {
    /// Handles one line of output.
    fn emit_line(&mut self, line: &str);
}

/// Prints every line to stdout.
#[derive(Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    fn emit_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Forwards every line to the `log` facade at info level.
///
/// Useful when the benchmark runs inside an application that already routes its logs somewhere.
#[derive(Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn emit_line(&mut self, line: &str) {
        log::info!(target: "cycle_bench", "{line}");
    }
}

/// Discards all output.
#[derive(Debug, Default)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn emit_line(&mut self, _line: &str) {}
}

impl Reporter for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Mutex;

    use log::{LevelFilter, Log, Metadata, Record};

    use super::*;

    /// Keeps every record logged under the `cycle_bench` target.
    struct CapturingLogger {
        records: Mutex<Vec<(log::Level, String)>>,
    }

    impl Log for CapturingLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.target() == "cycle_bench"
        }

        fn log(&self, record: &Record<'_>) {
            if self.enabled(record.metadata()) {
                self.records
                    .lock()
                    .unwrap()
                    .push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static CAPTURING_LOGGER: CapturingLogger = CapturingLogger {
        records: Mutex::new(Vec::new()),
    };

    #[test]
    fn log_reporter_forwards_lines_at_info_level() {
        // This is the only test in the crate that installs a logger.
        log::set_logger(&CAPTURING_LOGGER).unwrap();
        log::set_max_level(LevelFilter::Info);

        let mut reporter = LogReporter;
        reporter.emit_line("[forwarded] → 1,234 ops/sec");

        let records = CAPTURING_LOGGER.records.lock().unwrap();
        assert!(records.contains(&(
            log::Level::Info,
            "[forwarded] → 1,234 ops/sec".to_string()
        )));
    }

    #[test]
    fn vec_captures_lines_in_order() {
        let mut lines: Vec<String> = Vec::new();

        lines.emit_line("first");
        lines.emit_line("second");

        assert_eq!(lines, ["first", "second"]);
    }

    #[test]
    fn usable_as_trait_object() {
        let mut lines: Vec<String> = Vec::new();

        {
            let reporter: &mut dyn Reporter = &mut lines;
            reporter.emit_line("via dyn");
        }

        assert_eq!(lines, ["via dyn"]);
    }

    #[test]
    fn silent_reporter_accepts_lines() {
        let mut reporter = SilentReporter;

        reporter.emit_line("ignored");
    }

    static_assertions::assert_impl_all!(StdoutReporter: Send, Sync);
    static_assertions::assert_impl_all!(LogReporter: Send, Sync);
    static_assertions::assert_impl_all!(SilentReporter: Send, Sync);
}

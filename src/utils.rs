use chrono::{DateTime, Utc};
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Log level for `-v`/`-q` counts: INFO by default, each `-v` one step
/// chattier (DEBUG, TRACE), each `-q` one step quieter (WARN, ERROR).
pub fn log_level(verbose: u8, quiet: u8) -> &'static str {
    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
    let step = (2 + i16::from(verbose) - i16::from(quiet)).clamp(0, 4);
    LEVELS[usize::try_from(step).unwrap_or(2)]
}

/// Send logs to stderr, so command output on stdout stays clean.
///
/// `RUST_LOG` wins over the flags (e.g. `RUST_LOG=sentier=trace`).
/// File and line are shown from DEBUG down.
pub fn init_logging(verbose: u8, quiet: u8) {
    let level = log_level(verbose, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,sentier={level}")));
    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_file(show_src)
        .with_line_number(show_src)
        .init();
}

/// Month name and day of month, e.g. `April 14`.
pub fn month_day(t: DateTime<Utc>) -> String {
    t.format("%B %-d").to_string()
}

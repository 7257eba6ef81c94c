//! Log output for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary (or to a test that wants to see them).
//!
//! ```rust,no_run
//! parlance::logging::init_with_level(parlance::logging::LogLevel::Debug);
//! tracing::debug!("now visible");
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Installs a compact stderr logger: `LEVEL message`, no timestamps.
///
/// Calling it twice is harmless; the second install is ignored.
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .compact()
        .with_filter(filter);

    let _ = Registry::default().with(layer).try_init();
}

/// The CLI reports skipped lines itself, so only errors are logged unless the
/// user asked for verbose output.
pub fn init_cli(verbose: bool) {
    init_with_level(if verbose { LogLevel::Debug } else { LogLevel::Error });
}

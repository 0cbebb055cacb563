use std::env::var;
use std::path::Path;

use tracing::{level_filters::LevelFilter, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
pub fn init() {
    initialize_tracing(LevelFilter::INFO);
}

/// Initialize logging into a file instead of the terminal.
///
/// Used while the dashboard owns the screen. The returned guard must be held
/// for the lifetime of the process or buffered lines are lost.
pub fn init_file(path: &Path) -> WorkerGuard {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("pingnotify.log"));

    if let Err(error) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create log directory {}: {error}", dir.display());
    }

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter = env_filter(LevelFilter::INFO);
    let log_layer = match log_format().as_str() {
        "json" => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_filter(env_filter)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(log_layer).init();
    guard
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn log_format() -> String {
    var("RUST_LOG_FORMAT")
        .inspect_err(|error| {
            warn!("Failed to read RUST_LOG_FORMAT, falling back to default: {error}")
        })
        .unwrap_or_default()
}

/// Initialize tracing subscriber with default configuration.
fn initialize_tracing(level: LevelFilter) {
    let env_filter = env_filter(level);

    let log_layer = match log_format().as_str() {
        "json" => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_writer(std::io::stderr)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(log_layer).init();
}

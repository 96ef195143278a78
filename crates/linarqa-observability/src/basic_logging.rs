use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the configured level.
const LINARQA_TARGETS: [&str; 4] = ["linarqa", "linarqa_core", "linarqa_models", "linarqa_cli"];

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(log_level: &str) -> String {
    let mut directives: Vec<String> = LINARQA_TARGETS
        .iter()
        .map(|target| format!("{target}={log_level}"))
        .collect();
    directives.insert(0, "warn".to_string());
    directives.join(",")
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` when set, otherwise `LOG_LEVEL` (default: "info")
///   for the Linarqa crates and `warn` for everything else
/// - **Format**: Compact, with targets and ANSI colors
/// - **Writer**: stderr, so report output on stdout stays machine-readable
///
/// Fails if a global subscriber is already installed.
pub fn init_basic_console_logging() -> Result<(), TryInitError> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()
}

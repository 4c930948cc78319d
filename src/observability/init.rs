//! Tracing initialization and subscriber setup.
//!
//! Configures the `tracing` subscriber: an env filter, a human-readable fmt
//! layer on stderr, and an optional second fmt layer writing to a rotating
//! log file.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when neither `RUST_LOG` nor the config sets one.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.log_level`, if set and valid
/// 3. `"info"`
///
/// # Initialization Behavior
///
/// - Idempotent: only the first call installs a subscriber
/// - Never fails: an unusable log file directory just disables the file layer
///
/// # Example
///
/// ```rust
/// use bmenu::{observability::init_tracing, Config};
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.as_deref().unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let file_layer = config.log_file.as_ref().and_then(|path| {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            // Logging is optional; skip the file layer if its directory is unusable.
            std::fs::create_dir_all(parent).ok()?;
        }
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(FileWriter::new(path.clone())),
        )
    });

    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}

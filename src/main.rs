//! BMenu binary entry point.
//!
//! Reads the configuration, initializes tracing, runs the session, and maps
//! the outcome to an exit status:
//!
//! - `0`: Escape was released
//! - `255`: connection or screen acquisition failed, or a request was
//!   rejected by the server (the unsigned form of `exit(-1)`)
//!
//! The X connection is always closed before the status is returned.

#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use bmenu::{observability, Config};

/// Status reported for every fatal error.
const FAILURE_STATUS: u8 = u8::MAX;

fn main() -> ExitCode {
    let config = Config::from_env();
    observability::init_tracing(&config);

    tracing::debug!(
        title = %config.title,
        label = %config.label,
        font = %config.font,
        width = config.width,
        height = config.height,
        dispatch = %config.dispatch,
        wait = %config.wait,
        "starting bmenu"
    );

    match bmenu::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "ERROR: {e}");
            ExitCode::from(FAILURE_STATUS)
        }
    }
}

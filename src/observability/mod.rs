//! Logging setup.
//!
//! Diagnostics go through `tracing`. The subscriber writes human-readable
//! records to stderr and, when `BMENU_LOG_FILE` is set, also to a rotating
//! log file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer (stderr)
//!                            → fmt layer (FileWriter, optional)
//! ```
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `BMENU_LOG`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating log file writer

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;

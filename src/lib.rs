//! BMenu: a small borderless popup for X11.
//!
//! BMenu opens a window near the center of the screen, draws a text label in
//! it, and then sits in an event loop:
//! - Expose grabs keyboard focus and redraws the label
//! - Pointer enter grabs focus
//! - A button press grabs focus and steps the window 10px up and left
//! - Releasing Escape closes the connection and exits successfully
//!
//! Any failed request is fatal: the error is logged with the server's error
//! code, the connection is closed, and the process exits with status 255.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs)                                   │  ← Exit status
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event loop
//! │  - Event routing (isolated / fallthrough)           │
//! │  - Window state                                     │
//! │  - Action execution                                 │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐         ┌───────────────────────┐
//! │ UI Layer (ui/)        │         │ Display (display/)    │
//! │ - Font GC text draw   │ ──────▶ │ - Display trait       │
//! │                       │         │ - x11rb backend       │
//! └───────────────────────┘         └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/)                                   │
//! │  - Errors, events, geometry                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Event handler, window state, dispatch loop
//! - [`display`]: Windowing connection trait and X11 backend
//! - [`domain`]: Core types (errors, events, geometry)
//! - [`ui`]: Text-render pipeline
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! There is no configuration file. A few `BMENU_*` environment variables
//! override the defaults:
//!
//! ```sh
//! BMENU_LABEL="Run" BMENU_DISPATCH=fallthrough BMENU_LOG=debug bmenu
//! ```

pub mod app;
pub mod display;
pub mod domain;
pub mod observability;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use app::{handle_event, Action, DispatchMode, LoopOptions, WaitMode, WindowState};
pub use domain::{BMenuError, Result};

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::path::PathBuf;

use display::{Display, X11Display};
use domain::Size;

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "BMENU_";

/// Runtime options.
///
/// Built from a string map so that the same parsing serves the environment
/// and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Window title, used for WM_NAME and WM_CLASS. Default: `"BMenu"`
    pub title: String,

    /// Text drawn in the window. Default: `"BMenu"`
    pub label: String,

    /// Core X font used for the label. Default: `"fixed"`
    pub font: String,

    /// Window width in pixels. Default: 300
    pub width: u16,

    /// Window height in pixels. Default: 100
    pub height: u16,

    /// Event routing mode. Default: isolated
    pub dispatch: DispatchMode,

    /// Event waiting strategy. Default: block
    pub wait: WaitMode,

    /// Tracing filter directive, e.g. `debug` or `bmenu=trace`.
    pub log_level: Option<String>,

    /// Optional rotating log file in addition to stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "BMenu".to_string(),
            label: "BMenu".to_string(),
            font: "fixed".to_string(),
            width: 300,
            height: 100,
            dispatch: DispatchMode::default(),
            wait: WaitMode::default(),
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - `title`, `label`, `font`: non-empty strings
    /// - `width`, `height`: positive `u16`
    /// - `dispatch`: `isolated` | `fallthrough`
    /// - `wait`: `block` | `poll`
    /// - `log`: tracing filter directive
    /// - `log_file`: path
    ///
    /// Missing, empty, or malformed values fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bmenu::{Config, DispatchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("label".to_string(), "Run".to_string());
    /// map.insert("dispatch".to_string(), "fallthrough".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.label, "Run");
    /// assert_eq!(config.dispatch, DispatchMode::Fallthrough);
    /// assert_eq!(config.width, 300);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map_or(fallback, String::from)
        };
        let dimension = |key: &str, fallback: u16| {
            map.get(key)
                .and_then(|s| s.trim().parse::<u16>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(fallback)
        };

        Self {
            title: text("title", defaults.title),
            label: text("label", defaults.label),
            font: text("font", defaults.font),
            width: dimension("width", defaults.width),
            height: dimension("height", defaults.height),
            dispatch: map
                .get("dispatch")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.dispatch),
            wait: map
                .get("wait")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.wait),
            log_level: map.get("log").filter(|s| !s.trim().is_empty()).cloned(),
            log_file: map
                .get("log_file")
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Reads `BMENU_*` environment variables, e.g. `BMENU_LABEL` → `label`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_map(&env_map(std::env::vars_os()))
    }

    /// Window dimensions.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Loop options derived from this configuration.
    #[must_use]
    pub const fn loop_options(&self) -> LoopOptions {
        LoopOptions {
            dispatch: self.dispatch,
            wait: self.wait,
        }
    }
}

/// Collects `BMENU_*` pairs into a map with lowercased, unprefixed keys.
///
/// Pairs whose key or value is not valid UTF-8 are skipped, so the affected
/// option keeps its default.
fn env_map(vars: impl IntoIterator<Item = (OsString, OsString)>) -> BTreeMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let name = key.strip_prefix(ENV_PREFIX)?.to_ascii_lowercase();
            Some((name, value.into_string().ok()?))
        })
        .collect()
}

/// Builds the initial window state for `display`'s screen.
#[must_use]
pub fn initialize<D: Display + ?Sized>(config: &Config, display: &D) -> WindowState {
    WindowState::centered(&display.screen(), config.size(), &config.label, &config.font)
}

/// Runs a complete session: open the popup, dispatch events until Escape.
///
/// The X connection lives exactly as long as this call and is closed once on
/// every return path.
///
/// # Errors
///
/// Returns the first connection, screen, or request failure.
pub fn run(config: &Config) -> Result<()> {
    let mut display = X11Display::open(config)?;
    let mut state = initialize(config, &display);
    tracing::debug!(x = state.position.x, y = state.position.y, "initial window position");

    app::run_event_loop(&mut display, &mut state, config.loop_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;
    use crate::test_support::RecordingDisplay;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_map(&map(&[
            ("title", "Launcher"),
            ("label", "Go"),
            ("font", "9x15"),
            ("width", "400"),
            ("height", "80"),
            ("dispatch", "fallthrough"),
            ("wait", "poll"),
            ("log", "debug"),
            ("log_file", "/tmp/bmenu.log"),
        ]));

        assert_eq!(config.title, "Launcher");
        assert_eq!(config.label, "Go");
        assert_eq!(config.font, "9x15");
        assert_eq!(config.size(), Size { width: 400, height: 80 });
        assert_eq!(config.dispatch, DispatchMode::Fallthrough);
        assert_eq!(config.wait, WaitMode::Poll);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/bmenu.log")));
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = Config::from_map(&map(&[
            ("width", "0"),
            ("height", "tall"),
            ("dispatch", "sometimes"),
            ("wait", ""),
            ("label", "   "),
            ("log", ""),
        ]));

        assert_eq!(config, Config::default());
    }

    fn os_pair(key: &str, value: &str) -> (OsString, OsString) {
        (OsString::from(key), OsString::from(value))
    }

    #[test]
    fn env_map_strips_prefix() {
        let vars = vec![
            os_pair("BMENU_LABEL", "Hi"),
            os_pair("BMENU_LOG_FILE", "/tmp/x"),
            os_pair("HOME", "/root"),
        ];
        let map = env_map(vars);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("label").map(String::as_str), Some("Hi"));
        assert_eq!(map.get("log_file").map(String::as_str), Some("/tmp/x"));
    }

    #[cfg(unix)]
    #[test]
    fn env_map_skips_non_utf8_pairs() {
        use std::os::unix::ffi::OsStringExt;

        let invalid = || OsString::from_vec(vec![0xff, 0xfe]);
        let vars = vec![
            (OsString::from("UNRELATED"), invalid()),
            (invalid(), OsString::from("value")),
            (OsString::from("BMENU_LABEL"), invalid()),
            os_pair("BMENU_FONT", "9x15"),
        ];
        let map = env_map(vars);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("font").map(String::as_str), Some("9x15"));

        let config = Config::from_map(&map);
        assert_eq!(config.label, "BMenu");
        assert_eq!(config.font, "9x15");
    }

    #[test]
    fn initialize_centers_default_popup() {
        let display = RecordingDisplay::new();
        let state = initialize(&Config::default(), &display);

        assert_eq!(state.position, Position::new(810, 490));
        assert_eq!(state.label, "BMenu");
        assert_eq!(state.font, "fixed");
    }
}

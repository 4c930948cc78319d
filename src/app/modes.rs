//! Dispatch and wait mode types.
//!
//! These enums make two behaviors of the event loop explicit, selectable
//! choices instead of accidents of control flow:
//!
//! - [`DispatchMode`]: whether each event kind runs only its own handler arm,
//!   or continues into the arms listed after it
//! - [`WaitMode`]: whether the loop blocks on the connection or busy-polls
//!
//! # Example
//!
//! ```rust
//! use bmenu::app::{DispatchMode, WaitMode};
//!
//! let dispatch: DispatchMode = "fallthrough".parse()?;
//! assert_eq!(dispatch, DispatchMode::Fallthrough);
//! assert_eq!(WaitMode::default(), WaitMode::Block);
//! # Ok::<(), bmenu::BMenuError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::domain::BMenuError;

/// How an event is routed through the handler arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Each event kind runs exactly its own arm.
    #[default]
    Isolated,

    /// Pointer-enter continues into the key-release arm, and key-release
    /// continues into the button-press arm, re-running their side effects on
    /// the same event. An Escape match stops the chain.
    ///
    /// Expose never continues: it always ends after its own arm.
    Fallthrough,
}

/// How the loop waits for the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaitMode {
    /// Block on the connection until an event arrives.
    #[default]
    Block,

    /// Poll without blocking and spin immediately when the queue is empty.
    Poll,
}

impl FromStr for DispatchMode {
    type Err = BMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "isolated" => Ok(Self::Isolated),
            "fallthrough" => Ok(Self::Fallthrough),
            other => Err(BMenuError::Config(format!("unknown dispatch mode: {other}"))),
        }
    }
}

impl FromStr for WaitMode {
    type Err = BMenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "poll" => Ok(Self::Poll),
            other => Err(BMenuError::Config(format!("unknown wait mode: {other}"))),
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Isolated => "isolated",
            Self::Fallthrough => "fallthrough",
        })
    }
}

impl fmt::Display for WaitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Block => "block",
            Self::Poll => "poll",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Isolated".parse::<DispatchMode>().ok(), Some(DispatchMode::Isolated));
        assert_eq!(" POLL ".parse::<WaitMode>().ok(), Some(WaitMode::Poll));
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(matches!(
            "sometimes".parse::<DispatchMode>(),
            Err(BMenuError::Config(_))
        ));
        assert!("spin".parse::<WaitMode>().is_err());
    }
}

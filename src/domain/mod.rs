//! Domain layer for BMenu.
//!
//! Core types independent of the X11 backend: errors, geometry, and the
//! decoded input events.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: Decoded input events
//! - [`geometry`]: Screen description, positions, and layout helpers

pub mod error;
pub mod event;
pub mod geometry;

pub use error::{BMenuError, Result};
pub use event::{Event, EventKind, ESCAPE_KEYCODE};
pub use geometry::{centered_position, label_origin, Position, ScreenInfo, Size, TextOrigin};

//! Display connection abstraction.
//!
//! This module defines the [`Display`] trait, the seam between the event loop
//! and the windowing system. The core only ever talks to a `Display`, which
//! keeps the dispatcher and the text-render pipeline testable without a
//! running X server.
//!
//! # Implementations
//!
//! - [`X11Display`]: `x11rb` connection owning the popup window (default)
//!
//! Every request method is checked: it returns only after the server has
//! accepted the request, and maps a server error to
//! [`BMenuError::Request`](crate::BMenuError::Request).

pub mod x11;

pub use x11::X11Display;

use crate::domain::{Event, Position, Result, ScreenInfo, TextOrigin};

/// Server-side font handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// Server-side graphics context handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GcId(pub u32);

/// Operations the core needs from the windowing connection.
///
/// An implementation owns exactly one window; drawing and placement calls
/// target that window. Dropping the implementation closes the connection.
pub trait Display {
    /// Screen the window was created on.
    fn screen(&self) -> ScreenInfo;

    /// Returns the next queued event without blocking.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection failed.
    fn poll_for_event(&mut self) -> Result<Option<Event>>;

    /// Blocks until the next event arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection failed.
    fn wait_for_event(&mut self) -> Result<Event>;

    /// Directs keyboard input to the window, using the current server time.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the focus change.
    fn set_input_focus(&mut self) -> Result<()>;

    /// Opens the named font.
    ///
    /// # Errors
    ///
    /// Returns an error if the font does not exist.
    fn open_font(&mut self, name: &str) -> Result<FontId>;

    /// Creates a graphics context bound to `font` with the given colors.
    ///
    /// # Errors
    ///
    /// Returns an error if the server rejects the context.
    fn create_gc(&mut self, font: FontId, foreground: u32, background: u32) -> Result<GcId>;

    /// Releases a font handle. Graphics contexts created from it stay valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is invalid.
    fn close_font(&mut self, font: FontId) -> Result<()>;

    /// Draws `text` with its background filled at `origin`.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw request fails.
    fn draw_text(&mut self, gc: GcId, origin: TextOrigin, text: &str) -> Result<()>;

    /// Releases a graphics context.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is invalid.
    fn free_gc(&mut self, gc: GcId) -> Result<()>;

    /// Moves the window's top-left corner to `position`.
    ///
    /// # Errors
    ///
    /// Returns an error if the reconfiguration fails.
    fn move_window(&mut self, position: Position) -> Result<()>;

    /// Makes the window visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the map request fails.
    fn map_window(&mut self) -> Result<()>;

    /// Sends any buffered requests to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection failed.
    fn flush(&mut self) -> Result<()>;
}

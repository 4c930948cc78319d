//! Actions representing side effects on the display connection.
//!
//! The event handler returns a `Vec<Action>` for each event; the event loop
//! executes them in order against a [`Display`](crate::display::Display).
//! Keeping the decision separate from the effect lets the routing rules be
//! tested without a server.

use crate::domain::Position;

/// Commands produced by the event handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Requests keyboard focus for the popup.
    GrabFocus,

    /// Renders the label through a transient font graphics context.
    DrawLabel,

    /// Moves the window to the given position, re-maps it, and flushes.
    Reposition(Position),

    /// Ends the event loop successfully.
    Exit,
}

//! Window state carried across loop iterations.
//!
//! [`WindowState`] is the only mutable state in the program: the window's
//! last configured position, plus the fixed layout the renderer needs. It is
//! owned by the session and passed by reference into the handler and the
//! action executor.

use crate::domain::{centered_position, label_origin, Position, ScreenInfo, Size, TextOrigin};

/// Offset applied to both axes on every button press.
pub const CLICK_STEP: i32 = -10;

/// Mutable popup state plus its fixed layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    /// Last position sent to the server.
    pub position: Position,

    /// Window dimensions, fixed at creation.
    pub size: Size,

    /// Text drawn on every expose.
    pub label: String,

    /// Name of the font the label is drawn with.
    pub font: String,
}

impl WindowState {
    /// Creates state for a window of `size` centered on `screen`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bmenu::app::WindowState;
    /// use bmenu::domain::{Position, ScreenInfo, Size};
    ///
    /// let screen = ScreenInfo { width: 1920, height: 1080, black_pixel: 0, white_pixel: 1 };
    /// let state = WindowState::centered(&screen, Size { width: 300, height: 100 }, "BMenu", "fixed");
    /// assert_eq!(state.position, Position::new(810, 490));
    /// ```
    #[must_use]
    pub fn centered(screen: &ScreenInfo, size: Size, label: &str, font: &str) -> Self {
        Self {
            position: centered_position(screen, size),
            size,
            label: label.to_string(),
            font: font.to_string(),
        }
    }

    /// Shifts the stored position by [`CLICK_STEP`] on both axes and returns it.
    pub fn step_toward_origin(&mut self) -> Position {
        self.position = self.position.offset(CLICK_STEP, CLICK_STEP);
        self.position
    }

    /// Baseline origin for the label.
    #[must_use]
    pub fn label_origin(&self) -> TextOrigin {
        label_origin(self.size, &self.label)
    }
}

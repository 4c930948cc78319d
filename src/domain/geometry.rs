//! Screen and window geometry.
//!
//! Holds the read-only [`ScreenInfo`] copied out of the connection setup and
//! the small coordinate types the rest of the crate passes around.

/// Read-only description of the screen the popup lives on.
///
/// Copied out of the connection's setup data once at startup and never
/// changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenInfo {
    /// Screen width in pixels.
    pub width: u16,
    /// Screen height in pixels.
    pub height: u16,
    /// Default black pixel value.
    pub black_pixel: u32,
    /// Default white pixel value.
    pub white_pixel: u32,
}

/// Top-left corner of the window relative to the root window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by `(dx, dy)`.
    ///
    /// Not clamped against screen edges; the window may move off-screen.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Window dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

/// Baseline origin of a text draw, in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOrigin {
    pub x: i16,
    pub y: i16,
}

/// Position that centers a window of `size` on `screen`.
///
/// ```
/// use bmenu::domain::{centered_position, Position, ScreenInfo, Size};
///
/// let screen = ScreenInfo { width: 1920, height: 1080, black_pixel: 0, white_pixel: 1 };
/// let pos = centered_position(&screen, Size { width: 300, height: 100 });
/// assert_eq!(pos, Position::new(810, 490));
/// ```
#[must_use]
pub fn centered_position(screen: &ScreenInfo, size: Size) -> Position {
    Position {
        x: i32::from(screen.width / 2) - i32::from(size.width / 2),
        y: i32::from(screen.height / 2) - i32::from(size.height / 2),
    }
}

/// Baseline origin for `label` inside a window of `size`.
///
/// Uses `(width/2 - label length, height/2)`. This ignores glyph metrics, so
/// the label is only roughly centered.
#[must_use]
pub fn label_origin(size: Size, label: &str) -> TextOrigin {
    let len = i32::try_from(label.len()).unwrap_or(i32::MAX);
    let x = i32::from(size.width / 2).saturating_sub(len);
    TextOrigin {
        x: clamp_i16(x),
        y: clamp_i16(i32::from(size.height / 2)),
    }
}

/// Converts to `i16`, saturating at the type's bounds.
pub(crate) fn clamp_i16(value: i32) -> i16 {
    i16::try_from(value).unwrap_or(if value < 0 { i16::MIN } else { i16::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u16, height: u16) -> ScreenInfo {
        ScreenInfo {
            width,
            height,
            black_pixel: 0,
            white_pixel: 0xff_ffff,
        }
    }

    #[test]
    fn centers_popup_on_full_hd_screen() {
        let pos = centered_position(&screen(1920, 1080), Size { width: 300, height: 100 });
        assert_eq!(pos, Position::new(810, 490));
    }

    #[test]
    fn centering_on_tiny_screen_goes_negative() {
        let pos = centered_position(&screen(100, 50), Size { width: 300, height: 100 });
        assert_eq!(pos, Position::new(-100, -25));
    }

    #[test]
    fn label_origin_uses_length_heuristic() {
        let origin = label_origin(Size { width: 300, height: 100 }, "BMenu");
        assert_eq!(origin, TextOrigin { x: 145, y: 50 });
    }

    #[test]
    fn label_longer_than_half_width_starts_left_of_window() {
        let origin = label_origin(Size { width: 10, height: 10 }, "a long label");
        assert_eq!(origin, TextOrigin { x: -7, y: 5 });
    }

    #[test]
    fn clamp_saturates_out_of_range_values() {
        assert_eq!(clamp_i16(810), 810);
        assert_eq!(clamp_i16(70_000), i16::MAX);
        assert_eq!(clamp_i16(-70_000), i16::MIN);
    }

    #[test]
    fn offset_is_unbounded() {
        let pos = Position::new(5, 5).offset(-10, -10);
        assert_eq!(pos, Position::new(-5, -5));
    }
}

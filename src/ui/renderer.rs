//! Text-render pipeline.
//!
//! Draws the label through a graphics context that lives for exactly one draw:
//!
//! 1. open the named font
//! 2. create a GC bound to the font, black foreground, white background
//! 3. close the font (the GC keeps what it needs)
//! 4. draw the text at the baseline origin
//! 5. free the GC
//!
//! Every step is checked. Whatever was acquired before a failing step is
//! released before the error is returned, so no GC outlives a render.

use crate::app::WindowState;
use crate::display::{Display, FontId, GcId};
use crate::domain::{Result, TextOrigin};

/// Renders the window's label with its configured font.
///
/// # Errors
///
/// Returns the first failing step's error. Cleanup failures that happen while
/// unwinding an earlier error are logged and dropped.
pub fn draw_label<D: Display + ?Sized>(display: &mut D, state: &WindowState) -> Result<()> {
    draw_text(display, &state.font, state.label_origin(), &state.label)
}

/// Draws `text` at `origin` through a transient font GC.
///
/// # Errors
///
/// See [`draw_label`].
pub fn draw_text<D: Display + ?Sized>(
    display: &mut D,
    font_name: &str,
    origin: TextOrigin,
    text: &str,
) -> Result<()> {
    let _span = tracing::debug_span!("draw_text", font = font_name, x = origin.x, y = origin.y)
        .entered();

    let gc = font_gc(display, font_name)?;

    let drawn = display.draw_text(gc, origin, text);
    if let Err(e) = &drawn {
        tracing::debug!(error = %e, "draw failed, releasing gc");
    }
    let released = display.free_gc(gc);

    drawn.and(released)
}

/// Opens `font_name`, binds it into a new GC, and closes the font again.
fn font_gc<D: Display + ?Sized>(display: &mut D, font_name: &str) -> Result<GcId> {
    let screen = display.screen();
    let font = display.open_font(font_name)?;

    let gc = match display.create_gc(font, screen.black_pixel, screen.white_pixel) {
        Ok(gc) => gc,
        Err(e) => {
            release_font(display, font);
            return Err(e);
        }
    };

    if let Err(e) = display.close_font(font) {
        if let Err(free_err) = display.free_gc(gc) {
            tracing::debug!(error = %free_err, "freeing gc after close_font failure");
        }
        return Err(e);
    }

    Ok(gc)
}

fn release_font<D: Display + ?Sized>(display: &mut D, font: FontId) {
    if let Err(e) = display.close_font(font) {
        tracing::debug!(error = %e, "closing font after create_gc failure");
    }
}

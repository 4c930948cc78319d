//! The event dispatch loop and action executor.
//!
//! ```text
//! Display ──event──▶ handle_event ──actions──▶ execute_action ──requests──▶ Display
//!    ▲                                                                          │
//!    └──────────────────────────── next iteration ◀─────────────────────────────┘
//! ```
//!
//! The loop runs until an [`Action::Exit`] is executed or any request fails.
//! Errors are returned unchanged; tearing down the connection is left to
//! whoever owns the display.

use super::{handle_event, Action, DispatchMode, WaitMode, WindowState};
use crate::display::Display;
use crate::domain::{Event, Result};
use crate::ui;

/// Options controlling how the loop waits and routes events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoopOptions {
    pub dispatch: DispatchMode,
    pub wait: WaitMode,
}

/// Whether the loop should keep running after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs the dispatch loop until Escape is released.
///
/// # Errors
///
/// Returns the first error reported by the display. No retries are made.
pub fn run_event_loop<D: Display + ?Sized>(
    display: &mut D,
    state: &mut WindowState,
    options: LoopOptions,
) -> Result<()> {
    let _span = tracing::info_span!(
        "event_loop",
        dispatch = %options.dispatch,
        wait = %options.wait
    )
    .entered();
    tracing::debug!("entering event loop");

    loop {
        let Some(event) = next_event(display, options.wait)? else {
            std::hint::spin_loop();
            continue;
        };

        for action in handle_event(state, &event, options.dispatch) {
            if execute_action(display, state, action)? == Flow::Exit {
                tracing::info!("escape released, leaving event loop");
                return Ok(());
            }
        }
    }
}

fn next_event<D: Display + ?Sized>(display: &mut D, wait: WaitMode) -> Result<Option<Event>> {
    match wait {
        WaitMode::Block => display.wait_for_event().map(Some),
        WaitMode::Poll => display.poll_for_event(),
    }
}

/// Executes one action against the display.
///
/// # Errors
///
/// Returns the error of the failing request.
#[tracing::instrument(level = "debug", skip(display, state))]
pub fn execute_action<D: Display + ?Sized>(
    display: &mut D,
    state: &WindowState,
    action: Action,
) -> Result<Flow> {
    match action {
        Action::GrabFocus => display.set_input_focus()?,
        Action::DrawLabel => ui::draw_label(display, state)?,
        Action::Reposition(position) => {
            display.move_window(position)?;
            display.map_window()?;
            display.flush()?;
        }
        Action::Exit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

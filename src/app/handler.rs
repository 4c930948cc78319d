//! Event routing and state transition logic.
//!
//! [`handle_event`] inspects one decoded event, mutates the [`WindowState`]
//! where needed, and returns the actions to execute. It never touches the
//! connection itself.
//!
//! # Routing
//!
//! | Event          | Actions                                   |
//! |----------------|-------------------------------------------|
//! | Expose         | `GrabFocus`, `DrawLabel`                  |
//! | PointerEnter   | `GrabFocus`                               |
//! | KeyRelease     | `Exit` when the keycode is Escape         |
//! | ButtonPress    | `GrabFocus`, `Reposition` (state moved)   |
//! | anything else  | nothing                                   |
//!
//! Under [`DispatchMode::Fallthrough`], PointerEnter continues into the
//! KeyRelease arm and KeyRelease continues into the ButtonPress arm, so one
//! event may grab focus and move the window more than once.
//!
//! # Example
//!
//! ```rust
//! use bmenu::app::{handle_event, Action, DispatchMode, WindowState};
//! use bmenu::domain::{Event, EventKind, ScreenInfo, Size};
//!
//! let screen = ScreenInfo { width: 1920, height: 1080, black_pixel: 0, white_pixel: 1 };
//! let mut state = WindowState::centered(&screen, Size { width: 300, height: 100 }, "BMenu", "fixed");
//! let escape = Event::new(EventKind::KeyRelease, 9);
//! assert_eq!(handle_event(&mut state, &escape, DispatchMode::Isolated), vec![Action::Exit]);
//! ```

use super::{Action, DispatchMode, WindowState};
use crate::domain::{Event, EventKind};

/// Handler arms in their fallthrough order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Arm {
    PointerEnter,
    KeyRelease,
    ButtonPress,
}

impl Arm {
    const ORDER: [Self; 3] = [Self::PointerEnter, Self::KeyRelease, Self::ButtonPress];
}

/// Processes one event and returns the actions to execute, in order.
///
/// Only a button press arm mutates `state`, shifting the stored position by
/// (-10, -10) before emitting the `Reposition` action.
pub fn handle_event(state: &mut WindowState, event: &Event, mode: DispatchMode) -> Vec<Action> {
    let _span =
        tracing::debug_span!("handle_event", kind = ?event.kind, detail = event.detail, %mode)
            .entered();

    let entry = match event.kind {
        EventKind::Expose => return vec![Action::GrabFocus, Action::DrawLabel],
        EventKind::PointerEnter => Arm::PointerEnter,
        EventKind::KeyRelease => Arm::KeyRelease,
        EventKind::ButtonPress => Arm::ButtonPress,
        EventKind::Other(code) => {
            tracing::trace!(code, "ignoring event");
            return vec![];
        }
    };

    let mut actions = Vec::new();
    let arms = Arm::ORDER.iter().copied().filter(|arm| *arm >= entry);

    for arm in arms {
        if mode == DispatchMode::Isolated && arm != entry {
            break;
        }
        if arm != entry {
            tracing::debug!(?arm, "falling through");
        }

        match arm {
            Arm::PointerEnter => actions.push(Action::GrabFocus),
            Arm::KeyRelease => {
                if event.is_escape() {
                    tracing::debug!("escape released");
                    actions.push(Action::Exit);
                    return actions;
                }
            }
            Arm::ButtonPress => {
                let position = state.step_toward_origin();
                tracing::debug!(x = position.x, y = position.y, "stepping window");
                actions.push(Action::GrabFocus);
                actions.push(Action::Reposition(position));
            }
        }
    }

    actions
}

//! Input events as seen by the dispatcher.
//!
//! An [`Event`] is decoded from a raw X11 wire event: the first byte is the
//! response type (the high bit flags events sent through `SendEvent` and is
//! masked off), the second byte is the detail code (keycode for key events,
//! button for button events).

use x11rb::protocol::xproto::{
    BUTTON_PRESS_EVENT, ENTER_NOTIFY_EVENT, EXPOSE_EVENT, KEY_RELEASE_EVENT,
};

/// Bit set on the response type of events generated by `SendEvent`.
pub const SEND_EVENT_MASK: u8 = 0x80;

/// Keycode of the Escape key on standard X11 keymaps.
pub const ESCAPE_KEYCODE: u8 = 9;

/// Category of an incoming event after masking the response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The window became visible or needs redrawing.
    Expose,
    /// The pointer entered the window.
    PointerEnter,
    /// A key was released.
    KeyRelease,
    /// A pointer button was pressed.
    ButtonPress,
    /// Any other event code, kept for logging.
    Other(u8),
}

impl EventKind {
    /// Maps a raw response type to an event kind.
    #[must_use]
    pub const fn from_response_type(response_type: u8) -> Self {
        match response_type & !SEND_EVENT_MASK {
            EXPOSE_EVENT => Self::Expose,
            ENTER_NOTIFY_EVENT => Self::PointerEnter,
            KEY_RELEASE_EVENT => Self::KeyRelease,
            BUTTON_PRESS_EVENT => Self::ButtonPress,
            other => Self::Other(other),
        }
    }
}

/// One input occurrence, consumed by a single dispatch iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Raw detail byte. Keycode for key events, button for button events.
    pub detail: u8,
}

impl Event {
    #[must_use]
    pub const fn new(kind: EventKind, detail: u8) -> Self {
        Self { kind, detail }
    }

    /// Decodes a raw wire event. Returns `None` for buffers shorter than two bytes.
    #[must_use]
    pub fn from_raw(raw: &[u8]) -> Option<Self> {
        match raw {
            [response_type, detail, ..] => Some(Self {
                kind: EventKind::from_response_type(*response_type),
                detail: *detail,
            }),
            _ => None,
        }
    }

    /// True for a key release of the Escape key.
    #[must_use]
    pub const fn is_escape(&self) -> bool {
        self.detail == ESCAPE_KEYCODE
    }
}

//! X11 backend built on `x11rb`.
//!
//! [`X11Display`] owns the connection to the X server and the popup window.
//! Construction performs the one-shot setup (window creation, naming, window
//! type hint, mapping); afterwards only the [`Display`] operations are used.
//! Dropping the value closes the connection, which also destroys the window.

use x11rb::connection::Connection;
use x11rb::cookie::VoidCookie;
use x11rb::errors::ConnectionError;
use x11rb::protocol::xproto::{
    Atom, AtomEnum, ConfigureWindowAux, ConnectionExt as _, CreateGCAux, CreateWindowAux,
    EventMask, InputFocus, PropMode, Window, WindowClass,
};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;
use x11rb::CURRENT_TIME;

use super::{Display, FontId, GcId};
use crate::domain::geometry::clamp_i16;
use crate::domain::{
    centered_position, BMenuError, Event, Position, Result, ScreenInfo, Size, TextOrigin,
};
use crate::Config;

/// Border width requested at window creation.
const BORDER_WIDTH: u16 = 10;

/// Longest string a single `ImageText8` request accepts.
const MAX_TEXT8_LEN: usize = 255;

/// Connection to the X server plus the popup window it owns.
pub struct X11Display {
    conn: RustConnection,
    window: Window,
    screen: ScreenInfo,
}

impl X11Display {
    /// Connects to the default display and creates, names, and maps the popup.
    ///
    /// # Errors
    ///
    /// - [`BMenuError::Connect`] if no X server is reachable
    /// - [`BMenuError::NoScreen`] if the setup lacks the default screen
    /// - [`BMenuError::Request`] if any checked setup request fails
    pub fn open(config: &Config) -> Result<Self> {
        let _span = tracing::debug_span!("x11_open").entered();

        let (conn, screen_num) = x11rb::connect(None)?;
        tracing::debug!(screen_num, "connected to X server");

        let setup_screen = conn
            .setup()
            .roots
            .get(screen_num)
            .ok_or(BMenuError::NoScreen(screen_num))?;
        let root = setup_screen.root;
        let root_depth = setup_screen.root_depth;
        let root_visual = setup_screen.root_visual;
        let screen = ScreenInfo {
            width: setup_screen.width_in_pixels,
            height: setup_screen.height_in_pixels,
            black_pixel: setup_screen.black_pixel,
            white_pixel: setup_screen.white_pixel,
        };

        let size = Size {
            width: config.width,
            height: config.height,
        };
        let position = centered_position(&screen, size);
        tracing::debug!(
            screen_width = screen.width,
            screen_height = screen.height,
            x = position.x,
            y = position.y,
            "creating window"
        );

        let window = conn.generate_id()?;
        let attributes = CreateWindowAux::new()
            .background_pixel(screen.white_pixel)
            .event_mask(
                EventMask::KEY_PRESS
                    | EventMask::KEY_RELEASE
                    | EventMask::BUTTON_PRESS
                    | EventMask::EXPOSURE
                    | EventMask::POINTER_MOTION
                    | EventMask::ENTER_WINDOW,
            );
        checked(
            conn.create_window(
                root_depth,
                window,
                root,
                clamp_i16(position.x),
                clamp_i16(position.y),
                size.width,
                size.height,
                BORDER_WIDTH,
                WindowClass::INPUT_OUTPUT,
                root_visual,
                &attributes,
            ),
            "can't create window",
        )?;

        let mut display = Self {
            conn,
            window,
            screen,
        };
        display.set_properties(&config.title)?;

        checked(display.conn.map_window(window), "can't map window")?;
        display.conn.flush()?;
        tracing::info!(window, "popup mapped");

        Ok(display)
    }

    /// Sets the window name, class, and the dock window-type hint.
    fn set_properties(&mut self, title: &str) -> Result<()> {
        checked(
            self.conn.change_property8(
                PropMode::REPLACE,
                self.window,
                AtomEnum::WM_NAME,
                AtomEnum::STRING,
                title.as_bytes(),
            ),
            "can't set window name",
        )?;

        // WM_CLASS holds two NUL-terminated strings: instance then class.
        let class = format!("{title}\0{title}\0");
        checked(
            self.conn.change_property8(
                PropMode::REPLACE,
                self.window,
                AtomEnum::WM_CLASS,
                AtomEnum::STRING,
                class.as_bytes(),
            ),
            "can't set window class",
        )?;

        let Some(window_type) = self.intern_atom("_NET_WM_WINDOW_TYPE") else {
            tracing::warn!("unable to set window type; configure the window manager manually");
            return Ok(());
        };
        let Some(dock) = self.intern_atom("_NET_WM_WINDOW_TYPE_DOCK") else {
            tracing::warn!("unable to set window type; configure the window manager manually");
            return Ok(());
        };

        checked(
            self.conn.change_property32(
                PropMode::REPLACE,
                self.window,
                window_type,
                AtomEnum::ATOM,
                &[dock],
            ),
            "can't set window type",
        )
    }

    fn intern_atom(&self, name: &str) -> Option<Atom> {
        let reply = match self.conn.intern_atom(false, name.as_bytes()) {
            Ok(cookie) => cookie.reply().map_err(|e| BMenuError::request("can't intern atom", e)),
            Err(e) => Err(BMenuError::from(e)),
        };
        match reply {
            Ok(reply) => Some(reply.atom),
            Err(e) => {
                tracing::warn!(atom = name, error = %e, "atom lookup failed");
                None
            }
        }
    }

    fn decode(raw: &[u8]) -> Option<Event> {
        if raw.first() == Some(&0) {
            tracing::warn!(code = raw.get(1).copied(), "server reported an error");
        }
        Event::from_raw(raw)
    }
}

impl Display for X11Display {
    fn screen(&self) -> ScreenInfo {
        self.screen
    }

    fn poll_for_event(&mut self) -> Result<Option<Event>> {
        let raw = self.conn.poll_for_raw_event()?;
        Ok(raw.and_then(|buf| Self::decode(&buf)))
    }

    fn wait_for_event(&mut self) -> Result<Event> {
        loop {
            let buf = self.conn.wait_for_raw_event()?;
            if let Some(event) = Self::decode(&buf) {
                return Ok(event);
            }
        }
    }

    fn set_input_focus(&mut self) -> Result<()> {
        checked(
            self.conn
                .set_input_focus(InputFocus::POINTER_ROOT, self.window, CURRENT_TIME),
            "Failed to grab focus.",
        )
    }

    fn open_font(&mut self, name: &str) -> Result<FontId> {
        let font = self.conn.generate_id()?;
        checked(self.conn.open_font(font, name.as_bytes()), "can't open font")?;
        Ok(FontId(font))
    }

    fn create_gc(&mut self, font: FontId, foreground: u32, background: u32) -> Result<GcId> {
        let gc = self.conn.generate_id()?;
        let values = CreateGCAux::new()
            .foreground(foreground)
            .background(background)
            .font(font.0);
        checked(self.conn.create_gc(gc, self.window, &values), "can't create gc")?;
        Ok(GcId(gc))
    }

    fn close_font(&mut self, font: FontId) -> Result<()> {
        checked(self.conn.close_font(font.0), "can't close font")
    }

    fn draw_text(&mut self, gc: GcId, origin: TextOrigin, text: &str) -> Result<()> {
        let bytes = text.as_bytes();
        let bytes = &bytes[..bytes.len().min(MAX_TEXT8_LEN)];
        checked(
            self.conn
                .image_text8(self.window, gc.0, origin.x, origin.y, bytes),
            "can't paste text",
        )
    }

    fn free_gc(&mut self, gc: GcId) -> Result<()> {
        checked(self.conn.free_gc(gc.0), "can't free gc")
    }

    fn move_window(&mut self, position: Position) -> Result<()> {
        let values = ConfigureWindowAux::new().x(position.x).y(position.y);
        checked(
            self.conn.configure_window(self.window, &values),
            "can't move the window",
        )
    }

    fn map_window(&mut self) -> Result<()> {
        checked(self.conn.map_window(self.window), "can't map window")
    }

    fn flush(&mut self) -> Result<()> {
        self.conn.flush()?;
        Ok(())
    }
}

impl Drop for X11Display {
    fn drop(&mut self) {
        tracing::debug!(window = self.window, "closing X connection");
    }
}

/// Waits for the server to process a request and maps a server error to
/// [`BMenuError::Request`] tagged with `context`.
fn checked(
    cookie: std::result::Result<VoidCookie<'_, RustConnection>, ConnectionError>,
    context: &'static str,
) -> Result<()> {
    cookie?
        .check()
        .map_err(|e| BMenuError::request(context, e))
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use crate::app::WindowState;
use crate::display::{Display, FontId, GcId};
use crate::domain::{BMenuError, Event, Position, Result, ScreenInfo, Size, TextOrigin};

/// X11 `BadValue`, used for injected request failures.
const INJECTED_ERROR_CODE: u8 = 2;

pub fn full_hd_screen() -> ScreenInfo {
    ScreenInfo {
        width: 1920,
        height: 1080,
        black_pixel: 0,
        white_pixel: 0xff_ffff,
    }
}

/// A 300x100 "BMenu" popup centered on a 1920x1080 screen, at (810, 490).
pub fn popup_state() -> WindowState {
    WindowState::centered(
        &full_hd_screen(),
        Size { width: 300, height: 100 },
        "BMenu",
        "fixed",
    )
}

/// Request kinds a [`RecordingDisplay`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    SetInputFocus,
    OpenFont,
    CreateGc,
    CloseFont,
    DrawText,
    FreeGc,
    MoveWindow,
    MapWindow,
}

impl Op {
    const fn context(self) -> &'static str {
        match self {
            Self::SetInputFocus => "Failed to grab focus.",
            Self::OpenFont => "can't open font",
            Self::CreateGc => "can't create gc",
            Self::CloseFont => "can't close font",
            Self::DrawText => "can't paste text",
            Self::FreeGc => "can't free gc",
            Self::MoveWindow => "can't move the window",
            Self::MapWindow => "can't map window",
        }
    }
}

/// One request as seen by the [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SetInputFocus,
    OpenFont(String),
    CreateGc {
        font: FontId,
        foreground: u32,
        background: u32,
    },
    CloseFont(FontId),
    DrawText {
        gc: GcId,
        origin: TextOrigin,
        text: String,
    },
    FreeGc(GcId),
    MoveWindow(Position),
    MapWindow,
    Flush,
}

/// In-memory [`Display`] that replays scripted events and records requests.
pub struct RecordingDisplay {
    pub calls: Vec<Call>,
    pub polls: usize,
    events: VecDeque<Event>,
    empty_polls: usize,
    fail_on: Option<Op>,
    next_id: u32,
    fonts: HashSet<FontId>,
    gcs: HashSet<GcId>,
    closed: Rc<Cell<u32>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            polls: 0,
            events: VecDeque::new(),
            empty_polls: 0,
            fail_on: None,
            next_id: 1,
            fonts: HashSet::new(),
            gcs: HashSet::new(),
            closed: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    /// Makes the first `count` polls report an empty queue.
    pub fn with_empty_polls(mut self, count: usize) -> Self {
        self.empty_polls = count;
        self
    }

    pub fn failing(mut self, op: Op) -> Self {
        self.fail_on = Some(op);
        self
    }

    /// Counter incremented when the display is dropped.
    pub fn close_counter(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.closed)
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    pub fn live_gcs(&self) -> usize {
        self.gcs.len()
    }

    pub fn live_fonts(&self) -> usize {
        self.fonts.len()
    }

    fn record(&mut self, call: Call, op: Op) -> Result<()> {
        self.calls.push(call);
        if self.fail_on == Some(op) {
            return Err(BMenuError::Request {
                context: op.context(),
                code: INJECTED_ERROR_CODE,
            });
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Display for RecordingDisplay {
    fn screen(&self) -> ScreenInfo {
        full_hd_screen()
    }

    fn poll_for_event(&mut self) -> Result<Option<Event>> {
        self.polls += 1;
        if self.empty_polls > 0 {
            self.empty_polls -= 1;
            return Ok(None);
        }
        Ok(self.events.pop_front())
    }

    fn wait_for_event(&mut self) -> Result<Event> {
        self.events.pop_front().ok_or_else(|| {
            BMenuError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "event script exhausted",
            ))
        })
    }

    fn set_input_focus(&mut self) -> Result<()> {
        self.record(Call::SetInputFocus, Op::SetInputFocus)
    }

    fn open_font(&mut self, name: &str) -> Result<FontId> {
        let font = FontId(self.allocate_id());
        self.record(Call::OpenFont(name.to_string()), Op::OpenFont)?;
        self.fonts.insert(font);
        Ok(font)
    }

    fn create_gc(&mut self, font: FontId, foreground: u32, background: u32) -> Result<GcId> {
        let gc = GcId(self.allocate_id());
        self.record(
            Call::CreateGc {
                font,
                foreground,
                background,
            },
            Op::CreateGc,
        )?;
        self.gcs.insert(gc);
        Ok(gc)
    }

    fn close_font(&mut self, font: FontId) -> Result<()> {
        self.record(Call::CloseFont(font), Op::CloseFont)?;
        self.fonts.remove(&font);
        Ok(())
    }

    fn draw_text(&mut self, gc: GcId, origin: TextOrigin, text: &str) -> Result<()> {
        assert!(self.gcs.contains(&gc), "draw with released gc {gc:?}");
        self.record(
            Call::DrawText {
                gc,
                origin,
                text: text.to_string(),
            },
            Op::DrawText,
        )
    }

    fn free_gc(&mut self, gc: GcId) -> Result<()> {
        self.record(Call::FreeGc(gc), Op::FreeGc)?;
        self.gcs.remove(&gc);
        Ok(())
    }

    fn move_window(&mut self, position: Position) -> Result<()> {
        self.record(Call::MoveWindow(position), Op::MoveWindow)
    }

    fn map_window(&mut self) -> Result<()> {
        self.record(Call::MapWindow, Op::MapWindow)
    }

    fn flush(&mut self) -> Result<()> {
        self.calls.push(Call::Flush);
        Ok(())
    }
}

impl Drop for RecordingDisplay {
    fn drop(&mut self) {
        self.closed.set(self.closed.get() + 1);
    }
}

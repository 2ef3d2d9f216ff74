//! # I/O Abstraction Layer
//!
//! Trait seams for input events and the drawing surface so the frame loop
//! runs the same against a real terminal and against test doubles.
//!
//! ```text
//! Production:  AppController ──▶ TerminalInputSource ──▶ crossterm::event::read()
//!                            ──▶ TerminalSurface     ──▶ crossterm::queue!()
//!
//! Testing:     AppController ──▶ TestInputSource     ──▶ VecDeque<InputEvent>
//!                            ──▶ MockSurface         ──▶ Vec<DrawCommand>
//! ```

use anyhow::Result;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use crossterm::style::Color;
pub use mock::{DrawCommand, MockSurface, TestInputSource};
pub use terminal::{TerminalInputSource, TerminalSurface};

/// Discrete user input, already stripped of terminal details
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close the application
    Quit,
    /// A printable character
    Text(char),
    Backspace,
    /// Primary pointer press at a cell
    Click { column: u16, row: u16 },
    /// Move focus to the next text box
    FocusNext,
    /// Press the submit button of the focused form
    Submit,
    /// Press the visible panel toggle button
    Toggle,
    /// Abort the request in flight
    Cancel,
    /// Terminal grid changed size
    Resize { columns: u16, rows: u16 },
}

/// Source of input events
pub trait InputSource {
    /// Check if events are available within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. `None` for input the application ignores.
    ///
    /// This should only be called after poll() returns true.
    fn read(&mut self) -> Result<Option<InputEvent>>;

    /// Every event pending right now, consumed once per frame
    fn drain(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while self.poll(Duration::ZERO)? {
            if let Some(event) = self.read()? {
                events.push(event);
            }
        }
        Ok(events)
    }
}

/// Axis-aligned rectangle in logical canvas units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `(cx, cy)`
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Horizontal placement of text relative to its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// How a piece of text is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub background: Color,
    pub bold: bool,
    pub align: Align,
}

impl TextStyle {
    pub fn centered(color: Color, background: Color) -> Self {
        Self {
            color,
            background,
            bold: false,
            align: Align::Center,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Immediate-mode drawing surface with a fixed logical resolution
pub trait Surface {
    /// Logical canvas size all draw calls are expressed in
    fn logical_size(&self) -> (f32, f32);

    /// Map a cell of the output grid to logical coordinates
    fn to_logical(&self, column: u16, row: u16) -> (f32, f32);

    /// Output grid changed size
    fn resize(&mut self, columns: u16, rows: u16);

    /// Prepare the output device
    fn initialize(&mut self) -> Result<()>;

    /// Start a new frame, discarding the previous one
    fn begin_frame(&mut self) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()>;

    /// Draw one line of text anchored at `(x, y)`
    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) -> Result<()>;

    /// Show the finished frame
    fn present(&mut self) -> Result<()>;

    /// Restore the output device
    fn cleanup(&mut self) -> Result<()>;
}

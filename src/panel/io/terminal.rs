//! # Terminal I/O Implementations
//!
//! Production implementations using crossterm. All crossterm calls are
//! isolated to this module. The logical canvas is scaled onto the cell grid,
//! so one cell covers `logical_width / columns` by `logical_height / rows`
//! logical units.

use super::{Align, Color, InputEvent, InputSource, Rect, Surface, TextStyle};
use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use std::io::{self, Write};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Reads events from the real terminal
pub struct TerminalInputSource;

impl TerminalInputSource {
    pub fn new() -> Self {
        Self
    }

    fn map_key(key: KeyEvent) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => Some(InputEvent::Quit),
            KeyCode::Char('t') if ctrl => Some(InputEvent::Toggle),
            KeyCode::Char(ch) if !ctrl => Some(InputEvent::Text(ch)),
            KeyCode::Backspace => Some(InputEvent::Backspace),
            KeyCode::Tab | KeyCode::BackTab => Some(InputEvent::FocusNext),
            KeyCode::Enter => Some(InputEvent::Submit),
            KeyCode::Esc => Some(InputEvent::Cancel),
            _ => None,
        }
    }

    /// Translate a crossterm event, dropping what the forms do not use
    pub fn map_event(event: Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => Self::map_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            Event::Resize(columns, rows) => Some(InputEvent::Resize { columns, rows }),
            _ => None,
        }
    }
}

impl Default for TerminalInputSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInputSource {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        event::poll(timeout).map_err(anyhow::Error::from)
    }

    fn read(&mut self) -> Result<Option<InputEvent>> {
        let event = event::read()?;
        tracing::trace!("Terminal event: {:?}", event);
        Ok(Self::map_event(event))
    }
}

/// Draws the logical canvas onto the terminal cell grid
pub struct TerminalSurface<W: Write> {
    writer: W,
    logical_size: (f32, f32),
    grid: (u16, u16),
}

impl TerminalSurface<io::Stdout> {
    /// Surface on stdout sized to the current terminal
    pub fn new(logical_size: (f32, f32)) -> Result<Self> {
        let grid = terminal::size()?;
        Ok(Self::with_writer(io::stdout(), logical_size, grid))
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface with a custom writer and grid size
    pub fn with_writer(writer: W, logical_size: (f32, f32), grid: (u16, u16)) -> Self {
        Self {
            writer,
            logical_size,
            grid,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn scale(&self) -> (f32, f32) {
        (
            f32::from(self.grid.0) / self.logical_size.0,
            f32::from(self.grid.1) / self.logical_size.1,
        )
    }

    /// Logical point to a cell, clamped to the grid
    fn to_cell(&self, x: f32, y: f32) -> (u16, u16) {
        let (sx, sy) = self.scale();
        let max_col = self.grid.0.saturating_sub(1) as f32;
        let max_row = self.grid.1.saturating_sub(1) as f32;
        (
            (x * sx).round().clamp(0.0, max_col) as u16,
            (y * sy).round().clamp(0.0, max_row) as u16,
        )
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn logical_size(&self) -> (f32, f32) {
        self.logical_size
    }

    fn to_logical(&self, column: u16, row: u16) -> (f32, f32) {
        let (sx, sy) = self.scale();
        // Center of the cell
        (
            (f32::from(column) + 0.5) / sx,
            (f32::from(row) + 0.5) / sy,
        )
    }

    fn resize(&mut self, columns: u16, rows: u16) {
        self.grid = (columns, rows);
    }

    fn initialize(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<()> {
        queue!(self.writer, BeginSynchronizedUpdate, Clear(ClearType::All))?;
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        if self.grid.0 == 0 || self.grid.1 == 0 {
            return Ok(());
        }
        let (left, top) = self.to_cell(rect.x, rect.y);
        let (sx, sy) = self.scale();
        let right = ((rect.right() * sx).round() as i64).clamp(0, i64::from(self.grid.0)) as u16;
        let bottom = ((rect.bottom() * sy).round() as i64).clamp(0, i64::from(self.grid.1)) as u16;
        if right <= left || bottom <= top {
            return Ok(());
        }

        let line = " ".repeat(usize::from(right - left));
        queue!(self.writer, SetBackgroundColor(color))?;
        for row in top..bottom {
            queue!(self.writer, cursor::MoveTo(left, row), Print(&line))?;
        }
        queue!(self.writer, ResetColor)?;
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) -> Result<()> {
        if text.is_empty() || self.grid.0 == 0 || self.grid.1 == 0 {
            return Ok(());
        }
        let (column, row) = self.to_cell(x, y);
        let width = text.width() as u16;
        let start = match style.align {
            Align::Left => column,
            Align::Center => column.saturating_sub(width / 2),
        };

        queue!(
            self.writer,
            cursor::MoveTo(start, row),
            SetForegroundColor(style.color),
            SetBackgroundColor(style.background)
        )?;
        if style.bold {
            queue!(self.writer, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.writer,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        queue!(self.writer, EndSynchronizedUpdate)?;
        self.writer.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        execute!(
            self.writer,
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

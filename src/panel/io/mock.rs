//! # Test Doubles for Input and Drawing
//!
//! A queue-backed input source and a surface that records every draw call.
//! The mock surface maps cells 1:1 to logical units so a click at
//! `(column, row)` lands on logical point `(column, row)`.

use super::{Color, InputEvent, InputSource, Rect, Surface, TextStyle};
use anyhow::Result;
use std::collections::VecDeque;
use std::time::Duration;

/// Input source fed from a pre-programmed queue
#[derive(Debug, Clone, Default)]
pub struct TestInputSource {
    events: VecDeque<InputEvent>,
}

impl TestInputSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Queue one `Text` event per character
    pub fn push_text(&mut self, text: &str) {
        self.events.extend(text.chars().map(InputEvent::Text));
    }

    /// Queue a click on a logical point
    pub fn push_click(&mut self, x: f32, y: f32) {
        self.push(InputEvent::Click {
            column: x as u16,
            row: y as u16,
        });
    }

    pub fn pending_count(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for TestInputSource {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Option<InputEvent>> {
        self.events
            .pop_front()
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("No events available in test queue"))
    }
}

/// Recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Initialize,
    BeginFrame,
    FillRect { rect: Rect, color: Color },
    Text { x: f32, y: f32, text: String, style: TextStyle },
    Present,
    Cleanup,
}

/// Surface that records draw calls for verification
#[derive(Debug, Clone)]
pub struct MockSurface {
    commands: Vec<DrawCommand>,
    logical_size: (f32, f32),
    frames_presented: usize,
}

impl MockSurface {
    /// Surface with the HD logical canvas
    pub fn new() -> Self {
        Self::with_size((1280.0, 720.0))
    }

    pub fn with_size(logical_size: (f32, f32)) -> Self {
        Self {
            commands: Vec::new(),
            logical_size,
            frames_presented: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames_presented(&self) -> usize {
        self.frames_presented
    }

    /// Commands since the most recent `BeginFrame`
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|command| *command == DrawCommand::BeginFrame)
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Text drawn in the most recent frame, in draw order
    pub fn frame_texts(&self) -> Vec<&str> {
        self.last_frame()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn frame_contains(&self, needle: &str) -> bool {
        self.frame_texts().iter().any(|text| text.contains(needle))
    }
}

impl Default for MockSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MockSurface {
    fn logical_size(&self) -> (f32, f32) {
        self.logical_size
    }

    fn to_logical(&self, column: u16, row: u16) -> (f32, f32) {
        (f32::from(column), f32::from(row))
    }

    fn resize(&mut self, _columns: u16, _rows: u16) {}

    fn initialize(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Initialize);
        Ok(())
    }

    fn begin_frame(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::BeginFrame);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::FillRect { rect, color });
        Ok(())
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) -> Result<()> {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            style,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Present);
        self.frames_presented += 1;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Cleanup);
        Ok(())
    }
}

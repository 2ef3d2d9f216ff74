//! # View Models
//!
//! One view model per screen. The frame loop talks to the active screen
//! through the `Screen` trait: it feeds input, advances time, reports request
//! lifecycle, and asks for a frame. Anything that needs the network comes
//! back as a `ScreenCommand` for the controller to carry out.

use crate::panel::io::Surface;
use crate::panel::services::{AuthReply, AuthRequest, RequestKind};
use anyhow::Result;

pub mod auth_form;
pub mod registration;

pub use auth_form::AuthFormViewModel;
pub use registration::RegistrationViewModel;

/// Input a screen reacts to, with clicks already in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScreenInput {
    Text(char),
    Backspace,
    Click { x: f32, y: f32 },
    FocusNext,
    Submit,
    Toggle,
}

/// Work a screen asks the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    None,
    Submit(AuthRequest),
    CancelRequest,
}

pub trait Screen {
    fn handle_input(&mut self, input: ScreenInput) -> ScreenCommand;

    /// Advance animations by `dt` seconds
    fn update(&mut self, dt: f32);

    /// A submitted request was accepted and is now in flight
    fn on_request_sent(&mut self, kind: RequestKind);

    fn on_reply(&mut self, reply: AuthReply);

    fn render(&self, surface: &mut dyn Surface) -> Result<()>;
}

/// The screen selected at startup
pub enum ActiveScreen {
    Panel(AuthFormViewModel),
    Registration(RegistrationViewModel),
}

impl ActiveScreen {
    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Panel(screen) => screen,
            ActiveScreen::Registration(screen) => screen,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Panel(screen) => screen,
            ActiveScreen::Registration(screen) => screen,
        }
    }

    pub fn panel(&self) -> Option<&AuthFormViewModel> {
        match self {
            ActiveScreen::Panel(screen) => Some(screen),
            ActiveScreen::Registration(_) => None,
        }
    }

    pub fn registration(&self) -> Option<&RegistrationViewModel> {
        match self {
            ActiveScreen::Registration(screen) => Some(screen),
            ActiveScreen::Panel(_) => None,
        }
    }
}

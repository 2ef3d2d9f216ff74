//! # Auth Form View Model
//!
//! Drives the sliding sign-in/sign-up screen: routes input to the focused
//! text box, runs validation on submit, starts slides, and turns replies
//! into the status message.

use super::{Screen, ScreenCommand, ScreenInput};
use crate::panel::interpreter::interpret_reply;
use crate::panel::io::Surface;
use crate::panel::models::{FormMode, FormState, SlideDirection, StatusMessage};
use crate::panel::services::{AuthReply, AuthRequest, RequestError, RequestKind};
use crate::panel::text_table::TextTable;
use crate::panel::validation::{validate_sign_in, validate_sign_up};
use crate::panel::views::{FormLayout, Renderer, Widget};
use anyhow::Result;

fn request_mode(kind: RequestKind) -> Option<FormMode> {
    match kind {
        RequestKind::SignIn => Some(FormMode::SignIn),
        RequestKind::SignUp => Some(FormMode::SignUp),
        RequestKind::Register => None,
    }
}

pub struct AuthFormViewModel {
    state: FormState,
    texts: TextTable,
    layout: FormLayout,
    renderer: Renderer,
    slide_speed: f32,
}

impl AuthFormViewModel {
    pub fn new(texts: TextTable, logical_size: (f32, f32), slide_speed: f32) -> Self {
        Self {
            state: FormState::new(logical_size.0),
            texts,
            layout: FormLayout::new(logical_size),
            renderer: Renderer::default(),
            slide_speed,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn layout(&self) -> &FormLayout {
        &self.layout
    }

    pub fn texts(&self) -> &TextTable {
        &self.texts
    }

    /// Validate a form and build its request, or show why it was refused.
    /// Only the active form submits; nothing does while the panel slides.
    pub fn submit(&mut self, mode: FormMode) -> ScreenCommand {
        if self.state.active_mode() != Some(mode) {
            tracing::debug!("{:?} submit ignored in state {:?}", mode, self.state.toggle());
            return ScreenCommand::None;
        }

        let fields = self.state.fields(mode);
        let validated = match mode {
            FormMode::SignIn => validate_sign_in(fields).map(AuthRequest::SignIn),
            FormMode::SignUp => validate_sign_up(fields).map(AuthRequest::SignUp),
        };

        match validated {
            Ok(request) => ScreenCommand::Submit(request),
            Err(error) => {
                tracing::debug!("{:?} submit refused: {}", mode, error);
                let text = self.texts.get(error.text_key(mode)).to_string();
                self.state.set_message(StatusMessage::new(text, mode));
                ScreenCommand::None
            }
        }
    }

    fn slide(&mut self, direction: SlideDirection) -> ScreenCommand {
        if self.state.start_slide(direction, self.slide_speed) {
            // A reply for the departing form has nowhere to go
            ScreenCommand::CancelRequest
        } else {
            ScreenCommand::None
        }
    }

    fn visible_toggle(&self) -> Option<SlideDirection> {
        [SlideDirection::Right, SlideDirection::Left]
            .into_iter()
            .find(|direction| self.state.visibility().toggle(*direction))
    }

    fn click(&mut self, x: f32, y: f32) -> ScreenCommand {
        match self.layout.hit_test(&self.state, x, y) {
            Some(Widget::Field(mode, field)) => {
                self.state.focus_field(mode, field);
                ScreenCommand::None
            }
            Some(Widget::Submit(mode)) => self.submit(mode),
            Some(Widget::ForgotPassword) => {
                tracing::info!("Forgot-password pressed; no recovery flow is available");
                ScreenCommand::None
            }
            Some(Widget::Toggle(direction)) => self.slide(direction),
            None => {
                self.state.clear_focus();
                ScreenCommand::None
            }
        }
    }
}

impl Screen for AuthFormViewModel {
    fn handle_input(&mut self, input: ScreenInput) -> ScreenCommand {
        match input {
            ScreenInput::Text(ch) => {
                self.state.type_char(ch);
                ScreenCommand::None
            }
            ScreenInput::Backspace => {
                self.state.backspace();
                ScreenCommand::None
            }
            ScreenInput::FocusNext => {
                self.state.focus_next();
                ScreenCommand::None
            }
            ScreenInput::Submit => {
                let mode = self
                    .state
                    .focus()
                    .map(|(mode, _)| mode)
                    .or_else(|| self.state.active_mode());
                match mode {
                    Some(mode) => self.submit(mode),
                    None => ScreenCommand::None,
                }
            }
            ScreenInput::Toggle => match self.visible_toggle() {
                Some(direction) => self.slide(direction),
                None => ScreenCommand::None,
            },
            ScreenInput::Click { x, y } => self.click(x, y),
        }
    }

    fn update(&mut self, dt: f32) {
        self.state.advance(dt);
    }

    fn on_request_sent(&mut self, kind: RequestKind) {
        let active = self.state.active_mode();
        if let Some(mode) = request_mode(kind).filter(|mode| active == Some(*mode)) {
            let text = self.texts.get("request_pending").to_string();
            self.state.set_message(StatusMessage::new(text, mode));
        }
    }

    fn on_reply(&mut self, reply: AuthReply) {
        let Some(mode) = request_mode(reply.kind) else {
            tracing::warn!("Panel screen ignoring {:?} reply", reply.kind);
            return;
        };

        // Cancellations are shown even mid-slide; arrival clears them
        let cancelled = matches!(reply.result, Err(RequestError::Cancelled));
        if !cancelled && self.state.active_mode() != Some(mode) {
            tracing::debug!("Dropping {:?} reply, form is no longer active", mode);
            return;
        }

        let interpretation = interpret_reply(mode, &reply.result, &self.texts);
        if interpretation.clear_fields {
            self.state.clear_fields(mode);
        }
        tracing::debug!("Showing message: {}", interpretation.message.text());
        self.state.set_message(interpretation.message);
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        self.renderer
            .render_auth_form(surface, &self.state, &self.layout, &self.texts)
    }
}

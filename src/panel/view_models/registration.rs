//! Standalone registration screen: one form, a send button and a footer.

use super::{Screen, ScreenCommand, ScreenInput};
use crate::panel::interpreter::interpret_registration;
use crate::panel::io::Surface;
use crate::panel::models::RegistrationState;
use crate::panel::services::{AuthReply, AuthRequest, RequestKind};
use crate::panel::text_table::TextTable;
use crate::panel::validation::validate_registration;
use crate::panel::views::{RegistrationLayout, RegistrationWidget, Renderer};
use anyhow::Result;

pub struct RegistrationViewModel {
    state: RegistrationState,
    texts: TextTable,
    layout: RegistrationLayout,
    renderer: Renderer,
}

impl RegistrationViewModel {
    pub fn new(texts: TextTable, logical_size: (f32, f32)) -> Self {
        Self {
            state: RegistrationState::new(),
            texts,
            layout: RegistrationLayout::new(logical_size),
            renderer: Renderer::default(),
        }
    }

    pub fn state(&self) -> &RegistrationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RegistrationState {
        &mut self.state
    }

    pub fn layout(&self) -> &RegistrationLayout {
        &self.layout
    }

    pub fn texts(&self) -> &TextTable {
        &self.texts
    }

    pub fn send(&mut self) -> ScreenCommand {
        match validate_registration(self.state.fields()) {
            Ok(credentials) => ScreenCommand::Submit(AuthRequest::Register(credentials)),
            Err(error) => {
                tracing::debug!("Registration refused: {}", error);
                let text = self.texts.get(error.registration_text_key()).to_string();
                self.state.set_footer(text);
                ScreenCommand::None
            }
        }
    }
}

impl Screen for RegistrationViewModel {
    fn handle_input(&mut self, input: ScreenInput) -> ScreenCommand {
        match input {
            ScreenInput::Text(ch) => {
                self.state.type_char(ch);
            }
            ScreenInput::Backspace => {
                self.state.backspace();
            }
            ScreenInput::FocusNext => self.state.focus_next(),
            ScreenInput::Submit => return self.send(),
            ScreenInput::Toggle => {}
            ScreenInput::Click { x, y } => match self.layout.hit_test(x, y) {
                Some(RegistrationWidget::Field(field)) => self.state.focus_field(field),
                Some(RegistrationWidget::Send) => return self.send(),
                None => {}
            },
        }
        ScreenCommand::None
    }

    fn update(&mut self, _dt: f32) {}

    fn on_request_sent(&mut self, _kind: RequestKind) {
        let text = self.texts.get("request_pending").to_string();
        self.state.set_footer(text);
    }

    fn on_reply(&mut self, reply: AuthReply) {
        if reply.kind != RequestKind::Register {
            tracing::warn!("Registration screen ignoring {:?} reply", reply.kind);
            return;
        }

        let feedback = interpret_registration(&reply.result, &self.texts);
        if feedback.clear_fields {
            self.state.clear_fields();
        }
        self.state.set_footer(feedback.text);
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<()> {
        self.renderer
            .render_registration(surface, &self.state, &self.layout, &self.texts)
    }
}

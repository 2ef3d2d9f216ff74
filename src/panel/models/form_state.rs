//! # Form State
//!
//! Everything the sliding panel screen shows, in one struct. Rendering and
//! validation read it; mutation goes through the toggle state machine below.
//!
//! ```text
//!   SignInActive ──toggle──▶ SlidingToSignUp ──arrive──▶ SignUpActive
//!        ▲                                                    │
//!        └──────arrive────── SlidingToSignIn ◀────toggle──────┘
//! ```

use super::field_set::{FieldId, FieldSet};
use super::form_mode::{FormMode, SlideDirection};
use super::panel_state::PanelState;
use super::status_message::StatusMessage;

/// Mode toggle state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    SignInActive,
    SlidingToSignUp,
    SignUpActive,
    SlidingToSignIn,
}

impl ToggleState {
    fn active(mode: FormMode) -> Self {
        match mode {
            FormMode::SignIn => ToggleState::SignInActive,
            FormMode::SignUp => ToggleState::SignUpActive,
        }
    }

    fn sliding(direction: SlideDirection) -> Self {
        match direction {
            SlideDirection::Left => ToggleState::SlidingToSignIn,
            SlideDirection::Right => ToggleState::SlidingToSignUp,
        }
    }

    /// Mode that is fully active, `None` while sliding
    pub fn active_mode(self) -> Option<FormMode> {
        match self {
            ToggleState::SignInActive => Some(FormMode::SignIn),
            ToggleState::SignUpActive => Some(FormMode::SignUp),
            ToggleState::SlidingToSignUp | ToggleState::SlidingToSignIn => None,
        }
    }

    pub fn is_sliding(self) -> bool {
        self.active_mode().is_none()
    }
}

/// Which widgets are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    /// Sign-in text boxes, submit and forgot-password buttons
    pub sign_in_form: bool,
    /// Sign-up text boxes and submit button
    pub sign_up_form: bool,
    /// Panel button that slides towards sign-up
    pub to_sign_up_toggle: bool,
    /// Panel button that slides towards sign-in
    pub to_sign_in_toggle: bool,
}

impl Visibility {
    fn resting_on(mode: FormMode) -> Self {
        let sign_in = mode == FormMode::SignIn;
        Self {
            sign_in_form: sign_in,
            sign_up_form: !sign_in,
            to_sign_up_toggle: sign_in,
            to_sign_in_toggle: !sign_in,
        }
    }

    pub fn form(&self, mode: FormMode) -> bool {
        match mode {
            FormMode::SignIn => self.sign_in_form,
            FormMode::SignUp => self.sign_up_form,
        }
    }

    fn set_form(&mut self, mode: FormMode, visible: bool) {
        match mode {
            FormMode::SignIn => self.sign_in_form = visible,
            FormMode::SignUp => self.sign_up_form = visible,
        }
    }

    pub fn toggle(&self, direction: SlideDirection) -> bool {
        match direction {
            SlideDirection::Left => self.to_sign_in_toggle,
            SlideDirection::Right => self.to_sign_up_toggle,
        }
    }

    fn set_toggle(&mut self, direction: SlideDirection, visible: bool) {
        match direction {
            SlideDirection::Left => self.to_sign_in_toggle = visible,
            SlideDirection::Right => self.to_sign_up_toggle = visible,
        }
    }
}

/// Complete state of the sliding panel screen
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    toggle: ToggleState,
    panel: PanelState,
    sign_in: FieldSet,
    sign_up: FieldSet,
    visibility: Visibility,
    focus: Option<(FormMode, FieldId)>,
    message: Option<StatusMessage>,
}

impl FormState {
    /// Sign-in active, panel resting on the left edge
    pub fn new(viewport_width: f32) -> Self {
        Self {
            toggle: ToggleState::SignInActive,
            panel: PanelState::new(viewport_width),
            sign_in: FieldSet::sign_in(),
            sign_up: FieldSet::sign_up(),
            visibility: Visibility::resting_on(FormMode::SignIn),
            focus: None,
            message: None,
        }
    }

    pub fn toggle(&self) -> ToggleState {
        self.toggle
    }

    pub fn active_mode(&self) -> Option<FormMode> {
        self.toggle.active_mode()
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    pub fn fields(&self, mode: FormMode) -> &FieldSet {
        match mode {
            FormMode::SignIn => &self.sign_in,
            FormMode::SignUp => &self.sign_up,
        }
    }

    fn fields_mut(&mut self, mode: FormMode) -> &mut FieldSet {
        match mode {
            FormMode::SignIn => &mut self.sign_in,
            FormMode::SignUp => &mut self.sign_up,
        }
    }

    pub fn focus(&self) -> Option<(FormMode, FieldId)> {
        self.focus
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    // === Toggle state machine ===

    /// Begin a slide. Ignored unless the screen is resting on the opposite
    /// mode; slides already in progress always run to completion.
    pub fn start_slide(&mut self, direction: SlideDirection, speed: f32) -> bool {
        let target = direction.target();
        if self.active_mode() != Some(target.opposite()) {
            tracing::debug!(
                "Ignoring slide {:?} while in state {:?}",
                direction,
                self.toggle
            );
            return false;
        }

        self.panel.start(direction, speed);
        self.toggle = ToggleState::sliding(direction);
        self.visibility.set_toggle(direction, false);
        self.visibility.set_form(target, true);
        self.focus = None;
        tracing::debug!("Panel sliding {:?} towards {:?}", direction, target);
        true
    }

    /// Advance the panel by `dt` seconds, activating the mode it arrives at
    pub fn advance(&mut self, dt: f32) -> Option<FormMode> {
        let arrived = self.panel.update(dt)?;
        self.activate(arrived);
        Some(arrived)
    }

    fn activate(&mut self, mode: FormMode) {
        let departed = mode.opposite();

        self.toggle = ToggleState::active(mode);
        self.visibility.set_form(mode, true);
        self.visibility.set_form(departed, false);
        self.visibility
            .set_toggle(SlideDirection::towards(departed), true);
        self.visibility.set_toggle(SlideDirection::towards(mode), false);

        self.fields_mut(departed).clear();
        if matches!(self.focus, Some((focused, _)) if focused == departed) {
            self.focus = None;
        }
        self.message = None;

        tracing::info!("{:?} form active", mode);
    }

    // === Field editing ===

    /// Focus a text box. Hidden forms cannot take focus.
    pub fn focus_field(&mut self, mode: FormMode, field: FieldId) -> bool {
        if !self.visibility.form(mode) || !self.fields(mode).has_field(field) {
            return false;
        }
        self.focus = Some((mode, field));
        true
    }

    /// Move focus to the next text box of the focused (or active) form
    pub fn focus_next(&mut self) {
        let (mode, current) = match self.focus {
            Some((mode, field)) => (mode, Some(field)),
            None => match self.active_mode() {
                Some(mode) => (mode, None),
                None => return,
            },
        };

        let order = self.fields(mode).fields();
        let next = match current.and_then(|field| order.iter().position(|f| *f == field)) {
            Some(index) => order[(index + 1) % order.len()],
            None => order[0],
        };
        self.focus_field(mode, next);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Type into the focused text box
    pub fn type_char(&mut self, ch: char) -> bool {
        match self.focus {
            Some((mode, field)) => self.fields_mut(mode).push_char(field, ch),
            None => false,
        }
    }

    /// Delete from the focused text box
    pub fn backspace(&mut self) -> bool {
        match self.focus {
            Some((mode, field)) => self.fields_mut(mode).backspace(field),
            None => false,
        }
    }

    /// Replace a field's value directly
    pub fn set_field(&mut self, mode: FormMode, field: FieldId, value: &str) -> bool {
        self.fields_mut(mode).set(field, value)
    }

    pub fn clear_fields(&mut self, mode: FormMode) {
        self.fields_mut(mode).clear();
    }

    // === Status message ===

    pub fn set_message(&mut self, message: StatusMessage) {
        self.message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 2000.0;

    fn slide_to(state: &mut FormState, mode: FormMode) {
        assert!(state.start_slide(SlideDirection::towards(mode), SPEED));
        while state.advance(0.05).is_none() {}
    }

    #[test]
    fn new_state_should_rest_on_sign_in() {
        let state = FormState::new(1280.0);
        assert_eq!(state.toggle(), ToggleState::SignInActive);
        assert_eq!(state.panel().position(), 0.0);
        assert!(state.visibility().sign_in_form);
        assert!(!state.visibility().sign_up_form);
        assert!(state.visibility().to_sign_up_toggle);
        assert!(!state.visibility().to_sign_in_toggle);
    }

    #[test]
    fn start_slide_should_reveal_target_and_hide_trigger() {
        let mut state = FormState::new(1280.0);
        assert!(state.start_slide(SlideDirection::Right, SPEED));

        assert_eq!(state.toggle(), ToggleState::SlidingToSignUp);
        assert!(state.visibility().sign_in_form);
        assert!(state.visibility().sign_up_form);
        assert!(!state.visibility().to_sign_up_toggle);
        assert_eq!(state.panel().velocity(), SPEED);
    }

    #[test]
    fn start_slide_should_drop_focus() {
        let mut state = FormState::new(1280.0);
        state.focus_field(FormMode::SignIn, FieldId::Password);
        assert!(state.start_slide(SlideDirection::Right, SPEED));

        assert_eq!(state.focus(), None);
        assert!(!state.type_char('x'));
        state.focus_next();
        assert_eq!(state.focus(), None);
    }

    #[test]
    fn slide_towards_active_mode_should_be_ignored() {
        let mut state = FormState::new(1280.0);
        assert!(!state.start_slide(SlideDirection::Left, SPEED));
        assert_eq!(state.toggle(), ToggleState::SignInActive);
        assert!(!state.panel().is_sliding());
    }

    #[test]
    fn retrigger_while_sliding_should_be_ignored() {
        let mut state = FormState::new(1280.0);
        state.start_slide(SlideDirection::Right, SPEED);
        state.advance(0.1);

        assert!(!state.start_slide(SlideDirection::Left, SPEED));
        assert!(!state.start_slide(SlideDirection::Right, SPEED));
        assert_eq!(state.panel().velocity(), SPEED);
        assert_eq!(state.toggle(), ToggleState::SlidingToSignUp);
    }

    #[test]
    fn arrival_should_clear_departed_fields_and_message() {
        let mut state = FormState::new(1280.0);
        state.set_field(FormMode::SignIn, FieldId::Username, "alice");
        state.focus_field(FormMode::SignIn, FieldId::Password);
        state.set_message(StatusMessage::new("hello", FormMode::SignIn));

        slide_to(&mut state, FormMode::SignUp);

        assert_eq!(state.toggle(), ToggleState::SignUpActive);
        assert!(state.fields(FormMode::SignIn).is_empty());
        assert!(!state.visibility().sign_in_form);
        assert!(state.visibility().to_sign_in_toggle);
        assert_eq!(state.focus(), None);
        assert_eq!(state.message(), None);
        assert_eq!(state.panel().position(), 640.0);
    }

    #[test]
    fn round_trip_should_return_to_initial_layout() {
        let mut state = FormState::new(1280.0);
        slide_to(&mut state, FormMode::SignUp);
        state.set_field(FormMode::SignUp, FieldId::ConfirmPassword, "pw");
        slide_to(&mut state, FormMode::SignIn);

        assert_eq!(state.toggle(), ToggleState::SignInActive);
        assert_eq!(state.fields(FormMode::SignUp), &FieldSet::sign_up());
        assert_eq!(state.visibility(), &Visibility::resting_on(FormMode::SignIn));
    }

    #[test]
    fn message_set_after_arrival_should_survive_idle_updates() {
        let mut state = FormState::new(800.0);
        state.set_message(StatusMessage::new("kept", FormMode::SignIn));
        for _ in 0..10 {
            assert_eq!(state.advance(0.016), None);
        }
        assert_eq!(state.message().map(StatusMessage::text), Some("kept"));
    }

    #[test]
    fn hidden_form_should_refuse_focus() {
        let mut state = FormState::new(1280.0);
        assert!(!state.focus_field(FormMode::SignUp, FieldId::Username));
        assert!(!state.focus_field(FormMode::SignIn, FieldId::ConfirmPassword));
        assert!(state.focus_field(FormMode::SignIn, FieldId::Username));
    }

    #[test]
    fn focus_next_should_cycle_active_form_fields() {
        let mut state = FormState::new(1280.0);
        state.focus_next();
        assert_eq!(state.focus(), Some((FormMode::SignIn, FieldId::Username)));
        state.focus_next();
        assert_eq!(state.focus(), Some((FormMode::SignIn, FieldId::Password)));
        state.focus_next();
        assert_eq!(state.focus(), Some((FormMode::SignIn, FieldId::Username)));
    }

    #[test]
    fn typing_should_edit_focused_field_only() {
        let mut state = FormState::new(1280.0);
        assert!(!state.type_char('x'));

        state.focus_field(FormMode::SignIn, FieldId::Password);
        state.type_char('p');
        state.type_char('w');
        state.backspace();

        assert_eq!(state.fields(FormMode::SignIn).password(), "p");
        assert_eq!(state.fields(FormMode::SignIn).username(), "");
    }
}

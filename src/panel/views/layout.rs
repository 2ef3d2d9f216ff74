//! # Screen Layout
//!
//! Widget rectangles in logical canvas units. Positions are fractions of the
//! canvas so both resolution presets share one layout; sizes scale with the
//! canvas width against the 1280-wide HD canvas.

use crate::panel::io::Rect;
use crate::panel::models::{FieldId, FormMode, FormState, SlideDirection};

const REFERENCE_WIDTH: f32 = 1280.0;
const REFERENCE_HEIGHT: f32 = 720.0;

const TEXT_BOX_SIZE: (f32, f32) = (460.0, 70.0);
const BUTTON_SIZE: (f32, f32) = (280.0, 70.0);
const FORGOT_SIZE: (f32, f32) = (300.0, 75.0);

/// Something clickable on the sliding panel screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Field(FormMode, FieldId),
    Submit(FormMode),
    ForgotPassword,
    Toggle(SlideDirection),
}

/// Layout of the sliding panel screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormLayout {
    width: f32,
    height: f32,
}

impl FormLayout {
    pub fn new((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn scaled(&self, (w, h): (f32, f32)) -> (f32, f32) {
        let s = self.width / REFERENCE_WIDTH;
        (w * s, h * s)
    }

    /// Horizontal center of a form. Each form sits on the half the panel
    /// leaves uncovered when that form is active.
    pub fn form_center_x(&self, mode: FormMode) -> f32 {
        match mode {
            FormMode::SignIn => self.width - self.width / 4.0,
            FormMode::SignUp => self.width / 4.0,
        }
    }

    pub fn title_anchor(&self, mode: FormMode) -> (f32, f32) {
        (self.form_center_x(mode), self.height / 4.0)
    }

    pub fn field_rect(&self, mode: FormMode, field: FieldId) -> Rect {
        let h = self.height;
        let y = match (mode, field) {
            (FormMode::SignIn, FieldId::Username) => h / 2.8,
            (FormMode::SignIn, _) => h / 2.0,
            (FormMode::SignUp, FieldId::Username) => h / 2.5,
            (FormMode::SignUp, FieldId::Password) => h - h / 2.2,
            (FormMode::SignUp, FieldId::ConfirmPassword) => h - h / 3.2,
        };
        let (w, bh) = self.scaled(TEXT_BOX_SIZE);
        Rect::centered(self.form_center_x(mode), y, w, bh)
    }

    pub fn submit_rect(&self, mode: FormMode) -> Rect {
        let y = match mode {
            FormMode::SignIn => self.height - self.height / 4.0,
            FormMode::SignUp => self.height - self.height / 5.0,
        };
        let (w, h) = self.scaled(BUTTON_SIZE);
        Rect::centered(self.form_center_x(mode), y, w, h)
    }

    pub fn forgot_password_rect(&self) -> Rect {
        let (w, h) = self.scaled(FORGOT_SIZE);
        Rect::centered(
            self.form_center_x(FormMode::SignIn),
            self.height - self.height / 2.8,
            w,
            h,
        )
    }

    pub fn message_anchor(&self, mode: FormMode) -> (f32, f32) {
        (self.form_center_x(mode), self.height - self.height / 10.0)
    }

    pub fn panel_rect(&self, state: &FormState) -> Rect {
        let panel = state.panel();
        Rect::new(panel.position(), 0.0, panel.panel_width(), self.height)
    }

    /// Toggle buttons ride along in the middle of the panel
    pub fn toggle_rect(&self, state: &FormState) -> Rect {
        let panel = self.panel_rect(state);
        let (w, h) = self.scaled(BUTTON_SIZE);
        Rect::centered(panel.center().0, self.height - self.height / 3.0, w, h)
    }

    /// Visible widget under a logical point. The panel hides whatever
    /// lies beneath it.
    pub fn hit_test(&self, state: &FormState, x: f32, y: f32) -> Option<Widget> {
        let visibility = state.visibility();

        if self.panel_rect(state).contains(x, y) {
            if !self.toggle_rect(state).contains(x, y) {
                return None;
            }
            return [SlideDirection::Right, SlideDirection::Left]
                .into_iter()
                .find(|direction| visibility.toggle(*direction))
                .map(Widget::Toggle);
        }

        for mode in [FormMode::SignIn, FormMode::SignUp] {
            if !visibility.form(mode) {
                continue;
            }
            for field in state.fields(mode).fields() {
                if self.field_rect(mode, *field).contains(x, y) {
                    return Some(Widget::Field(mode, *field));
                }
            }
            if self.submit_rect(mode).contains(x, y) {
                return Some(Widget::Submit(mode));
            }
        }

        if visibility.form(FormMode::SignIn) && self.forgot_password_rect().contains(x, y) {
            return Some(Widget::ForgotPassword);
        }
        None
    }
}

/// Something clickable on the registration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationWidget {
    Field(FieldId),
    Send,
}

/// Single centered column: title, three labelled boxes, send, footer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationLayout {
    width: f32,
    height: f32,
}

impl RegistrationLayout {
    pub fn new((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }

    fn y(&self, reference_y: f32) -> f32 {
        reference_y * self.height / REFERENCE_HEIGHT
    }

    fn scaled(&self, (w, h): (f32, f32)) -> (f32, f32) {
        let s = self.width / REFERENCE_WIDTH;
        (w * s, h * s)
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    pub fn title_anchor(&self) -> (f32, f32) {
        (self.center_x(), self.y(30.0))
    }

    pub fn label_anchor(&self, field: FieldId) -> (f32, f32) {
        let y = match field {
            FieldId::Username => 120.0,
            FieldId::Password => 270.0,
            FieldId::ConfirmPassword => 420.0,
        };
        (self.center_x(), self.y(y))
    }

    pub fn field_rect(&self, field: FieldId) -> Rect {
        let y = match field {
            FieldId::Username => 190.0,
            FieldId::Password => 340.0,
            FieldId::ConfirmPassword => 490.0,
        };
        let (w, h) = self.scaled((500.0, 50.0));
        Rect::centered(self.center_x(), self.y(y), w, h)
    }

    pub fn send_rect(&self) -> Rect {
        let (w, h) = self.scaled((220.0, 60.0));
        Rect::centered(self.center_x(), self.y(590.0), w, h)
    }

    pub fn footer_anchor(&self) -> (f32, f32) {
        (self.center_x(), self.y(670.0))
    }

    pub fn hit_test(&self, x: f32, y: f32) -> Option<RegistrationWidget> {
        [FieldId::Username, FieldId::Password, FieldId::ConfirmPassword]
            .into_iter()
            .find(|field| self.field_rect(*field).contains(x, y))
            .map(RegistrationWidget::Field)
            .or_else(|| {
                self.send_rect()
                    .contains(x, y)
                    .then_some(RegistrationWidget::Send)
            })
    }
}

//! # Renderer
//!
//! Draws a screen state onto a `Surface`. Rendering never mutates state.
//!
//! Panel screen draw order: background, visible forms, the panel (covering
//! whatever form lies beneath it), the visible toggle button, then the
//! status message.

use super::layout::{FormLayout, RegistrationLayout};
use crate::panel::io::{Align, Color, Rect, Surface, TextStyle};
use crate::panel::models::{FieldId, FieldSet, FormMode, FormState, RegistrationState, SlideDirection};
use crate::panel::text_table::TextTable;
use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Colors used by every screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub panel: Color,
    pub panel_text: Color,
    pub text_box: Color,
    pub focused_text_box: Color,
    pub placeholder: Color,
    pub button: Color,
    pub button_text: Color,
    pub link: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            panel: Color::Rgb { r: 0, g: 110, b: 140 },
            panel_text: Color::White,
            text_box: Color::Rgb { r: 225, g: 225, b: 225 },
            focused_text_box: Color::Rgb { r: 250, g: 240, b: 190 },
            placeholder: Color::Rgb { r: 120, g: 120, b: 120 },
            button: Color::Rgb { r: 0, g: 110, b: 140 },
            button_text: Color::White,
            link: Color::Rgb { r: 90, g: 90, b: 90 },
        }
    }
}

/// Text shown in a text box: the masked value, or the placeholder when empty
pub fn display_value(field: FieldId, value: &str) -> (String, bool) {
    if value.is_empty() {
        return (String::new(), true);
    }
    if field.is_secret() {
        ("*".repeat(value.graphemes(true).count()), false)
    } else {
        (value.to_string(), false)
    }
}

pub struct Renderer {
    theme: Theme,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn text_box(
        &self,
        surface: &mut dyn Surface,
        rect: Rect,
        field: FieldId,
        fields: &FieldSet,
        focused: bool,
        texts: &TextTable,
    ) -> Result<()> {
        let fill = if focused {
            self.theme.focused_text_box
        } else {
            self.theme.text_box
        };
        surface.fill_rect(rect, fill)?;

        let value = fields.value(field).unwrap_or_default();
        let (shown, is_placeholder) = display_value(field, value);
        let (text, color) = if is_placeholder {
            (texts.get(field.placeholder_key()).to_string(), self.theme.placeholder)
        } else {
            (shown, self.theme.text)
        };
        let style = TextStyle {
            color,
            background: fill,
            bold: false,
            align: Align::Left,
        };
        let padding = rect.width * 0.04;
        surface.draw_text(rect.x + padding, rect.center().1, &text, style)
    }

    fn button(&self, surface: &mut dyn Surface, rect: Rect, fill: Color, label: &str) -> Result<()> {
        surface.fill_rect(rect, fill)?;
        let (cx, cy) = rect.center();
        let style = TextStyle::centered(self.theme.button_text, fill).bold();
        surface.draw_text(cx, cy, label, style)
    }

    fn form(
        &self,
        surface: &mut dyn Surface,
        state: &FormState,
        mode: FormMode,
        layout: &FormLayout,
        texts: &TextTable,
    ) -> Result<()> {
        let (title_key, submit_key) = match mode {
            FormMode::SignIn => ("title", "btn_sign_in"),
            FormMode::SignUp => ("create_account", "btn_sign_up"),
        };

        let (x, y) = layout.title_anchor(mode);
        let title_style = TextStyle::centered(self.theme.text, self.theme.background).bold();
        surface.draw_text(x, y, texts.get(title_key), title_style)?;

        let fields = state.fields(mode);
        for field in fields.fields() {
            let focused = state.focus() == Some((mode, *field));
            let rect = layout.field_rect(mode, *field);
            self.text_box(surface, rect, *field, fields, focused, texts)?;
        }

        if mode == FormMode::SignIn {
            let (x, y) = layout.forgot_password_rect().center();
            let style = TextStyle::centered(self.theme.link, self.theme.background);
            surface.draw_text(x, y, texts.get("forgot_password"), style)?;
        }

        self.button(
            surface,
            layout.submit_rect(mode),
            self.theme.button,
            texts.get(submit_key),
        )
    }

    /// Draw the sliding panel screen
    pub fn render_auth_form(
        &self,
        surface: &mut dyn Surface,
        state: &FormState,
        layout: &FormLayout,
        texts: &TextTable,
    ) -> Result<()> {
        let (width, height) = layout.size();
        surface.begin_frame()?;
        surface.fill_rect(Rect::new(0.0, 0.0, width, height), self.theme.background)?;

        for mode in [FormMode::SignIn, FormMode::SignUp] {
            if state.visibility().form(mode) {
                self.form(surface, state, mode, layout, texts)?;
            }
        }

        surface.fill_rect(layout.panel_rect(state), self.theme.panel)?;
        for direction in [SlideDirection::Right, SlideDirection::Left] {
            if !state.visibility().toggle(direction) {
                continue;
            }
            let label = match direction {
                SlideDirection::Right => texts.get("btn_sign_up"),
                SlideDirection::Left => texts.get("btn_sign_in"),
            };
            let rect = layout.toggle_rect(state);
            surface.fill_rect(rect, self.theme.panel)?;
            let (cx, cy) = rect.center();
            let style = TextStyle::centered(self.theme.panel_text, self.theme.panel).bold();
            surface.draw_text(cx, cy, &format!("[ {label} ]"), style)?;
        }

        if let Some(message) = state.message() {
            let (x, y) = layout.message_anchor(message.anchor_mode());
            let style = TextStyle::centered(self.theme.text, self.theme.background);
            surface.draw_text(x, y, message.text(), style)?;
        }

        surface.present()
    }

    /// Draw the standalone registration screen
    pub fn render_registration(
        &self,
        surface: &mut dyn Surface,
        state: &RegistrationState,
        layout: &RegistrationLayout,
        texts: &TextTable,
    ) -> Result<()> {
        let (width, height) = surface.logical_size();
        surface.begin_frame()?;
        surface.fill_rect(Rect::new(0.0, 0.0, width, height), self.theme.background)?;

        let plain = TextStyle::centered(self.theme.text, self.theme.background);
        let (x, y) = layout.title_anchor();
        surface.draw_text(x, y, texts.get("create_account"), plain.bold())?;

        let fields = state.fields();
        for field in fields.fields() {
            let (x, y) = layout.label_anchor(*field);
            surface.draw_text(x, y, texts.get(field.placeholder_key()), plain)?;
            let focused = state.focus() == Some(*field);
            self.text_box(surface, layout.field_rect(*field), *field, fields, focused, texts)?;
        }

        self.button(surface, layout.send_rect(), self.theme.button, texts.get("send"))?;

        if let Some(footer) = state.footer() {
            let (x, y) = layout.footer_anchor();
            surface.draw_text(x, y, footer, plain)?;
        }

        surface.present()
    }
}

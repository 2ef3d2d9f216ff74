//! State of the standalone registration screen.

use super::field_set::{FieldId, FieldSet};

/// One form, one focus, one footer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationState {
    fields: FieldSet,
    focus: Option<FieldId>,
    footer: Option<String>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationState {
    pub fn new() -> Self {
        Self {
            fields: FieldSet::sign_up(),
            focus: None,
            footer: None,
        }
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn focus(&self) -> Option<FieldId> {
        self.focus
    }

    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    pub fn focus_field(&mut self, field: FieldId) {
        self.focus = Some(field);
    }

    pub fn focus_next(&mut self) {
        let order = self.fields.fields();
        let next = match self
            .focus
            .and_then(|field| order.iter().position(|f| *f == field))
        {
            Some(index) => order[(index + 1) % order.len()],
            None => order[0],
        };
        self.focus = Some(next);
    }

    pub fn type_char(&mut self, ch: char) -> bool {
        match self.focus {
            Some(field) => self.fields.push_char(field, ch),
            None => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        match self.focus {
            Some(field) => self.fields.backspace(field),
            None => false,
        }
    }

    pub fn set_field(&mut self, field: FieldId, value: &str) -> bool {
        self.fields.set(field, value)
    }

    pub fn clear_fields(&mut self) {
        self.fields.clear();
    }

    pub fn set_footer<S: Into<String>>(&mut self, text: S) {
        self.footer = Some(text.into());
    }
}

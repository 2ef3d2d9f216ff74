//! # Field Set
//!
//! Text values owned by one form. Sign-in forms carry a username and a
//! password; sign-up and registration forms also carry a confirmation.

use unicode_segmentation::UnicodeSegmentation;

/// Identifies a text box within a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Username,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// Whether the value should be masked when drawn
    pub fn is_secret(self) -> bool {
        !matches!(self, FieldId::Username)
    }

    /// Text table key of the placeholder shown while the field is empty
    pub fn placeholder_key(self) -> &'static str {
        match self {
            FieldId::Username => "username",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm_password",
        }
    }
}

const SIGN_IN_FIELDS: [FieldId; 2] = [FieldId::Username, FieldId::Password];
const SIGN_UP_FIELDS: [FieldId; 3] = [
    FieldId::Username,
    FieldId::Password,
    FieldId::ConfirmPassword,
];

/// Values typed into one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    username: String,
    password: String,
    confirm_password: Option<String>,
}

impl FieldSet {
    /// Empty username/password pair
    pub fn sign_in() -> Self {
        Self::default()
    }

    /// Empty username/password/confirmation triple
    pub fn sign_up() -> Self {
        Self {
            confirm_password: Some(String::new()),
            ..Self::default()
        }
    }

    /// Pre-filled field set
    pub fn filled(username: &str, password: &str, confirm_password: Option<&str>) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.map(str::to_string),
        }
    }

    /// Fields in tab order
    pub fn fields(&self) -> &'static [FieldId] {
        if self.confirm_password.is_some() {
            &SIGN_UP_FIELDS
        } else {
            &SIGN_IN_FIELDS
        }
    }

    pub fn has_field(&self, id: FieldId) -> bool {
        self.fields().contains(&id)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn confirm_password(&self) -> Option<&str> {
        self.confirm_password.as_deref()
    }

    /// Current value of a field, `None` when the form has no such field
    pub fn value(&self, id: FieldId) -> Option<&str> {
        match id {
            FieldId::Username => Some(&self.username),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => self.confirm_password.as_deref(),
        }
    }

    fn value_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Username => Some(&mut self.username),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => self.confirm_password.as_mut(),
        }
    }

    /// Replace a field's value. Returns false when the form has no such field.
    pub fn set(&mut self, id: FieldId, value: &str) -> bool {
        match self.value_mut(id) {
            Some(field) => {
                field.clear();
                field.push_str(value);
                true
            }
            None => false,
        }
    }

    /// Append a typed character
    pub fn push_char(&mut self, id: FieldId, ch: char) -> bool {
        match self.value_mut(id) {
            Some(field) => {
                field.push(ch);
                true
            }
            None => false,
        }
    }

    /// Delete the last grapheme cluster of a field
    pub fn backspace(&mut self, id: FieldId) -> bool {
        let Some(field) = self.value_mut(id) else {
            return false;
        };
        match field.grapheme_indices(true).next_back() {
            Some((start, _)) => {
                field.truncate(start);
                true
            }
            None => false,
        }
    }

    /// Reset every field to the empty string
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        if let Some(confirm) = self.confirm_password.as_mut() {
            confirm.clear();
        }
    }

    /// True when every field holds the empty string
    pub fn is_empty(&self) -> bool {
        self.fields()
            .iter()
            .all(|id| self.value(*id).is_some_and(str::is_empty))
    }
}

//! Feedback line shown under a form.

use super::form_mode::FormMode;

/// Last message shown to the user and the form it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    anchor_mode: FormMode,
}

impl StatusMessage {
    pub fn new<S: Into<String>>(text: S, anchor_mode: FormMode) -> Self {
        Self {
            text: text.into(),
            anchor_mode,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn anchor_mode(&self) -> FormMode {
        self.anchor_mode
    }
}

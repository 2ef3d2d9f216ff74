//! # Models Module
//!
//! Plain data for the two screens: modes, field values, the overlay panel,
//! the feedback line, and the combined state of each screen.

pub mod field_set;
pub mod form_mode;
pub mod form_state;
pub mod panel_state;
pub mod registration_state;
pub mod status_message;

pub use field_set::{FieldId, FieldSet};
pub use form_mode::{FormMode, SlideDirection};
pub use form_state::{FormState, ToggleState, Visibility};
pub use panel_state::PanelState;
pub use registration_state::RegistrationState;
pub use status_message::StatusMessage;

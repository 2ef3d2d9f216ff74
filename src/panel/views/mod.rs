//! # Views Module
//!
//! Layout geometry and drawing. Views read state and never change it.

pub mod layout;
pub mod renderer;

pub use layout::{FormLayout, RegistrationLayout, RegistrationWidget, Widget};
pub use renderer::{Renderer, Theme};

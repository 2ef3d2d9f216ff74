//! # Auth Panel
//!
//! Two screens over one remote authentication API:
//!
//! - the sliding panel, where an overlay slides across the canvas to switch
//!   between the sign-in and sign-up forms
//! - a standalone registration form
//!
//! ```text
//! ┌──────────────┐  InputEvent  ┌──────────────┐  ScreenInput  ┌─────────────┐
//! │ InputSource  │─────────────▶│AppController │──────────────▶│ View Models │
//! └──────────────┘              │              │◀──────────────│             │
//!                               │              │ ScreenCommand │ - FormState │
//! ┌──────────────┐   replies    │              │               └──────┬──────┘
//! │ AuthService  │─────────────▶│              │                      │ render
//! │ (tokio tasks)│◀─────────────│              │               ┌──────▼──────┐
//! └──────────────┘   dispatch   └──────────────┘               │   Surface   │
//!                                                              └─────────────┘
//! ```

pub mod controllers;
pub mod interpreter;
pub mod io;
pub mod models;
pub mod services;
pub mod text_table;
pub mod validation;
pub mod view_models;
pub mod views;

pub use controllers::AppController;
pub use io::{
    InputEvent, InputSource, MockSurface, Surface, TerminalInputSource, TerminalSurface,
    TestInputSource,
};
pub use models::{FieldId, FormMode, FormState, ToggleState};
pub use text_table::TextTable;
pub use view_models::{ActiveScreen, Screen};

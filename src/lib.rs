//! # authpanel - Terminal Sign-In / Sign-Up Client
//!
//! A client for a remote authentication API drawn on a fixed logical canvas
//! scaled onto the terminal. The main screen holds a sign-in form and a
//! sign-up form side by side with an overlay panel that slides over one of
//! them; a standalone registration screen is also available.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    Input     ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│ Models  │
//! │             │              │              │              │         │
//! │ - Layout    │              │ - Validation │              │ - Panel │
//! │ - Renderer  │              │ - Replies    │              │ - Forms │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Frame loop │
//!                               │ - Requests   │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod panel;

// Re-export main types for easy access
pub use panel::*;

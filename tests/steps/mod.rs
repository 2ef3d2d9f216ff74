//! Step definitions for Cucumber tests
//!
//! - `server` - mock authentication API setup and request checks
//! - `forms` - typing, submitting, toggling and what the screen shows

pub mod forms;
pub mod server;

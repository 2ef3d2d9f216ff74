//! # Controllers Module
//!
//! The frame loop that ties input, screens, the auth service and the
//! surface together.

pub mod app_controller;

pub use app_controller::AppController;

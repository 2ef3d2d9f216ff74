//! Common test utilities and infrastructure
//!
//! - Cucumber world driving the real controller with test I/O
//! - Mock authentication API helpers

pub mod world;

pub use world::AuthPanelWorld;

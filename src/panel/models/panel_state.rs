//! # Panel State
//!
//! Position and velocity of the overlay panel that covers one half of the
//! screen. The panel is half the viewport wide; `position` is its left edge.
//! Both edges always stay inside `[0, viewport_width]`.

use super::form_mode::{FormMode, SlideDirection};

/// Overlay panel position and motion
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    position: f32,
    velocity: f32,
    viewport_width: f32,
}

impl PanelState {
    /// Panel at rest on the left edge (sign-in active)
    pub fn new(viewport_width: f32) -> Self {
        Self::with_motion(0.0, 0.0, viewport_width)
    }

    /// Panel at an arbitrary position and velocity
    pub fn with_motion(position: f32, velocity: f32, viewport_width: f32) -> Self {
        Self {
            position,
            velocity,
            viewport_width,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn panel_width(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// Largest left-edge position, where the right edge meets the viewport edge
    pub fn max_position(&self) -> f32 {
        self.viewport_width - self.panel_width()
    }

    pub fn is_sliding(&self) -> bool {
        self.velocity != 0.0
    }

    /// Set the panel moving at `speed` px/s in `direction`
    pub fn start(&mut self, direction: SlideDirection, speed: f32) {
        self.velocity = direction.sign() * speed.abs();
    }

    /// Halt the panel where it is
    pub fn stop(&mut self) {
        self.velocity = 0.0;
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns the mode whose edge the panel reached on this update. A panel
    /// at rest never reports an arrival, so arrival fires once per slide.
    pub fn update(&mut self, dt: f32) -> Option<FormMode> {
        if !self.is_sliding() {
            return None;
        }

        self.position += self.velocity * dt;

        if self.velocity < 0.0 && self.position <= 0.0 {
            self.position = 0.0;
            self.stop();
            return Some(FormMode::SignIn);
        }

        if self.velocity > 0.0 && self.position + self.panel_width() >= self.viewport_width {
            self.position = self.max_position();
            self.stop();
            return Some(FormMode::SignUp);
        }

        None
    }
}

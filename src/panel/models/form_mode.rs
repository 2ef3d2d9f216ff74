//! # Form Mode
//!
//! Which of the two forms is interactive, and which way the panel slides to
//! reach each of them.

/// The two forms hosted by the sliding panel screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormMode {
    SignIn,
    SignUp,
}

impl FormMode {
    /// The other form
    pub fn opposite(self) -> Self {
        match self {
            FormMode::SignIn => FormMode::SignUp,
            FormMode::SignUp => FormMode::SignIn,
        }
    }
}

/// Direction of travel for the overlay panel
///
/// The panel rests on the left edge while sign-in is active and on the right
/// edge while sign-up is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    /// Direction that brings the given mode into view
    pub fn towards(mode: FormMode) -> Self {
        match mode {
            FormMode::SignIn => SlideDirection::Left,
            FormMode::SignUp => SlideDirection::Right,
        }
    }

    /// Mode that becomes active once a slide in this direction arrives
    pub fn target(self) -> FormMode {
        match self {
            SlideDirection::Left => FormMode::SignIn,
            SlideDirection::Right => FormMode::SignUp,
        }
    }

    /// Velocity sign for this direction
    pub fn sign(self) -> f32 {
        match self {
            SlideDirection::Left => -1.0,
            SlideDirection::Right => 1.0,
        }
    }
}

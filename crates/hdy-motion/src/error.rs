#![forbid(unsafe_code)]

//! Construction-time validation errors.
//!
//! Runtime misuse of the animation and swipe state machines is never an
//! error: illegal transitions are silent no-ops. Only inputs that would make
//! the physics degenerate, or names that do not parse, are rejected.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MotionError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    #[error("spring mass must be finite and positive, got {0}")]
    InvalidMass(f64),

    #[error("spring stiffness must be finite and positive, got {0}")]
    InvalidStiffness(f64),

    #[error("spring damping must be finite and non-negative, got {0}")]
    InvalidDamping(f64),

    #[error("spring damping ratio must be finite and non-negative, got {0}")]
    InvalidDampingRatio(f64),

    #[error("settling epsilon must be finite and positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("unknown easing: {name}")]
    UnknownEasing { name: String },
}

impl MotionError {
    #[must_use]
    pub fn unknown_easing(name: impl Into<String>) -> Self {
        Self::UnknownEasing { name: name.into() }
    }
}

// Forbid unsafe in production; deny in tests.
#![cfg_attr(not(test), forbid(unsafe_code))]
#![cfg_attr(test, deny(unsafe_code))]

//! Motion core: easing, spring physics, animations, and swipe tracking.
//!
//! # Role in hdy
//! `hdy-motion` is the animation layer shared by the adaptive widgets (flap,
//! album, carousel). Widgets own [`Animation`]s and an optional
//! [`SwipeTracker`]; the host toolkit owns the frame clock and input delivery
//! and calls into this crate with explicit timestamps.
//!
//! # Primary responsibilities
//! - **Easing**: pure progress curves ([`Easing`], [`ease`]).
//! - **Spring**: analytic damped harmonic oscillator ([`Spring`], [`SpringParams`]).
//! - **Animation**: idle/playing/paused/finished state machine driven by
//!   `tick(now)`, with timed and spring motions.
//! - **Targets**: where each tick's value goes ([`AnimationTarget`]).
//! - **Swipe tracking**: drag and touchpad input to progress, snap points, and
//!   release velocity ([`SwipeTracker`], [`Swipeable`]).
//!
//! # How it fits in the system
//! Nothing here spawns threads or reads a clock. Every entry point takes the
//! current [`Instant`](web_time::Instant), so tests replay synthetic timestamps
//! and get deterministic results.

pub mod animation;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod spring;
pub mod swipe_tracker;
pub mod swipeable;
pub mod target;

pub use animation::{
    Animation, AnimationState, Motion, Sample, SpringAnimation, SpringMotion, Step,
    TimedAnimation, TimedMotion,
};
pub use easing::{Easing, ease, lerp};
pub use error::{MotionError, Result};
pub use geometry::{NavigationDirection, Orientation, Rect};
pub use spring::{Spring, SpringParams};
pub use swipe_tracker::{
    InputSource, SwipeConfig, SwipeEnd, SwipeEvent, SwipeInput, SwipeTracker, TrackerState,
};
pub use swipeable::Swipeable;
pub use target::{AnimationTarget, CallbackTarget, PropertyTarget};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, error, info, trace, warn};

#![forbid(unsafe_code)]

//! Spring-driven motion.
//!
//! A [`SpringMotion`] finishes once the spring has settled within `epsilon`
//! of its target for good, or, when clamped, the first time it reaches the
//! target. Either way the final value is exactly `value_to`.
//!
//! Both times are searched for once, on first use, and cached; builder calls
//! only invalidate the cache. A motion always finishes exactly at its
//! [`estimated_duration`](Motion::estimated_duration), so a spring that only
//! passes through the settling band on its way to a further overshoot keeps
//! running.

use std::cell::OnceCell;
use std::time::Duration;

use super::{Animation, AnimationState, Motion, Sample};
use crate::error::{MotionError, Result};
use crate::spring::{Spring, SpringParams};

/// Settling tolerance used unless overridden.
pub const DEFAULT_EPSILON: f64 = 0.001;

/// Spring motion from `value_from` to `value_to`.
#[derive(Debug, Clone)]
pub struct SpringMotion {
    spring: Spring,
    epsilon: f64,
    clamp: bool,
    /// From here on the spring stays settled.
    settle_at: OnceCell<Option<Duration>>,
    /// First arrival on the target, when clamped.
    arrival: OnceCell<Option<Duration>>,
}

impl SpringMotion {
    /// Spring at rest on `value_from`, heading to `value_to`.
    #[must_use]
    pub fn new(value_from: f64, value_to: f64, params: SpringParams) -> Self {
        Self::from_spring(Spring::new(params, value_from, value_to, 0.0))
    }

    #[must_use]
    pub fn from_spring(spring: Spring) -> Self {
        Self {
            spring,
            epsilon: DEFAULT_EPSILON,
            clamp: false,
            settle_at: OnceCell::new(),
            arrival: OnceCell::new(),
        }
    }

    /// Launch with `velocity` in value units per second.
    #[must_use]
    pub fn initial_velocity(mut self, velocity: f64) -> Self {
        self.spring = Spring::new(
            self.spring.params(),
            self.spring.from(),
            self.spring.to(),
            velocity,
        );
        self.invalidate();
        self
    }

    /// Settling tolerance. Must be finite and positive.
    pub fn epsilon(mut self, epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(MotionError::InvalidEpsilon(epsilon));
        }
        self.epsilon = epsilon;
        self.invalidate();
        Ok(self)
    }

    /// Stop the first time the target is reached instead of overshooting.
    #[must_use]
    pub fn clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self.invalidate();
        self
    }

    #[inline]
    #[must_use]
    pub fn spring(&self) -> &Spring {
        &self.spring
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.spring.params()
    }

    #[inline]
    #[must_use]
    pub fn value_from(&self) -> f64 {
        self.spring.from()
    }

    #[inline]
    #[must_use]
    pub fn value_to(&self) -> f64 {
        self.spring.to()
    }

    #[inline]
    #[must_use]
    pub fn epsilon_value(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.clamp
    }

    /// Velocity after `elapsed`, in value units per second.
    #[must_use]
    pub fn velocity_at(&self, elapsed: Duration) -> f64 {
        self.spring.velocity(elapsed)
    }

    fn invalidate(&mut self) {
        self.settle_at = OnceCell::new();
        self.arrival = OnceCell::new();
    }

    fn settle_at(&self) -> Option<Duration> {
        *self
            .settle_at
            .get_or_init(|| self.spring.estimated_duration(self.epsilon))
    }

    fn arrival(&self) -> Option<Duration> {
        if !self.clamp {
            return None;
        }
        *self
            .arrival
            .get_or_init(|| self.spring.first_arrival(self.epsilon))
    }
}

impl Motion for SpringMotion {
    fn initial_value(&self) -> f64 {
        self.spring.from()
    }

    fn final_value(&self) -> f64 {
        self.spring.to()
    }

    fn sample(&self, elapsed: Duration) -> Sample {
        let arrived = self.arrival().is_some_and(|at| elapsed >= at);
        let settled = || match self.settle_at() {
            Some(at) => elapsed >= at,
            // Unbounded: no damping, or slower than the search cap.
            None => self.spring.is_settled(elapsed, self.epsilon),
        };
        if arrived || settled() {
            Sample::Finished(self.spring.to())
        } else {
            Sample::Running(self.spring.value(elapsed))
        }
    }

    fn estimated_duration(&self) -> Option<Duration> {
        self.arrival().or_else(|| self.settle_at())
    }
}

impl Animation<SpringMotion> {
    /// Current velocity in value units per second.
    ///
    /// The launch velocity while idle, zero once finished.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        match self.state() {
            AnimationState::Idle => self.motion().spring().initial_velocity(),
            AnimationState::Playing | AnimationState::Paused => {
                self.motion().velocity_at(self.elapsed())
            }
            AnimationState::Finished => 0.0,
        }
    }
}

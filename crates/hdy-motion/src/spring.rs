#![forbid(unsafe_code)]

//! Damped harmonic oscillator (spring), solved analytically.
//!
//! Models a mass on a spring with linear damping:
//!
//!   m·x″ + c·x′ + k·(x − to) = 0
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force strength. Higher = faster response.
//! - **damping** (c): velocity drag. Expressed either directly or through the
//!   damping ratio ζ = c / (2·√(m·k)).
//!   - Underdamped (ζ < 1): oscillates past the target before settling
//!   - Critically damped (ζ = 1): fastest convergence without overshoot
//!   - Overdamped (ζ > 1): slow convergence, no overshoot
//! - **mass** (m): inertia. Usually 1.
//!
//! # Solution
//!
//! Unlike a stepped integrator, the closed-form solution makes `value(t)` a
//! pure function of elapsed time: sampling at any frame rate, or skipping
//! frames, yields the same curve. With β = c/(2m) and ω₀ = √(k/m):
//!
//! - underdamped: `to + e^(−βt)·(A·cos ω₁t + B·sin ω₁t)`, ω₁ = √(ω₀² − β²)
//! - critical: `to + (A + B·t)·e^(−βt)`
//! - overdamped: `to + A·e^(r₁t) + B·e^(r₂t)`, r₁,₂ = −β ± √(β² − ω₀²)
//!
//! A and B follow from `value(0) = from` and `velocity(0) = initial_velocity`.
//!
//! # Invariants
//!
//! 1. `SpringParams` always has mass > 0, stiffness > 0, damping ≥ 0.
//! 2. `value(0) == from` and `velocity(0) == initial_velocity`.
//! 3. `is_settled(t, ε)` requires both `|value − to| < ε` and `|velocity| < ε`.
//! 4. `estimated_duration(ε)` is on a 1 ms grid: the spring is unsettled on
//!    the grid step just before it and settled on every step from it on.
//!
//! # Failure Modes
//!
//! - Zero damping: oscillates forever; `estimated_duration` returns `None`.
//!   This is a valid configuration, not an error.
//! - Settling slower than [`MAX_ESTIMATED_DURATION`]: also `None`.

use std::time::Duration;

use crate::error::{MotionError, Result};

/// Longest settling time [`Spring::estimated_duration`] will search for.
pub const MAX_ESTIMATED_DURATION: Duration = Duration::from_secs(20);

/// Longest time [`Spring::first_arrival`] will search for.
pub const MAX_ARRIVAL_DURATION: Duration = Duration::from_secs(3);

/// Grid step for duration searches, in seconds.
const STEP_SECS: f64 = 0.001;

/// Physical parameters of a spring.
///
/// Immutable once constructed; cheap to copy and share between animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    damping: f64,
    mass: f64,
    stiffness: f64,
}

impl SpringParams {
    /// Create spring parameters from a damping ratio.
    ///
    /// The raw damping is `damping_ratio · 2 · √(mass · stiffness)`.
    pub fn new(damping_ratio: f64, mass: f64, stiffness: f64) -> Result<Self> {
        if !damping_ratio.is_finite() || damping_ratio < 0.0 {
            return Err(MotionError::InvalidDampingRatio(damping_ratio));
        }
        validate_mass_stiffness(mass, stiffness)?;

        let critical_damping = 2.0 * (mass * stiffness).sqrt();
        Ok(Self {
            damping: damping_ratio * critical_damping,
            mass,
            stiffness,
        })
    }

    /// Create spring parameters from a raw damping coefficient.
    pub fn new_full(damping: f64, mass: f64, stiffness: f64) -> Result<Self> {
        if !damping.is_finite() || damping < 0.0 {
            return Err(MotionError::InvalidDamping(damping));
        }
        validate_mass_stiffness(mass, stiffness)?;

        Ok(Self {
            damping,
            mass,
            stiffness,
        })
    }

    /// Raw damping coefficient.
    #[inline]
    #[must_use]
    pub fn damping(&self) -> f64 {
        self.damping
    }

    /// Damping ratio: 1.0 is critical damping.
    #[inline]
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping / self.critical_damping()
    }

    /// Mass.
    #[inline]
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Stiffness.
    #[inline]
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Damping coefficient at which this spring is critically damped.
    #[inline]
    #[must_use]
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.mass * self.stiffness).sqrt()
    }
}

fn validate_mass_stiffness(mass: f64, stiffness: f64) -> Result<()> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(MotionError::InvalidMass(mass));
    }
    if !stiffness.is_finite() || stiffness <= 0.0 {
        return Err(MotionError::InvalidStiffness(stiffness));
    }
    Ok(())
}

/// Damping regime with the precomputed constants of its solution.
#[derive(Debug, Clone, Copy)]
enum Regime {
    /// `x = e^(−βt)·(a·cos ωt + b·sin ωt)`
    Under { beta: f64, omega: f64, a: f64, b: f64 },
    /// `x = e^(−βt)·(a + b·t)`
    Critical { beta: f64, a: f64, b: f64 },
    /// `x = a·e^(r1·t) + b·e^(r2·t)`, with r2 < r1 < 0
    Over { r1: f64, r2: f64, a: f64, b: f64 },
}

/// A spring travelling from `from` to `to`.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    params: SpringParams,
    from: f64,
    to: f64,
    initial_velocity: f64,
    regime: Regime,
}

impl Spring {
    /// Create a spring starting at `from` with `initial_velocity` (units per
    /// second) and resting at `to`.
    #[must_use]
    pub fn new(params: SpringParams, from: f64, to: f64, initial_velocity: f64) -> Self {
        let regime = Regime::solve(&params, from - to, initial_velocity);
        Self {
            params,
            from,
            to,
            initial_velocity,
            regime,
        }
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    #[inline]
    #[must_use]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[inline]
    #[must_use]
    pub fn to(&self) -> f64 {
        self.to
    }

    #[inline]
    #[must_use]
    pub fn initial_velocity(&self) -> f64 {
        self.initial_velocity
    }

    /// Position after `t` has elapsed.
    #[must_use]
    pub fn value(&self, t: Duration) -> f64 {
        self.to + self.regime.displacement(t.as_secs_f64())
    }

    /// Velocity (units per second) after `t` has elapsed.
    #[must_use]
    pub fn velocity(&self, t: Duration) -> f64 {
        self.regime.velocity(t.as_secs_f64())
    }

    /// Whether both displacement and velocity are within `epsilon` at `t`.
    ///
    /// This is a pointwise test. A lightly damped spring can pass it at a
    /// turning point and fail it again on the next swing, so it may hold at
    /// times before [`estimated_duration`](Self::estimated_duration), which
    /// marks where it holds for good.
    #[must_use]
    pub fn is_settled(&self, t: Duration, epsilon: f64) -> bool {
        self.settled_at(t.as_secs_f64(), epsilon)
    }

    /// Earliest 1 ms grid time from which the spring stays settled.
    ///
    /// Returns `Duration::ZERO` for a spring that starts at rest on its
    /// target, and `None` when the spring never settles (zero damping) or
    /// would take longer than [`MAX_ESTIMATED_DURATION`].
    #[must_use]
    pub fn estimated_duration(&self, epsilon: f64) -> Option<Duration> {
        if self.params.damping <= 0.0 {
            return if self.settled_at(0.0, epsilon) && self.is_at_rest() {
                Some(Duration::ZERO)
            } else {
                None
            };
        }

        let max_steps = MAX_ESTIMATED_DURATION.as_millis() as u64;
        let mut first_settled: Option<u64> = None;
        for step in 0..=max_steps {
            let t = step as f64 * STEP_SECS;
            if self.settled_at(t, epsilon) {
                first_settled.get_or_insert(step);
                if self.regime.settled_from(t, epsilon) {
                    return first_settled.map(Duration::from_millis);
                }
            } else {
                first_settled = None;
            }
        }
        None
    }

    /// First 1 ms grid time at which the value reaches `to` within `epsilon`.
    ///
    /// Used by clamped spring animations, which stop on arrival rather than
    /// letting the spring overshoot. Returns `None` if the target is not
    /// reached within [`MAX_ARRIVAL_DURATION`].
    #[must_use]
    pub fn first_arrival(&self, epsilon: f64) -> Option<Duration> {
        if (self.to - self.from).abs() < epsilon {
            return Some(Duration::ZERO);
        }

        let ascending = self.to > self.from;
        let max_steps = MAX_ARRIVAL_DURATION.as_millis() as u64;
        (1..=max_steps).map(Duration::from_millis).find(|&t| {
            let y = self.value(t);
            if ascending {
                y >= self.to - epsilon
            } else {
                y <= self.to + epsilon
            }
        })
    }

    fn settled_at(&self, t: f64, epsilon: f64) -> bool {
        self.regime.displacement(t).abs() < epsilon && self.regime.velocity(t).abs() < epsilon
    }

    fn is_at_rest(&self) -> bool {
        self.from == self.to && self.initial_velocity == 0.0
    }
}

impl Regime {
    /// Solve for the regime constants given initial displacement `x0` from
    /// the target and initial velocity `v0`.
    fn solve(params: &SpringParams, x0: f64, v0: f64) -> Self {
        let beta = params.damping / (2.0 * params.mass);
        let omega0 = (params.stiffness / params.mass).sqrt();

        // Relative tolerance so the critical case survives rounding in
        // damping_ratio · 2√(mk).
        if (beta - omega0).abs() <= f64::from(f32::EPSILON) * omega0 {
            return Self::Critical {
                beta,
                a: x0,
                b: v0 + beta * x0,
            };
        }

        if beta < omega0 {
            let omega = (omega0 * omega0 - beta * beta).sqrt();
            return Self::Under {
                beta,
                omega,
                a: x0,
                b: (v0 + beta * x0) / omega,
            };
        }

        let root = (beta * beta - omega0 * omega0).sqrt();
        let r1 = -beta + root;
        let r2 = -beta - root;
        let a = (v0 - r2 * x0) / (r1 - r2);
        Self::Over {
            r1,
            r2,
            a,
            b: x0 - a,
        }
    }

    fn displacement(&self, t: f64) -> f64 {
        match *self {
            Self::Under { beta, omega, a, b } => {
                (-beta * t).exp() * (a * (omega * t).cos() + b * (omega * t).sin())
            }
            Self::Critical { beta, a, b } => (a + b * t) * (-beta * t).exp(),
            Self::Over { r1, r2, a, b } => a * (r1 * t).exp() + b * (r2 * t).exp(),
        }
    }

    fn velocity(&self, t: f64) -> f64 {
        match *self {
            Self::Under { beta, omega, a, b } => {
                let (sin, cos) = (omega * t).sin_cos();
                (-beta * t).exp() * ((b * omega - beta * a) * cos - (a * omega + beta * b) * sin)
            }
            Self::Critical { beta, a, b } => (b - beta * (a + b * t)) * (-beta * t).exp(),
            Self::Over { r1, r2, a, b } => a * r1 * (r1 * t).exp() + b * r2 * (r2 * t).exp(),
        }
    }

    /// Whether non-increasing bounds on |displacement| and |velocity| are
    /// already below `epsilon` at `t`, i.e. the spring can never leave the
    /// settled band again.
    fn settled_from(&self, t: f64, epsilon: f64) -> bool {
        let (x_bound, v_bound) = match *self {
            Self::Under { beta, omega, a, b } => {
                let envelope = (-beta * t).exp();
                let amplitude = a.hypot(b);
                (
                    envelope * amplitude,
                    envelope * (b * omega - beta * a).hypot(a * omega + beta * b),
                )
            }
            Self::Critical { beta, a, b } => {
                // e^(−βt)·(p + q·t) only decreases once t ≥ 1/β.
                if t < 1.0 / beta {
                    return false;
                }
                let envelope = (-beta * t).exp();
                (
                    envelope * (a.abs() + b.abs() * t),
                    envelope * ((b - beta * a).abs() + (beta * b).abs() * t),
                )
            }
            Self::Over { r1, r2, a, b } => {
                let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
                (
                    a.abs() * e1 + b.abs() * e2,
                    (a * r1).abs() * e1 + (b * r2).abs() * e2,
                )
            }
        };
        x_bound < epsilon && v_bound < epsilon
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Common spring configurations for UI motion.
pub mod presets {
    use super::SpringParams;

    // Unit mass.
    fn params(damping_ratio: f64, stiffness: f64) -> SpringParams {
        SpringParams {
            damping: damping_ratio * 2.0 * stiffness.sqrt(),
            mass: 1.0,
            stiffness,
        }
    }

    /// Critically damped and fairly stiff: page transitions after a swipe.
    #[must_use]
    pub fn snappy() -> SpringParams {
        params(1.0, 500.0)
    }

    /// Slightly underdamped: a subtle bounce for folding panels.
    #[must_use]
    pub fn gentle() -> SpringParams {
        params(0.8, 300.0)
    }

    /// Visibly bouncy.
    #[must_use]
    pub fn bouncy() -> SpringParams {
        params(0.4, 400.0)
    }

    /// Overdamped and soft: background transitions.
    #[must_use]
    pub fn slow() -> SpringParams {
        params(1.5, 100.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#![forbid(unsafe_code)]

//! Animation state machine.
//!
//! An [`Animation`] drives a scalar from a [`Motion`] (what the value is at a
//! given elapsed time) into an [`AnimationTarget`] (where the value goes). The
//! host's frame clock calls [`Animation::tick`] once per frame while the
//! animation is playing.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──play──▶ Playing ──pause──▶ Paused
//!    ▲               │  ▲               │
//!    │               │  └────resume─────┘
//!    │             done / skip
//!    │               ▼
//!    └───reset─── Finished ──play──▶ Playing
//! ```
//!
//! `reset` returns to `Idle` from any state; `skip` jumps to `Finished` from
//! any state but `Finished`.
//!
//! # Invariants
//!
//! 1. Every state-changing call is synchronous. Calls that are invalid in the
//!    current state are no-ops.
//! 2. The target receives exactly one value per tick (and one on skip); reset
//!    never touches the target.
//! 3. [`Step::Done`] is returned exactly once per play cycle: by the call that
//!    moved the animation to `Finished`. The state is already `Finished` when
//!    it is returned, so the caller may immediately `play` again.
//! 4. A motion that is complete at elapsed zero (zero duration, spring at
//!    rest) finishes inside `play`.
//!
//! # Failure Modes
//!
//! - A tick with a timestamp earlier than the play start counts as zero
//!   elapsed time.
//! - A spring with zero damping never finishes on its own; use `skip`.

mod spring;
mod timed;

pub use spring::SpringMotion;
pub use timed::TimedMotion;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use web_time::Instant;

#[cfg(feature = "tracing")]
use crate::logging::{debug, trace};
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace};
use crate::target::AnimationTarget;

/// An animation over a fixed duration with easing and repeats.
pub type TimedAnimation = Animation<TimedMotion>;

/// An animation following spring physics.
pub type SpringAnimation = Animation<SpringMotion>;

/// Playback state of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Not started, or reset.
    #[default]
    Idle,
    /// Started and then paused; can be resumed.
    Paused,
    /// Actively playing; expects ticks.
    Playing,
    /// Reached its end value.
    Finished,
}

/// Outcome of a call that may finish an animation.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The animation did not finish during this call.
    Pending,
    /// The animation finished during this call. This is the "done"
    /// notification; it is never repeated for the same play cycle.
    Done,
}

impl Step {
    #[inline]
    #[must_use]
    pub fn is_done(self) -> bool {
        self == Self::Done
    }
}

/// A motion sampled at some elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Still moving; the value at this time.
    Running(f64),
    /// Complete; the terminal value.
    Finished(f64),
}

/// Value as a function of elapsed time.
///
/// Implementations are pure: sampling never mutates the motion, so the same
/// elapsed time always yields the same value.
pub trait Motion {
    /// Value while idle, before any tick.
    fn initial_value(&self) -> f64;

    /// Value after the motion completes or is skipped.
    fn final_value(&self) -> f64;

    /// Sample at `elapsed` since playback started.
    fn sample(&self, elapsed: Duration) -> Sample;

    /// How long the motion runs; `None` if it never completes on its own.
    fn estimated_duration(&self) -> Option<Duration>;
}

/// A [`Motion`] bound to an [`AnimationTarget`], with playback state.
pub struct Animation<M> {
    motion: M,
    target: Rc<dyn AnimationTarget>,
    state: AnimationState,
    value: f64,
    /// Elapsed time accumulated before `resumed_at`.
    base_elapsed: Duration,
    /// When the current playing stretch began.
    resumed_at: Option<Instant>,
    /// Elapsed time as of the last tick.
    elapsed: Duration,
    animations_enabled: bool,
}

impl<M: fmt::Debug> fmt::Debug for Animation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("motion", &self.motion)
            .field("state", &self.state)
            .field("value", &self.value)
            .field("elapsed", &self.elapsed)
            .field("animations_enabled", &self.animations_enabled)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<M: Motion> Animation<M> {
    /// Create an idle animation delivering values to `target`.
    #[must_use]
    pub fn new(target: impl AnimationTarget + 'static, motion: M) -> Self {
        Self::with_shared_target(Rc::new(target), motion)
    }

    /// Create an idle animation sharing an existing target.
    #[must_use]
    pub fn with_shared_target(target: Rc<dyn AnimationTarget>, motion: M) -> Self {
        let value = motion.initial_value();
        Self {
            motion,
            target,
            state: AnimationState::Idle,
            value,
            base_elapsed: Duration::ZERO,
            resumed_at: None,
            elapsed: Duration::ZERO,
            animations_enabled: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl<M: Motion> Animation<M> {
    /// Current playback state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Current value, as last delivered to the target.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Elapsed play time as of the last tick.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// The motion parameters.
    #[inline]
    #[must_use]
    pub fn motion(&self) -> &M {
        &self.motion
    }

    /// Mutable motion parameters. Changes apply from the next tick.
    #[inline]
    pub fn motion_mut(&mut self) -> &mut M {
        &mut self.motion
    }

    /// The target receiving values.
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Rc<dyn AnimationTarget> {
        &self.target
    }

    /// Total run time of the motion; `None` if unbounded.
    #[must_use]
    pub fn estimated_duration(&self) -> Option<Duration> {
        self.motion.estimated_duration()
    }

    #[inline]
    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    /// Follow a global "enable animations" setting. When disabled, `play`
    /// jumps straight to the final value.
    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations_enabled = enabled;
    }
}

// ---------------------------------------------------------------------------
// Playback control
// ---------------------------------------------------------------------------

impl<M: Motion> Animation<M> {
    /// Start playback at `now`.
    ///
    /// From `Idle` or `Finished`, starts from elapsed zero and delivers the
    /// first value immediately. From `Paused`, behaves like
    /// [`resume`](Self::resume). No-op while playing.
    pub fn play(&mut self, now: Instant) -> Step {
        match self.state {
            AnimationState::Playing => Step::Pending,
            AnimationState::Paused => {
                self.resume(now);
                Step::Pending
            }
            AnimationState::Idle | AnimationState::Finished => {
                if !self.animations_enabled {
                    debug!("animations disabled, skipping");
                    return self.finish(self.motion.final_value());
                }
                debug!(from = ?self.state, "animation play");
                self.state = AnimationState::Playing;
                self.base_elapsed = Duration::ZERO;
                self.elapsed = Duration::ZERO;
                self.resumed_at = Some(now);
                self.advance()
            }
        }
    }

    /// Freeze playback at the last ticked time. No-op unless playing.
    ///
    /// Time between the last tick and the pause is not counted; the value on
    /// screen is the one that stays frozen.
    pub fn pause(&mut self) {
        if self.state == AnimationState::Playing {
            debug!(elapsed = ?self.elapsed, "animation pause");
            self.base_elapsed = self.elapsed;
            self.resumed_at = None;
            self.state = AnimationState::Paused;
        }
    }

    /// Continue from the frozen elapsed time, counting from `now`. No-op
    /// unless paused.
    ///
    /// The frozen time is that of the last tick before [`pause`](Self::pause),
    /// not the moment `pause` was called.
    pub fn resume(&mut self, now: Instant) {
        if self.state == AnimationState::Paused {
            debug!(elapsed = ?self.elapsed, "animation resume");
            self.resumed_at = Some(now);
            self.state = AnimationState::Playing;
        }
    }

    /// Return to `Idle` with the initial value. Does not notify the target.
    pub fn reset(&mut self) {
        debug!(from = ?self.state, "animation reset");
        self.state = AnimationState::Idle;
        self.base_elapsed = Duration::ZERO;
        self.elapsed = Duration::ZERO;
        self.resumed_at = None;
        self.value = self.motion.initial_value();
    }

    /// Jump to the final value, deliver it, and finish. No-op when already
    /// finished.
    pub fn skip(&mut self) -> Step {
        if self.state == AnimationState::Finished {
            return Step::Pending;
        }
        debug!(from = ?self.state, "animation skip");
        self.finish(self.motion.final_value())
    }

    /// Advance to `now`. Call once per frame while playing; other states
    /// ignore ticks.
    pub fn tick(&mut self, now: Instant) -> Step {
        if self.state != AnimationState::Playing {
            return Step::Pending;
        }
        let since = self
            .resumed_at
            .map_or(Duration::ZERO, |at| now.saturating_duration_since(at));
        self.elapsed = self.base_elapsed.saturating_add(since);
        self.advance()
    }

    fn advance(&mut self) -> Step {
        match self.motion.sample(self.elapsed) {
            Sample::Running(value) => {
                trace!(elapsed = ?self.elapsed, value, "animation tick");
                self.value = value;
                self.target.set_value(value);
                Step::Pending
            }
            Sample::Finished(value) => self.finish(value),
        }
    }

    fn finish(&mut self, value: f64) -> Step {
        self.state = AnimationState::Finished;
        self.resumed_at = None;
        self.value = value;
        self.target.set_value(value);
        debug!(value, "animation done");
        Step::Done
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::cell::RefCell;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_250: Duration = Duration::from_millis(250);
    const MS_500: Duration = Duration::from_millis(500);
    const SEC_1: Duration = Duration::from_secs(1);

    fn recorder() -> (Rc<RefCell<Vec<f64>>>, impl Fn(f64) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v: f64| sink.borrow_mut().push(v))
    }

    fn linear(from: f64, to: f64, duration: Duration) -> TimedMotion {
        TimedMotion::new(from, to, duration).easing(Easing::Linear)
    }

    #[test]
    fn new_animation_is_idle_at_initial_value() {
        let (seen, target) = recorder();
        let anim = Animation::new(target, linear(10.0, 20.0, SEC_1));
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(anim.value(), 10.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn play_delivers_first_value_immediately() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        assert_eq!(anim.play(t0), Step::Pending);
        assert_eq!(anim.state(), AnimationState::Playing);
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn ticks_follow_elapsed_time() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 100.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        assert_eq!(anim.tick(t0 + MS_250), Step::Pending);
        assert!((anim.value() - 25.0).abs() < 1e-9);
        assert_eq!(anim.tick(t0 + SEC_1), Step::Done);
        assert_eq!(anim.state(), AnimationState::Finished);
        assert_eq!(anim.value(), 100.0);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn tick_before_start_counts_as_zero() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now() + SEC_1;
        let _ = anim.play(t0);
        let _ = anim.tick(t0 - MS_100);
        assert_eq!(anim.elapsed(), Duration::ZERO);
        assert_eq!(anim.value(), 0.0);
    }

    #[test]
    fn pause_freezes_and_resume_continues() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        let _ = anim.tick(t0 + MS_250);
        anim.pause();
        assert_eq!(anim.state(), AnimationState::Paused);

        // Ticks while paused are ignored.
        assert_eq!(anim.tick(t0 + SEC_1), Step::Pending);
        assert!((anim.value() - 0.25).abs() < 1e-9);

        // Resume two seconds later; elapsed continues from 250ms.
        let t1 = t0 + Duration::from_secs(2);
        anim.resume(t1);
        let _ = anim.tick(t1 + MS_250);
        assert!((anim.value() - 0.5).abs() < 1e-9);
        assert_eq!(anim.elapsed(), MS_500);
    }

    #[test]
    fn pause_keeps_elapsed_of_last_tick() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        let _ = anim.tick(t0 + MS_100);
        // Paused 150ms after the last frame; that gap is dropped.
        anim.pause();
        assert_eq!(anim.elapsed(), MS_100);
        let resumed = t0 + MS_250;
        anim.resume(resumed);
        let _ = anim.tick(resumed + MS_100);
        assert_eq!(anim.elapsed(), MS_100 * 2);
        assert!((anim.value() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn play_while_paused_resumes() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        let _ = anim.tick(t0 + MS_500);
        anim.pause();
        let t1 = t0 + Duration::from_secs(5);
        assert_eq!(anim.play(t1), Step::Pending);
        assert_eq!(anim.state(), AnimationState::Playing);
        let _ = anim.tick(t1 + MS_250);
        assert!((anim.value() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn play_while_playing_is_noop() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        let _ = anim.tick(t0 + MS_500);
        assert_eq!(anim.play(t0 + SEC_1), Step::Pending);
        assert_eq!(anim.elapsed(), MS_500);
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn invalid_transitions_are_noops() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        anim.pause();
        assert_eq!(anim.state(), AnimationState::Idle);
        anim.resume(Instant::now());
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(anim.tick(Instant::now()), Step::Pending);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn skip_finishes_once() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 5.0, SEC_1));
        let _ = anim.play(Instant::now());
        assert_eq!(anim.skip(), Step::Done);
        assert_eq!(anim.state(), AnimationState::Finished);
        assert_eq!(anim.value(), 5.0);
        assert_eq!(anim.skip(), Step::Pending);
        assert_eq!(*seen.borrow(), vec![0.0, 5.0]);
    }

    #[test]
    fn skip_from_idle_applies_final_value() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 5.0, SEC_1));
        assert_eq!(anim.skip(), Step::Done);
        assert_eq!(*seen.borrow(), vec![5.0]);
    }

    #[test]
    fn skip_from_paused() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 5.0, SEC_1));
        let _ = anim.play(Instant::now());
        anim.pause();
        assert_eq!(anim.skip(), Step::Done);
        assert_eq!(anim.value(), 5.0);
    }

    #[test]
    fn reset_restores_initial_without_notifying() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(3.0, 5.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        let _ = anim.tick(t0 + MS_500);
        let delivered = seen.borrow().len();
        anim.reset();
        assert_eq!(anim.state(), AnimationState::Idle);
        assert_eq!(anim.value(), 3.0);
        assert_eq!(anim.elapsed(), Duration::ZERO);
        assert_eq!(seen.borrow().len(), delivered);
    }

    #[test]
    fn finished_animation_replays_from_start() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, MS_100));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        assert_eq!(anim.tick(t0 + MS_100), Step::Done);

        let t1 = t0 + SEC_1;
        assert_eq!(anim.play(t1), Step::Pending);
        assert_eq!(anim.value(), 0.0);
        assert_eq!(anim.tick(t1 + MS_100), Step::Done);
    }

    #[test]
    fn replay_from_done_is_tolerated() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        if anim.skip().is_done() {
            assert_eq!(anim.play(t0 + MS_100), Step::Pending);
        }
        assert_eq!(anim.state(), AnimationState::Playing);
    }

    #[test]
    fn zero_duration_finishes_inside_play() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 7.0, Duration::ZERO));
        assert_eq!(anim.play(Instant::now()), Step::Done);
        assert_eq!(anim.state(), AnimationState::Finished);
        assert_eq!(anim.value(), 7.0);
        assert_eq!(*seen.borrow(), vec![7.0]);
    }

    #[test]
    fn disabled_animations_skip_on_play() {
        let (seen, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 2.0, SEC_1));
        anim.set_animations_enabled(false);
        assert_eq!(anim.play(Instant::now()), Step::Done);
        assert_eq!(anim.value(), 2.0);
        assert_eq!(*seen.borrow(), vec![2.0]);
    }

    #[test]
    fn shared_target_receives_from_both_animations() {
        let (seen, target) = recorder();
        let shared: Rc<dyn AnimationTarget> = Rc::new(target);
        let mut a = Animation::with_shared_target(Rc::clone(&shared), linear(0.0, 1.0, SEC_1));
        let mut b = Animation::with_shared_target(shared, linear(5.0, 6.0, SEC_1));
        let _ = a.skip();
        let _ = b.skip();
        assert_eq!(*seen.borrow(), vec![1.0, 6.0]);
    }

    #[test]
    fn motion_changes_apply_next_tick() {
        let (_, target) = recorder();
        let mut anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let t0 = Instant::now();
        let _ = anim.play(t0);
        anim.motion_mut().set_value_to(10.0);
        let _ = anim.tick(t0 + MS_500);
        assert!((anim.value() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn debug_format() {
        let (_, target) = recorder();
        let anim = Animation::new(target, linear(0.0, 1.0, SEC_1));
        let dbg = format!("{anim:?}");
        assert!(dbg.contains("Animation"));
        assert!(dbg.contains("state: Idle"));
    }
}

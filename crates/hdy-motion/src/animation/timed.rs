#![forbid(unsafe_code)]

//! Duration-based motion with easing, repeats, reversal and alternation.

use std::time::Duration;

use super::{Motion, Sample};
use crate::easing::{Easing, ease, lerp};

/// Interpolates `value_from` to `value_to` over `duration` per iteration.
///
/// Iteration `i` runs backwards when `reverse` XOR (`alternate` and `i` is
/// odd). A `repeat_count` of zero repeats forever.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedMotion {
    value_from: f64,
    value_to: f64,
    duration: Duration,
    easing: Easing,
    repeat_count: u32,
    reverse: bool,
    alternate: bool,
}

impl TimedMotion {
    /// One forward iteration with the default easing.
    #[must_use]
    pub fn new(value_from: f64, value_to: f64, duration: Duration) -> Self {
        Self {
            value_from,
            value_to,
            duration,
            easing: Easing::default(),
            repeat_count: 1,
            reverse: false,
            alternate: false,
        }
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Number of iterations; zero repeats forever.
    #[must_use]
    pub fn repeat_count(mut self, count: u32) -> Self {
        self.repeat_count = count;
        self
    }

    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    #[must_use]
    pub fn alternate(mut self, alternate: bool) -> Self {
        self.alternate = alternate;
        self
    }

    #[inline]
    #[must_use]
    pub fn value_from(&self) -> f64 {
        self.value_from
    }

    #[inline]
    #[must_use]
    pub fn value_to(&self) -> f64 {
        self.value_to
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    #[must_use]
    pub fn easing_fn(&self) -> Easing {
        self.easing
    }

    #[inline]
    #[must_use]
    pub fn repeats(&self) -> u32 {
        self.repeat_count
    }

    #[inline]
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    #[inline]
    #[must_use]
    pub fn is_alternating(&self) -> bool {
        self.alternate
    }

    pub fn set_value_from(&mut self, value: f64) {
        self.value_from = value;
    }

    pub fn set_value_to(&mut self, value: f64) {
        self.value_to = value;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Total run time over all iterations; `None` when repeating forever.
    #[must_use]
    pub fn total_duration(&self) -> Option<Duration> {
        if self.duration.is_zero() {
            return Some(Duration::ZERO);
        }
        match self.repeat_count {
            0 => None,
            n => Some(self.duration.saturating_mul(n)),
        }
    }

    fn iteration_reversed(&self, iteration: u128) -> bool {
        self.reverse ^ (self.alternate && iteration % 2 == 1)
    }

    fn end_of(&self, iteration: u128) -> f64 {
        if self.iteration_reversed(iteration) {
            self.value_from
        } else {
            self.value_to
        }
    }
}

impl Motion for TimedMotion {
    fn initial_value(&self) -> f64 {
        if self.reverse {
            self.value_to
        } else {
            self.value_from
        }
    }

    /// End of the last iteration. For infinite repeats, the end of the first.
    fn final_value(&self) -> f64 {
        let last = u128::from(self.repeat_count.saturating_sub(1));
        self.end_of(last)
    }

    fn sample(&self, elapsed: Duration) -> Sample {
        if self.total_duration().is_some_and(|total| elapsed >= total) {
            return Sample::Finished(self.final_value());
        }
        let period = self.duration.as_nanos();
        let elapsed = elapsed.as_nanos();
        let iteration = elapsed / period;
        let fraction = (elapsed % period) as f64 / period as f64;
        let t = if self.iteration_reversed(iteration) {
            1.0 - fraction
        } else {
            fraction
        };
        Sample::Running(lerp(self.value_from, self.value_to, ease(self.easing, t)))
    }

    fn estimated_duration(&self) -> Option<Duration> {
        self.total_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_250: Duration = Duration::from_millis(250);
    const SEC_1: Duration = Duration::from_secs(1);

    fn running(sample: Sample) -> f64 {
        match sample {
            Sample::Running(v) => v,
            Sample::Finished(v) => panic!("expected running, finished at {v}"),
        }
    }

    fn linear() -> TimedMotion {
        TimedMotion::new(0.0, 1.0, SEC_1).easing(Easing::Linear)
    }

    #[test]
    fn defaults() {
        let m = TimedMotion::new(0.0, 1.0, SEC_1);
        assert_eq!(m.easing_fn(), Easing::EaseOutCubic);
        assert_eq!(m.repeats(), 1);
        assert!(!m.is_reversed());
        assert!(!m.is_alternating());
    }

    #[test]
    fn linear_midpoint() {
        let m = linear();
        assert!((running(m.sample(MS_250)) - 0.25).abs() < 1e-12);
        assert_eq!(m.sample(SEC_1), Sample::Finished(1.0));
    }

    #[test]
    fn easing_is_applied() {
        let m = TimedMotion::new(0.0, 1.0, SEC_1).easing(Easing::EaseInQuad);
        assert!((running(m.sample(Duration::from_millis(500))) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn reverse_runs_backwards() {
        let m = linear().reverse(true);
        assert_eq!(m.initial_value(), 1.0);
        assert!((running(m.sample(MS_250)) - 0.75).abs() < 1e-12);
        assert_eq!(m.final_value(), 0.0);
        assert_eq!(m.sample(SEC_1), Sample::Finished(0.0));
    }

    #[test]
    fn repeats_restart_each_iteration() {
        let m = linear().repeat_count(3);
        assert_eq!(m.total_duration(), Some(Duration::from_secs(3)));
        assert!((running(m.sample(SEC_1 + MS_250)) - 0.25).abs() < 1e-12);
        assert_eq!(m.sample(Duration::from_secs(3)), Sample::Finished(1.0));
    }

    #[test]
    fn alternate_flips_odd_iterations() {
        let m = linear().repeat_count(2).alternate(true);
        assert!((running(m.sample(MS_250)) - 0.25).abs() < 1e-12);
        assert!((running(m.sample(SEC_1 + MS_250)) - 0.75).abs() < 1e-12);
        // Two iterations: the second runs back to the start.
        assert_eq!(m.final_value(), 0.0);
    }

    #[test]
    fn alternate_with_reverse() {
        let m = linear().repeat_count(3).alternate(true).reverse(true);
        assert!((running(m.sample(MS_250)) - 0.75).abs() < 1e-12);
        assert!((running(m.sample(SEC_1 + MS_250)) - 0.25).abs() < 1e-12);
        assert_eq!(m.final_value(), 0.0);
    }

    #[test]
    fn infinite_repeat_never_finishes() {
        let m = linear().repeat_count(0);
        assert_eq!(m.estimated_duration(), None);
        let late = Duration::from_secs(10_000) + MS_250;
        assert!((running(m.sample(late)) - 0.25).abs() < 1e-9);
        assert_eq!(m.final_value(), 1.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let m = TimedMotion::new(2.0, 4.0, Duration::ZERO).repeat_count(0);
        assert_eq!(m.total_duration(), Some(Duration::ZERO));
        assert_eq!(m.sample(Duration::ZERO), Sample::Finished(4.0));
    }

    #[test]
    fn setters_take_effect() {
        let mut m = linear();
        m.set_value_from(10.0);
        m.set_value_to(20.0);
        m.set_duration(Duration::from_secs(2));
        m.set_easing(Easing::Linear);
        assert!((running(m.sample(SEC_1)) - 15.0).abs() < 1e-12);
    }
}

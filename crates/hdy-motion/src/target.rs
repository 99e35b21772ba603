#![forbid(unsafe_code)]

//! Animation targets: where each tick's value is delivered.
//!
//! An [`Animation`](crate::Animation) computes values; a target applies them.
//! Two bindings are provided:
//!
//! - [`CallbackTarget`]: a closure, plus an optional hook that runs when the
//!   target is dropped (for releasing whatever the closure captured).
//! - [`PropertyTarget`]: a setter bound to an object held by weak reference,
//!   so an animation never keeps its widget alive.
//!
//! Any `Fn(f64)` closure is also a target.
//!
//! # Invariants
//!
//! 1. `set_value` is called exactly once per tick with exactly the animation's
//!    current value. Targets are never batched or skipped by the animation.
//! 2. A [`PropertyTarget`] whose object has been dropped silently ignores values.

use std::fmt;
use std::rc::{Rc, Weak};

/// Receives the per-tick value of an animation.
pub trait AnimationTarget {
    /// Apply `value`.
    fn set_value(&self, value: f64);
}

impl<F> AnimationTarget for F
where
    F: Fn(f64),
{
    fn set_value(&self, value: f64) {
        self(value);
    }
}

// ---------------------------------------------------------------------------
// CallbackTarget
// ---------------------------------------------------------------------------

/// A closure target with an optional drop hook.
pub struct CallbackTarget {
    callback: Box<dyn Fn(f64)>,
    on_drop: Option<Box<dyn FnOnce()>>,
}

impl CallbackTarget {
    /// Wrap `callback`.
    #[must_use]
    pub fn new(callback: impl Fn(f64) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            on_drop: None,
        }
    }

    /// Run `hook` once when this target is dropped (builder pattern).
    #[must_use]
    pub fn on_drop(mut self, hook: impl FnOnce() + 'static) -> Self {
        self.on_drop = Some(Box::new(hook));
        self
    }
}

impl AnimationTarget for CallbackTarget {
    fn set_value(&self, value: f64) {
        (self.callback)(value);
    }
}

impl Drop for CallbackTarget {
    fn drop(&mut self) {
        if let Some(hook) = self.on_drop.take() {
            hook();
        }
    }
}

impl fmt::Debug for CallbackTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackTarget")
            .field("has_drop_hook", &self.on_drop.is_some())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// PropertyTarget
// ---------------------------------------------------------------------------

/// A named numeric property on an object held by weak reference.
///
/// The setter converts the animation's `f64` to whatever the property stores.
///
/// ```ignore
/// let target = PropertyTarget::new(&flap, "reveal-progress", |flap: &Flap, v| {
///     flap.reveal_progress.set(v);
/// });
/// ```
pub struct PropertyTarget<O> {
    object: Weak<O>,
    name: &'static str,
    setter: Box<dyn Fn(&O, f64)>,
}

impl<O> PropertyTarget<O> {
    /// Bind `setter` to `object`'s property `name`.
    #[must_use]
    pub fn new(object: &Rc<O>, name: &'static str, setter: impl Fn(&O, f64) + 'static) -> Self {
        Self {
            object: Rc::downgrade(object),
            name,
            setter: Box::new(setter),
        }
    }

    /// Property name, for diagnostics.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The bound object, if it is still alive.
    #[must_use]
    pub fn object(&self) -> Option<Rc<O>> {
        self.object.upgrade()
    }
}

impl<O> AnimationTarget for PropertyTarget<O> {
    fn set_value(&self, value: f64) {
        if let Some(object) = self.object.upgrade() {
            (self.setter)(&object, value);
        }
    }
}

impl<O> fmt::Debug for PropertyTarget<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyTarget")
            .field("name", &self.name)
            .field("alive", &(self.object.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

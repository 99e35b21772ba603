#![forbid(unsafe_code)]

//! The capability a widget implements so a [`SwipeTracker`] can drive it.
//!
//! Progress is unitless: one unit is [`distance`](Swipeable::distance)
//! pixels of finger travel. Snap points are the progress values a swipe may
//! come to rest on (page indices for a carousel, 0 and 1 for a flap).
//!
//! [`SwipeTracker`]: crate::swipe_tracker::SwipeTracker

use crate::geometry::{NavigationDirection, Rect};

pub trait Swipeable {
    /// Pixels of travel corresponding to one unit of progress.
    fn distance(&self) -> f64;

    /// Resting progress values, sorted ascending.
    fn snap_points(&self) -> Vec<f64>;

    /// Current progress, used to seed a new swipe.
    fn progress(&self) -> f64;

    /// Where the widget returns if the swipe is cancelled.
    fn cancel_progress(&self) -> f64;

    /// Region a swipe in `direction` may start from. `is_drag` distinguishes
    /// touch/pointer drags from touchpad scrolls.
    fn swipe_area(&self, direction: NavigationDirection, is_drag: bool) -> Rect;

    /// Called once the swipe direction is known, before the swipe area is
    /// queried. Widgets that reveal content lazily load it here.
    fn prepare(&self, _direction: NavigationDirection) {}
}

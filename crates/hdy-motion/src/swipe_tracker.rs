#![forbid(unsafe_code)]

//! Swipe tracking: drag and touchpad input to progress and snap decisions.
//!
//! [`SwipeTracker`] turns a stream of [`SwipeInput`]s into [`SwipeEvent`]s for
//! a widget implementing [`Swipeable`]. Progress is unitless; one unit is
//! [`Swipeable::distance`] pixels of finger travel.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──begin──▶ Recognizing ──threshold + area ok──▶ Active ──end──▶ Idle
//!                       │                                   │
//!                       └──gate / area / axis fails──▶ Rejected ──end──▶ Idle
//! ```
//!
//! - **Drags** (touch, pen, mouse) must travel [`SwipeConfig::drag_threshold`]
//!   pixels along the tracked axis before the swipe begins. The threshold
//!   travel is consumed; anything past it in the crossing sample is applied
//!   right away, so that sample yields `Begin` followed by `Update`.
//! - **Touchpad scrolls** begin on the first delta, with no threshold.
//!
//! # Invariants
//!
//! 1. `Begin` precedes every `Update`; `End` is emitted at most once per
//!    swipe and returns the tracker to `Idle`.
//! 2. Every motion sample while active yields exactly one `Update`, in input
//!    order. Samples are never coalesced.
//! 3. Progress stays within the bounds fixed at `Begin`: the snap points
//!    adjacent to the starting progress, or the whole snap range when long
//!    swipes are allowed.
//! 4. [`SwipeTracker::cancel`] never emits events.
//!
//! # Failure Modes
//!
//! - A sample timestamped before the previous one is logged and dropped.
//! - If the swipeable is dropped mid-gesture, the gesture is abandoned
//!   silently.
//! - A swipeable with non-positive distance or no snap points rejects the
//!   gesture.

use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use web_time::Instant;

use crate::animation::SpringMotion;
use crate::geometry::{NavigationDirection, Orientation};
#[cfg(feature = "tracing")]
use crate::logging::{debug, trace, warn};
use crate::spring::SpringParams;
use crate::swipeable::Swipeable;
#[cfg(not(feature = "tracing"))]
use crate::{debug, trace, warn};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds and constants for swipe recognition and release.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Travel (px) along the axis before a drag becomes a swipe (default: 16).
    pub drag_threshold: f64,
    /// How far back motion samples count toward release velocity (default: 150ms).
    pub history_window: Duration,
    /// Release speed (px/s) that counts as a flick for drags (default: 300).
    pub touch_velocity_threshold: f64,
    /// Release speed (units/s) that counts as a flick for touchpads (default: 600).
    pub touchpad_velocity_threshold: f64,
    /// Per-millisecond velocity decay for long-swipe projection, drags (default: 0.998).
    pub touch_deceleration: f64,
    /// Per-millisecond velocity decay for long-swipe projection, touchpads (default: 0.997).
    pub touchpad_deceleration: f64,
    /// Scroll units per progress unit for horizontal touchpad swipes (default: 400).
    pub touchpad_distance_horizontal: f64,
    /// Scroll units per progress unit for vertical touchpad swipes (default: 300).
    pub touchpad_distance_vertical: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 16.0,
            history_window: Duration::from_millis(150),
            touch_velocity_threshold: 300.0,
            touchpad_velocity_threshold: 600.0,
            touch_deceleration: 0.998,
            touchpad_deceleration: 0.997,
            touchpad_distance_horizontal: 400.0,
            touchpad_distance_vertical: 300.0,
        }
    }
}

impl SwipeConfig {
    fn touchpad_distance(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.touchpad_distance_horizontal,
            Orientation::Vertical => self.touchpad_distance_vertical,
        }
    }
}

// ---------------------------------------------------------------------------
// Inputs and events
// ---------------------------------------------------------------------------

/// Device that produced an input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Mouse,
    Pen,
    Touchscreen,
    Touchpad,
    Trackpoint,
}

impl InputSource {
    /// Pointer devices, gated by `allow_mouse_drag`.
    #[must_use]
    pub const fn is_pointer(self) -> bool {
        matches!(self, Self::Mouse | Self::Pen | Self::Trackpoint)
    }
}

/// Raw input delivered to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeInput {
    /// A press started a potential drag at widget coordinates `(x, y)`.
    DragBegin { x: f64, y: f64, source: InputSource },
    /// Total drag offset from the begin point.
    DragUpdate { offset_x: f64, offset_y: f64 },
    /// The drag was released.
    DragEnd,
    /// The toolkit cancelled the input sequence.
    DragCancel,
    /// A touchpad scroll gesture started with the pointer at `(x, y)`.
    ScrollBegin { x: f64, y: f64, source: InputSource },
    /// Incremental scroll delta.
    Scroll { dx: f64, dy: f64 },
    /// Fingers lifted off the touchpad.
    ScrollEnd,
}

/// Notification for the swipeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    /// A swipe started moving in `direction`.
    Begin { direction: NavigationDirection },
    /// Progress changed.
    Update { progress: f64 },
    /// The swipe ended; animate to `end.to`.
    End(SwipeEnd),
}

/// Outcome of a released swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeEnd {
    /// Snap point to settle on.
    pub to: f64,
    /// Release velocity along the progress axis, in pixels per second.
    pub velocity: f64,
    /// Pixels per progress unit during this swipe.
    pub distance: f64,
}

impl SwipeEnd {
    /// Release velocity in progress units per second.
    #[must_use]
    pub fn progress_velocity(&self) -> f64 {
        if self.distance > 0.0 {
            self.velocity / self.distance
        } else {
            0.0
        }
    }

    /// Spring motion carrying the release velocity from `from` to the
    /// chosen snap point.
    #[must_use]
    pub fn settle(&self, from: f64, params: SpringParams) -> SpringMotion {
        SpringMotion::new(from, self.to, params).initial_velocity(self.progress_velocity())
    }
}

/// Observable tracker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Idle,
    /// Input began; waiting for enough motion to decide.
    Recognizing,
    /// Swipe in progress.
    Active,
    /// The current input sequence was refused; ignored until it ends.
    Rejected,
}

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureKind {
    Drag,
    Scroll,
}

#[derive(Debug, Clone)]
struct Pending {
    kind: GestureKind,
    source: InputSource,
    x: f64,
    y: f64,
    last_time: Instant,
    /// Drag offset along the axis at `last_time`.
    last_along: f64,
}

#[derive(Debug, Clone)]
struct ActiveSwipe {
    kind: GestureKind,
    source: InputSource,
    distance: f64,
    snap_points: Vec<f64>,
    lower: f64,
    upper: f64,
    progress: f64,
    /// Drag offset along the axis already turned into progress.
    applied_offset: f64,
    /// `(time, signed pixels)` per sample, oldest first.
    history: VecDeque<(Instant, f64)>,
    last_time: Instant,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Recognizing(Pending),
    Active(ActiveSwipe),
    Rejected(&'static str),
}

// ---------------------------------------------------------------------------
// SwipeTracker
// ---------------------------------------------------------------------------

/// Converts input into progress for one [`Swipeable`].
///
/// Holds the swipeable weakly; the widget owns the tracker.
pub struct SwipeTracker {
    swipeable: Weak<dyn Swipeable>,
    config: SwipeConfig,
    orientation: Orientation,
    enabled: bool,
    reversed: bool,
    allow_mouse_drag: bool,
    allow_long_swipes: bool,
    phase: Phase,
}

impl fmt::Debug for SwipeTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeTracker")
            .field("state", &self.state())
            .field("orientation", &self.orientation)
            .field("enabled", &self.enabled)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

impl SwipeTracker {
    /// Create an enabled, horizontal tracker for `swipeable`.
    #[must_use]
    pub fn new<S: Swipeable + 'static>(swipeable: &Rc<S>, config: SwipeConfig) -> Self {
        let weak: Weak<S> = Rc::downgrade(swipeable);
        Self::from_weak(weak, config)
    }

    #[must_use]
    pub fn from_weak(swipeable: Weak<dyn Swipeable>, config: SwipeConfig) -> Self {
        Self {
            swipeable,
            config,
            orientation: Orientation::Horizontal,
            enabled: true,
            reversed: false,
            allow_mouse_drag: false,
            allow_long_swipes: false,
            phase: Phase::Idle,
        }
    }

    /// Process one input at time `now`.
    ///
    /// Returns the events it produced, in order; usually zero or one, two
    /// when a swipe begins.
    pub fn process(&mut self, input: &SwipeInput, now: Instant) -> Vec<SwipeEvent> {
        let mut out = Vec::new();
        match *input {
            SwipeInput::DragBegin { x, y, source } => {
                self.on_begin(GestureKind::Drag, x, y, source, now);
            }
            SwipeInput::ScrollBegin { x, y, source } => {
                self.on_begin(GestureKind::Scroll, x, y, source, now);
            }
            SwipeInput::DragUpdate { offset_x, offset_y } => {
                self.on_motion(GestureKind::Drag, offset_x, offset_y, now, &mut out);
            }
            SwipeInput::Scroll { dx, dy } => {
                self.on_motion(GestureKind::Scroll, dx, dy, now, &mut out);
            }
            SwipeInput::DragEnd => self.on_end(GestureKind::Drag, now, &mut out),
            SwipeInput::ScrollEnd => self.on_end(GestureKind::Scroll, now, &mut out),
            SwipeInput::DragCancel => self.on_input_cancelled(&mut out),
        }
        out
    }

    /// Abandon the current gesture without emitting `End`. The widget snaps
    /// to its cancel progress itself. Returns whether a swipe was active.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        if !matches!(self.phase, Phase::Idle) {
            debug!(was_active, "swipe cancelled");
        }
        self.phase = Phase::Idle;
        was_active
    }

    /// Drop all per-gesture state, including a rejected sequence.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Current tracker state.
    #[must_use]
    pub fn state(&self) -> TrackerState {
        match self.phase {
            Phase::Idle => TrackerState::Idle,
            Phase::Recognizing(_) => TrackerState::Recognizing,
            Phase::Active(_) => TrackerState::Active,
            Phase::Rejected(_) => TrackerState::Rejected,
        }
    }

    /// Why the current input sequence was refused.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Rejected(reason) => Some(reason),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    /// Progress of the active swipe.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        match &self.phase {
            Phase::Active(swipe) => Some(swipe.progress),
            _ => None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SwipeConfig) {
        self.config = config;
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling also abandons any gesture in progress, silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            let _ = self.cancel();
        }
    }

    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Negate the progress direction, for right-to-left layouts.
    pub fn set_reversed(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    #[must_use]
    pub fn allow_mouse_drag(&self) -> bool {
        self.allow_mouse_drag
    }

    pub fn set_allow_mouse_drag(&mut self, allow: bool) {
        self.allow_mouse_drag = allow;
    }

    #[must_use]
    pub fn allow_long_swipes(&self) -> bool {
        self.allow_long_swipes
    }

    /// Allow a swipe to travel past the snap points adjacent to its start.
    pub fn set_allow_long_swipes(&mut self, allow: bool) {
        self.allow_long_swipes = allow;
    }

    // -----------------------------------------------------------------------
    // Input handlers
    // -----------------------------------------------------------------------

    fn on_begin(&mut self, kind: GestureKind, x: f64, y: f64, source: InputSource, now: Instant) {
        if self.is_active() {
            debug!(?kind, "begin during active swipe ignored");
            return;
        }
        let refusal = if !self.enabled {
            Some("disabled")
        } else if kind == GestureKind::Scroll && source != InputSource::Touchpad {
            Some("scroll from non-touchpad source")
        } else if kind == GestureKind::Drag && source.is_pointer() && !self.allow_mouse_drag {
            Some("pointer drag not allowed")
        } else {
            None
        };
        if let Some(reason) = refusal {
            debug!(?source, reason, "swipe rejected");
            self.phase = Phase::Rejected(reason);
            return;
        }
        self.phase = Phase::Recognizing(Pending {
            kind,
            source,
            x,
            y,
            last_time: now,
            last_along: 0.0,
        });
    }

    fn on_motion(
        &mut self,
        kind: GestureKind,
        x: f64,
        y: f64,
        now: Instant,
        out: &mut Vec<SwipeEvent>,
    ) {
        match &mut self.phase {
            Phase::Recognizing(pending) if pending.kind == kind => {
                if now < pending.last_time {
                    warn!("out-of-order motion sample dropped");
                    return;
                }
                let previous = pending.clone();
                pending.last_time = now;
                pending.last_along = self.orientation.along(x, y);
                self.recognize(&previous, x, y, now, out);
            }
            Phase::Active(swipe) if swipe.kind == kind => {
                if now < swipe.last_time {
                    warn!("out-of-order motion sample dropped");
                    return;
                }
                let along = self.orientation.along(x, y);
                let raw = match kind {
                    GestureKind::Drag => {
                        let delta = along - swipe.applied_offset;
                        swipe.applied_offset = along;
                        delta
                    }
                    GestureKind::Scroll => along,
                };
                let px = signed_travel(kind, raw, self.reversed);
                out.push(swipe.apply(px, now, self.config.history_window));
            }
            _ => {}
        }
    }

    /// `pending` holds the sample before this one.
    fn recognize(
        &mut self,
        pending: &Pending,
        x: f64,
        y: f64,
        now: Instant,
        out: &mut Vec<SwipeEvent>,
    ) {
        let along = self.orientation.along(x, y);
        let across = self.orientation.across(x, y);
        let undecided = match pending.kind {
            GestureKind::Drag => {
                along.abs() < self.config.drag_threshold
                    && across.abs() < self.config.drag_threshold
            }
            GestureKind::Scroll => along == 0.0 && across == 0.0,
        };
        if undecided {
            return;
        }
        if across.abs() > along.abs() {
            let reason = "motion across the tracked axis";
            debug!(reason, "swipe rejected");
            self.phase = Phase::Rejected(reason);
            return;
        }

        let px = signed_travel(pending.kind, along, self.reversed);
        let direction = NavigationDirection::from_delta(px);
        match self.activate(pending, direction, now) {
            Ok(mut swipe) => {
                debug!(?direction, progress = swipe.progress, "swipe begin");
                out.push(SwipeEvent::Begin { direction });
                match pending.kind {
                    GestureKind::Drag => {
                        // All travel since the previous sample feeds velocity;
                        // only what lies past the threshold moves progress.
                        let window = self.config.history_window;
                        let travel = signed_travel(
                            GestureKind::Drag,
                            along - pending.last_along,
                            self.reversed,
                        );
                        swipe.history.push_back((pending.last_time, 0.0));
                        swipe.record(travel, now, window);

                        let consumed = self.config.drag_threshold.min(along.abs()).max(0.0);
                        let px = signed_travel(
                            GestureKind::Drag,
                            along - consumed.copysign(along),
                            self.reversed,
                        );
                        swipe.applied_offset = along;
                        out.push(swipe.advance(px));
                    }
                    GestureKind::Scroll => {
                        out.push(swipe.apply(px, now, self.config.history_window));
                    }
                }
                self.phase = Phase::Active(swipe);
            }
            Err(reason) => {
                debug!(reason, "swipe rejected");
                self.phase = Phase::Rejected(reason);
            }
        }
    }

    fn activate(
        &self,
        pending: &Pending,
        direction: NavigationDirection,
        now: Instant,
    ) -> Result<ActiveSwipe, &'static str> {
        let swipeable = self.swipeable.upgrade().ok_or("swipeable dropped")?;
        swipeable.prepare(direction);

        let is_drag = pending.kind == GestureKind::Drag;
        let area = swipeable.swipe_area(direction, is_drag);
        if !area.contains(pending.x, pending.y) {
            return Err("outside swipe area");
        }

        let distance = if is_drag {
            swipeable.distance()
        } else {
            self.config.touchpad_distance(self.orientation)
        };
        if !(distance.is_finite() && distance > 0.0) {
            return Err("non-positive distance");
        }

        let mut snap_points = swipeable.snap_points();
        snap_points.retain(|p| p.is_finite());
        snap_points.sort_by(f64::total_cmp);
        snap_points.dedup();
        if snap_points.is_empty() {
            return Err("no snap points");
        }

        let progress = swipeable.progress();
        let (lower, upper) = swipe_bounds(&snap_points, progress, self.allow_long_swipes);
        Ok(ActiveSwipe {
            kind: pending.kind,
            source: pending.source,
            distance,
            snap_points,
            lower,
            upper,
            progress: progress.clamp(lower, upper),
            applied_offset: 0.0,
            history: VecDeque::new(),
            last_time: now,
        })
    }

    fn on_end(&mut self, kind: GestureKind, now: Instant, out: &mut Vec<SwipeEvent>) {
        match std::mem::take(&mut self.phase) {
            Phase::Active(mut swipe) if swipe.kind == kind => {
                let end = self.release(&mut swipe, now);
                debug!(to = end.to, velocity = end.velocity, "swipe end");
                out.push(SwipeEvent::End(end));
            }
            Phase::Active(swipe) => self.phase = Phase::Active(swipe),
            _ => {}
        }
    }

    fn on_input_cancelled(&mut self, out: &mut Vec<SwipeEvent>) {
        if let Phase::Active(swipe) = std::mem::take(&mut self.phase) {
            let Some(swipeable) = self.swipeable.upgrade() else {
                return;
            };
            let to = swipeable.cancel_progress();
            debug!(to, "swipe input cancelled");
            out.push(SwipeEvent::End(SwipeEnd {
                to,
                velocity: 0.0,
                distance: swipe.distance,
            }));
        }
    }

    fn release(&self, swipe: &mut ActiveSwipe, now: Instant) -> SwipeEnd {
        let now = now.max(swipe.last_time);
        swipe.trim_history(now, self.config.history_window);
        let velocity = swipe.velocity();

        let touchpad = swipe.source == InputSource::Touchpad;
        let threshold = if touchpad {
            self.config.touchpad_velocity_threshold
        } else {
            self.config.touch_velocity_threshold
        };

        let to = if velocity.abs() < threshold {
            closest_snap(&swipe.snap_points, swipe.progress, swipe.lower, swipe.upper)
        } else {
            let next = next_snap(&swipe.snap_points, swipe.progress, velocity)
                .unwrap_or(if velocity > 0.0 { swipe.upper } else { swipe.lower });
            let target = if self.allow_long_swipes {
                let decel = if touchpad {
                    self.config.touchpad_deceleration
                } else {
                    self.config.touch_deceleration
                };
                let travel = projected_travel(velocity, decel);
                let projected = closest_snap(
                    &swipe.snap_points,
                    swipe.progress + travel / swipe.distance,
                    swipe.lower,
                    swipe.upper,
                );
                if velocity > 0.0 {
                    next.max(projected)
                } else {
                    next.min(projected)
                }
            } else {
                next
            };
            target.clamp(swipe.lower, swipe.upper)
        };

        SwipeEnd {
            to,
            velocity,
            distance: swipe.distance,
        }
    }
}

impl ActiveSwipe {
    /// Apply `px` of travel along the progress direction.
    fn apply(&mut self, px: f64, now: Instant, window: Duration) -> SwipeEvent {
        self.record(px, now, window);
        self.advance(px)
    }

    /// Add a velocity sample without touching progress.
    fn record(&mut self, px: f64, now: Instant, window: Duration) {
        self.last_time = now;
        self.history.push_back((now, px));
        self.trim_history(now, window);
    }

    fn advance(&mut self, px: f64) -> SwipeEvent {
        let raw = self.progress + px / self.distance;
        let progress = raw.clamp(self.lower, self.upper);
        if progress != raw {
            trace!(raw, progress, "swipe progress clamped");
        }
        self.progress = progress;
        SwipeEvent::Update { progress }
    }

    fn trim_history(&mut self, now: Instant, window: Duration) {
        while let Some(&(time, _)) = self.history.front() {
            if now.saturating_duration_since(time) > window {
                self.history.pop_front();
            } else {
                break;
            }
        }
    }

    /// Pixels per second over the retained history. The first sample only
    /// marks the start time.
    fn velocity(&self) -> f64 {
        let (Some(&(first, _)), Some(&(last, _))) = (self.history.front(), self.history.back())
        else {
            return 0.0;
        };
        let span = last.saturating_duration_since(first).as_secs_f64();
        if span <= 0.0 {
            return 0.0;
        }
        let travel: f64 = self.history.iter().skip(1).map(|&(_, px)| px).sum();
        travel / span
    }
}

// ---------------------------------------------------------------------------
// Snap arithmetic
// ---------------------------------------------------------------------------

/// Pixels of travel that advance progress for raw axis motion.
///
/// Dragging toward the axis origin moves forward; touchpad scroll deltas
/// already point forward.
fn signed_travel(kind: GestureKind, raw: f64, reversed: bool) -> f64 {
    let px = match kind {
        GestureKind::Drag => -raw,
        GestureKind::Scroll => raw,
    };
    if reversed { -px } else { px }
}

/// Progress bounds for a swipe starting at `progress`. `snaps` is sorted and
/// non-empty.
fn swipe_bounds(snaps: &[f64], progress: f64, allow_long_swipes: bool) -> (f64, f64) {
    let (Some(&first), Some(&last)) = (snaps.first(), snaps.last()) else {
        return (progress, progress);
    };
    if allow_long_swipes {
        return (first, last);
    }
    let below = snaps.partition_point(|&s| s < progress);
    let above = snaps.partition_point(|&s| s <= progress);
    let lower = below.checked_sub(1).map_or(first, |i| snaps[i]);
    let upper = snaps.get(above).copied().unwrap_or(last);
    (lower, upper)
}

/// Snap point nearest to `progress` within `[lower, upper]`; ties go to the
/// lower one.
fn closest_snap(snaps: &[f64], progress: f64, lower: f64, upper: f64) -> f64 {
    let mut best = progress.clamp(lower, upper);
    let mut best_dist = f64::INFINITY;
    for &snap in snaps.iter().filter(|&&s| s >= lower && s <= upper) {
        let dist = (snap - progress).abs();
        if dist < best_dist {
            best = snap;
            best_dist = dist;
        }
    }
    best
}

/// First snap point strictly past `progress` in the direction of `velocity`.
fn next_snap(snaps: &[f64], progress: f64, velocity: f64) -> Option<f64> {
    if velocity > 0.0 {
        snaps.iter().copied().find(|&s| s > progress)
    } else {
        snaps.iter().rev().copied().find(|&s| s < progress)
    }
}

/// Distance (px) a release at `velocity` px/s coasts with per-millisecond
/// decay `deceleration`.
fn projected_travel(velocity: f64, deceleration: f64) -> f64 {
    if !(deceleration > 0.0 && deceleration < 1.0) {
        return 0.0;
    }
    -velocity / (1000.0 * deceleration.ln())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

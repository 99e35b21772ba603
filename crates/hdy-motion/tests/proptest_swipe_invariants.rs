//! Property-based invariants for the swipe tracker.
//!
//! 1. **Bounded progress**: every `Update` lies within the snap points
//!    adjacent to the starting progress (whole range with long swipes).
//! 2. **One update per sample**: after `Begin`, each drag sample produces
//!    exactly one `Update`, in order.
//! 3. **Snap landing**: `End.to` is always one of the snap points, within the
//!    same bounds.
//! 4. **Idle after end**: the tracker is idle once the gesture ends.
//! 5. **Pairing**: for any input order, `End` never outnumbers `Begin` and
//!    updates only arrive between them.

use std::rc::Rc;
use std::time::Duration;

use hdy_motion::{
    InputSource, NavigationDirection, Rect, SwipeConfig, SwipeEvent, SwipeInput, SwipeTracker,
    Swipeable, TrackerState,
};
use proptest::prelude::*;
use web_time::Instant;

struct Strip {
    snaps: Vec<f64>,
    progress: f64,
}

impl Swipeable for Strip {
    fn distance(&self) -> f64 {
        200.0
    }
    fn snap_points(&self) -> Vec<f64> {
        self.snaps.clone()
    }
    fn progress(&self) -> f64 {
        self.progress
    }
    fn cancel_progress(&self) -> f64 {
        self.progress
    }
    fn swipe_area(&self, _: NavigationDirection, _: bool) -> Rect {
        Rect::from_size(1000.0, 1000.0)
    }
}

fn snaps_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.25f64..3.0, 1..6).prop_map(|gaps| {
        let mut acc = 0.0;
        let mut snaps = vec![0.0];
        for gap in gaps {
            acc += gap;
            snaps.push(acc);
        }
        snaps
    })
}

/// Expected bounds, computed independently of the tracker.
fn adjacent(snaps: &[f64], start: f64) -> (f64, f64) {
    let lower = snaps
        .iter()
        .copied()
        .filter(|&s| s < start)
        .last()
        .unwrap_or(snaps[0]);
    let upper = snaps
        .iter()
        .copied()
        .find(|&s| s > start)
        .unwrap_or(*snaps.last().unwrap());
    (lower, upper)
}

proptest! {
    #[test]
    fn drag_respects_bounds_and_lands_on_snap(
        snaps in snaps_strategy(),
        start_frac in 0.0f64..=1.0,
        steps in prop::collection::vec(-80.0f64..80.0, 1..40),
        gaps_ms in prop::collection::vec(1u64..40, 40),
        long in any::<bool>(),
    ) {
        let last = *snaps.last().unwrap();
        let start = start_frac * last;
        let strip = Rc::new(Strip { snaps: snaps.clone(), progress: start });
        let mut tracker = SwipeTracker::new(&strip, SwipeConfig::default());
        tracker.set_allow_long_swipes(long);
        let (lower, upper) = if long { (snaps[0], last) } else { adjacent(&snaps, start) };

        let t0 = Instant::now();
        let _ = tracker.process(
            &SwipeInput::DragBegin { x: 500.0, y: 500.0, source: InputSource::Touchscreen },
            t0,
        );
        // Cross the threshold forward so the gesture always begins.
        let mut now = t0 + Duration::from_millis(5);
        let mut offset = -20.0;
        let begin = tracker.process(
            &SwipeInput::DragUpdate { offset_x: offset, offset_y: 0.0 },
            now,
        );
        prop_assert_eq!(begin.len(), 2);
        let SwipeEvent::Update { progress } = begin[1] else {
            return Err(TestCaseError::fail("expected an update after begin"));
        };
        prop_assert!(progress >= lower && progress <= upper);

        for (step, gap) in steps.iter().zip(&gaps_ms) {
            offset += step;
            now += Duration::from_millis(*gap);
            let events = tracker.process(
                &SwipeInput::DragUpdate { offset_x: offset, offset_y: 0.0 },
                now,
            );
            prop_assert_eq!(events.len(), 1);
            let SwipeEvent::Update { progress } = events[0] else {
                return Err(TestCaseError::fail("expected an update"));
            };
            prop_assert!(progress >= lower && progress <= upper,
                "progress {} outside [{}, {}]", progress, lower, upper);
        }

        let end = tracker.process(&SwipeInput::DragEnd, now);
        let [SwipeEvent::End(end)] = end.as_slice() else {
            return Err(TestCaseError::fail("expected a single end"));
        };
        prop_assert!(snaps.contains(&end.to), "{} is not a snap point", end.to);
        prop_assert!(end.to >= lower && end.to <= upper);
        prop_assert_eq!(tracker.state(), TrackerState::Idle);
    }

    #[test]
    fn begin_and_end_pair_up_for_any_input_order(
        inputs in prop::collection::vec(0u8..7, 0..30),
    ) {
        let strip = Rc::new(Strip { snaps: vec![0.0, 1.0], progress: 0.0 });
        let mut tracker = SwipeTracker::new(&strip, SwipeConfig::default());
        let t0 = Instant::now();
        let mut ends = 0usize;
        let mut begins = 0usize;
        for (i, code) in inputs.iter().enumerate() {
            let input = match code {
                0 => SwipeInput::DragBegin { x: 1.0, y: 1.0, source: InputSource::Touchscreen },
                1 => SwipeInput::DragUpdate { offset_x: -40.0 * i as f64, offset_y: 0.0 },
                2 => SwipeInput::DragEnd,
                3 => SwipeInput::DragCancel,
                4 => SwipeInput::ScrollBegin { x: 1.0, y: 1.0, source: InputSource::Touchpad },
                5 => SwipeInput::Scroll { dx: 10.0, dy: 0.0 },
                _ => SwipeInput::ScrollEnd,
            };
            let now = t0 + Duration::from_millis(10 * i as u64);
            for event in tracker.process(&input, now) {
                match event {
                    SwipeEvent::Begin { .. } => begins += 1,
                    SwipeEvent::End(_) => ends += 1,
                    SwipeEvent::Update { .. } => prop_assert!(begins > ends),
                }
            }
            prop_assert!(ends <= begins);
        }
    }
}

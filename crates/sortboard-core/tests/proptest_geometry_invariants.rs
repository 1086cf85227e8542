//! Property tests for the drop-side classifier and pointer tracker.

use proptest::prelude::*;
use sortboard_core::{
    Axis, DropSide, Point, PointerDirection, PointerDirectionTracker, Rect, classify,
};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -1000.0f32..1000.0,
        -1000.0f32..1000.0,
        1.0f32..500.0,
        1.0f32..500.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn axis_strategy() -> impl Strategy<Value = Axis> {
    prop_oneof![Just(Axis::Inline), Just(Axis::Block)]
}

proptest! {
    #[test]
    fn midpoint_always_classifies_before(rect in rect_strategy(), axis in axis_strategy()) {
        let mid = rect.midpoint(axis);
        let (x, y) = match axis {
            Axis::Inline => (mid, rect.y),
            Axis::Block => (rect.x, mid),
        };
        prop_assert_eq!(classify(rect, axis, x, y), DropSide::Before);
    }

    #[test]
    fn classification_is_monotonic_along_axis(
        rect in rect_strategy(),
        axis in axis_strategy(),
        a in -2000.0f32..2000.0,
        b in -2000.0f32..2000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let at = |c: f32| match axis {
            Axis::Inline => classify(rect, axis, c, 0.0),
            Axis::Block => classify(rect, axis, 0.0, c),
        };
        // Once a coordinate is After, every larger coordinate is After too.
        if at(lo) == DropSide::After {
            prop_assert_eq!(at(hi), DropSide::After);
        }
    }

    #[test]
    fn cross_axis_coordinate_is_ignored(
        rect in rect_strategy(),
        along in -2000.0f32..2000.0,
        across_a in -2000.0f32..2000.0,
        across_b in -2000.0f32..2000.0,
    ) {
        prop_assert_eq!(
            classify(rect, Axis::Block, across_a, along),
            classify(rect, Axis::Block, across_b, along)
        );
    }

    #[test]
    fn window_never_exceeds_capacity(
        cap in 2usize..8,
        ys in prop::collection::vec(-500.0f32..500.0, 0..64),
    ) {
        let mut tracker = PointerDirectionTracker::with_capacity(Axis::Block, cap);
        for y in ys {
            tracker.record(Point::new(0.0, y));
            prop_assert!(tracker.samples().count() <= cap);
        }
    }

    #[test]
    fn strictly_increasing_window_is_forward(start in -500.0f32..500.0, steps in 1usize..10) {
        let mut tracker = PointerDirectionTracker::new(Axis::Inline);
        let mut dir = tracker.direction();
        for i in 0..steps {
            dir = tracker.record(Point::new(start + i as f32, 0.0));
        }
        prop_assert_eq!(dir, PointerDirection::Forward);
    }
}

#![forbid(unsafe_code)]

//! Pointer travel direction along a list axis.
//!
//! [`PointerDirectionTracker`] keeps the last few pointer coordinates along
//! the configured [`Axis`] and derives a coarse [`PointerDirection`]. It is a
//! trend smoother, not a velocity estimate: any decreasing consecutive pair
//! in the window means `Backward`, everything else is `Forward`.
//!
//! The direction pre-biases drag-over sensors (see [`stabilize_side`]) so a
//! fast drag that jitters across a target's midpoint does not make the drop
//! placeholder flicker between both sides.
//!
//! # Invariants
//!
//! 1. The sample window never exceeds its capacity; the oldest sample is
//!    evicted first. The window is never cleared explicitly.
//! 2. With fewer than two samples the direction is `Forward`.

use std::collections::VecDeque;

use crate::geometry::{Axis, DropSide, Point};

/// Default number of pointer samples retained.
pub const DEFAULT_POINTER_HISTORY: usize = 3;

/// Coarse pointer travel direction along the list axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerDirection {
    /// Increasing coordinates (down or right). Also the default bias.
    #[default]
    Forward,
    /// Decreasing coordinates (up or left).
    Backward,
}

/// Rolling pointer history that classifies travel direction.
#[derive(Debug, Clone)]
pub struct PointerDirectionTracker {
    axis: Axis,
    capacity: usize,
    samples: VecDeque<f32>,
    direction: PointerDirection,
}

impl PointerDirectionTracker {
    /// Create a tracker with the default window of three samples.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self::with_capacity(axis, DEFAULT_POINTER_HISTORY)
    }

    /// Create a tracker retaining `capacity` samples (at least two).
    #[must_use]
    pub fn with_capacity(axis: Axis, capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            axis,
            capacity,
            samples: VecDeque::with_capacity(capacity),
            direction: PointerDirection::Forward,
        }
    }

    /// Record a global pointer position and return the updated direction.
    pub fn record(&mut self, point: Point) -> PointerDirection {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(self.axis.coordinate(point));
        self.direction = Self::derive(&self.samples);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            coordinate = self.axis.coordinate(point),
            direction = ?self.direction,
            "pointer sample"
        );

        self.direction
    }

    /// Direction derived from the current window.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> PointerDirection {
        self.direction
    }

    /// Axis the tracker samples along.
    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Maximum number of retained samples.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained samples, oldest first.
    pub fn samples(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }

    fn derive(samples: &VecDeque<f32>) -> PointerDirection {
        let decreasing = samples
            .iter()
            .zip(samples.iter().skip(1))
            .any(|(earlier, next)| earlier > next);
        if decreasing {
            PointerDirection::Backward
        } else {
            PointerDirection::Forward
        }
    }
}

/// Stabilise a freshly classified drop side against the previous one.
///
/// `previous` is the side last reported for the same target, if any. A flip
/// towards `After` is only accepted while travelling forward and a flip
/// towards `Before` only while travelling backward; a flip against the
/// direction of travel keeps the previous side.
#[must_use]
pub fn stabilize_side(
    previous: Option<DropSide>,
    raw: DropSide,
    direction: PointerDirection,
) -> DropSide {
    match (previous, raw, direction) {
        (None, raw, _) => raw,
        (Some(prev), raw, _) if prev == raw => raw,
        (Some(DropSide::Before), DropSide::After, PointerDirection::Forward) => DropSide::After,
        (Some(DropSide::After), DropSide::Before, PointerDirection::Backward) => DropSide::Before,
        (Some(prev), _, _) => prev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut PointerDirectionTracker, ys: &[f32]) -> PointerDirection {
        let mut dir = tracker.direction();
        for &y in ys {
            dir = tracker.record(Point::new(0.0, y));
        }
        dir
    }

    #[test]
    fn empty_tracker_defaults_forward() {
        let tracker = PointerDirectionTracker::new(Axis::Block);
        assert_eq!(tracker.direction(), PointerDirection::Forward);
        assert_eq!(tracker.samples().count(), 0);
    }

    #[test]
    fn single_sample_is_forward() {
        let mut tracker = PointerDirectionTracker::new(Axis::Block);
        assert_eq!(feed(&mut tracker, &[500.0]), PointerDirection::Forward);
    }

    #[test]
    fn increasing_samples_are_forward() {
        let mut tracker = PointerDirectionTracker::new(Axis::Block);
        assert_eq!(feed(&mut tracker, &[1.0, 2.0, 3.0]), PointerDirection::Forward);
    }

    #[test]
    fn any_decrease_in_window_is_backward() {
        let mut tracker = PointerDirectionTracker::new(Axis::Block);
        assert_eq!(feed(&mut tracker, &[5.0, 3.0, 4.0]), PointerDirection::Backward);
    }

    #[test]
    fn equal_samples_stay_forward() {
        let mut tracker = PointerDirectionTracker::new(Axis::Block);
        assert_eq!(feed(&mut tracker, &[4.0, 4.0, 4.0]), PointerDirection::Forward);
    }

    #[test]
    fn old_samples_are_evicted() {
        let mut tracker = PointerDirectionTracker::new(Axis::Block);
        feed(&mut tracker, &[10.0, 5.0]);
        assert_eq!(tracker.direction(), PointerDirection::Backward);
        // Window becomes [5, 6, 7]: the decrease has been evicted.
        assert_eq!(feed(&mut tracker, &[6.0, 7.0]), PointerDirection::Forward);
        assert_eq!(tracker.samples().collect::<Vec<_>>(), vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn inline_axis_reads_x() {
        let mut tracker = PointerDirectionTracker::new(Axis::Inline);
        tracker.record(Point::new(100.0, 0.0));
        let dir = tracker.record(Point::new(50.0, 900.0));
        assert_eq!(dir, PointerDirection::Backward);
    }

    #[test]
    fn capacity_is_at_least_two() {
        let tracker = PointerDirectionTracker::with_capacity(Axis::Block, 0);
        assert_eq!(tracker.capacity(), 2);
    }

    #[test]
    fn stabilize_without_previous_uses_raw() {
        for dir in [PointerDirection::Forward, PointerDirection::Backward] {
            assert_eq!(stabilize_side(None, DropSide::After, dir), DropSide::After);
            assert_eq!(stabilize_side(None, DropSide::Before, dir), DropSide::Before);
        }
    }

    #[test]
    fn stabilize_accepts_flips_along_travel() {
        assert_eq!(
            stabilize_side(Some(DropSide::Before), DropSide::After, PointerDirection::Forward),
            DropSide::After
        );
        assert_eq!(
            stabilize_side(Some(DropSide::After), DropSide::Before, PointerDirection::Backward),
            DropSide::Before
        );
    }

    #[test]
    fn stabilize_rejects_flips_against_travel() {
        assert_eq!(
            stabilize_side(Some(DropSide::Before), DropSide::After, PointerDirection::Backward),
            DropSide::Before
        );
        assert_eq!(
            stabilize_side(Some(DropSide::After), DropSide::Before, PointerDirection::Forward),
            DropSide::After
        );
    }
}

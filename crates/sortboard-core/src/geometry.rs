#![forbid(unsafe_code)]

//! Geometric primitives and the drop-side classifier.
//!
//! Coordinates are host pixels (floating point, origin at top-left). The
//! classifier is the only piece of drag logic that looks at raw geometry:
//! given a target's bounding box, the list [`Axis`] and a pointer position it
//! decides whether a drop lands [`DropSide::Before`] or [`DropSide::After`]
//! the target.
//!
//! # Invariants
//!
//! 1. [`classify`] is pure; callers re-run it on every drag-over because the
//!    target rectangle may move between events (scroll, resize).
//! 2. A pointer exactly on the midpoint classifies as `Before`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero-sized.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

/// A bounding rectangle, as returned by a host's layout query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at `origin` with the given size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Dimensions of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (left/top inclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Geometric midpoint along `axis`.
    #[inline]
    pub fn midpoint(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Inline => self.x + self.width / 2.0,
            Axis::Block => self.y + self.height / 2.0,
        }
    }

    /// Length of the rectangle along `axis`.
    #[inline]
    pub fn extent(&self, axis: Axis) -> f32 {
        axis.extent(self.size())
    }
}

/// Layout direction of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Horizontal flow (items laid out left to right).
    Inline,
    /// Vertical flow (items stacked top to bottom).
    #[default]
    Block,
}

impl Axis {
    /// The component of `point` that lies along this axis.
    #[inline]
    pub const fn coordinate(self, point: Point) -> f32 {
        match self {
            Self::Inline => point.x,
            Self::Block => point.y,
        }
    }

    /// The component of `size` that lies along this axis.
    #[inline]
    pub const fn extent(self, size: Size) -> f32 {
        match self {
            Self::Inline => size.width,
            Self::Block => size.height,
        }
    }

    /// A translation of `offset` units along this axis, as `(dx, dy)`.
    #[inline]
    pub const fn translation(self, offset: f32) -> (f32, f32) {
        match self {
            Self::Inline => (offset, 0.0),
            Self::Block => (0.0, offset),
        }
    }
}

/// Which side of a target item a drop lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DropSide {
    #[default]
    Before,
    After,
}

impl DropSide {
    /// The opposite side.
    #[inline]
    #[must_use]
    pub const fn complement(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
        }
    }

    /// Index offset applied when inserting relative to a target index.
    #[inline]
    pub const fn offset(self) -> usize {
        match self {
            Self::Before => 0,
            Self::After => 1,
        }
    }
}

/// Decide whether a pointer at `(pointer_x, pointer_y)` is before or after
/// `target` along `axis`.
///
/// Strictly past the midpoint is `After`; everything else, including the
/// midpoint itself, is `Before`.
#[must_use]
pub fn classify(target: Rect, axis: Axis, pointer_x: f32, pointer_y: f32) -> DropSide {
    let pointer = axis.coordinate(Point::new(pointer_x, pointer_y));
    if pointer > target.midpoint(axis) {
        DropSide::After
    } else {
        DropSide::Before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect::new(10.0, 100.0, 200.0, 126.0);

    #[test]
    fn block_axis_uses_vertical_midpoint() {
        // Midpoint y = 163.
        assert_eq!(classify(CARD, Axis::Block, 15.0, 120.0), DropSide::Before);
        assert_eq!(classify(CARD, Axis::Block, 15.0, 200.0), DropSide::After);
    }

    #[test]
    fn inline_axis_uses_horizontal_midpoint() {
        // Midpoint x = 110.
        assert_eq!(classify(CARD, Axis::Inline, 50.0, 220.0), DropSide::Before);
        assert_eq!(classify(CARD, Axis::Inline, 150.0, 101.0), DropSide::After);
    }

    #[test]
    fn midpoint_tie_is_before() {
        assert_eq!(classify(CARD, Axis::Block, 0.0, 163.0), DropSide::Before);
        assert_eq!(classify(CARD, Axis::Inline, 110.0, 0.0), DropSide::Before);
    }

    #[test]
    fn just_past_midpoint_is_after() {
        assert_eq!(classify(CARD, Axis::Block, 0.0, 163.01), DropSide::After);
    }

    #[test]
    fn pointer_outside_rect_still_classifies() {
        assert_eq!(classify(CARD, Axis::Block, 0.0, -50.0), DropSide::Before);
        assert_eq!(classify(CARD, Axis::Block, 0.0, 900.0), DropSide::After);
    }

    #[test]
    fn complement_round_trips() {
        assert_eq!(DropSide::Before.complement(), DropSide::After);
        assert_eq!(DropSide::After.complement().complement(), DropSide::After);
    }

    #[test]
    fn rect_edges_and_contains() {
        assert_eq!(CARD.right(), 210.0);
        assert_eq!(CARD.bottom(), 226.0);
        assert!(CARD.contains(Point::new(10.0, 100.0)));
        assert!(!CARD.contains(Point::new(210.0, 150.0)));
        assert!(!CARD.contains(Point::new(50.0, 226.0)));
    }

    #[test]
    fn extent_follows_axis() {
        assert_eq!(CARD.extent(Axis::Block), 126.0);
        assert_eq!(CARD.extent(Axis::Inline), 200.0);
        assert_eq!(Axis::Block.translation(126.0), (0.0, 126.0));
        assert_eq!(Axis::Inline.translation(-5.0), (-5.0, 0.0));
    }

    #[test]
    fn empty_rect_detection() {
        assert!(Rect::default().is_empty());
        assert!(!CARD.is_empty());
    }
}

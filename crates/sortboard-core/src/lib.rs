#![forbid(unsafe_code)]

//! Core: drag geometry, pointer direction, and the host element capability.
//!
//! # Role in Sortboard
//! `sortboard-core` is the leaf layer. It has no notion of lists, items or
//! drag sessions; it only answers geometric questions and defines what the
//! rest of the workspace needs from a host renderer.
//!
//! # Primary responsibilities
//! - **Geometry**: [`Rect`](geometry::Rect), [`Axis`](geometry::Axis) and the
//!   [`classify`](geometry::classify) drop-side test.
//! - **Pointer direction**: a three-sample trend tracker used to stabilise
//!   drop sides during fast drags.
//! - **MeasurableElement**: bounding-box query, inline style overrides and
//!   transition-end subscription, implemented by the host.

pub mod element;
pub mod geometry;
pub mod pointer;

pub use element::{InlineStyle, MeasurableElement};
pub use geometry::{Axis, DropSide, Point, Rect, Size, classify};
pub use pointer::{
    DEFAULT_POINTER_HISTORY, PointerDirection, PointerDirectionTracker, stabilize_side,
};

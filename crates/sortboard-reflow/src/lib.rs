#![forbid(unsafe_code)]

//! Reflow: animated transitions between consecutive orders of a list.
//!
//! # Role in Sortboard
//! `sortboard-reflow` sits between the engine's list contents and the host's
//! rendered elements. It decides which elements slide or fade, and when the
//! new order may be shown.
//!
//! # Primary responsibilities
//! - **ReflowAnimator**: Settled / Reconciling state machine gated on
//!   transition-end notifications.
//! - **ReflowSurface**: keyed access to the host's measurable elements.
//! - **ReflowConfig**: axis, slot extent and transition length.

pub mod animator;
pub mod config;
pub mod surface;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use animator::{
    ReconcileOptions, ReconcileOutcome, ReflowAnimator, ReflowKind, ReflowState, SnapReason,
    TransitionOutcome,
};
pub use config::{DEFAULT_SLOT_EXTENT, DEFAULT_TRANSITION_MS, ReflowConfig, SlotExtent};
pub use surface::ReflowSurface;

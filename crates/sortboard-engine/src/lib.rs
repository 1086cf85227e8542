#![forbid(unsafe_code)]

//! Engine: item model, reorder arithmetic, and drag session state.
//!
//! # Role in Sortboard
//! `sortboard-engine` is UI-free. It owns list contents ([`Board`]) and the
//! single active drag ([`DragSessionStore`]), and it is the only place that
//! reorders items.
//!
//! # Primary responsibilities
//! - **Reorder**: [`reorder`] / [`apply_move`] compute same-list and
//!   cross-list moves with before/after semantics.
//! - **Drag session**: `begin_drag`, `update_target`, `update_drop_position`,
//!   `commit_drop`, `cancel_drag`, with no-op suppression for repeated
//!   drag-over updates.
//! - **Board**: lists plus session plus pointer direction, per board
//!   instance.

pub mod board;
pub mod error;
pub mod item;
pub mod reorder;
pub mod session;

pub use board::{Board, MoveRecord};
pub use error::{BoardError, ReorderError, SessionError, StateViolation};
pub use item::{Item, ItemId};
pub use reorder::{MoveRequest, apply_move, insert_at, landing_index, move_within, reorder};
pub use session::{
    DragSession, DragSessionStore, DragSource, DropPoint, SessionEffect, SessionNoopReason,
};

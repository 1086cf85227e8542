#![forbid(unsafe_code)]

//! Sortboard public facade crate.
//!
//! Drag-and-drop reordering for parallel lists: drop-side geometry, a
//! single-drag session store, before/after reorder arithmetic, and
//! transition-gated reflow animation. This crate re-exports the common types
//! of the layer crates and offers a prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use sortboard_core::{
    Axis, DropSide, InlineStyle, MeasurableElement, Point, PointerDirection,
    PointerDirectionTracker, Rect, Size, classify, stabilize_side,
};

// --- Engine re-exports -----------------------------------------------------

pub use sortboard_engine::{
    Board, BoardError, DragSession, DragSource, DropPoint, Item, ItemId, MoveRecord,
    MoveRequest, ReorderError, SessionEffect, SessionError, StateViolation, apply_move,
    move_within, reorder,
};

// --- Reflow re-exports -----------------------------------------------------

pub use sortboard_reflow::{
    ReconcileOptions, ReconcileOutcome, ReflowAnimator, ReflowConfig, ReflowState,
    ReflowSurface, SlotExtent, TransitionOutcome,
};

// --- List re-exports -------------------------------------------------------

#[cfg(feature = "config")]
pub use sortboard_list::ConfigError;
pub use sortboard_list::{
    BoardConfig, BoardView, DragEvent, DraggableList, RenderSlot, SlotKey, ViewError,
    ViewOutcome,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Sortboard hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    View(#[from] ViewError),
    #[cfg(feature = "config")]
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Standard result type for Sortboard APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, Board, BoardConfig, BoardView, DragEvent, DropPoint, DropSide, Error, Item, ItemId,
        MeasurableElement, Point, Rect, ReflowSurface, Result, SlotKey, ViewOutcome,
    };

    pub use crate::{core, engine, list, reflow};
}

pub use sortboard_core as core;
pub use sortboard_engine as engine;
pub use sortboard_list as list;
pub use sortboard_reflow as reflow;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_drives_a_board() -> Result<()> {
        let mut board = Board::new(
            vec![vec![Item::new("a", ()), Item::new("b", ())], vec![]],
            Axis::Block,
        );
        board.begin_drag(0, 0, crate::Size::new(100.0, 40.0))?;
        board.update_target(1)?;
        board.update_drop_position(DropPoint::start())?;
        let record = board.commit_drop()?;
        assert_eq!(record.map(|r| r.to_list), Some(1));
        Ok(())
    }

    #[test]
    fn view_errors_convert() {
        let err: Error = crate::ViewError::UnknownList { list: 3, lists: 1 }.into();
        assert_eq!(err.to_string(), "list 3 does not exist (board has 1 lists)");
    }
}

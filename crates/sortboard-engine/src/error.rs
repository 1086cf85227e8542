#![forbid(unsafe_code)]

//! Error types for the engine.
//!
//! Every variant here is a caller bug (a precondition violation), not a
//! user-facing condition. They are typed so a host can halt the current drag
//! without touching list data.

use sortboard_core::DropSide;
use thiserror::Error;

use crate::item::ItemId;

/// Precondition violations detected by the reorder engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("list {list} out of bounds ({lists} lists)")]
    ListOutOfBounds { list: usize, lists: usize },

    #[error("source index {index} out of bounds for list {list} (len {len})")]
    SourceOutOfBounds { list: usize, index: usize, len: usize },

    #[error("target index {index} ({side:?}) out of bounds for list {list} (len {len})")]
    TargetOutOfBounds {
        list: usize,
        index: usize,
        side: DropSide,
        len: usize,
    },
}

/// Which drag session precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateViolation {
    #[error("a drag session is already active")]
    AlreadyActive,
    #[error("no drag session is active")]
    NotActive,
    #[error("the drag session has no target list")]
    NoTargetList,
}

/// Drag session lifecycle errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid drag session state: {0}")]
    InvalidState(#[from] StateViolation),
}

/// Errors raised by [`Board`](crate::board::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Reorder(#[from] ReorderError),

    #[error("list {list} out of bounds ({lists} lists)")]
    ListOutOfBounds { list: usize, lists: usize },

    #[error("item {index} out of bounds for list {list} (len {len})")]
    ItemOutOfBounds { list: usize, index: usize, len: usize },

    #[error("drag source moved: expected {expected} at list {list} index {index}")]
    SourceMoved {
        list: usize,
        index: usize,
        expected: ItemId,
    },
}

impl BoardError {
    /// Whether this error came from the session lifecycle rather than data.
    #[must_use]
    pub fn is_state_violation(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_wraps_violation() {
        let err = SessionError::from(StateViolation::AlreadyActive);
        assert_eq!(
            err.to_string(),
            "invalid drag session state: a drag session is already active"
        );
    }

    #[test]
    fn board_error_is_transparent_over_reorder() {
        let err = BoardError::from(ReorderError::SourceOutOfBounds {
            list: 1,
            index: 9,
            len: 3,
        });
        assert_eq!(
            err.to_string(),
            "source index 9 out of bounds for list 1 (len 3)"
        );
        assert!(!err.is_state_violation());
    }

    #[test]
    fn state_violation_classification() {
        let err = BoardError::from(SessionError::from(StateViolation::NotActive));
        assert!(err.is_state_violation());
    }
}

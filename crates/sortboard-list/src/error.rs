#![forbid(unsafe_code)]

use sortboard_engine::BoardError;
use thiserror::Error;

use crate::slot::SlotKey;

/// Errors raised while routing host events to list views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("list {list} does not exist (board has {lists} lists)")]
    UnknownList { list: usize, lists: usize },
    #[error("list {list} has no rendered element for {key:?}")]
    MissingElement { list: usize, key: SlotKey },
    #[error("{surfaces} surfaces supplied for {lists} lists")]
    SurfaceCount { surfaces: usize, lists: usize },
}

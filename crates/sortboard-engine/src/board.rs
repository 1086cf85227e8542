#![forbid(unsafe_code)]

//! Board store: the lists plus the drag session that reorders them.
//!
//! [`Board`] is the single owner of list contents. Drag-over handling only
//! touches the session; [`Board::commit_drop`] is the one path that mutates
//! lists, and it validates the whole move before applying it.

use sortboard_core::{Axis, Point, PointerDirection, PointerDirectionTracker, Size};
use tracing::{debug, error, info};

use crate::error::{BoardError, SessionError, StateViolation};
use crate::item::{Item, ItemId};
use crate::reorder::{MoveRequest, apply_move};
use crate::session::{DragSession, DragSessionStore, DropPoint, SessionEffect};

/// Outcome of a committed drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub item_id: ItemId,
    pub from_list: usize,
    pub from_index: usize,
    pub to_list: usize,
    pub to_index: usize,
}

impl MoveRecord {
    /// Whether the item ended where it started.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.from_list == self.to_list && self.from_index == self.to_index
    }
}

/// A set of parallel lists with at most one active drag.
#[derive(Debug, Clone)]
pub struct Board<P> {
    lists: Vec<Vec<Item<P>>>,
    session: DragSessionStore,
    pointer: PointerDirectionTracker,
}

impl<P> Board<P> {
    /// Create a board laid out along `axis`.
    pub fn new(lists: Vec<Vec<Item<P>>>, axis: Axis) -> Self {
        Self::with_pointer_tracker(lists, PointerDirectionTracker::new(axis))
    }

    /// Create a board with a preconfigured pointer tracker.
    pub fn with_pointer_tracker(
        lists: Vec<Vec<Item<P>>>,
        pointer: PointerDirectionTracker,
    ) -> Self {
        Self {
            lists,
            session: DragSessionStore::new(),
            pointer,
        }
    }

    /// All lists, in board order.
    #[inline]
    pub fn lists(&self) -> &[Vec<Item<P>>] {
        &self.lists
    }

    /// One list by index.
    #[inline]
    pub fn list(&self, index: usize) -> Option<&[Item<P>]> {
        self.lists.get(index).map(Vec::as_slice)
    }

    /// Number of lists.
    #[inline]
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Consume the board, returning its lists.
    pub fn into_lists(self) -> Vec<Vec<Item<P>>> {
        self.lists
    }

    /// The active drag session, if any.
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.session()
    }

    /// Whether a drag is in progress.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// Session revision; changes only when the session changes observably.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.session.revision()
    }

    /// Feed a global pointer-move sample.
    pub fn pointer_moved(&mut self, point: Point) -> PointerDirection {
        self.pointer.record(point)
    }

    /// Current pointer travel direction.
    #[inline]
    pub fn pointer_direction(&self) -> PointerDirection {
        self.pointer.direction()
    }

    /// Start dragging item `index` of `list`.
    pub fn begin_drag(
        &mut self,
        list: usize,
        index: usize,
        dragged_size: Size,
    ) -> Result<SessionEffect, BoardError> {
        let items = self.checked_list(list)?;
        let item = items.get(index).ok_or(BoardError::ItemOutOfBounds {
            list,
            index,
            len: items.len(),
        })?;
        let item_id = item.id.clone();
        Ok(self.session.begin_drag(list, index, item_id, dragged_size)?)
    }

    /// Give drag focus to `list`.
    pub fn update_target(&mut self, list: usize) -> Result<SessionEffect, BoardError> {
        self.checked_list(list)?;
        Ok(self.session.update_target(list)?)
    }

    /// Drop list focus.
    pub fn clear_target(&mut self) -> Result<SessionEffect, BoardError> {
        Ok(self.session.clear_target()?)
    }

    /// Record the insertion point within the focused list.
    pub fn update_drop_position(&mut self, point: DropPoint) -> Result<SessionEffect, BoardError> {
        let list = self
            .session
            .session()
            .ok_or(SessionError::from(StateViolation::NotActive))?
            .target_list()
            .ok_or(SessionError::from(StateViolation::NoTargetList))?;
        let len = self.checked_list(list)?.len();
        let addressable = point.index < len || (len == 0 && point == DropPoint::start());
        if !addressable {
            return Err(BoardError::ItemOutOfBounds {
                list,
                index: point.index,
                len,
            });
        }
        Ok(self.session.update_drop_position(point)?)
    }

    /// Abandon the active drag without touching any list.
    pub fn cancel_drag(&mut self) -> SessionEffect {
        self.session.cancel_drag()
    }

    /// Apply the active drag to the lists and end the session.
    ///
    /// Returns `Ok(None)` when no list had focus (a drop outside every
    /// target). A missing drop point lands the item at the end of the
    /// focused list. On error the session is still cleared and no list is
    /// modified.
    pub fn commit_drop(&mut self) -> Result<Option<MoveRecord>, BoardError> {
        let session = self
            .session
            .take()
            .ok_or(SessionError::from(StateViolation::NotActive))?;

        let Some(target_list) = session.target_list() else {
            debug!("drop without a target list; nothing to apply");
            return Ok(None);
        };

        let result = self.apply_session(&session, target_list);
        match &result {
            Ok(record) => info!(
                item = %record.item_id,
                from_list = record.from_list,
                from_index = record.from_index,
                to_list = record.to_list,
                to_index = record.to_index,
                "drop committed"
            ),
            Err(err) => error!(%err, "drop rejected; lists left unchanged"),
        }
        result.map(Some)
    }

    fn apply_session(
        &mut self,
        session: &DragSession,
        target_list: usize,
    ) -> Result<MoveRecord, BoardError> {
        let source = session.source();
        let source_items = self.checked_list(source.list)?;
        match source_items.get(source.index) {
            Some(item) if item.id == source.item_id => {}
            _ => {
                return Err(BoardError::SourceMoved {
                    list: source.list,
                    index: source.index,
                    expected: source.item_id.clone(),
                });
            }
        }

        let target_len = self.checked_list(target_list)?.len();
        let point = session
            .drop_point()
            .unwrap_or_else(|| DropPoint::end_of(target_len));
        let request = MoveRequest {
            source_list: source.list,
            source_index: source.index,
            target_list,
            target_index: point.index,
            side: point.side,
        };
        let to_index = apply_move(&mut self.lists, &request)?;

        Ok(MoveRecord {
            item_id: source.item_id.clone(),
            from_list: source.list,
            from_index: source.index,
            to_list: target_list,
            to_index,
        })
    }

    fn checked_list(&self, list: usize) -> Result<&Vec<Item<P>>, BoardError> {
        self.lists.get(list).ok_or(BoardError::ListOutOfBounds {
            list,
            lists: self.lists.len(),
        })
    }
}

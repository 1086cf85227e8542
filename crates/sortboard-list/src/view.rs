#![forbid(unsafe_code)]

//! Board view: one [`Board`] plus one [`DraggableList`] per list, driven by
//! normalised host events.
//!
//! Hosts translate their native drag and pointer callbacks into
//! [`DragEvent`]s. [`BoardView::handle`] routes each event to the list it
//! names and then syncs every list's animator against the new board state.
//! Hosts that must lay out newly planned elements before animating (for
//! example a placeholder that needs a measured rect) call
//! [`BoardView::dispatch`] and [`BoardView::sync`] separately.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sortboard_core::{Point, PointerDirection, PointerDirectionTracker, Rect};
use sortboard_engine::{Board, Item, MoveRecord, SessionEffect};
use sortboard_reflow::{ReconcileOutcome, ReflowSurface, TransitionOutcome};
use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::error::ViewError;
use crate::list::DraggableList;
use crate::slot::{RenderSlot, SlotKey};

/// A host drag or pointer event, addressed by list index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "event", rename_all = "snake_case"))]
pub enum DragEvent {
    /// Item `index` of `list` started dragging.
    DragStart { list: usize, index: usize },
    /// The pointer is over item `index` of `list`.
    DragOver {
        list: usize,
        index: usize,
        item_rect: Rect,
        pointer: Point,
    },
    /// The drag entered the container of `list`.
    DragEnter { list: usize },
    /// The drag left the container of `list`.
    DragLeave {
        list: usize,
        list_rect: Rect,
        pointer: Point,
    },
    /// The dragged item was released over `list`.
    Drop { list: usize },
    /// The drag gesture ended, dropped or not.
    DragEnd,
    /// Global pointer movement, fed to the direction tracker.
    PointerMove { pointer: Point },
    /// A reflow transition finished on an element of `list`.
    TransitionEnd { list: usize, key: SlotKey },
}

impl DragEvent {
    /// The list this event addresses, if any.
    pub fn list(&self) -> Option<usize> {
        match self {
            Self::DragStart { list, .. }
            | Self::DragOver { list, .. }
            | Self::DragEnter { list }
            | Self::DragLeave { list, .. }
            | Self::Drop { list }
            | Self::TransitionEnd { list, .. } => Some(*list),
            Self::DragEnd | Self::PointerMove { .. } => None,
        }
    }
}

/// What handling one event did.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutcome {
    Session(SessionEffect),
    Dropped(Option<MoveRecord>),
    Pointer(PointerDirection),
    Transition(TransitionOutcome),
}

/// A board and its list views.
#[derive(Debug, Clone)]
pub struct BoardView<P> {
    board: Board<P>,
    lists: Vec<DraggableList>,
}

impl<P> BoardView<P> {
    /// Build a view over `lists` configured by `config`.
    pub fn new(lists: Vec<Vec<Item<P>>>, config: &BoardConfig) -> Self {
        let tracker = PointerDirectionTracker::with_capacity(config.axis, config.pointer_history);
        Self::from_board(Board::with_pointer_tracker(lists, tracker), config)
    }

    /// Wrap an existing board.
    pub fn from_board(board: Board<P>, config: &BoardConfig) -> Self {
        let lists = (0..board.list_count())
            .map(|index| DraggableList::new(index, config.axis, config.reflow.clone()))
            .collect();
        Self { board, lists }
    }

    #[inline]
    pub fn board(&self) -> &Board<P> {
        &self.board
    }

    #[inline]
    pub fn lists(&self) -> &[DraggableList] {
        &self.lists
    }

    pub fn list(&self, index: usize) -> Option<&DraggableList> {
        self.lists.get(index)
    }

    pub fn into_board(self) -> Board<P> {
        self.board
    }

    /// Render plan of list `index`.
    pub fn render_plan(&self, index: usize) -> Result<Vec<RenderSlot>, ViewError> {
        Ok(self.checked_list(index)?.render_plan(&self.board))
    }

    /// Route `event` and sync every list against the result.
    ///
    /// `surfaces` holds one surface per list, in board order.
    pub fn handle<S>(&mut self, event: DragEvent, surfaces: &mut [S]) -> Result<ViewOutcome, ViewError>
    where
        S: ReflowSurface<SlotKey>,
    {
        self.check_surfaces(surfaces)?;
        let outcome = self.dispatch(event, surfaces)?;
        if !matches!(outcome, ViewOutcome::Transition(_) | ViewOutcome::Pointer(_)) {
            self.sync(surfaces)?;
        }
        Ok(outcome)
    }

    /// Route `event` without syncing animators.
    pub fn dispatch<S>(&mut self, event: DragEvent, surfaces: &mut [S]) -> Result<ViewOutcome, ViewError>
    where
        S: ReflowSurface<SlotKey>,
    {
        self.check_surfaces(surfaces)?;
        trace!(?event, "dispatch");
        let board = &mut self.board;
        let outcome = match event {
            DragEvent::DragStart { list, index } => {
                let view = checked(&self.lists, list)?;
                ViewOutcome::Session(view.on_drag_start(board, index, &mut surfaces[list])?)
            }
            DragEvent::DragOver {
                list,
                index,
                item_rect,
                pointer,
            } => {
                let view = checked(&self.lists, list)?;
                ViewOutcome::Session(view.on_item_drag_over(board, index, item_rect, pointer)?)
            }
            DragEvent::DragEnter { list } => {
                ViewOutcome::Session(checked(&self.lists, list)?.on_drag_enter(board)?)
            }
            DragEvent::DragLeave {
                list,
                list_rect,
                pointer,
            } => {
                let view = checked(&self.lists, list)?;
                ViewOutcome::Session(view.on_drag_leave(board, list_rect, pointer)?)
            }
            DragEvent::Drop { list } => {
                let record = checked(&self.lists, list)?.on_drop(board)?;
                if let Some(record) = &record {
                    debug!(item = %record.item_id, to_list = record.to_list, "dropped");
                }
                ViewOutcome::Dropped(record)
            }
            DragEvent::DragEnd => ViewOutcome::Session(board.cancel_drag()),
            DragEvent::PointerMove { pointer } => ViewOutcome::Pointer(board.pointer_moved(pointer)),
            DragEvent::TransitionEnd { list, key } => {
                let lists = self.lists.len();
                let view = self
                    .lists
                    .get_mut(list)
                    .ok_or(ViewError::UnknownList { list, lists })?;
                ViewOutcome::Transition(view.on_transition_end(&key, &mut surfaces[list]))
            }
        };
        Ok(outcome)
    }

    /// Sync every list's animator with the board.
    pub fn sync<S>(&mut self, surfaces: &mut [S]) -> Result<Vec<ReconcileOutcome>, ViewError>
    where
        S: ReflowSurface<SlotKey>,
    {
        self.check_surfaces(surfaces)?;
        Ok(self
            .lists
            .iter_mut()
            .zip(surfaces.iter_mut())
            .map(|(view, surface)| view.sync(&self.board, surface))
            .collect())
    }

    fn checked_list(&self, list: usize) -> Result<&DraggableList, ViewError> {
        checked(&self.lists, list)
    }

    fn check_surfaces<S>(&self, surfaces: &[S]) -> Result<(), ViewError> {
        if surfaces.len() != self.lists.len() {
            return Err(ViewError::SurfaceCount {
                surfaces: surfaces.len(),
                lists: self.lists.len(),
            });
        }
        Ok(())
    }
}

fn checked(lists: &[DraggableList], list: usize) -> Result<&DraggableList, ViewError> {
    lists.get(list).ok_or(ViewError::UnknownList {
        list,
        lists: lists.len(),
    })
}

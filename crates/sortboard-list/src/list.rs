#![forbid(unsafe_code)]

//! One draggable list: translates host drag callbacks for a single list into
//! board session updates, and plans what the list renders.
//!
//! A [`DraggableList`] holds no item data. Items live in the [`Board`]; the
//! list only knows its index, its axis and its reflow animator.
//!
//! # Drag sensors
//!
//! Each rendered item acts as a drag-over sensor. The list container itself
//! receives enter/leave/drop:
//!
//! - Item drag-over classifies the pointer against the item's rect and
//!   stabilises the side with the board's pointer direction.
//! - Drag-enter on the container only matters when no item sensor has
//!   reported yet (an empty list, or the gap below the last item); it
//!   targets the end of the list.
//! - Drag-leave fires spuriously when the pointer crosses a child boundary,
//!   so focus is only cleared once the pointer is outside the list rect.

use sortboard_core::{Axis, DropSide, MeasurableElement, Point, Rect, classify, stabilize_side};
use sortboard_engine::{
    Board, BoardError, DragSession, DropPoint, Item, MoveRecord, SessionEffect,
    SessionNoopReason, insert_at, landing_index,
};
use sortboard_reflow::{
    ReconcileOptions, ReconcileOutcome, ReflowAnimator, ReflowConfig, ReflowSurface,
    TransitionOutcome,
};
use tracing::{debug, trace};

use crate::error::ViewError;
use crate::slot::{RenderSlot, SlotKey};

const IDLE: SessionEffect = SessionEffect::Noop {
    reason: SessionNoopReason::IdleWithoutActiveDrag,
};

/// View-side state of one list on a board.
#[derive(Debug, Clone)]
pub struct DraggableList {
    index: usize,
    axis: Axis,
    animator: ReflowAnimator<SlotKey>,
}

impl DraggableList {
    /// Create the view for list `index`. The animator follows `axis`.
    pub fn new(index: usize, axis: Axis, reflow: ReflowConfig) -> Self {
        Self {
            index,
            axis,
            animator: ReflowAnimator::new(reflow.with_axis(axis)),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn animator(&self) -> &ReflowAnimator<SlotKey> {
        &self.animator
    }

    /// Keys the host should display right now, honouring running reflows.
    #[inline]
    pub fn rendered(&self) -> &[SlotKey] {
        self.animator.rendered()
    }

    /// Start dragging item `item_index`, measuring its rendered element.
    pub fn on_drag_start<P, S>(
        &self,
        board: &mut Board<P>,
        item_index: usize,
        surface: &mut S,
    ) -> Result<SessionEffect, ViewError>
    where
        S: ReflowSurface<SlotKey>,
    {
        let items = self.items(board)?;
        let key = items
            .get(item_index)
            .map(|item| SlotKey::Item(item.id.clone()))
            .ok_or(BoardError::ItemOutOfBounds {
                list: self.index,
                index: item_index,
                len: items.len(),
            })?;
        let element = surface
            .element_mut(&key)
            .ok_or_else(|| ViewError::MissingElement {
                list: self.index,
                key: key.clone(),
            })?;
        let size = element.bounding_rect().size();
        Ok(board.begin_drag(self.index, item_index, size)?)
    }

    /// The pointer is over item `item_index`, whose rect is `item_rect`.
    pub fn on_item_drag_over<P>(
        &self,
        board: &mut Board<P>,
        item_index: usize,
        item_rect: Rect,
        pointer: Point,
    ) -> Result<SessionEffect, ViewError> {
        let Some(session) = board.session() else {
            trace!(list = self.index, "drag-over without an active drag");
            return Ok(IDLE);
        };
        let raw = classify(item_rect, self.axis, pointer.x, pointer.y);
        let previous = self.previous_side(session, item_index);
        let side = stabilize_side(previous, raw, board.pointer_direction());
        if previous.is_some_and(|prev| prev != raw && prev == side) {
            trace!(list = self.index, item_index, ?raw, ?side, "side flip suppressed");
        }

        board.update_target(self.index)?;
        Ok(board.update_drop_position(DropPoint::new(item_index, side))?)
    }

    /// The drag entered this list's container.
    pub fn on_drag_enter<P>(&self, board: &mut Board<P>) -> Result<SessionEffect, ViewError> {
        let Some(session) = board.session() else {
            return Ok(IDLE);
        };
        if session.targets(self.index) && session.drop_point().is_some() {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::DropPointUnchanged,
            });
        }
        let len = self.items(board)?.len();
        board.update_target(self.index)?;
        Ok(board.update_drop_position(DropPoint::end_of(len))?)
    }

    /// The drag left this list's container, with the pointer at `pointer`.
    pub fn on_drag_leave<P>(
        &self,
        board: &mut Board<P>,
        list_rect: Rect,
        pointer: Point,
    ) -> Result<SessionEffect, ViewError> {
        let Some(session) = board.session() else {
            return Ok(IDLE);
        };
        if list_rect.contains(pointer) {
            trace!(list = self.index, "leave into a child element; ignored");
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::TargetUnchanged,
            });
        }
        if !session.targets(self.index) {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::TargetUnchanged,
            });
        }
        Ok(board.clear_target()?)
    }

    /// The item was dropped on this list.
    ///
    /// A drop landing here while another list (or no position) has focus
    /// goes to the end of this list.
    pub fn on_drop<P>(&self, board: &mut Board<P>) -> Result<Option<MoveRecord>, ViewError> {
        let Some(session) = board.session() else {
            debug!(list = self.index, "drop without an active drag");
            return Ok(None);
        };
        if !session.targets(self.index) || session.drop_point().is_none() {
            let len = self.items(board)?.len();
            board.update_target(self.index)?;
            board.update_drop_position(DropPoint::end_of(len))?;
        }
        Ok(board.commit_drop()?)
    }

    /// The drag gesture ended; abandon whatever was not committed.
    pub fn on_drag_end<P>(&self, board: &mut Board<P>) -> SessionEffect {
        board.cancel_drag()
    }

    /// What this list shows for the current board state.
    pub fn render_plan<P>(&self, board: &Board<P>) -> Vec<RenderSlot> {
        let items = board.list(self.index).unwrap_or_default();
        let session = board.session();
        let dragged = session
            .map(|s| s.source())
            .filter(|source| source.list == self.index)
            .map(|source| source.index);

        let mut slots: Vec<RenderSlot> = items
            .iter()
            .enumerate()
            .map(|(index, item)| RenderSlot::Item {
                id: item.id.clone(),
                index,
                dimmed: dragged == Some(index),
            })
            .collect();

        let Some(session) = session.filter(|s| s.targets(self.index)) else {
            return slots;
        };
        if let Some(point) = session.drop_point()
            && !self.lands_on_source(session, point, items.len())
        {
            let placeholder = RenderSlot::Placeholder {
                size: session.dragged_size(),
            };
            insert_at(&mut slots, placeholder, point.index, point.side);
        }
        slots
    }

    /// Feed the current plan to the animator.
    pub fn sync<P, S>(&mut self, board: &Board<P>, surface: &mut S) -> ReconcileOutcome
    where
        S: ReflowSurface<SlotKey>,
    {
        let keys: Vec<SlotKey> = self.render_plan(board).iter().map(RenderSlot::key).collect();
        let dragging = board.is_dragging();

        // The dropped item takes over the placeholder's slot; there is no
        // motion to animate. A placeholder that only sits in a queued order
        // never reached the screen, so the running reflow is left alone.
        if !dragging
            && self.animator.running().contains(&SlotKey::Placeholder)
            && !keys.contains(&SlotKey::Placeholder)
        {
            debug!(list = self.index, "drag finished; placeholder resolved");
            return self.animator.snap(&keys, surface);
        }

        self.animator.reconcile(
            &keys,
            surface,
            ReconcileOptions {
                skip_removal_animation: dragging,
            },
        )
    }

    /// Forward a finished transition to the animator.
    pub fn on_transition_end<S>(&mut self, key: &SlotKey, surface: &mut S) -> TransitionOutcome
    where
        S: ReflowSurface<SlotKey>,
    {
        self.animator.on_transition_end(key, surface)
    }

    fn items<'b, P>(&self, board: &'b Board<P>) -> Result<&'b [Item<P>], ViewError> {
        board.list(self.index).ok_or(ViewError::UnknownList {
            list: self.index,
            lists: board.list_count(),
        })
    }

    fn previous_side(&self, session: &DragSession, item_index: usize) -> Option<DropSide> {
        session
            .drop_point()
            .filter(|point| session.targets(self.index) && point.index == item_index)
            .map(|point| point.side)
    }

    /// Whether dropping at `point` would leave the dragged item where it is.
    fn lands_on_source(&self, session: &DragSession, point: DropPoint, len: usize) -> bool {
        let source = session.source();
        source.list == self.index
            && landing_index(source.index, point.index, point.side, len) == source.index
    }
}

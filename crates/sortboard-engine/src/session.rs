#![forbid(unsafe_code)]

//! Drag session state: the authoritative record of one in-progress drag.
//!
//! ```text
//! Idle --begin_drag--> Active --commit/cancel--> Idle
//!                       |  ^
//!                       +--+ update_target / update_drop_position / clear_target
//! ```
//!
//! # Invariants
//!
//! 1. A [`DragSession`] exists iff a drag gesture is in progress. It is
//!    created whole by `begin_drag` and removed whole by `take` or
//!    `cancel_drag`; no field is ever left half-cleared.
//! 2. The session's source never changes while it exists.
//! 3. `begin_drag` on an active store fails and leaves the existing session
//!    untouched.
//! 4. Updates that would not change the session are reported as
//!    [`SessionEffect::Noop`] and do not bump [`DragSessionStore::revision`].
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | Second `begin_drag` | Host missed a drop/drag-end | `InvalidState(AlreadyActive)`, logged at error |
//! | Update while idle | Stray drag-over after drop | `InvalidState(NotActive)` |
//! | Drop point without target | Sensor fired before focus was set | `InvalidState(NoTargetList)` |

use sortboard_core::{DropSide, Size};
use tracing::{debug, error, trace};

use crate::error::{SessionError, StateViolation};
use crate::item::ItemId;

/// Where the drag started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSource {
    pub list: usize,
    pub index: usize,
    pub item_id: ItemId,
}

/// An insertion point relative to an item of the target list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropPoint {
    pub index: usize,
    pub side: DropSide,
}

impl DropPoint {
    /// Create a drop point.
    #[must_use]
    pub const fn new(index: usize, side: DropSide) -> Self {
        Self { index, side }
    }

    /// The first slot of a list (also the only slot of an empty list).
    #[must_use]
    pub const fn start() -> Self {
        Self::new(0, DropSide::Before)
    }

    /// The slot after the last item of a list with `len` items.
    #[must_use]
    pub const fn end_of(len: usize) -> Self {
        if len == 0 {
            Self::start()
        } else {
            Self::new(len - 1, DropSide::After)
        }
    }

    /// Index a new item would occupy if inserted here.
    #[must_use]
    pub const fn insertion_index(&self) -> usize {
        self.index + self.side.offset()
    }
}

/// One in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    source: DragSource,
    target_list: Option<usize>,
    drop_point: Option<DropPoint>,
    dragged_size: Size,
}

impl DragSession {
    /// Where the drag began.
    #[inline]
    pub fn source(&self) -> &DragSource {
        &self.source
    }

    /// List that currently has drag focus, if any.
    #[inline]
    pub fn target_list(&self) -> Option<usize> {
        self.target_list
    }

    /// Last computed insertion point within the target list.
    #[inline]
    pub fn drop_point(&self) -> Option<DropPoint> {
        self.drop_point
    }

    /// Size of the dragged element, captured at drag start.
    #[inline]
    pub fn dragged_size(&self) -> Size {
        self.dragged_size
    }

    /// Whether `list` currently has drag focus.
    #[inline]
    pub fn targets(&self, list: usize) -> bool {
        self.target_list == Some(list)
    }
}

/// Why an operation left the store unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionNoopReason {
    TargetUnchanged,
    DropPointUnchanged,
    NoTargetToClear,
    IdleWithoutActiveDrag,
}

/// Transition effect emitted by one store operation.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    Began {
        source: DragSource,
        dragged_size: Size,
    },
    TargetChanged {
        previous: Option<usize>,
        current: Option<usize>,
    },
    DropPointChanged {
        list: usize,
        point: DropPoint,
    },
    Ended {
        session: DragSession,
    },
    Noop {
        reason: SessionNoopReason,
    },
}

impl SessionEffect {
    /// Whether the store changed observably.
    #[must_use]
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Noop { .. })
    }
}

/// Owner of the (at most one) drag session of a board.
#[derive(Debug, Clone, Default)]
pub struct DragSessionStore {
    session: Option<DragSession>,
    revision: u64,
}

impl DragSessionStore {
    /// Create an idle store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[inline]
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Counter bumped by every observable change.
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Start a drag from `index` of `list`.
    pub fn begin_drag(
        &mut self,
        list: usize,
        index: usize,
        item_id: ItemId,
        dragged_size: Size,
    ) -> Result<SessionEffect, SessionError> {
        if let Some(active) = &self.session {
            error!(
                active_list = active.source.list,
                active_index = active.source.index,
                list,
                index,
                "begin_drag while a drag session is active"
            );
            return Err(StateViolation::AlreadyActive.into());
        }

        let source = DragSource {
            list,
            index,
            item_id,
        };
        debug!(list, index, item = %source.item_id, "drag began");
        self.session = Some(DragSession {
            source: source.clone(),
            target_list: None,
            drop_point: None,
            dragged_size,
        });
        self.bump();
        Ok(SessionEffect::Began {
            source,
            dragged_size,
        })
    }

    /// Give drag focus to `list`.
    ///
    /// Moving focus to another list forgets the drop point, which addressed
    /// the previous list.
    pub fn update_target(&mut self, list: usize) -> Result<SessionEffect, SessionError> {
        let session = self.session.as_mut().ok_or(StateViolation::NotActive)?;
        if session.target_list == Some(list) {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::TargetUnchanged,
            });
        }

        let previous = session.target_list.replace(list);
        session.drop_point = None;
        debug!(?previous, list, "drag target changed");
        self.bump();
        Ok(SessionEffect::TargetChanged {
            previous,
            current: Some(list),
        })
    }

    /// Drop list focus, e.g. when the pointer has left every list.
    pub fn clear_target(&mut self) -> Result<SessionEffect, SessionError> {
        let session = self.session.as_mut().ok_or(StateViolation::NotActive)?;
        let Some(previous) = session.target_list.take() else {
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::NoTargetToClear,
            });
        };

        session.drop_point = None;
        debug!(previous, "drag target cleared");
        self.bump();
        Ok(SessionEffect::TargetChanged {
            previous: Some(previous),
            current: None,
        })
    }

    /// Record the latest insertion point within the target list.
    pub fn update_drop_position(&mut self, point: DropPoint) -> Result<SessionEffect, SessionError> {
        let session = self.session.as_mut().ok_or(StateViolation::NotActive)?;
        let list = session.target_list.ok_or(StateViolation::NoTargetList)?;
        if session.drop_point == Some(point) {
            trace!(list, index = point.index, side = ?point.side, "drop point unchanged");
            return Ok(SessionEffect::Noop {
                reason: SessionNoopReason::DropPointUnchanged,
            });
        }

        session.drop_point = Some(point);
        debug!(list, index = point.index, side = ?point.side, "drop point changed");
        self.bump();
        Ok(SessionEffect::DropPointChanged { list, point })
    }

    /// Remove and return the session, leaving the store idle.
    pub fn take(&mut self) -> Option<DragSession> {
        let session = self.session.take();
        if session.is_some() {
            self.bump();
        }
        session
    }

    /// Abandon the active drag, if any. Never fails.
    pub fn cancel_drag(&mut self) -> SessionEffect {
        match self.take() {
            Some(session) => {
                debug!(
                    list = session.source.list,
                    index = session.source.index,
                    "drag canceled"
                );
                SessionEffect::Ended { session }
            }
            None => SessionEffect::Noop {
                reason: SessionNoopReason::IdleWithoutActiveDrag,
            },
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

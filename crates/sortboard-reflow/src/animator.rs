#![forbid(unsafe_code)]

//! Transition-gated reconciliation of a list's rendered order.
//!
//! When the list contents change, the host keeps showing the previous order
//! while the animator slides neighbours by one slot (and fades a removed
//! element). The new order is revealed only once every scheduled transition
//! has reported completion, so elements never jump mid-animation.
//!
//! # State Machine
//!
//! ```text
//!             reconcile (animatable change)
//!  Settled ─────────────────────────────────────► Reconciling { kind, pending }
//!     ▲                                                    │
//!     │          on_transition_end (pending reaches 0)     │
//!     └────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `pending` equals the number of elements still carrying a transition
//!    listener; each listener fires at most once.
//! 2. Styles applied during a reconciliation are all cleared before the new
//!    order is revealed.
//! 3. A reconcile request arriving while `Reconciling` never interrupts the
//!    running animation; the latest such request is replayed on settle.
//!
//! # Failure Modes
//!
//! | Condition | Behavior |
//! |-----------|----------|
//! | Element to animate missing from the surface | Snap to the new order |
//! | More than one item added or removed at once | Snap to the new order |
//! | Same length but different membership | Snap to the new order |
//! | Request drops an element still sliding into the running target | Snap to the requested order |
//! | Transition end for a key without a listener | Ignored |
//! | Animation disabled in config | Reveal immediately |

use std::fmt::Debug;
use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use sortboard_core::{InlineStyle, MeasurableElement};
use tracing::{debug, trace, warn};

use crate::config::{ReflowConfig, SlotExtent};
use crate::surface::ReflowSurface;

/// What kind of change is being animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowKind {
    /// One element appeared at `index` of the new order.
    Insertion { index: usize },
    /// One element disappeared from `index` of the previous order.
    Removal { index: usize },
    /// Same elements, new order; `moved` elements changed position.
    Reorder { moved: usize },
}

/// Animator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReflowState {
    /// The rendered order matches the last reconciled order.
    #[default]
    Settled,
    /// Waiting for `pending` transitions before revealing the new order.
    Reconciling { kind: ReflowKind, pending: usize },
}

/// Per-request reconciliation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOptions {
    /// Reveal removals immediately instead of fading them out. Set while a
    /// drag is in progress so the dragged element's source slot collapses
    /// without a fade.
    pub skip_removal_animation: bool,
}

/// Why a change was revealed without animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapReason {
    Disabled,
    RemovalSkipped,
    MissingElement,
    UnsupportedChange,
    /// A request dropped an element whose transition was still running.
    InFlightRemoved,
    Requested,
}

/// Result of [`ReflowAnimator::reconcile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// First order seen; rendered as-is.
    Initialized,
    /// Order identical to the last reconciled one.
    Unchanged,
    /// Deferred until the running reconciliation settles.
    Queued,
    /// Transitions scheduled.
    Animating { kind: ReflowKind, pending: usize },
    /// Recognised change with nothing to move; revealed immediately.
    Revealed { kind: ReflowKind },
    /// Revealed immediately without animation.
    Snapped { reason: SnapReason },
}

/// Result of [`ReflowAnimator::on_transition_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The key had no registered listener.
    Ignored,
    /// Still waiting for `remaining` transitions.
    Pending { remaining: usize },
    /// Last transition finished; the new order is rendered.
    Settled,
}

enum Change<K> {
    Insertion { key: K, index: usize },
    Removal { key: K, index: usize },
    Reorder,
}

/// Animates one list between consecutive orders of its keys.
#[derive(Debug, Clone)]
pub struct ReflowAnimator<K> {
    config: ReflowConfig,
    committed: Option<Vec<K>>,
    rendered: Vec<K>,
    target: Vec<K>,
    state: ReflowState,
    styled: Vec<K>,
    listening: AHashSet<K>,
    queued: Option<(Vec<K>, ReconcileOptions)>,
}

impl<K> Default for ReflowAnimator<K>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new(ReflowConfig::default())
    }
}

impl<K> ReflowAnimator<K>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new(config: ReflowConfig) -> Self {
        Self {
            config,
            committed: None,
            rendered: Vec::new(),
            target: Vec::new(),
            state: ReflowState::Settled,
            styled: Vec::new(),
            listening: AHashSet::new(),
            queued: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &ReflowConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> ReflowState {
        self.state
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.state == ReflowState::Settled
    }

    /// Transitions still outstanding.
    pub fn pending(&self) -> usize {
        match self.state {
            ReflowState::Settled => 0,
            ReflowState::Reconciling { pending, .. } => pending,
        }
    }

    /// The order the host should currently display.
    ///
    /// While an insertion is running this omits the inserted key; while a
    /// removal or reorder is running it is the previous order (including the
    /// fading key).
    #[inline]
    pub fn rendered(&self) -> &[K] {
        &self.rendered
    }

    /// The order being revealed: the rendered order when settled, else the
    /// target of the running reconciliation. Queued requests are ignored.
    pub fn running(&self) -> &[K] {
        if self.is_settled() {
            &self.rendered
        } else {
            &self.target
        }
    }

    /// The most recently reconciled order, including a queued one.
    pub fn latest(&self) -> &[K] {
        match &self.queued {
            Some((order, _)) => order,
            None => self.running(),
        }
    }

    /// Whether a request is waiting for the current animation to settle.
    #[inline]
    pub fn has_queued(&self) -> bool {
        self.queued.is_some()
    }

    /// Bring the rendered order in line with `current`, animating the change
    /// when it is a single insertion, a single removal or a reorder.
    pub fn reconcile<S>(
        &mut self,
        current: &[K],
        surface: &mut S,
        options: ReconcileOptions,
    ) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        if !self.is_settled() {
            let requested: AHashSet<&K> = current.iter().collect();
            if let Some(key) = self
                .target
                .iter()
                .find(|key| self.listening.contains(*key) && !requested.contains(key))
            {
                // Its transition end may never arrive once the host stops
                // rendering it.
                warn!(?key, "element dropped while its transition runs; snapping");
                return self.snap_to(current, surface, SnapReason::InFlightRemoved);
            }
            trace!(len = current.len(), "reconciliation in flight; queueing");
            self.queued = Some((current.to_vec(), options));
            return ReconcileOutcome::Queued;
        }

        let Some(previous) = self.committed.as_deref() else {
            self.reveal(current.to_vec());
            return ReconcileOutcome::Initialized;
        };
        if previous == current {
            return ReconcileOutcome::Unchanged;
        }
        if !self.config.enabled {
            return self.snap_to(current, surface, SnapReason::Disabled);
        }

        let Some(change) = classify_change(previous, current) else {
            warn!(
                previous = previous.len(),
                current = current.len(),
                "list changed in a way that cannot be animated; snapping"
            );
            return self.snap_to(current, surface, SnapReason::UnsupportedChange);
        };

        match change {
            Change::Insertion { key, index } => self.start_insertion(current, key, index, surface),
            Change::Removal { key, index } => {
                if options.skip_removal_animation {
                    debug!(?key, index, "removal during drag; revealing immediately");
                    return self.snap_to(current, surface, SnapReason::RemovalSkipped);
                }
                self.start_removal(current, key, index, surface)
            }
            Change::Reorder => self.start_reorder(current, surface),
        }
    }

    /// Report that `key`'s transition finished.
    pub fn on_transition_end<S>(&mut self, key: &K, surface: &mut S) -> TransitionOutcome
    where
        S: ReflowSurface<K>,
    {
        let ReflowState::Reconciling { kind, pending } = self.state else {
            return TransitionOutcome::Ignored;
        };
        if !self.listening.remove(key) {
            trace!(?key, "transition end without listener; ignored");
            return TransitionOutcome::Ignored;
        }
        if let Some(element) = surface.element_mut(key) {
            element.unlisten_transition_end();
        }

        let remaining = pending.saturating_sub(1);
        if remaining > 0 {
            self.state = ReflowState::Reconciling {
                kind,
                pending: remaining,
            };
            return TransitionOutcome::Pending { remaining };
        }

        self.finish(surface);
        debug!(?kind, "reflow settled");
        if let Some((order, options)) = self.queued.take() {
            self.reconcile(&order, surface, options);
        }
        TransitionOutcome::Settled
    }

    /// Abandon any running animation and render `current` immediately.
    pub fn snap<S>(&mut self, current: &[K], surface: &mut S) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        self.snap_to(current, surface, SnapReason::Requested)
    }

    fn start_insertion<S>(
        &mut self,
        current: &[K],
        key: K,
        index: usize,
        surface: &mut S,
    ) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        let Some(extent) = self.slot_extent(surface, &key) else {
            return self.snap_missing(current, surface, &key);
        };
        let style = self.slide(extent);
        let motions: Vec<(K, InlineStyle)> = current[index + 1..]
            .iter()
            .map(|k| (k.clone(), style))
            .collect();

        let mut rendered = current.to_vec();
        rendered.remove(index);
        self.start(
            ReflowKind::Insertion { index },
            motions,
            rendered,
            current.to_vec(),
            surface,
        )
    }

    fn start_removal<S>(
        &mut self,
        current: &[K],
        key: K,
        index: usize,
        surface: &mut S,
    ) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        let Some(extent) = self.slot_extent(surface, &key) else {
            return self.snap_missing(current, surface, &key);
        };
        let previous = self.committed.clone().unwrap_or_default();
        let slide = self.slide(-extent);
        let mut motions = Vec::with_capacity(previous.len() - index);
        motions.push((key, InlineStyle::fade_out(self.config.transition())));
        motions.extend(previous[index + 1..].iter().map(|k| (k.clone(), slide)));

        self.start(
            ReflowKind::Removal { index },
            motions,
            previous,
            current.to_vec(),
            surface,
        )
    }

    fn start_reorder<S>(&mut self, current: &[K], surface: &mut S) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        let previous = self.committed.clone().unwrap_or_default();
        let old_index: AHashMap<&K, usize> =
            previous.iter().enumerate().map(|(i, k)| (k, i)).collect();

        let mut motions = Vec::new();
        for (new, key) in current.iter().enumerate() {
            let Some(&old) = old_index.get(key) else {
                continue;
            };
            if old == new {
                continue;
            }
            let Some(extent) = self.slot_extent(surface, key) else {
                return self.snap_missing(current, surface, key);
            };
            let direction = if new > old { 1.0 } else { -1.0 };
            motions.push((key.clone(), self.slide(direction * extent)));
        }

        let moved = motions.len();
        self.start(
            ReflowKind::Reorder { moved },
            motions,
            previous,
            current.to_vec(),
            surface,
        )
    }

    fn start<S>(
        &mut self,
        kind: ReflowKind,
        motions: Vec<(K, InlineStyle)>,
        rendered: Vec<K>,
        target: Vec<K>,
        surface: &mut S,
    ) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        if let Some((missing, _)) = motions
            .iter()
            .find(|(key, _)| surface.element_mut(key).is_none())
        {
            let missing = missing.clone();
            return self.snap_missing(&target, surface, &missing);
        }

        if motions.is_empty() {
            debug!(?kind, "nothing to slide; revealing");
            self.reveal(target);
            return ReconcileOutcome::Revealed { kind };
        }

        for (key, style) in motions {
            if let Some(element) = surface.element_mut(&key) {
                element.set_style(style);
                element.listen_transition_end();
            }
            self.listening.insert(key.clone());
            self.styled.push(key);
        }
        let pending = self.listening.len();
        debug!(?kind, pending, "reflow started");
        self.rendered = rendered;
        self.target = target;
        self.state = ReflowState::Reconciling { kind, pending };
        ReconcileOutcome::Animating { kind, pending }
    }

    fn slide(&self, offset: f32) -> InlineStyle {
        let (dx, dy) = self.config.axis.translation(offset);
        InlineStyle::translate(dx, dy, self.config.transition())
    }

    fn slot_extent<S>(&self, surface: &mut S, key: &K) -> Option<f32>
    where
        S: ReflowSurface<K>,
    {
        match self.config.slot_extent {
            SlotExtent::Fixed(extent) => Some(extent),
            SlotExtent::Measured => surface
                .element_mut(key)
                .map(|element| element.bounding_rect().extent(self.config.axis)),
        }
    }

    fn snap_missing<S>(&mut self, current: &[K], surface: &mut S, key: &K) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        warn!(?key, "element missing from surface; snapping");
        self.snap_to(current, surface, SnapReason::MissingElement)
    }

    fn snap_to<S>(&mut self, current: &[K], surface: &mut S, reason: SnapReason) -> ReconcileOutcome
    where
        S: ReflowSurface<K>,
    {
        self.release(surface);
        self.queued = None;
        self.reveal(current.to_vec());
        ReconcileOutcome::Snapped { reason }
    }

    fn finish<S>(&mut self, surface: &mut S)
    where
        S: ReflowSurface<K>,
    {
        self.release(surface);
        let target = std::mem::take(&mut self.target);
        self.reveal(target);
    }

    /// Clear every applied style and outstanding listener.
    fn release<S>(&mut self, surface: &mut S)
    where
        S: ReflowSurface<K>,
    {
        for key in self.styled.drain(..) {
            if let Some(element) = surface.element_mut(&key) {
                element.clear_style();
            }
        }
        for key in self.listening.drain() {
            if let Some(element) = surface.element_mut(&key) {
                element.unlisten_transition_end();
            }
        }
    }

    fn reveal(&mut self, order: Vec<K>) {
        self.committed = Some(order.clone());
        self.rendered = order;
        self.target.clear();
        self.state = ReflowState::Settled;
    }
}

/// Recognise a single insertion, a single removal or a pure reorder.
fn classify_change<K>(previous: &[K], current: &[K]) -> Option<Change<K>>
where
    K: Clone + Eq + Hash,
{
    let previous_keys: AHashSet<&K> = previous.iter().collect();
    let current_keys: AHashSet<&K> = current.iter().collect();
    if previous_keys.len() != previous.len() || current_keys.len() != current.len() {
        return None;
    }

    if current.len() == previous.len() + 1 {
        let mut added = current
            .iter()
            .enumerate()
            .filter(|(_, key)| !previous_keys.contains(key));
        let (index, key) = added.next()?;
        return added.next().is_none().then(|| Change::Insertion {
            key: key.clone(),
            index,
        });
    }

    if previous.len() == current.len() + 1 {
        let mut removed = previous
            .iter()
            .enumerate()
            .filter(|(_, key)| !current_keys.contains(key));
        let (index, key) = removed.next()?;
        return removed.next().is_none().then(|| Change::Removal {
            key: key.clone(),
            index,
        });
    }

    (previous.len() == current.len() && previous_keys == current_keys).then_some(Change::Reorder)
}

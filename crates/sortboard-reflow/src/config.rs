#![forbid(unsafe_code)]

//! Reflow animation parameters.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sortboard_core::Axis;

/// Slot extent used when the host does not measure elements.
pub const DEFAULT_SLOT_EXTENT: f32 = 126.0;

/// Default transition length in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 250;

/// How far a neighbour travels when the list gains or loses one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotExtent {
    /// Every slot has this extent along the list axis.
    Fixed(f32),
    /// Use the extent of the element entering, leaving, or moving.
    Measured,
}

impl Default for SlotExtent {
    fn default() -> Self {
        Self::Fixed(DEFAULT_SLOT_EXTENT)
    }
}

/// Configuration for [`ReflowAnimator`](crate::ReflowAnimator).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReflowConfig {
    /// When false every change is revealed immediately.
    pub enabled: bool,
    /// Direction elements travel in.
    pub axis: Axis,
    /// Travel distance per slot.
    pub slot_extent: SlotExtent,
    /// Transition length in milliseconds.
    pub transition_ms: u64,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            axis: Axis::Block,
            slot_extent: SlotExtent::default(),
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl ReflowConfig {
    /// A configuration that never animates.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set the list axis.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the slot extent policy.
    #[must_use]
    pub fn with_slot_extent(mut self, slot_extent: SlotExtent) -> Self {
        self.slot_extent = slot_extent;
        self
    }

    /// Set the transition length.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition_ms = u64::try_from(transition.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Transition length as a [`Duration`].
    #[inline]
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_card_layout() {
        let config = ReflowConfig::default();
        assert!(config.enabled);
        assert_eq!(config.axis, Axis::Block);
        assert_eq!(config.slot_extent, SlotExtent::Fixed(126.0));
        assert_eq!(config.transition(), Duration::from_millis(250));
    }

    #[test]
    fn builders_override_fields() {
        let config = ReflowConfig::disabled()
            .with_axis(Axis::Inline)
            .with_slot_extent(SlotExtent::Measured)
            .with_transition(Duration::from_millis(80));
        assert!(!config.enabled);
        assert_eq!(config.axis, Axis::Inline);
        assert_eq!(config.slot_extent, SlotExtent::Measured);
        assert_eq!(config.transition_ms, 80);
    }
}

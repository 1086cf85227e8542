#![forbid(unsafe_code)]

//! Render slots: what one list shows, in order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use sortboard_core::Size;
use sortboard_engine::ItemId;

/// Identity of one rendered element of a list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SlotKey {
    Item(ItemId),
    /// The drop-zone placeholder; at most one per list.
    Placeholder,
}

impl SlotKey {
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// One entry of a list's render plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "slot", rename_all = "snake_case"))]
pub enum RenderSlot {
    /// A list item. `dimmed` marks the item being dragged.
    Item {
        id: ItemId,
        index: usize,
        dimmed: bool,
    },
    /// Where the dragged item would land, sized like it.
    Placeholder { size: Size },
}

impl RenderSlot {
    pub fn key(&self) -> SlotKey {
        match self {
            Self::Item { id, .. } => SlotKey::Item(id.clone()),
            Self::Placeholder { .. } => SlotKey::Placeholder,
        }
    }
}

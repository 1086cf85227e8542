//! Headless rendering: elements with computed rects whose transitions finish
//! as soon as they are drained.

use std::collections::HashMap;

use sortboard::{
    BoardView, DragEvent, InlineStyle, MeasurableElement, Rect, RenderSlot, SlotKey,
};
use tracing::trace;

use crate::error::Result;

pub const CARD_WIDTH: f32 = 280.0;
pub const CARD_HEIGHT: f32 = 126.0;
pub const COLUMN_PITCH: f32 = 300.0;
pub const COLUMN_HEIGHT: f32 = 800.0;

/// Upper bound on drain rounds; each round settles at most one queued
/// reconciliation per list.
const MAX_DRAIN_ROUNDS: usize = 16;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessElement {
    pub rect: Rect,
    pub style: Option<InlineStyle>,
    pub listening: bool,
}

impl MeasurableElement for HeadlessElement {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn set_style(&mut self, style: InlineStyle) {
        self.style = Some(style);
    }

    fn clear_style(&mut self) {
        self.style = None;
    }

    fn listen_transition_end(&mut self) {
        self.listening = true;
    }

    fn unlisten_transition_end(&mut self) {
        self.listening = false;
    }
}

pub type HeadlessSurface = HashMap<SlotKey, HeadlessElement>;

/// Rect of slot `index` in column `list`.
pub fn slot_rect(list: usize, index: usize) -> Rect {
    Rect::new(
        list as f32 * COLUMN_PITCH,
        index as f32 * CARD_HEIGHT,
        CARD_WIDTH,
        CARD_HEIGHT,
    )
}

/// Rect of column `list`.
pub fn column_rect(list: usize) -> Rect {
    Rect::new(list as f32 * COLUMN_PITCH, 0.0, CARD_WIDTH, COLUMN_HEIGHT)
}

/// One empty surface per list.
pub fn surfaces_for<P>(view: &BoardView<P>) -> Vec<HeadlessSurface> {
    vec![HeadlessSurface::new(); view.lists().len()]
}

/// Place every planned slot at its position in the plan. Elements no longer
/// planned keep their rect so a fading removal can still be measured.
pub fn layout<P>(view: &BoardView<P>, surfaces: &mut [HeadlessSurface]) -> Result<()> {
    for (list, surface) in surfaces.iter_mut().enumerate() {
        for (index, slot) in view.render_plan(list)?.iter().enumerate() {
            let mut rect = slot_rect(list, index);
            if let RenderSlot::Placeholder { size } = slot {
                rect.height = size.height;
            }
            surface.entry(slot.key()).or_default().rect = rect;
        }
    }
    Ok(())
}

/// Complete every outstanding transition until all lists settle.
pub fn drain<P>(view: &mut BoardView<P>, surfaces: &mut [HeadlessSurface]) -> Result<usize> {
    let mut fired = 0;
    for _ in 0..MAX_DRAIN_ROUNDS {
        let pending: Vec<(usize, SlotKey)> = surfaces
            .iter()
            .enumerate()
            .flat_map(|(list, surface)| {
                surface
                    .iter()
                    .filter(|(_, element)| element.listening)
                    .map(move |(key, _)| (list, key.clone()))
            })
            .collect();
        if pending.is_empty() {
            break;
        }
        for (list, key) in pending {
            trace!(list, ?key, "transition end");
            view.dispatch(DragEvent::TransitionEnd { list, key }, surfaces)?;
            fired += 1;
        }
    }
    Ok(fired)
}

/// Drop elements that neither the plan nor a running reflow still shows.
pub fn prune<P>(view: &BoardView<P>, surfaces: &mut [HeadlessSurface]) {
    for (list, surface) in surfaces.iter_mut().enumerate() {
        if let Some(view_list) = view.list(list) {
            let shown = view_list.rendered();
            surface.retain(|key, _| shown.contains(key));
        }
    }
}

#[cfg(test)]
mod tests {
    use sortboard::{BoardConfig, Point};

    use super::*;
    use crate::seed::seed_lists;

    #[test]
    fn layout_places_cards_in_columns() {
        let view = BoardView::new(seed_lists(), &BoardConfig::default());
        let mut surfaces = surfaces_for(&view);
        layout(&view, &mut surfaces).unwrap();
        let card = &surfaces[1][&SlotKey::Item("5".into())];
        assert_eq!(card.rect, Rect::new(300.0, 126.0, 280.0, 126.0));
        assert_eq!(surfaces[2].len(), 1);
    }

    #[test]
    fn drain_settles_insertion() {
        let mut view = BoardView::new(seed_lists(), &BoardConfig::default());
        let mut surfaces = surfaces_for(&view);
        layout(&view, &mut surfaces).unwrap();
        view.sync(&mut surfaces).unwrap();

        view.dispatch(DragEvent::DragStart { list: 2, index: 0 }, &mut surfaces)
            .unwrap();
        view.dispatch(
            DragEvent::DragOver {
                list: 0,
                index: 0,
                item_rect: slot_rect(0, 0),
                pointer: Point::new(10.0, CARD_HEIGHT / 2.0),
            },
            &mut surfaces,
        )
        .unwrap();
        layout(&view, &mut surfaces).unwrap();
        view.sync(&mut surfaces).unwrap();
        assert_eq!(view.list(0).unwrap().animator().pending(), 3);

        assert_eq!(drain(&mut view, &mut surfaces).unwrap(), 3);
        assert!(view.list(0).unwrap().animator().is_settled());
        assert_eq!(view.list(0).unwrap().rendered()[0], SlotKey::Placeholder);
    }
}

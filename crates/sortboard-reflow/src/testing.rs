#![forbid(unsafe_code)]

//! In-memory elements for exercising the animator without a renderer.

use std::collections::HashMap;
use std::hash::Hash;

use sortboard_core::{Axis, InlineStyle, MeasurableElement, Rect};

/// A recorded element: a fixed rect plus everything the animator did to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FakeElement {
    pub rect: Rect,
    pub style: Option<InlineStyle>,
    pub listening: bool,
    pub listen_calls: usize,
    pub unlisten_calls: usize,
    pub styles_applied: usize,
}

impl FakeElement {
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    /// Translation currently applied along `axis`, zero when unstyled.
    #[must_use]
    pub fn offset(&self, axis: Axis) -> f32 {
        self.style.map_or(0.0, |s| match axis {
            Axis::Inline => s.translate_x,
            Axis::Block => s.translate_y,
        })
    }
}

impl MeasurableElement for FakeElement {
    fn bounding_rect(&self) -> Rect {
        self.rect
    }

    fn set_style(&mut self, style: InlineStyle) {
        self.style = Some(style);
        self.styles_applied += 1;
    }

    fn clear_style(&mut self) {
        self.style = None;
    }

    fn listen_transition_end(&mut self) {
        self.listening = true;
        self.listen_calls += 1;
    }

    fn unlisten_transition_end(&mut self) {
        self.listening = false;
        self.unlisten_calls += 1;
    }
}

/// Lay `keys` out as consecutive slots of `extent` along `axis`.
pub fn fake_column<K: Clone + Eq + Hash>(
    keys: &[K],
    axis: Axis,
    extent: f32,
) -> HashMap<K, FakeElement> {
    keys.iter()
        .enumerate()
        .map(|(i, key)| {
            let start = i as f32 * extent;
            let rect = match axis {
                Axis::Block => Rect::new(0.0, start, 280.0, extent),
                Axis::Inline => Rect::new(start, 0.0, extent, 40.0),
            };
            (key.clone(), FakeElement::new(rect))
        })
        .collect()
}

/// Keys whose elements currently have a transition listener.
pub fn listening_keys<K: Clone + Ord>(surface: &HashMap<K, FakeElement>) -> Vec<K> {
    let mut keys: Vec<K> = surface
        .iter()
        .filter(|(_, e)| e.listening)
        .map(|(k, _)| k.clone())
        .collect();
    keys.sort();
    keys
}

#![forbid(unsafe_code)]

//! The host capability the drag engine needs from a rendered list element.
//!
//! Sortboard never touches a rendering surface directly. Hosts (a DOM
//! binding, a GPU canvas, a terminal renderer, or a test fake) implement
//! [`MeasurableElement`] for whatever represents one rendered list entry.
//!
//! Transition completion is delivered the other way round: the host calls
//! back into the reflow animator once per finished transition while a
//! listener is registered on the element. `listen_transition_end` and
//! `unlisten_transition_end` exist so the host can route (or stop routing)
//! those notifications.

use std::time::Duration;

use crate::geometry::Rect;

/// Temporary inline presentation override applied during a reflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlineStyle {
    /// Horizontal translation in host units.
    pub translate_x: f32,
    /// Vertical translation in host units.
    pub translate_y: f32,
    /// Opacity in `[0.0, 1.0]`.
    pub opacity: f32,
    /// Transition applied to the changed properties.
    pub transition: Duration,
}

impl InlineStyle {
    /// A translation transition with full opacity.
    #[must_use]
    pub const fn translate(translate_x: f32, translate_y: f32, transition: Duration) -> Self {
        Self {
            translate_x,
            translate_y,
            opacity: 1.0,
            transition,
        }
    }

    /// A fade-out transition without translation.
    #[must_use]
    pub const fn fade_out(transition: Duration) -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            opacity: 0.0,
            transition,
        }
    }

    /// Whether the style leaves the element where layout put it.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.translate_x == 0.0 && self.translate_y == 0.0 && self.opacity >= 1.0
    }
}

/// A rendered element that can be measured, styled and observed.
pub trait MeasurableElement {
    /// Current bounding box in host coordinates, valid after layout.
    fn bounding_rect(&self) -> Rect;

    /// Apply a temporary inline style override.
    fn set_style(&mut self, style: InlineStyle);

    /// Remove any inline override, snapping back to the laid-out position.
    fn clear_style(&mut self);

    /// Start delivering transition-end notifications for this element.
    fn listen_transition_end(&mut self);

    /// Stop delivering transition-end notifications for this element.
    fn unlisten_transition_end(&mut self);
}

impl<E: MeasurableElement + ?Sized> MeasurableElement for Box<E> {
    fn bounding_rect(&self) -> Rect {
        (**self).bounding_rect()
    }

    fn set_style(&mut self, style: InlineStyle) {
        (**self).set_style(style);
    }

    fn clear_style(&mut self) {
        (**self).clear_style();
    }

    fn listen_transition_end(&mut self) {
        (**self).listen_transition_end();
    }

    fn unlisten_transition_end(&mut self) {
        (**self).unlisten_transition_end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_keeps_full_opacity() {
        let style = InlineStyle::translate(0.0, 126.0, Duration::from_millis(250));
        assert_eq!(style.opacity, 1.0);
        assert!(!style.is_neutral());
    }

    #[test]
    fn fade_out_is_not_neutral() {
        let style = InlineStyle::fade_out(Duration::from_millis(250));
        assert_eq!(style.opacity, 0.0);
        assert!(!style.is_neutral());
    }

    #[test]
    fn zero_translation_is_neutral() {
        assert!(InlineStyle::translate(0.0, 0.0, Duration::ZERO).is_neutral());
    }
}

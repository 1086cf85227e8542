#![forbid(unsafe_code)]

//! Keyed access to the rendered elements of one list.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use sortboard_core::MeasurableElement;

/// The set of rendered elements the animator may style, addressed by key.
///
/// An element the host removed from its tree must disappear from the
/// surface too; the animator treats a missing element as an inconsistent
/// view and snaps.
pub trait ReflowSurface<K> {
    type Element: MeasurableElement;

    fn element_mut(&mut self, key: &K) -> Option<&mut Self::Element>;
}

impl<K, E, S> ReflowSurface<K> for HashMap<K, E, S>
where
    K: Eq + Hash,
    E: MeasurableElement,
    S: BuildHasher,
{
    type Element = E;

    fn element_mut(&mut self, key: &K) -> Option<&mut E> {
        self.get_mut(key)
    }
}

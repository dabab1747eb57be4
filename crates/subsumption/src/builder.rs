//! Builder utilities for ergonomic stack construction.
//!
//! Instead of collecting layers into a `Vec` by hand, push them in priority
//! order onto a [`StackBuilder`]; the first layer pushed has the highest
//! priority.

use crate::{FnLayer, Layer, Proposal, Stack};

/// Accumulates layers from highest to lowest priority.
#[derive(Debug)]
pub struct StackBuilder<L> {
    layers: Vec<L>,
}

impl<L> StackBuilder<L> {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Appends a layer below every layer pushed so far.
    #[must_use]
    pub fn layer(mut self, layer: L) -> Self {
        self.layers.push(layer);
        self
    }

    /// Freezes the current order into a [`Stack`].
    ///
    /// # Panics
    ///
    /// Panics if no layer was pushed.
    pub fn build(self) -> Stack<L> {
        Stack::new(self.layers)
    }
}

impl<L> Default for StackBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a boxed closure layer.
///
/// Shorthand for `Box::new(FnLayer::new(name, f))`.
#[inline]
pub fn layer_fn<C, T, F>(name: &'static str, f: F) -> Box<dyn Layer<C, Output = T>>
where
    C: ?Sized + 'static,
    T: 'static,
    F: Fn(&C) -> Proposal<T> + Send + Sync + 'static,
{
    Box::new(FnLayer::new(name, f))
}

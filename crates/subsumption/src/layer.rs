//! Core layer trait.
//!
//! This module defines the [`Layer`] trait, the single abstraction every
//! behavior in a subsumption stack implements. The trait is generic over a
//! context type `C`, giving layers read-only access to whatever snapshot of
//! the world the caller assembled for the current tick.

use core::marker::PhantomData;

use crate::Proposal;

/// A behavior layer that may propose an output or defer.
pub trait Layer<C: ?Sized>: Send + Sync {
    /// Value proposed by this layer (e.g. a movement direction).
    type Output;

    /// Short, stable name used in diagnostics.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Evaluate this layer against the given context.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Read-only view of the tick's world state. Layers must not
    ///   depend on anything but `ctx` and their own immutable configuration,
    ///   so repeated evaluation on the same context yields the same proposal.
    ///
    /// # Returns
    ///
    /// - `Proposal::Act(value)` if the layer wants control this tick
    /// - `Proposal::Defer` if it has no opinion
    fn evaluate(&self, ctx: &C) -> Proposal<Self::Output>;
}

/// Blanket implementation for boxed layers.
///
/// This allows `Box<dyn Layer<C, Output = T>>` to also implement `Layer<C>`,
/// enabling heterogeneous stacks built from unrelated layer types.
impl<C: ?Sized, T> Layer<C> for Box<dyn Layer<C, Output = T>> {
    type Output = T;

    #[inline]
    fn name(&self) -> &'static str {
        (**self).name()
    }

    #[inline]
    fn evaluate(&self, ctx: &C) -> Proposal<T> {
        (**self).evaluate(ctx)
    }
}

/// Adapts a closure into a [`Layer`].
///
/// Useful for tests and for one-off rules that do not warrant a named type.
///
/// ```rust
/// use subsumption::{FnLayer, Layer, Proposal};
///
/// let positive: FnLayer<i32, _> = FnLayer::new("positive", |x: &i32| {
///     if *x > 0 { Proposal::Act("up") } else { Proposal::Defer }
/// });
/// assert_eq!(positive.evaluate(&3), Proposal::Act("up"));
/// assert_eq!(positive.evaluate(&-3), Proposal::Defer);
/// ```
pub struct FnLayer<C: ?Sized, F> {
    name: &'static str,
    f: F,
    _ctx: PhantomData<fn(&C)>,
}

impl<C: ?Sized, F> FnLayer<C, F> {
    /// Wraps `f` under the given diagnostic name.
    pub fn new(name: &'static str, f: F) -> Self {
        Self {
            name,
            f,
            _ctx: PhantomData,
        }
    }
}

impl<C: ?Sized, T, F> Layer<C> for FnLayer<C, F>
where
    F: Fn(&C) -> Proposal<T> + Send + Sync,
{
    type Output = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, ctx: &C) -> Proposal<T> {
        (self.f)(ctx)
    }
}

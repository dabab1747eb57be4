//! The subsumption stack.
//!
//! A [`Stack`] owns an ordered list of layers and arbitrates between them:
//! higher-priority layers are evaluated first and the first one that does not
//! defer subsumes everything below it.

use std::time::Instant;

use crate::{Layer, Proposal};

/// Result of one arbitration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Layer at index `layer` was the first to act.
    Selected { layer: usize, value: T },

    /// Every layer deferred.
    Exhausted,

    /// The deadline passed before layer `layer` could be evaluated.
    Expired { layer: usize },
}

impl<T> Outcome<T> {
    /// Returns the selected value, if any layer acted.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Selected { value, .. } => Some(value),
            Outcome::Exhausted | Outcome::Expired { .. } => None,
        }
    }

    /// Index of the winning layer, if any.
    #[inline]
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Selected { layer, .. } => Some(*layer),
            Outcome::Exhausted | Outcome::Expired { .. } => None,
        }
    }
}

/// Evaluates layers in priority order until one acts.
///
/// # Semantics
///
/// A `Stack` evaluates its layers from first to last:
/// - If a layer returns `Act`, the stack **stops immediately** and returns it
/// - If a layer returns `Defer`, the stack **continues** to the next layer
/// - If all layers defer, the stack returns nothing
///
/// This is analogous to a short-circuited logical OR over optional values.
/// The order is fixed at construction; there is no way to reorder or mutate
/// layers afterwards, and no state is carried from one tick to the next.
#[derive(Debug, Clone)]
pub struct Stack<L> {
    layers: Vec<L>,
}

impl<L> Stack<L> {
    /// Creates a new stack; `layers[0]` has the highest priority.
    ///
    /// # Panics
    ///
    /// Panics if `layers` is empty. A stack with no layers can never decide
    /// anything and likely indicates a programming error.
    pub fn new(layers: Vec<L>) -> Self {
        assert!(!layers.is_empty(), "Stack must have at least one layer");
        Self { layers }
    }

    /// Number of layers in the stack.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers in priority order.
    pub fn layers(&self) -> &[L] {
        &self.layers
    }

    /// Returns the first non-deferring proposal, or `None` if all layers defer.
    pub fn decide<C: ?Sized>(&self, ctx: &C) -> Option<L::Output>
    where
        L: Layer<C>,
    {
        self.arbitrate(ctx, None).into_value()
    }

    /// Runs the arbitration protocol and reports which layer won.
    ///
    /// When `deadline` is given it is checked before each layer evaluation;
    /// once it has passed, evaluation stops with [`Outcome::Expired`].
    pub fn arbitrate<C: ?Sized>(&self, ctx: &C, deadline: Option<Instant>) -> Outcome<L::Output>
    where
        L: Layer<C>,
    {
        for (index, layer) in self.layers.iter().enumerate() {
            if let Some(deadline) = deadline
                && Instant::now() >= deadline
            {
                return Outcome::Expired { layer: index };
            }

            match layer.evaluate(ctx) {
                Proposal::Act(value) => return Outcome::Selected { layer: index, value }, // Short-circuit
                Proposal::Defer => continue, // Try next layer
            }
        }
        // All layers deferred
        Outcome::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::FnLayer;

    struct TestContext {
        value: i32,
        evaluated: AtomicUsize,
    }

    impl TestContext {
        fn new(value: i32) -> Self {
            Self {
                value,
                evaluated: AtomicUsize::new(0),
            }
        }
    }

    struct ActWhenAbove(i32, &'static str);
    impl Layer<TestContext> for ActWhenAbove {
        type Output = &'static str;

        fn evaluate(&self, ctx: &TestContext) -> Proposal<&'static str> {
            ctx.evaluated.fetch_add(1, Ordering::SeqCst);
            if ctx.value > self.0 {
                Proposal::Act(self.1)
            } else {
                Proposal::Defer
            }
        }
    }

    struct DeferAlways;
    impl Layer<TestContext> for DeferAlways {
        type Output = &'static str;

        fn evaluate(&self, ctx: &TestContext) -> Proposal<&'static str> {
            ctx.evaluated.fetch_add(1, Ordering::SeqCst);
            Proposal::Defer
        }
    }

    type BoxedLayer = Box<dyn Layer<TestContext, Output = &'static str>>;

    fn boxed(layer: impl Layer<TestContext, Output = &'static str> + 'static) -> BoxedLayer {
        Box::new(layer)
    }

    #[test]
    fn first_acting_layer_wins() {
        let stack = Stack::new(vec![
            boxed(ActWhenAbove(10, "high")),
            boxed(ActWhenAbove(0, "low")),
            boxed(ActWhenAbove(-10, "lowest")), // Should not execute
        ]);

        let ctx = TestContext::new(5);
        assert_eq!(
            stack.arbitrate(&ctx, None),
            Outcome::Selected {
                layer: 1,
                value: "low"
            }
        );
        assert_eq!(ctx.evaluated.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn higher_priority_subsumes_lower() {
        let stack = Stack::new(vec![
            boxed(ActWhenAbove(0, "first")),
            boxed(ActWhenAbove(0, "second")),
        ]);

        let ctx = TestContext::new(1);
        assert_eq!(stack.decide(&ctx), Some("first"));
        assert_eq!(ctx.evaluated.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exhausted_when_all_defer() {
        let stack = Stack::new(vec![boxed(DeferAlways), boxed(ActWhenAbove(100, "never"))]);

        let ctx = TestContext::new(0);
        assert_eq!(stack.arbitrate(&ctx, None), Outcome::Exhausted);
        assert_eq!(stack.decide(&ctx), None);
        assert_eq!(ctx.evaluated.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn expired_deadline_stops_before_first_layer() {
        let stack = Stack::new(vec![boxed(ActWhenAbove(0, "late"))]);
        let deadline = Instant::now()
            .checked_sub(Duration::from_millis(1))
            .unwrap_or_else(Instant::now);

        let ctx = TestContext::new(1);
        assert_eq!(stack.arbitrate(&ctx, Some(deadline)), Outcome::Expired { layer: 0 });
        assert_eq!(ctx.evaluated.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn generous_deadline_behaves_like_decide() {
        let stack = Stack::new(vec![boxed(DeferAlways), boxed(ActWhenAbove(0, "ok"))]);
        let deadline = Instant::now() + Duration::from_secs(60);

        let ctx = TestContext::new(1);
        let outcome = stack.arbitrate(&ctx, Some(deadline));
        assert_eq!(outcome.winner(), Some(1));
        assert_eq!(outcome.into_value(), Some("ok"));
    }

    #[test]
    fn closure_layers_share_a_stack() {
        let even: Box<dyn Layer<i32, Output = &'static str>> =
            Box::new(FnLayer::new("even", |x: &i32| {
                if x % 2 == 0 {
                    Proposal::Act("even")
                } else {
                    Proposal::Defer
                }
            }));
        let any: Box<dyn Layer<i32, Output = &'static str>> =
            Box::new(FnLayer::new("any", |_: &i32| Proposal::Act("odd")));

        let stack = Stack::new(vec![even, any]);
        assert_eq!(stack.decide(&4), Some("even"));
        assert_eq!(stack.decide(&7), Some("odd"));
        assert_eq!(stack.layers()[0].name(), "even");
    }

    #[test]
    #[should_panic(expected = "at least one layer")]
    fn empty_stack_is_rejected() {
        let _ = Stack::<FnLayer<i32, fn(&i32) -> Proposal<()>>>::new(Vec::new());
    }
}

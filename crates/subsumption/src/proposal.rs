//! Result returned by a single layer evaluation.

/// What a layer wants the agent to do this tick.
///
/// # Tick Semantics
///
/// Every evaluation completes immediately; there is no `Running` state.
/// A layer either has an opinion about the current tick or it does not:
/// - `Act` carries the proposed output (e.g. a movement direction)
/// - `Defer` hands control to the next, lower-priority layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Proposal<T> {
    /// The layer proposes this value and, if it is the first to do so, wins.
    Act(T),

    /// The layer has no opinion this tick.
    Defer,
}

impl<T> Proposal<T> {
    /// Returns `true` if this proposal is `Act`.
    #[inline]
    pub fn is_act(&self) -> bool {
        matches!(self, Proposal::Act(_))
    }

    /// Returns `true` if this proposal is `Defer`.
    #[inline]
    pub fn is_defer(&self) -> bool {
        matches!(self, Proposal::Defer)
    }

    /// Converts into an `Option`, dropping the distinction between layers.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Proposal::Act(value) => Some(value),
            Proposal::Defer => None,
        }
    }
}

impl<T> From<Option<T>> for Proposal<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Proposal::Act(value),
            None => Proposal::Defer,
        }
    }
}

impl<T> From<Proposal<T>> for Option<T> {
    #[inline]
    fn from(value: Proposal<T>) -> Self {
        value.into_option()
    }
}

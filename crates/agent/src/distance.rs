//! Path distances with an explicit "unreachable" value.
//!
//! Map backends commonly report unreachable nodes (e.g. a ghost still inside
//! its lair) as a negative number. Every [`Distance`] is built through a
//! checked constructor, so comparison logic only ever sees real, non-negative
//! distances and a sentinel can never pass for "very close".

/// Shortest-path distance between two locations.
///
/// Either a finite, non-negative path length or [`Distance::UNREACHABLE`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Distance(Option<f64>);

impl Distance {
    /// No path exists, or the query could not be resolved.
    pub const UNREACHABLE: Distance = Distance(None);

    /// Checked path length.
    ///
    /// Negative values, NaN and infinities all become [`Distance::UNREACHABLE`].
    pub fn reachable(value: f64) -> Self {
        if value.is_finite() && value >= 0.0 {
            Distance(Some(value))
        } else {
            Self::UNREACHABLE
        }
    }

    /// Translates a raw backend distance that may carry a negative sentinel.
    pub fn from_legacy(raw: f64) -> Self {
        Self::reachable(raw)
    }

    /// Integer variant of [`Distance::from_legacy`] for node-count backends.
    pub fn from_legacy_steps(raw: i32) -> Self {
        Self::reachable(f64::from(raw))
    }

    /// Path length, or `None` when unreachable. Never negative.
    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn is_reachable(self) -> bool {
        self.0.is_some()
    }

    /// Returns `true` if reachable and strictly closer than `radius`.
    ///
    /// A NaN radius never admits anything.
    pub fn is_within(self, radius: f64) -> bool {
        self.0.is_some_and(|d| d < radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_sentinels_become_unreachable() {
        assert_eq!(Distance::from_legacy(-1.0), Distance::UNREACHABLE);
        assert_eq!(Distance::from_legacy(f64::NAN), Distance::UNREACHABLE);
        assert_eq!(Distance::from_legacy(f64::INFINITY), Distance::UNREACHABLE);
        assert_eq!(Distance::from_legacy_steps(-1), Distance::UNREACHABLE);
        assert_eq!(Distance::from_legacy(0.0).value(), Some(0.0));
        assert_eq!(Distance::from_legacy_steps(12).value(), Some(12.0));
    }

    #[test]
    fn negative_lengths_cannot_be_constructed() {
        for raw in [-1.0, -0.5, f64::NEG_INFINITY] {
            let distance = Distance::reachable(raw);
            assert!(!distance.is_reachable());
            assert_eq!(distance.value(), None);
            assert!(!distance.is_within(f64::MAX));
        }
    }

    #[test]
    fn radius_is_exclusive() {
        assert!(Distance::reachable(4.0).is_within(5.0));
        assert!(!Distance::reachable(5.0).is_within(5.0));
        assert!(!Distance::UNREACHABLE.is_within(f64::MAX));
        assert!(!Distance::reachable(1.0).is_within(f64::NAN));
    }
}

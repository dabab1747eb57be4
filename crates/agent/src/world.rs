//! Read-only world interface consumed by the decision core.
//!
//! The decision core never walks the map itself. Topology, pathfinding and
//! entity bookkeeping live behind [`WorldQuery`], implemented by the game
//! simulation (or by [`crate::maze::Maze`] in tests and the sandbox).

use core::fmt::Debug;

use crate::{Collectibles, Direction, Distance, Roster};

/// Distance/direction queries plus the per-tick observations an agent needs.
///
/// Implementations must be deterministic and side-effect free from the
/// agent's point of view: the same query on an unchanged world gives the same
/// answer.
pub trait WorldQuery {
    /// Opaque node identifier.
    type Location: Copy + Eq + Debug;

    /// Shortest-path distance from `from` to `to`.
    ///
    /// Backends that use negative sentinels pass them to
    /// [`Distance::from_legacy`], which maps them to [`Distance::UNREACHABLE`].
    fn distance(&self, from: Self::Location, to: Self::Location) -> Distance;

    /// Closest reachable member of `candidates`.
    ///
    /// Ties go to the candidate that appears first in `candidates`; overriding
    /// implementations must keep that rule. Returns `None` when `candidates`
    /// is empty or none of them is reachable.
    fn nearest(
        &self,
        from: Self::Location,
        candidates: &[Self::Location],
    ) -> Option<Self::Location> {
        let mut best: Option<(Self::Location, f64)> = None;
        for &candidate in candidates {
            let Some(distance) = self.distance(from, candidate).value() else {
                continue;
            };
            if best.is_none_or(|(_, closest)| distance < closest) {
                best = Some((candidate, distance));
            }
        }
        best.map(|(location, _)| location)
    }

    /// Move that makes the most progress toward `to`.
    fn direction_toward(&self, from: Self::Location, to: Self::Location) -> Direction;

    /// Move that makes the most progress away from `to`.
    fn direction_away(&self, from: Self::Location, to: Self::Location) -> Direction;

    fn agent_location(&self) -> Self::Location;

    /// Threats in canonical roster order.
    fn threat_roster(&self) -> Roster<Self::Location>;

    fn collectibles(&self) -> Collectibles<Self::Location>;
}

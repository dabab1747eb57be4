//! Per-tick decision context.
//!
//! The [`TickContext`] is the snapshot every layer reads during one decision.
//! It is assembled once per tick so that all layers see:
//!
//! - The same agent location
//! - The same threat roster
//! - The same collectible set
//! - Read access to the world for distance and direction queries

use crate::{Collectibles, Roster, WorldQuery};

/// Snapshot of the world shared by all layers in one decision.
///
/// # Lifetime
///
/// The `'a` lifetime ties the context to the borrowed world. Decisions are
/// synchronous, so the context never outlives the tick it was built for.
pub struct TickContext<'a, W: WorldQuery + ?Sized> {
    /// World used for distance and direction queries.
    pub world: &'a W,

    /// Where the agent currently is.
    pub agent: W::Location,

    /// Threat roster, captured once so every layer partitions the same data.
    pub threats: Roster<W::Location>,

    /// Remaining pills and power pills.
    pub collectibles: Collectibles<W::Location>,
}

impl<'a, W: WorldQuery + ?Sized> TickContext<'a, W> {
    /// Reads the agent location, roster and collectibles from `world`.
    pub fn observe(world: &'a W) -> Self {
        Self {
            world,
            agent: world.agent_location(),
            threats: world.threat_roster(),
            collectibles: world.collectibles(),
        }
    }
}

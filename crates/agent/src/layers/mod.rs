//! Behavior layers of the agent's subsumption stack.
//!
//! Each layer is a small, immutable rule that reads a [`TickContext`] and
//! either proposes a [`Direction`] or defers:
//!
//! - [`Evade`]: flee the nearest dangerous ghost inside a radius
//! - [`Hunt`]: chase the nearest vulnerable ghost inside a radius
//! - [`Gather`]: head for the nearest pill (the fallback behavior)
//!
//! [`AgentLayer`] is the tagged union the agent's stack is built from, so the
//! stack dispatches statically and keeps the layers as plain values.

pub mod evade;
pub mod gather;
pub mod hunt;

pub use evade::Evade;
pub use gather::Gather;
pub use hunt::Hunt;

use strum::{Display, EnumIter, IntoStaticStr};
use subsumption::{Layer, Proposal};

use crate::{Direction, Distance, Threat, TickContext, WorldQuery};

/// Role a layer plays in the agent's stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LayerRole {
    Evade,
    Hunt,
    Gather,
}

/// One of the agent's three behaviors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AgentLayer {
    Evade(Evade),
    Hunt(Hunt),
    Gather(Gather),
}

impl AgentLayer {
    pub fn role(&self) -> LayerRole {
        match self {
            AgentLayer::Evade(_) => LayerRole::Evade,
            AgentLayer::Hunt(_) => LayerRole::Hunt,
            AgentLayer::Gather(_) => LayerRole::Gather,
        }
    }
}

impl From<Evade> for AgentLayer {
    fn from(layer: Evade) -> Self {
        AgentLayer::Evade(layer)
    }
}

impl From<Hunt> for AgentLayer {
    fn from(layer: Hunt) -> Self {
        AgentLayer::Hunt(layer)
    }
}

impl From<Gather> for AgentLayer {
    fn from(layer: Gather) -> Self {
        AgentLayer::Gather(layer)
    }
}

impl<'a, W: WorldQuery + ?Sized> Layer<TickContext<'a, W>> for AgentLayer {
    type Output = Direction;

    fn name(&self) -> &'static str {
        self.role().into()
    }

    fn evaluate(&self, ctx: &TickContext<'a, W>) -> Proposal<Direction> {
        match self {
            AgentLayer::Evade(layer) => layer.evaluate(ctx),
            AgentLayer::Hunt(layer) => layer.evaluate(ctx),
            AgentLayer::Gather(layer) => layer.evaluate(ctx),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Finds the closest reachable threat accepted by `eligible`.
///
/// Unreachable threats never count. Ties keep the threat met first in roster
/// order, because only a strictly smaller distance replaces the current best.
///
/// # Returns
///
/// - `Some((threat, distance))` for the nearest eligible threat
/// - `None` if no eligible threat is reachable
pub(crate) fn nearest_threat<'t, W>(
    world: &W,
    agent: W::Location,
    threats: &'t [Threat<W::Location>],
    eligible: impl Fn(&Threat<W::Location>) -> bool,
) -> Option<(&'t Threat<W::Location>, Distance)>
where
    W: WorldQuery + ?Sized,
{
    let mut closest: Option<(&Threat<W::Location>, f64)> = None;
    for threat in threats.iter().filter(|t| eligible(t)) {
        let Some(distance) = world.distance(agent, threat.location).value() else {
            continue;
        };
        if closest.is_none_or(|(_, best)| distance < best) {
            closest = Some((threat, distance));
        }
    }
    closest.map(|(threat, distance)| (threat, Distance::reachable(distance)))
}

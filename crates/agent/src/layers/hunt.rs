//! Hunt: chase the nearest edible ghost.

use subsumption::{Layer, Proposal};

use super::nearest_threat;
use crate::{Direction, Threat, TickContext, WorldQuery};

/// Pursues the nearest vulnerable threat while it is within `radius`.
///
/// Mirror image of [`super::Evade`]: only vulnerable (positive edible time),
/// reachable threats count, and the proposal is the move that makes the most
/// progress toward the selected threat. The radius keeps the agent from
/// abandoning nearby pills for a chase across the whole maze.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hunt {
    radius: f64,
}

impl Hunt {
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Proposes a move for an explicit agent location and roster.
    pub fn propose<W>(
        &self,
        world: &W,
        agent: W::Location,
        threats: &[Threat<W::Location>],
    ) -> Proposal<Direction>
    where
        W: WorldQuery + ?Sized,
    {
        match nearest_threat(world, agent, threats, |t| t.is_vulnerable()) {
            Some((threat, distance)) if distance.is_within(self.radius) => {
                Proposal::Act(world.direction_toward(agent, threat.location))
            }
            Some((threat, distance)) => {
                tracing::trace!(
                    threat = %threat.id,
                    distance = ?distance.value(),
                    radius = self.radius,
                    "hunt: nearest vulnerable threat outside radius"
                );
                Proposal::Defer
            }
            None => {
                tracing::trace!("hunt: no reachable vulnerable threat");
                Proposal::Defer
            }
        }
    }
}

impl<'a, W: WorldQuery + ?Sized> Layer<TickContext<'a, W>> for Hunt {
    type Output = Direction;

    fn name(&self) -> &'static str {
        "hunt"
    }

    fn evaluate(&self, ctx: &TickContext<'a, W>) -> Proposal<Direction> {
        self.propose(ctx.world, ctx.agent, &ctx.threats)
    }
}

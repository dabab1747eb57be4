//! Evade: run from the nearest dangerous ghost.

use subsumption::{Layer, Proposal};

use super::nearest_threat;
use crate::{Direction, Threat, TickContext, WorldQuery};

/// Flees the nearest dangerous threat once it comes within `radius`.
///
/// Only threats that are dangerous (no edible time left) and reachable are
/// considered. The layer defers when there is no such threat or when the
/// nearest one is at least `radius` away; otherwise it proposes the move that
/// makes the most progress away from that threat.
///
/// # Example
///
/// ```rust,ignore
/// use subsumption::Stack;
///
/// // Evade before anything else
/// Stack::new(vec![
///     AgentLayer::from(Evade::new(5.0)),
///     AgentLayer::from(Gather),
/// ])
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evade {
    radius: f64,
}

impl Evade {
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
        let Some((threat, distance)) =
            nearest_threat(world, agent, threats, |t| t.is_dangerous())
        else {
            tracing::trace!("evade: no reachable dangerous threat");
            return Proposal::Defer;
        };

        if distance.is_within(self.radius) {
            Proposal::Act(world.direction_away(agent, threat.location))
        } else {
            tracing::trace!(
                threat = %threat.id,
                distance = ?distance.value(),
                radius = self.radius,
                "evade: nearest dangerous threat outside radius"
            );
            Proposal::Defer
        }
    }
}

impl<'a, W: WorldQuery + ?Sized> Layer<TickContext<'a, W>> for Evade {
    type Output = Direction;

    fn name(&self) -> &'static str {
        "evade"
    }

    fn evaluate(&self, ctx: &TickContext<'a, W>) -> Proposal<Direction> {
        self.propose(ctx.world, ctx.agent, &ctx.threats)
    }
}

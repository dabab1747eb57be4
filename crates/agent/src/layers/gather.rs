//! Gather: head for the nearest pill.

use subsumption::{Layer, Proposal};

use crate::{Collectibles, Direction, TickContext, WorldQuery};

/// Moves toward the nearest remaining pill or power pill.
///
/// This is the default behavior and sits at the bottom of the stack. It acts
/// whenever at least one collectible is reachable and defers otherwise,
/// letting the agent's fallback apply once the maze is cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gather;

impl Gather {
    /// Proposes a move toward the nearest of `collectibles`.
    ///
    /// Candidates are handed to [`WorldQuery::nearest`] as pills followed by
    /// power pills, so equal distances favour ordinary pills.
    pub fn propose<W>(
        &self,
        world: &W,
        agent: W::Location,
        collectibles: &Collectibles<W::Location>,
    ) -> Proposal<Direction>
    where
        W: WorldQuery + ?Sized,
    {
        if collectibles.is_empty() {
            tracing::trace!("gather: no collectibles left");
            return Proposal::Defer;
        }

        let targets = collectibles.targets();
        match world.nearest(agent, &targets) {
            Some(target) => Proposal::Act(world.direction_toward(agent, target)),
            None => {
                tracing::trace!(
                    remaining = targets.len(),
                    "gather: no reachable collectible"
                );
                Proposal::Defer
            }
        }
    }
}

impl<'a, W: WorldQuery + ?Sized> Layer<TickContext<'a, W>> for Gather {
    type Output = Direction;

    fn name(&self) -> &'static str {
        "gather"
    }

    fn evaluate(&self, ctx: &TickContext<'a, W>) -> Proposal<Direction> {
        self.propose(ctx.world, ctx.agent, &ctx.collectibles)
    }
}

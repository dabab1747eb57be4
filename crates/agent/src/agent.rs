//! The agent: a fixed `[Evade, Hunt, Gather]` subsumption stack.

use std::time::Instant;

use subsumption::{Outcome, Stack};

use crate::layers::{AgentLayer, Evade, Gather, Hunt, LayerRole};
use crate::{AgentConfig, ConfigError, Direction, TickContext, WorldQuery};

/// Where a decision came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecisionSource {
    /// A layer acted.
    Layer(LayerRole),
    /// Every layer deferred.
    Fallback,
    /// The deadline passed before a layer acted.
    Deadline,
}

/// Direction chosen for one tick, with its provenance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub direction: Direction,
    pub source: DecisionSource,
}

/// Reactive maze agent driven by a subsumption stack.
///
/// # Design
///
/// The stack is always, from highest to lowest priority:
///
/// 1. **Evade**: flee dangerous ghosts within `evade_radius`
/// 2. **Hunt**: chase vulnerable ghosts within `hunt_radius`
/// 3. **Gather**: move to the nearest pill
///
/// When every layer defers (maze cleared, everything unreachable) the agent
/// returns its configured fallback, so a tick always yields a legal move.
///
/// The agent holds no mutable state: the same world state always produces
/// the same decision.
#[derive(Clone, Debug)]
pub struct Agent {
    config: AgentConfig,
    stack: Stack<AgentLayer>,
}

impl Agent {
    /// Priority order of the agent's layers.
    pub const LAYER_ORDER: [LayerRole; 3] = [LayerRole::Evade, LayerRole::Hunt, LayerRole::Gather];

    /// Creates an agent with the tuned default thresholds.
    pub fn new() -> Self {
        Self::build(AgentConfig::default())
    }

    /// Creates an agent with explicit thresholds.
    ///
    /// Radii are used as given; a negative or NaN radius simply disables its
    /// layer. Use [`Agent::from_config`] to reject such values instead.
    pub fn with_thresholds(hunt_radius: f64, evade_radius: f64) -> Self {
        Self::build(
            AgentConfig::new()
                .with_hunt_radius(hunt_radius)
                .with_evade_radius(evade_radius),
        )
    }

    /// Creates an agent from validated configuration.
    pub fn from_config(config: AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: AgentConfig) -> Self {
        let stack = Stack::new(vec![
            AgentLayer::from(Evade::new(config.evade_radius)),
            AgentLayer::from(Hunt::new(config.hunt_radius)),
            AgentLayer::from(Gather),
        ]);
        Self { config, stack }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn stack(&self) -> &Stack<AgentLayer> {
        &self.stack
    }

    /// Picks this tick's direction.
    ///
    /// `deadline`, when given, bounds the evaluation: if it passes before a
    /// layer acts, the fallback is returned.
    pub fn decide_move<W>(&self, world: &W, deadline: Option<Instant>) -> Direction
    where
        W: WorldQuery + ?Sized,
    {
        self.decide(world, deadline).direction
    }

    /// Like [`Agent::decide_move`], also reporting which layer decided.
    pub fn decide<W>(&self, world: &W, deadline: Option<Instant>) -> Decision
    where
        W: WorldQuery + ?Sized,
    {
        let ctx = TickContext::observe(world);

        match self.stack.arbitrate(&ctx, deadline) {
            Outcome::Selected { layer, value } => {
                let role = self.stack.layers()[layer].role();
                tracing::debug!(
                    layer = %role,
                    direction = %value,
                    agent = ?ctx.agent,
                    "layer selected move"
                );
                Decision {
                    direction: value,
                    source: DecisionSource::Layer(role),
                }
            }
            Outcome::Exhausted => {
                if ctx.collectibles.is_empty() {
                    tracing::debug!(
                        fallback = %self.config.fallback,
                        "all layers deferred, maze cleared"
                    );
                } else {
                    tracing::warn!(
                        remaining = ctx.collectibles.len(),
                        fallback = %self.config.fallback,
                        "all layers deferred with collectibles left"
                    );
                }
                Decision {
                    direction: self.config.fallback,
                    source: DecisionSource::Fallback,
                }
            }
            Outcome::Expired { layer } => {
                tracing::warn!(
                    pending = %Self::LAYER_ORDER[layer],
                    fallback = %self.config.fallback,
                    "decision deadline expired"
                );
                Decision {
                    direction: self.config.fallback,
                    source: DecisionSource::Deadline,
                }
            }
        }
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

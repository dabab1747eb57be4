//! Reactive decision core for a maze-chase agent.
//!
//! `maze-agent` decides one move per tick for an agent that collects pills
//! while ghosts roam the maze. Decisions come from a fixed subsumption stack
//! ([`subsumption::Stack`]) of three layers evaluated against a read-only
//! [`WorldQuery`]. The agent keeps no memory between ticks.
//!
//! [`maze::Maze`] is a small grid sandbox that implements [`WorldQuery`] for
//! tests and the `maze-sim` harness.
pub mod agent;
pub mod collectible;
pub mod config;
pub mod context;
pub mod direction;
pub mod distance;
pub mod error;
pub mod layers;
pub mod maze;
pub mod threat;
pub mod world;

#[cfg(test)]
mod testing;

pub use agent::{Agent, Decision, DecisionSource};
pub use collectible::Collectibles;
pub use config::AgentConfig;
pub use context::TickContext;
pub use direction::Direction;
pub use distance::Distance;
pub use error::ConfigError;
pub use layers::{AgentLayer, Evade, Gather, Hunt, LayerRole};
pub use maze::{Maze, MazeError, Position, StepReport};
pub use threat::{ROSTER_SIZE, Roster, Threat, ThreatId, Vulnerability};
pub use world::WorldQuery;

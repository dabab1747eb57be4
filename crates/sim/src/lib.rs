//! Sandbox harness for the maze agent.
//!
//! Loads an ASCII maze, asks an [`Agent`](maze_agent::Agent) for moves and
//! steps the static maze until it is cleared, the agent is caught, or the
//! tick budget runs out. The `maze-sim` binary is a thin clap front end over
//! this library.
pub mod episode;
pub mod map;

pub use episode::{EpisodeEnd, EpisodeSummary, TickRecord, run_episode};
pub use map::{DEFAULT_MAP, load_map};

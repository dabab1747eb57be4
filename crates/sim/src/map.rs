//! Maze loading.

use std::path::Path;

use anyhow::{Context, Result};
use maze_agent::Maze;

/// Built-in maze used when no `--map` is given.
pub const DEFAULT_MAP: &str = "\
###############
#@ . . # . . o#
# ### ### ### #
# . . . . . . #
# ### #S# ### #
#o  . ### .  .#
###############";

/// Reads and parses the maze at `path`, or the built-in one.
pub fn load_map(path: Option<&Path>) -> Result<Maze> {
    let Some(path) = path else {
        return DEFAULT_MAP.parse().context("built-in maze is invalid");
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read maze file: {}", path.display()))?;
    let maze = text
        .parse::<Maze>()
        .with_context(|| format!("Failed to parse maze file: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        width = maze.width(),
        height = maze.height(),
        ghosts = maze.ghosts().len(),
        "maze loaded"
    );
    Ok(maze)
}

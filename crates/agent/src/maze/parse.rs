//! ASCII maze loader.
//!
//! Legend:
//!
//! | glyph | meaning |
//! |-------|---------|
//! | `#` | wall |
//! | ` ` | floor |
//! | `.` | pill |
//! | `o` | power pill |
//! | `@` | agent |
//! | `B` `I` `P` `S` | Blinky, Inky, Pinky, Sue (dangerous) |
//! | `b` `i` `p` `s` | the same ghosts, edible for [`Maze::EDIBLE_TIME`] ticks |
//!
//! Rows shorter than the widest row are padded with walls.

use std::str::FromStr;

use super::{Maze, Position};
use crate::{Roster, Threat, ThreatId};

/// Errors raised while parsing an ASCII maze.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("maze text is empty")]
    Empty,

    #[error("unknown glyph {glyph:?} at {position:?}")]
    UnknownGlyph { glyph: char, position: Position },

    #[error("maze has no agent ('@')")]
    MissingAgent,

    #[error("second agent at {position:?}")]
    DuplicateAgent { position: Position },

    #[error("ghost {id} placed twice (again at {position:?})")]
    DuplicateThreat { id: ThreatId, position: Position },
}

impl MazeError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            MazeError::Empty => "MAZE_EMPTY",
            MazeError::UnknownGlyph { .. } => "MAZE_UNKNOWN_GLYPH",
            MazeError::MissingAgent => "MAZE_MISSING_AGENT",
            MazeError::DuplicateAgent { .. } => "MAZE_DUPLICATE_AGENT",
            MazeError::DuplicateThreat { .. } => "MAZE_DUPLICATE_THREAT",
        }
    }
}

pub(super) fn ghost_glyph(id: ThreatId, vulnerable: bool) -> char {
    let glyph = match id {
        ThreatId::Blinky => 'B',
        ThreatId::Inky => 'I',
        ThreatId::Pinky => 'P',
        ThreatId::Sue => 'S',
    };
    if vulnerable {
        glyph.to_ascii_lowercase()
    } else {
        glyph
    }
}

fn parse_ghost(glyph: char) -> Option<(ThreatId, bool)> {
    let id = match glyph.to_ascii_uppercase() {
        'B' => ThreatId::Blinky,
        'I' => ThreatId::Inky,
        'P' => ThreatId::Pinky,
        'S' => ThreatId::Sue,
        _ => return None,
    };
    Some((id, glyph.is_ascii_lowercase()))
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();
        let height = rows.len();
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut walls = vec![true; width * height];
        let mut agent = None;
        let mut ghosts: Vec<Threat<Position>> = Vec::new();
        let mut pills = Vec::new();
        let mut power_pills = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                walls[y * width + x] = glyph == '#';

                match glyph {
                    '#' | ' ' => {}
                    '.' => pills.push(position),
                    'o' => power_pills.push(position),
                    '@' => {
                        if agent.replace(position).is_some() {
                            return Err(MazeError::DuplicateAgent { position });
                        }
                    }
                    other => {
                        let Some((id, vulnerable)) = parse_ghost(other) else {
                            return Err(MazeError::UnknownGlyph {
                                glyph: other,
                                position,
                            });
                        };
                        if ghosts.iter().any(|g| g.id == id) {
                            return Err(MazeError::DuplicateThreat { id, position });
                        }
                        let edible_time = if vulnerable { Maze::EDIBLE_TIME } else { 0 };
                        ghosts.push(Threat::new(id, position, edible_time));
                    }
                }
            }
        }

        let agent = agent.ok_or(MazeError::MissingAgent)?;
        ghosts.sort_by_key(|g| g.id);
        // At most one ghost per id, so the roster capacity cannot overflow.
        let ghosts: Roster<Position> = ghosts.into_iter().collect();

        Ok(Maze {
            width,
            height,
            walls,
            agent,
            ghosts,
            pills,
            power_pills,
        })
    }
}

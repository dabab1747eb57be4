//! Breadth-first path distances over open cells.

use std::collections::VecDeque;

use super::{Maze, Position};
use crate::Direction;

/// Marker for cells the search never reached.
const UNREACHED: i32 = -1;

impl Maze {
    /// Step counts from `origin` to every cell, row-major.
    ///
    /// Unreached cells (walls, sealed rooms) hold `-1`; callers translate
    /// through [`crate::Distance::from_legacy_steps`]. A wall or
    /// out-of-bounds origin reaches nothing.
    pub(super) fn distance_field(&self, origin: Position) -> Vec<i32> {
        let mut field = vec![UNREACHED; self.width * self.height];
        let Some(start) = self.index(origin).filter(|&i| !self.walls[i]) else {
            return field;
        };

        field[start] = 0;
        let mut queue = VecDeque::from([origin]);
        while let Some(position) = queue.pop_front() {
            let Some(here) = self.index(position) else {
                continue;
            };
            let next_steps = field[here] + 1;
            for direction in Direction::CARDINALS {
                let neighbour = position.step(direction);
                let Some(i) = self.index(neighbour) else {
                    continue;
                };
                if !self.walls[i] && field[i] == UNREACHED {
                    field[i] = next_steps;
                    queue.push_back(neighbour);
                }
            }
        }
        field
    }
}

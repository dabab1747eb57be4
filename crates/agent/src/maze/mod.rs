//! Grid maze sandbox implementing [`WorldQuery`].
//!
//! The maze is a small stand-in for a real game simulation, used by the
//! integration tests and the `maze-sim` harness. Path distances come from a
//! breadth-first search over open cells. Ghosts never move; only the agent
//! does, through [`Maze::step`].

mod parse;
mod path;

pub use parse::MazeError;

use crate::{Collectibles, Direction, Distance, Roster, ThreatId, WorldQuery};

/// Cell coordinate; `y` grows downward, matching the ASCII layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// What happened during one [`Maze::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepReport {
    /// The agent changed cell.
    pub moved: bool,
    pub ate_pill: bool,
    pub ate_power_pill: bool,
    /// A vulnerable ghost was eaten and left the roster.
    pub ate_ghost: Option<ThreatId>,
    /// The agent ran into a dangerous ghost.
    pub caught_by: Option<ThreatId>,
}

/// Static grid maze with an agent, ghosts and pills.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    agent: Position,
    ghosts: Roster<Position>,
    pills: Vec<Position>,
    power_pills: Vec<Position>,
}

impl Maze {
    /// Edible ticks granted by a power pill.
    pub const EDIBLE_TIME: i32 = 200;

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn agent(&self) -> Position {
        self.agent
    }

    pub fn ghosts(&self) -> &[crate::Threat<Position>] {
        &self.ghosts
    }

    pub fn pills(&self) -> &[Position] {
        &self.pills
    }

    pub fn power_pills(&self) -> &[Position] {
        &self.power_pills
    }

    /// `true` once every pill and power pill has been eaten.
    pub fn is_cleared(&self) -> bool {
        self.pills.is_empty() && self.power_pills.is_empty()
    }

    /// `true` if `position` is inside the grid and not a wall.
    pub fn is_open(&self, position: Position) -> bool {
        self.index(position).is_some_and(|i| !self.walls[i])
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Moves the agent one cell and resolves pills and ghost contact.
    ///
    /// Blocked or neutral moves leave the agent in place. Edible timers tick
    /// down once per step, after a power pill (if any) has refreshed them.
    pub fn step(&mut self, direction: Direction) -> StepReport {
        let mut report = StepReport::default();

        let target = self.agent.step(direction);
        if !direction.is_neutral() && self.is_open(target) {
            self.agent = target;
            report.moved = true;
        }

        if let Some(i) = self.pills.iter().position(|&p| p == self.agent) {
            self.pills.remove(i);
            report.ate_pill = true;
        }
        if let Some(i) = self.power_pills.iter().position(|&p| p == self.agent) {
            self.power_pills.remove(i);
            report.ate_power_pill = true;
            for ghost in self.ghosts.iter_mut() {
                ghost.edible_time = Self::EDIBLE_TIME;
            }
        }

        let agent = self.agent;
        if let Some(ghost) = self.ghosts.iter().find(|g| g.location == agent) {
            if ghost.is_vulnerable() {
                report.ate_ghost = Some(ghost.id);
            } else {
                report.caught_by = Some(ghost.id);
            }
        }
        if let Some(eaten) = report.ate_ghost {
            self.ghosts.retain(|g| g.id != eaten);
        }

        for ghost in self.ghosts.iter_mut() {
            if ghost.edible_time > 0 {
                ghost.edible_time -= 1;
            }
        }

        report
    }

    /// Renders the maze back to its ASCII form.
    pub fn render(&self) -> String {
        let mut grid: Vec<Vec<char>> = (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| if self.walls[y * self.width + x] { '#' } else { ' ' })
                    .collect()
            })
            .collect();

        let mut put = |position: Position, glyph: char| {
            if let Some(i) = self.index(position) {
                grid[i / self.width][i % self.width] = glyph;
            }
        };
        for &pill in &self.pills {
            put(pill, '.');
        }
        for &pill in &self.power_pills {
            put(pill, 'o');
        }
        for ghost in &self.ghosts {
            put(ghost.location, parse::ghost_glyph(ghost.id, ghost.is_vulnerable()));
        }
        put(self.agent, '@');

        grid.into_iter()
            .map(|row| row.into_iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl WorldQuery for Maze {
    type Location = Position;

    fn distance(&self, from: Position, to: Position) -> Distance {
        let Some(target) = self.index(to) else {
            return Distance::UNREACHABLE;
        };
        let field = self.distance_field(from);
        Distance::from_legacy_steps(field[target])
    }

    /// Single search from `from`; first candidate wins ties.
    fn nearest(&self, from: Position, candidates: &[Position]) -> Option<Position> {
        let field = self.distance_field(from);
        let mut best: Option<(Position, i32)> = None;
        for &candidate in candidates {
            let Some(steps) = self.index(candidate).map(|i| field[i]) else {
                continue;
            };
            if steps >= 0 && best.is_none_or(|(_, closest)| steps < closest) {
                best = Some((candidate, steps));
            }
        }
        best.map(|(position, _)| position)
    }

    fn direction_toward(&self, from: Position, to: Position) -> Direction {
        let field = self.distance_field(to);
        let Some(current) = self.index(from).map(|i| field[i]) else {
            return Direction::Neutral;
        };
        if current <= 0 {
            return Direction::Neutral;
        }

        Direction::CARDINALS
            .into_iter()
            .find(|&direction| {
                self.index(from.step(direction))
                    .map(|i| field[i])
                    .is_some_and(|steps| steps >= 0 && steps < current)
            })
            .unwrap_or(Direction::Neutral)
    }

    fn direction_away(&self, from: Position, to: Position) -> Direction {
        let field = self.distance_field(to);
        if self.index(from).is_none_or(|i| field[i] < 0) {
            return Direction::Neutral;
        }

        let mut best: Option<(Direction, i32)> = None;
        for direction in Direction::CARDINALS {
            let Some(steps) = self.index(from.step(direction)).map(|i| field[i]) else {
                continue;
            };
            if steps >= 0 && best.is_none_or(|(_, farthest)| steps > farthest) {
                best = Some((direction, steps));
            }
        }
        best.map_or(Direction::Neutral, |(direction, _)| direction)
    }

    fn agent_location(&self) -> Position {
        self.agent
    }

    fn threat_roster(&self) -> Roster<Position> {
        self.ghosts.clone()
    }

    fn collectibles(&self) -> Collectibles<Position> {
        Collectibles::new(self.pills.clone(), self.power_pills.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#########
#@  .  o#
#### ####
#S#    b#
#########";

    #[test]
    fn bfs_distances_follow_corridors() {
        let maze: Maze = CORRIDOR.parse().unwrap();
        let agent = maze.agent();

        assert_eq!(maze.distance(agent, Position::new(4, 1)), Distance::reachable(3.0));
        assert_eq!(maze.distance(agent, Position::new(7, 3)), Distance::reachable(8.0));
        // Sue's room is sealed off.
        assert_eq!(maze.distance(agent, Position::new(1, 3)), Distance::UNREACHABLE);
        assert_eq!(maze.distance(agent, Position::new(0, 0)), Distance::UNREACHABLE);
        assert_eq!(maze.distance(agent, Position::new(-1, 40)), Distance::UNREACHABLE);
    }

    #[test]
    fn directions_follow_shortest_paths() {
        let maze: Maze = CORRIDOR.parse().unwrap();
        let agent = maze.agent();

        assert_eq!(maze.direction_toward(agent, Position::new(7, 3)), Direction::Right);
        assert_eq!(maze.direction_toward(agent, agent), Direction::Neutral);
        assert_eq!(maze.direction_toward(agent, Position::new(1, 3)), Direction::Neutral);
        assert_eq!(
            maze.direction_away(Position::new(4, 1), Position::new(5, 1)),
            Direction::Down
        );
        assert_eq!(maze.direction_away(agent, Position::new(1, 3)), Direction::Neutral);
    }

    #[test]
    fn nearest_prefers_first_candidate_on_ties() {
        let maze: Maze = "#######\n#  @  #\n#######".parse().unwrap();
        let left = Position::new(1, 1);
        let right = Position::new(5, 1);

        assert_eq!(maze.nearest(maze.agent(), &[right, left]), Some(right));
        assert_eq!(maze.nearest(maze.agent(), &[left, right]), Some(left));
        assert_eq!(maze.nearest(maze.agent(), &[]), None);
    }

    #[test]
    fn stepping_eats_pills_and_power_pills() {
        let mut maze: Maze = "#####\n#@.o#\n#####\n# i #\n#####".parse().unwrap();

        let report = maze.step(Direction::Right);
        assert!(report.moved && report.ate_pill);
        assert_eq!(maze.pills().len(), 0);

        let report = maze.step(Direction::Right);
        assert!(report.ate_power_pill);
        assert!(maze.is_cleared());
        assert_eq!(maze.ghosts()[0].edible_time, Maze::EDIBLE_TIME - 1);

        let report = maze.step(Direction::Up);
        assert!(!report.moved);
        assert!(!maze.step(Direction::Neutral).moved);
    }

    #[test]
    fn contact_with_ghosts_is_reported() {
        let mut maze: Maze = "#####\n#@ b#\n#####".parse().unwrap();
        maze.step(Direction::Right);
        let report = maze.step(Direction::Right);
        assert_eq!(report.ate_ghost, Some(ThreatId::Blinky));
        assert!(maze.ghosts().is_empty());

        let mut maze: Maze = "####\n#@S#\n####".parse().unwrap();
        assert_eq!(maze.step(Direction::Right).caught_by, Some(ThreatId::Sue));
    }
}

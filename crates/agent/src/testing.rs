//! Minimal one-dimensional world for unit tests.

use crate::{Collectibles, Direction, Distance, Roster, WorldQuery};

/// A straight corridor: locations are integers, distance is `|a - b|`.
pub(crate) struct LineWorld {
    agent: i32,
    roster: Roster<i32>,
    collectibles: Collectibles<i32>,
    unreachable: Vec<i32>,
}

impl LineWorld {
    pub(crate) fn new(agent: i32) -> Self {
        Self {
            agent,
            roster: Roster::new(),
            collectibles: Collectibles::empty(),
            unreachable: Vec::new(),
        }
    }

    pub(crate) fn with_threat(mut self, threat: crate::Threat<i32>) -> Self {
        self.roster.push(threat);
        self
    }

    pub(crate) fn with_pill(mut self, location: i32) -> Self {
        self.collectibles.pills.push(location);
        self
    }

    /// Marks `location` as cut off from the rest of the corridor.
    pub(crate) fn with_unreachable(mut self, location: i32) -> Self {
        self.unreachable.push(location);
        self
    }
}

impl WorldQuery for LineWorld {
    type Location = i32;

    fn distance(&self, from: i32, to: i32) -> Distance {
        if self.unreachable.contains(&from) || self.unreachable.contains(&to) {
            return Distance::from_legacy_steps(-1);
        }
        Distance::from_legacy_steps((to - from).abs())
    }

    fn direction_toward(&self, from: i32, to: i32) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Direction::Left,
            std::cmp::Ordering::Greater => Direction::Right,
            std::cmp::Ordering::Equal => Direction::Neutral,
        }
    }

    fn direction_away(&self, from: i32, to: i32) -> Direction {
        self.direction_toward(from, to).opposite()
    }

    fn agent_location(&self) -> i32 {
        self.agent
    }

    fn threat_roster(&self) -> Roster<i32> {
        self.roster.clone()
    }

    fn collectibles(&self) -> Collectibles<i32> {
        self.collectibles.clone()
    }
}

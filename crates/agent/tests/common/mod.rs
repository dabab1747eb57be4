//! Scripted world for integration tests.
//!
//! Every distance and direction is looked up in explicit tables, so tests can
//! pin the exact numbers a real maze backend would report (including its
//! negative "unreachable" sentinels, passed straight to the checked
//! [`Distance::reachable`] constructor).
#![allow(dead_code)]

use std::collections::HashMap;

use maze_agent::{Collectibles, Direction, Distance, Roster, Threat, WorldQuery};

pub type Node = u32;

pub const AGENT: Node = 0;

#[derive(Default)]
pub struct TableWorld {
    roster: Roster<Node>,
    collectibles: Collectibles<Node>,
    distances: HashMap<Node, f64>,
    toward: HashMap<Node, Direction>,
    away: HashMap<Node, Direction>,
}

impl TableWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers how far `node` is from the agent, as a raw backend value.
    pub fn node(mut self, node: Node, raw_distance: f64, toward: Direction) -> Self {
        self.distances.insert(node, raw_distance);
        self.toward.insert(node, toward);
        self.away.insert(node, toward.opposite());
        self
    }

    pub fn threat(mut self, threat: Threat<Node>) -> Self {
        self.roster.push(threat);
        self
    }

    pub fn pill(mut self, node: Node) -> Self {
        self.collectibles.pills.push(node);
        self
    }

    pub fn power_pill(mut self, node: Node) -> Self {
        self.collectibles.power_pills.push(node);
        self
    }
}

impl WorldQuery for TableWorld {
    type Location = Node;

    fn distance(&self, from: Node, to: Node) -> Distance {
        assert_eq!(from, AGENT, "table world only answers from the agent");
        self.distances
            .get(&to)
            .map_or(Distance::UNREACHABLE, |&raw| Distance::reachable(raw))
    }

    fn direction_toward(&self, _from: Node, to: Node) -> Direction {
        self.toward.get(&to).copied().unwrap_or_default()
    }

    fn direction_away(&self, _from: Node, to: Node) -> Direction {
        self.away.get(&to).copied().unwrap_or_default()
    }

    fn agent_location(&self) -> Node {
        AGENT
    }

    fn threat_roster(&self) -> Roster<Node> {
        self.roster.clone()
    }

    fn collectibles(&self) -> Collectibles<Node> {
        self.collectibles.clone()
    }
}

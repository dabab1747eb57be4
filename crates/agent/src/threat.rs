//! Adversarial entities and the fixed roster they belong to.

use arrayvec::ArrayVec;
use strum::{Display, EnumCount, EnumIter};

/// Number of threats in a roster.
pub const ROSTER_SIZE: usize = 4;

/// Member of the fixed ghost roster.
///
/// Declaration order is the canonical roster order used for tie-breaking.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThreatId {
    Blinky,
    Inky,
    Pinky,
    Sue,
}

/// Mutually exclusive threat states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vulnerability {
    /// Contact is fatal for the agent.
    Dangerous,
    /// The threat can be eaten for the given number of remaining ticks.
    Vulnerable { remaining: u32 },
}

/// A ghost as observed at the start of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Threat<L> {
    pub id: ThreatId,
    pub location: L,
    /// Remaining edible ticks; zero or negative means dangerous.
    pub edible_time: i32,
}

impl<L> Threat<L> {
    pub const fn new(id: ThreatId, location: L, edible_time: i32) -> Self {
        Self {
            id,
            location,
            edible_time,
        }
    }

    pub const fn dangerous(id: ThreatId, location: L) -> Self {
        Self::new(id, location, 0)
    }

    pub fn vulnerability(&self) -> Vulnerability {
        match u32::try_from(self.edible_time) {
            Ok(remaining) if remaining > 0 => Vulnerability::Vulnerable { remaining },
            _ => Vulnerability::Dangerous,
        }
    }

    pub fn is_dangerous(&self) -> bool {
        matches!(self.vulnerability(), Vulnerability::Dangerous)
    }

    pub fn is_vulnerable(&self) -> bool {
        matches!(self.vulnerability(), Vulnerability::Vulnerable { .. })
    }
}

/// All threats considered during one decision, in roster order.
pub type Roster<L> = ArrayVec<Threat<L>, ROSTER_SIZE>;

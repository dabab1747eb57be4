use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One discrete movement choice per tick.
///
/// The decision core never interprets a direction; it only passes through
/// whatever the world answered to a toward/away query. `Neutral` doubles as
/// the "hold position" fallback when no layer has an opinion.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    #[default]
    Neutral,
}

impl Direction {
    /// The four moving directions, in the order worlds scan neighbours.
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Grid offset for this direction; `y` grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Neutral => (0, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Neutral => Direction::Neutral,
        }
    }

    pub fn is_neutral(self) -> bool {
        matches!(self, Direction::Neutral)
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point in `direction`, or `None` past the edge of the `i32` plane.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        Some(Self { x: self.x.checked_add(dx)?, y: self.y.checked_add(dy)? })
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(point: GridPoint) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single grid step, or staying put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Nowhere,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Prompt order for interactive agents.
    pub const ALL: [Direction; 5] =
        [Direction::Nowhere, Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Nowhere => (0, 0),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    /// Word used when narrating a move ("moves left", "moves nowhere").
    pub fn label(self) -> &'static str {
        match self {
            Self::Nowhere => "nowhere",
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Word an interactive player types to pick this move.
    pub fn choice_label(self) -> &'static str {
        match self {
            Self::Nowhere => "wait",
            other => other.label(),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Adventurer,
    Troll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ongoing,
    AdventurerWins,
    TrollWins,
}

impl Outcome {
    pub const ALL: [Outcome; 3] = [Outcome::TrollWins, Outcome::Ongoing, Outcome::AdventurerWins];

    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Ongoing)
    }

    /// Signed score: -1 troll, 0 ongoing, 1 adventurer.
    pub fn score(self) -> i8 {
        match self {
            Self::TrollWins => -1,
            Self::Ongoing => 0,
            Self::AdventurerWins => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Moved { role: AgentRole, from: GridPoint, to: GridPoint, direction: Direction },
    Trapped { role: AgentRole, at: GridPoint },
}

impl LogEvent {
    pub fn role(&self) -> AgentRole {
        match self {
            Self::Moved { role, .. } | Self::Trapped { role, .. } => *role,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn width(&self) -> u64 {
        u64::from(self.min_x.abs_diff(self.max_x)) + 1
    }

    pub fn height(&self) -> u64 {
        u64::from(self.min_y.abs_diff(self.max_y)) + 1
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

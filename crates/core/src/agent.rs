//! Agents and the movement policies that drive them.
//! This file owns the shared agent record and policy dispatch; each policy lives in a submodule.

use std::fmt;

use rand_chacha::ChaCha8Rng;

use crate::grid::direction;
use crate::rooms::RoomGraph;
use crate::types::{Direction, GridPoint};

mod input;
mod interactive;
mod random;

pub use input::{InputClosed, InputProvider, ScriptedInput, Unattended};
pub use interactive::legal_moves;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MovementPolicy {
    /// Uniform choice among the current room's links, plus staying put when allowed.
    Random,
    /// Asks an [`InputProvider`] which neighbouring room to enter.
    Interactive,
}

impl MovementPolicy {
    /// Resolves a blueprint policy name. Returns `None` for names we do not know.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "human" | "interactive" => Some(Self::Interactive),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Interactive => "human",
        }
    }

    pub fn needs_input(self) -> bool {
        matches!(self, Self::Interactive)
    }

    /// Picks the agent's next position. `None` means the agent cannot move this turn.
    pub fn next_position(
        self,
        agent: &Agent,
        rooms: &RoomGraph,
        rng: &mut ChaCha8Rng,
        input: &mut dyn InputProvider,
    ) -> Result<Option<GridPoint>, InputClosed> {
        match self {
            Self::Random => Ok(random::choose(agent, rooms, rng)),
            Self::Interactive => interactive::prompt(agent, rooms, input),
        }
    }
}

impl fmt::Display for MovementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one agent turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Moved { from: GridPoint, to: GridPoint, direction: Direction },
    Trapped,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Agent {
    pub name: String,
    pub symbol: char,
    pub point: GridPoint,
    pub allow_wait: bool,
    pub policy: MovementPolicy,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        symbol: char,
        point: GridPoint,
        allow_wait: bool,
        policy: MovementPolicy,
    ) -> Self {
        Self { name: name.into(), symbol, point, allow_wait, policy }
    }

    /// Moves the agent according to its policy, updating `point` in place.
    pub fn take_turn(
        &mut self,
        rooms: &RoomGraph,
        rng: &mut ChaCha8Rng,
        input: &mut dyn InputProvider,
    ) -> Result<Movement, InputClosed> {
        let Some(next) = self.policy.next_position(self, rooms, rng, input)? else {
            return Ok(Movement::Trapped);
        };
        let from = self.point;
        // Policies only ever pick neighbours or the current point.
        let direction = direction(from, next).unwrap_or(Direction::Nowhere);
        self.point = next;
        Ok(Movement::Moved { from, to: next, direction })
    }
}

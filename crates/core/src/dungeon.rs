//! The dungeon aggregate: rooms, treasure and the two agents, plus turn advancement.

use std::error::Error;
use std::fmt;
use std::mem;

use log::debug;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::agent::{Agent, InputProvider, Movement};
use crate::rooms::{RoomError, RoomGraph};
use crate::types::{AgentRole, Bounds, GridPoint, LogEvent, Outcome};

mod hash;
mod render;

pub use render::ROOM_GLYPH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Treasure {
    pub point: GridPoint,
    pub symbol: char,
}

impl Treasure {
    pub fn new(point: GridPoint, symbol: char) -> Self {
        Self { point, symbol }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DungeonError {
    Rooms(RoomError),
    /// The treasure or an agent starts outside the room graph.
    InvalidPlacement { entity: String, point: GridPoint },
    UnknownAgentPolicy { role: AgentRole, policy: String },
    InvalidSymbol { owner: String, symbol: String },
    /// An interactive agent's input provider stopped answering.
    InputUnavailable { agent: String },
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rooms(e) => write!(f, "invalid rooms: {e}"),
            Self::InvalidPlacement { entity, point } => {
                write!(f, "{entity} at {point} is not in the dungeon")
            }
            Self::UnknownAgentPolicy { role, policy } => {
                write!(f, "unknown agent type {policy:?} for {role:?}")
            }
            Self::InvalidSymbol { owner, symbol } => {
                write!(f, "symbol {symbol:?} for {owner} must be a single character")
            }
            Self::InputUnavailable { agent } => write!(f, "no input available to move {agent}"),
        }
    }
}

impl Error for DungeonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rooms(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RoomError> for DungeonError {
    fn from(e: RoomError) -> Self {
        Self::Rooms(e)
    }
}

#[derive(Clone)]
pub struct Dungeon {
    rooms: RoomGraph,
    treasure: Treasure,
    adventurer: Agent,
    troll: Agent,
    bounds: Bounds,
    rng: ChaCha8Rng,
    turn: u64,
    verbose: bool,
    log: Vec<LogEvent>,
}

impl Dungeon {
    pub fn new(
        rooms: RoomGraph,
        treasure: Treasure,
        adventurer: Agent,
        troll: Agent,
        seed: u64,
    ) -> Result<Self, DungeonError> {
        let placements = [
            ("Treasure", treasure.point),
            (adventurer.name.as_str(), adventurer.point),
            (troll.name.as_str(), troll.point),
        ];
        for (entity, point) in placements {
            if !rooms.contains(point) {
                return Err(DungeonError::InvalidPlacement { entity: entity.to_string(), point });
            }
        }
        let bounds = rooms.bounds().ok_or(DungeonError::InvalidPlacement {
            entity: "Treasure".to_string(),
            point: treasure.point,
        })?;
        for (from, to) in rooms.one_way_links() {
            debug!("one-way link {from} -> {to}");
        }

        Ok(Self {
            rooms,
            treasure,
            adventurer,
            troll,
            bounds,
            rng: ChaCha8Rng::seed_from_u64(seed),
            turn: 0,
            verbose: false,
            log: Vec::new(),
        })
    }

    pub fn rooms(&self) -> &RoomGraph {
        &self.rooms
    }

    pub fn treasure(&self) -> &Treasure {
        &self.treasure
    }

    pub fn adventurer(&self) -> &Agent {
        &self.adventurer
    }

    pub fn troll(&self) -> &Agent {
        &self.troll
    }

    pub fn agent(&self, role: AgentRole) -> &Agent {
        match role {
            AgentRole::Adventurer => &self.adventurer,
            AgentRole::Troll => &self.troll,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Enables collection of [`LogEvent`]s during [`Dungeon::update`].
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<LogEvent> {
        mem::take(&mut self.log)
    }

    pub fn needs_input(&self) -> Option<&Agent> {
        [&self.adventurer, &self.troll].into_iter().find(|agent| agent.policy.needs_input())
    }

    /// Troll collision takes precedence over reaching the treasure.
    pub fn outcome(&self) -> Outcome {
        if self.adventurer.point == self.troll.point {
            Outcome::TrollWins
        } else if self.adventurer.point == self.treasure.point {
            Outcome::AdventurerWins
        } else {
            Outcome::Ongoing
        }
    }

    /// Moves the adventurer, then the troll. Outcome checks are the caller's job.
    ///
    /// A failed update leaves the dungeon as it was before the call: when the troll's
    /// input is unavailable the adventurer's move is rolled back too.
    pub fn update(&mut self, input: &mut dyn InputProvider) -> Result<(), DungeonError> {
        let adventurer_at = self.adventurer.point;
        let rng = self.rng.clone();
        let logged = self.log.len();

        let moved = self
            .move_agent(AgentRole::Adventurer, input)
            .and_then(|()| self.move_agent(AgentRole::Troll, input));
        if let Err(e) = moved {
            self.adventurer.point = adventurer_at;
            self.rng = rng;
            self.log.truncate(logged);
            return Err(e);
        }
        self.turn += 1;
        Ok(())
    }

    fn move_agent(
        &mut self,
        role: AgentRole,
        input: &mut dyn InputProvider,
    ) -> Result<(), DungeonError> {
        let agent = match role {
            AgentRole::Adventurer => &mut self.adventurer,
            AgentRole::Troll => &mut self.troll,
        };
        let movement = agent
            .take_turn(&self.rooms, &mut self.rng, input)
            .map_err(|_| DungeonError::InputUnavailable { agent: agent.name.clone() })?;

        let event = match movement {
            Movement::Moved { from, to, direction } => {
                LogEvent::Moved { role, from, to, direction }
            }
            Movement::Trapped => {
                debug!("{} is trapped at {}", agent.name, agent.point);
                LogEvent::Trapped { role, at: agent.point }
            }
        };
        if self.verbose {
            self.log.push(event);
        }
        Ok(())
    }
}

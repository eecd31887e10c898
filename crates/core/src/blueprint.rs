//! Declarative, serializable dungeon descriptions.
//!
//! The persisted shape is:
//! - `rooms`: list of `{ point: [x, y], links: [[x, y], ...] }`
//! - `treasure`: `{ point, symbol }`
//! - `adventurer` / `troll`: `{ type, point, symbol, name, allow_wait }`

use serde::{Deserialize, Serialize};

use crate::agent::{Agent, MovementPolicy};
use crate::dungeon::{Dungeon, DungeonError, Treasure};
use crate::rooms::RoomGraph;
use crate::types::{AgentRole, GridPoint};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomBlueprint {
    pub point: GridPoint,
    #[serde(default)]
    pub links: Vec<GridPoint>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureBlueprint {
    pub point: GridPoint,
    pub symbol: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentBlueprint {
    #[serde(rename = "type")]
    pub policy: String,
    pub point: GridPoint,
    pub symbol: String,
    pub name: String,
    #[serde(default = "default_allow_wait")]
    pub allow_wait: bool,
}

fn default_allow_wait() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonBlueprint {
    pub rooms: Vec<RoomBlueprint>,
    pub treasure: TreasureBlueprint,
    pub adventurer: AgentBlueprint,
    pub troll: AgentBlueprint,
}

impl AgentBlueprint {
    pub fn to_agent(&self, role: AgentRole) -> Result<Agent, DungeonError> {
        let policy = MovementPolicy::from_name(&self.policy).ok_or_else(|| {
            DungeonError::UnknownAgentPolicy { role, policy: self.policy.clone() }
        })?;
        let symbol = single_char(&self.symbol).ok_or_else(|| DungeonError::InvalidSymbol {
            owner: self.name.clone(),
            symbol: self.symbol.clone(),
        })?;
        Ok(Agent::new(self.name.clone(), symbol, self.point, self.allow_wait, policy))
    }

    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            policy: agent.policy.name().to_string(),
            point: agent.point,
            symbol: agent.symbol.to_string(),
            name: agent.name.clone(),
            allow_wait: agent.allow_wait,
        }
    }
}

impl TreasureBlueprint {
    pub fn to_treasure(&self) -> Result<Treasure, DungeonError> {
        let symbol = single_char(&self.symbol).ok_or_else(|| DungeonError::InvalidSymbol {
            owner: "treasure".to_string(),
            symbol: self.symbol.clone(),
        })?;
        Ok(Treasure::new(self.point, symbol))
    }
}

impl DungeonBlueprint {
    /// Builds a dungeon whose random agents draw from a stream seeded with `seed`.
    pub fn build(&self, seed: u64) -> Result<Dungeon, DungeonError> {
        let rooms = RoomGraph::build(&self.rooms)?;
        let treasure = self.treasure.to_treasure()?;
        let adventurer = self.adventurer.to_agent(AgentRole::Adventurer)?;
        let troll = self.troll.to_agent(AgentRole::Troll)?;
        Dungeon::new(rooms, treasure, adventurer, troll, seed)
    }
}

impl From<&Dungeon> for DungeonBlueprint {
    fn from(dungeon: &Dungeon) -> Self {
        Self {
            rooms: dungeon.rooms().to_blueprints(),
            treasure: TreasureBlueprint {
                point: dungeon.treasure().point,
                symbol: dungeon.treasure().symbol.to_string(),
            },
            adventurer: AgentBlueprint::from_agent(dungeon.adventurer()),
            troll: AgentBlueprint::from_agent(dungeon.troll()),
        }
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

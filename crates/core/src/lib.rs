pub mod agent;
pub mod blueprint;
pub mod blueprint_file;
pub mod dungeon;
pub mod grid;
pub mod rooms;
pub mod simulation;
pub mod types;

#[cfg(test)]
mod test_support;

pub use agent::{
    Agent, InputClosed, InputProvider, Movement, MovementPolicy, ScriptedInput, Unattended,
};
pub use blueprint::{AgentBlueprint, DungeonBlueprint, RoomBlueprint, TreasureBlueprint};
pub use blueprint_file::{BlueprintLoadError, load_blueprint, load_dungeon, save_blueprint};
pub use dungeon::{Dungeon, DungeonError, Treasure};
pub use rooms::{Room, RoomError, RoomGraph};
pub use simulation::{
    Estimate, OutcomeTally, Probabilities, RunObserver, RunReport, Silent, Simulation,
    SimulationError,
};
pub use types::*;

//! Shared fixtures for the crate's unit test suites.
//! This module exists to avoid repeating room and dungeon setup across tests.

use crate::blueprint::{AgentBlueprint, DungeonBlueprint, RoomBlueprint, TreasureBlueprint};
use crate::types::GridPoint;

pub(crate) fn room(point: (i32, i32), links: &[(i32, i32)]) -> RoomBlueprint {
    RoomBlueprint {
        point: GridPoint::from(point),
        links: links.iter().copied().map(GridPoint::from).collect(),
    }
}

/// `len` rooms along y = 0, each linked both ways to its neighbours.
pub(crate) fn corridor_rooms(len: i32) -> Vec<RoomBlueprint> {
    (0..len)
        .map(|x| {
            let mut links = Vec::new();
            if x > 0 {
                links.push((x - 1, 0));
            }
            if x + 1 < len {
                links.push((x + 1, 0));
            }
            room((x, 0), &links)
        })
        .collect()
}

/// A centre room at (1, 1) linked both ways to its four neighbours.
pub(crate) fn plus_rooms() -> Vec<RoomBlueprint> {
    vec![
        room((0, 1), &[(1, 1)]),
        room((1, 0), &[(1, 1)]),
        room((1, 1), &[(0, 1), (2, 1), (1, 0), (1, 2)]),
        room((1, 2), &[(1, 1)]),
        room((2, 1), &[(1, 1)]),
    ]
}

pub(crate) fn agent(
    policy: &str,
    point: (i32, i32),
    symbol: &str,
    name: &str,
    allow_wait: bool,
) -> AgentBlueprint {
    AgentBlueprint {
        policy: policy.to_string(),
        point: GridPoint::from(point),
        symbol: symbol.to_string(),
        name: name.to_string(),
        allow_wait,
    }
}

/// (0, 0) <-> (1, 0) with the treasure at (1, 0); the troll sits in an unlinked room at (2, 0).
pub(crate) fn lone_troll_blueprint() -> DungeonBlueprint {
    DungeonBlueprint {
        rooms: vec![room((0, 0), &[(1, 0)]), room((1, 0), &[(0, 0)]), room((2, 0), &[])],
        treasure: TreasureBlueprint { point: GridPoint::new(1, 0), symbol: "$".to_string() },
        adventurer: agent("random", (0, 0), "A", "adventurer", false),
        troll: agent("random", (2, 0), "T", "troll", false),
    }
}

/// Adventurer and troll wander separate corridors; the treasure room has no links at all.
pub(crate) fn unreachable_treasure_blueprint() -> DungeonBlueprint {
    DungeonBlueprint {
        rooms: vec![
            room((0, 0), &[(1, 0)]),
            room((0, 2), &[(1, 2)]),
            room((1, 0), &[(0, 0)]),
            room((1, 2), &[(0, 2)]),
            room((3, 0), &[]),
        ],
        treasure: TreasureBlueprint { point: GridPoint::new(3, 0), symbol: "$".to_string() },
        adventurer: agent("random", (0, 0), "A", "adventurer", true),
        troll: agent("random", (0, 2), "T", "troll", true),
    }
}

//! Random dungeons for fuzzing.

use std::collections::BTreeMap;

use game_core::{
    AgentBlueprint, Direction, DungeonBlueprint, GridPoint, RoomBlueprint, TreasureBlueprint,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

pub fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

/// Rooms on a `width` x `height` grid, each cell present with probability 3/4 and each adjacent
/// pair of rooms linked one way, both ways or not at all. Both agents wander at random.
pub fn random_blueprint(rng: &mut ChaCha8Rng, width: i32, height: i32) -> DungeonBlueprint {
    let mut rooms: BTreeMap<GridPoint, Vec<GridPoint>> = BTreeMap::new();
    for y in 0..height.max(1) {
        for x in 0..width.max(1) {
            if rng.next_u64() % 4 != 0 {
                rooms.insert(GridPoint::new(x, y), Vec::new());
            }
        }
    }
    if rooms.is_empty() {
        rooms.insert(GridPoint::new(0, 0), Vec::new());
    }

    let points: Vec<GridPoint> = rooms.keys().copied().collect();
    for &point in &points {
        let forward = [Direction::Right, Direction::Down].into_iter();
        for neighbour in forward.filter_map(|direction| point.step(direction)) {
            if !rooms.contains_key(&neighbour) {
                continue;
            }
            let mode = rng.next_u64() % 4;
            if mode & 1 == 1 {
                rooms.entry(point).or_default().push(neighbour);
            }
            if mode & 2 == 2 {
                rooms.entry(neighbour).or_default().push(point);
            }
        }
    }

    let mut agent = |symbol: &str, name: &str| AgentBlueprint {
        policy: "random".to_string(),
        point: choose(rng, &points),
        symbol: symbol.to_string(),
        name: name.to_string(),
        allow_wait: rng.next_u64() % 2 == 0,
    };
    let adventurer = agent("A", "adventurer");
    let troll = agent("T", "troll");
    let treasure = TreasureBlueprint { point: choose(rng, &points), symbol: "$".to_string() };

    DungeonBlueprint {
        rooms: rooms.into_iter().map(|(point, links)| RoomBlueprint { point, links }).collect(),
        treasure,
        adventurer,
        troll,
    }
}

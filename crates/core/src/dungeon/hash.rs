//! Stable snapshot hashing for deterministic verification.
//! This module keeps hashing separate from turn advancement.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Dungeon {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.turn);
        for agent in [&self.adventurer, &self.troll] {
            hasher.write_i32(agent.point.x);
            hasher.write_i32(agent.point.y);
        }
        hasher.write_i32(self.treasure.point.x);
        hasher.write_i32(self.treasure.point.y);
        hasher.write_u8(self.outcome().score() as u8);
        hasher.finish()
    }
}

//! Stable snapshot hashing for deterministic verification.
//! Kept apart from the movement and regeneration rules in the parent module.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::GameSession;

impl GameSession {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.run_seed);
        hasher.write_u32(self.maze_index);
        hasher.write_u32(self.mazes_completed);
        hasher.write_i32(self.player.x);
        hasher.write_i32(self.player.y);
        hasher.write_u64(self.maze.fingerprint());
        hasher.finish()
    }
}

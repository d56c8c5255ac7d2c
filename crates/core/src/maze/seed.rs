//! Deterministic seed mixing so every maze of a run draws from its own stream.

pub fn derive_maze_seed(run_seed: u64, maze_index: u32) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= u64::from(maze_index).wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

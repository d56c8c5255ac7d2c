//! Procedural maze generation split into coherent submodules.

pub mod layout;

mod builder;
mod grid;
mod random;
mod seed;

pub use builder::MazeBuilder;
pub use grid::{Dimensions, Grid, MIN_DIMENSION};
pub use layout::TileLayout;
pub use random::{RandomSource, seeded_rng};
pub use seed::derive_maze_seed;

use crate::types::MazeError;

pub fn generate<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    Ok(MazeBuilder::new(width, height)?.generate(rng))
}

pub fn generate_seeded(width: usize, height: usize, seed: u64) -> Result<Grid, MazeError> {
    generate(width, height, &mut seeded_rng(seed))
}

pub mod maze;
pub mod session;
pub mod types;

pub use maze::{
    Dimensions, Grid, MazeBuilder, RandomSource, TileLayout, generate, generate_seeded,
    seeded_rng,
};
pub use session::{GameSession, SessionConfig};
pub use types::*;

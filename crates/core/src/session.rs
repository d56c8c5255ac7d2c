//! Level progression around the maze builder.
//!
//! A `GameSession` is owned by whatever drives the game loop. It tracks the player on the
//! current maze, treats walls as solid, and swaps in a freshly generated maze whenever the
//! exit is reached. Every maze of a run is derived from the run seed, so a session replays
//! identically from the same seed and the same sequence of steps.

mod hash;

use crate::maze::{Grid, MazeBuilder, derive_maze_seed, seeded_rng};
use crate::types::{Direction, MazeError, Pos, SessionEvent, StepOutcome};

/// Maze size used by the game unless configured otherwise.
pub const DEFAULT_MAZE_WIDTH: usize = 20;
pub const DEFAULT_MAZE_HEIGHT: usize = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { width: DEFAULT_MAZE_WIDTH, height: DEFAULT_MAZE_HEIGHT }
    }
}

pub struct GameSession {
    run_seed: u64,
    builder: MazeBuilder,
    maze_index: u32,
    mazes_completed: u32,
    maze: Grid,
    player: Pos,
    log: Vec<SessionEvent>,
}

impl GameSession {
    pub fn new(run_seed: u64, config: SessionConfig) -> Result<Self, MazeError> {
        let builder = MazeBuilder::new(config.width, config.height)?;
        let maze = build_maze(builder, run_seed, 0);
        let mut session = Self {
            run_seed,
            builder,
            maze_index: 0,
            mazes_completed: 0,
            player: maze.entrance(),
            maze,
            log: Vec::new(),
        };
        session.record_generated();
        Ok(session)
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn maze(&self) -> &Grid {
        &self.maze
    }

    /// Index of the current maze within the run, starting at zero.
    pub fn maze_index(&self) -> u32 {
        self.maze_index
    }

    pub fn mazes_completed(&self) -> u32 {
        self.mazes_completed
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn log(&self) -> &[SessionEvent] {
        &self.log
    }

    pub fn step(&mut self, direction: Direction) -> StepOutcome {
        let target = self.player.step(direction);
        if !self.maze.is_open(target) {
            self.log.push(SessionEvent::PlayerBlocked { at: self.player, direction });
            return StepOutcome::Blocked;
        }

        if target == self.maze.exit() {
            self.advance_to_next_maze();
            return StepOutcome::MazeCompleted { mazes_completed: self.mazes_completed };
        }

        self.player = target;
        StepOutcome::Moved { to: target }
    }

    fn advance_to_next_maze(&mut self) {
        self.mazes_completed += 1;
        self.log.push(SessionEvent::MazeCompleted { mazes_completed: self.mazes_completed });

        self.maze_index += 1;
        self.maze = build_maze(self.builder, self.run_seed, self.maze_index);
        self.player = self.maze.entrance();
        self.record_generated();
    }

    fn record_generated(&mut self) {
        self.log.push(SessionEvent::MazeGenerated {
            maze_index: self.maze_index,
            fingerprint: self.maze.fingerprint(),
        });
    }
}

fn build_maze(builder: MazeBuilder, run_seed: u64, maze_index: u32) -> Grid {
    builder.generate(&mut seeded_rng(derive_maze_seed(run_seed, maze_index)))
}

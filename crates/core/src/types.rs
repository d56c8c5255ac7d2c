use std::error::Error;
use std::fmt;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CellState {
    Wall,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// `(dx, dy)` of a single step, with `y` growing downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimensions { width: usize, height: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "invalid maze dimensions {width}x{height}: both sides must be at least 5 \
                 and at least one side must be odd"
            ),
        }
    }
}

impl Error for MazeError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    MazeGenerated { maze_index: u32, fingerprint: u64 },
    PlayerBlocked { at: Pos, direction: Direction },
    MazeCompleted { mazes_completed: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved { to: Pos },
    Blocked,
    MazeCompleted { mazes_completed: u32 },
}

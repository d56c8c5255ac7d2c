//! Owned cell grid returned by the builder, plus the validated dimensions it is built from.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellState, MazeError, Pos};

pub const MIN_DIMENSION: usize = 5;

/// Width and height that passed validation.
///
/// Both sides must be at least [`MIN_DIMENSION`]. When both sides are even the
/// cell beside the exit sits on neither a lattice row nor a lattice column and
/// could never be reached, so that combination is rejected as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let too_small = width < MIN_DIMENSION || height < MIN_DIMENSION;
        let exit_unreachable = width % 2 == 0 && height % 2 == 0;
        if too_small || exit_unreachable {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(self) -> usize {
        self.width
    }

    pub fn height(self) -> usize {
        self.height
    }

    pub fn entrance(self) -> Pos {
        Pos { y: 1, x: 0 }
    }

    pub fn exit(self) -> Pos {
        Pos { y: (self.height - 2) as i32, x: (self.width - 1) as i32 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<CellState>,
}

impl Grid {
    pub(super) fn filled(dimensions: Dimensions, state: CellState) -> Self {
        Self { dimensions, cells: vec![state; dimensions.width * dimensions.height] }
    }

    pub(super) fn set(&mut self, x: usize, y: usize, state: CellState) {
        let index = self.index(x, y);
        self.cells[index] = state;
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn entrance(&self) -> Pos {
        self.dimensions.entrance()
    }

    pub fn exit(&self) -> Pos {
        self.dimensions.exit()
    }

    /// Cell at column `x`, row `y`. Panics when out of range, like slice indexing.
    pub fn cell(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width()
            && (pos.y as usize) < self.height()
    }

    /// Everything outside the grid reads as solid wall.
    pub fn tile_at(&self, pos: Pos) -> CellState {
        if !self.in_bounds(pos) {
            return CellState::Wall;
        }
        self.cell(pos.x as usize, pos.y as usize)
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.tile_at(pos) == CellState::Open
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width())
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == CellState::Open).count()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellState::Wall => 0,
                CellState::Open => 1,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.width() && y < self.height(), "cell ({x}, {y}) outside grid");
        y * self.width() + x
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(match cell {
                    CellState::Wall => "#",
                    CellState::Open => ".",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<&[CellState]> = self.rows().collect();
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("width", &self.width())?;
        state.serialize_field("height", &self.height())?;
        state.serialize_field("rows", &rows)?;
        state.end()
    }
}

//! Pixel placement of grid cells for renderers. Pure arithmetic, draws nothing.

use crate::types::Pos;

use super::grid::Grid;

pub const DEFAULT_TILE_SIZE: u32 = 32;
/// Height of the status band drawn above the maze.
pub const DEFAULT_VERTICAL_OFFSET: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileLayout {
    pub tile_size: u32,
    pub vertical_offset: u32,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self { tile_size: DEFAULT_TILE_SIZE, vertical_offset: DEFAULT_VERTICAL_OFFSET }
    }
}

impl TileLayout {
    /// Top-left pixel of the tile at `pos`.
    pub fn tile_origin(&self, pos: Pos) -> (i64, i64) {
        let tile = i64::from(self.tile_size);
        (i64::from(pos.x) * tile, i64::from(pos.y) * tile + i64::from(self.vertical_offset))
    }

    pub fn tile_center(&self, pos: Pos) -> (i64, i64) {
        let half = i64::from(self.tile_size / 2);
        let (x, y) = self.tile_origin(pos);
        (x + half, y + half)
    }

    pub fn cell_at_point(&self, px: i64, py: i64, grid: &Grid) -> Option<Pos> {
        if self.tile_size == 0 {
            return None;
        }
        let tile = i64::from(self.tile_size);
        let local_y = py - i64::from(self.vertical_offset);
        if px < 0 || local_y < 0 {
            return None;
        }
        let pos = Pos {
            y: i32::try_from(local_y / tile).ok()?,
            x: i32::try_from(px / tile).ok()?,
        };
        grid.in_bounds(pos).then_some(pos)
    }

    pub fn entrance_marker(&self, grid: &Grid) -> (i64, i64) {
        self.tile_center(grid.entrance())
    }

    pub fn exit_marker(&self, grid: &Grid) -> (i64, i64) {
        self.tile_center(grid.exit())
    }

    /// Pixel size of the whole drawing, status band included.
    pub fn canvas_size(&self, grid: &Grid) -> (u64, u64) {
        let tile = u64::from(self.tile_size);
        (
            grid.width() as u64 * tile,
            grid.height() as u64 * tile + u64::from(self.vertical_offset),
        )
    }
}

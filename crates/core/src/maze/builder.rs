//! Randomized depth-first backtracking over the odd-coordinate lattice.
//!
//! Room centers sit on `{1, 3, 5, ..} x {1, 3, 5, ..}`. Each step opens an unvisited
//! center two cells away together with the single wall cell between them, so corridors
//! stay one cell wide and the carved passages form a spanning tree rooted at `(1, 1)`.

use crate::types::{CellState, MazeError};

use super::grid::{Dimensions, Grid};
use super::random::RandomSource;

/// Up, right, down, left. Candidate order is part of the reproducibility contract.
const LATTICE_STEPS: [(isize, isize); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeBuilder {
    dimensions: Dimensions,
}

impl MazeBuilder {
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Ok(Self::from_dimensions(Dimensions::new(width, height)?))
    }

    pub fn from_dimensions(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut grid = Grid::filled(self.dimensions, CellState::Wall);
        carve_passages(&mut grid, rng);
        open_entrance_and_exit(&mut grid);
        grid
    }
}

fn carve_passages<R: RandomSource + ?Sized>(grid: &mut Grid, rng: &mut R) {
    grid.set(1, 1, CellState::Open);
    let mut stack = vec![(1_usize, 1_usize)];
    let mut candidates = Vec::with_capacity(LATTICE_STEPS.len());

    while let Some(&(x, y)) = stack.last() {
        candidates.clear();
        candidates.extend(unvisited_lattice_neighbours(grid, x, y));
        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (next_x, next_y) = candidates[rng.pick_index(candidates.len())];
        grid.set((x + next_x) / 2, (y + next_y) / 2, CellState::Open);
        grid.set(next_x, next_y, CellState::Open);
        stack.push((next_x, next_y));
    }
}

fn unvisited_lattice_neighbours(
    grid: &Grid,
    x: usize,
    y: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    let max_x = grid.width() - 2;
    let max_y = grid.height() - 2;
    LATTICE_STEPS.into_iter().filter_map(move |(dx, dy)| {
        let next_x = x.checked_add_signed(dx)?;
        let next_y = y.checked_add_signed(dy)?;
        let inside = (1..=max_x).contains(&next_x) && (1..=max_y).contains(&next_y);
        (inside && grid.cell(next_x, next_y) == CellState::Wall).then_some((next_x, next_y))
    })
}

fn open_entrance_and_exit(grid: &mut Grid) {
    let (width, height) = (grid.width(), grid.height());
    grid.set(0, 1, CellState::Open);
    grid.set(1, 1, CellState::Open);
    grid.set(width - 1, height - 2, CellState::Open);
    grid.set(width - 2, height - 2, CellState::Open);
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::maze::random::seeded_rng;
    use crate::types::Pos;

    /// Always takes the first candidate, which pins the carving order.
    struct FirstCandidate;

    impl RandomSource for FirstCandidate {
        fn next_u64(&mut self) -> u64 {
            0
        }
    }

    #[test]
    fn first_candidate_source_carves_known_layout() {
        let grid = MazeBuilder::new(7, 7).expect("valid dimensions").generate(&mut FirstCandidate);
        let expected = [
            "#######", //
            "......#", //
            "#####.#", //
            "#...#.#", //
            "#.#.#.#", //
            "#.#....", //
            "#######",
        ];
        let rendered = grid.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn default_game_size_has_expected_shape() {
        let grid = MazeBuilder::new(20, 15).expect("valid dimensions").generate(&mut seeded_rng(1));
        assert_eq!(grid.rows().count(), 15);
        assert!(grid.rows().all(|row| row.len() == 20));
        assert_eq!(grid.cell(1, 1), CellState::Open);
        assert_eq!(grid.cell(18, 13), CellState::Open);
        assert_eq!(grid.cell(0, 1), CellState::Open);
        assert_eq!(grid.cell(19, 13), CellState::Open);
    }

    #[test]
    fn rejects_dimensions_below_minimum() {
        assert_eq!(
            MazeBuilder::new(3, 3),
            Err(MazeError::InvalidDimensions { width: 3, height: 3 })
        );
        assert!(MazeBuilder::new(4, 15).is_err());
    }

    #[test]
    fn same_seed_produces_byte_identical_grids() {
        let builder = MazeBuilder::new(31, 21).expect("valid dimensions");
        let a = builder.generate(&mut seeded_rng(123_456));
        let b = builder.generate(&mut seeded_rng(123_456));
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_produce_different_grids() {
        let builder = MazeBuilder::new(31, 21).expect("valid dimensions");
        let a = builder.generate(&mut seeded_rng(1));
        let b = builder.generate(&mut seeded_rng(2));
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn every_lattice_center_is_carved() {
        let grid = MazeBuilder::new(21, 15).expect("valid dimensions").generate(&mut seeded_rng(5));
        for y in (1..=13).step_by(2) {
            for x in (1..=19).step_by(2) {
                assert_eq!(grid.cell(x, y), CellState::Open, "center ({x}, {y}) left as wall");
            }
        }
    }

    #[test]
    fn even_by_even_interior_corners_are_never_carved() {
        let grid = MazeBuilder::new(22, 15).expect("valid dimensions").generate(&mut seeded_rng(8));
        for y in (2..13).step_by(2) {
            for x in (2..20).step_by(2) {
                assert_eq!(grid.cell(x, y), CellState::Wall, "pillar ({x}, {y}) was opened");
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_grids_hold_maze_invariants(
            seed in any::<u64>(),
            width in 5_usize..=41,
            height in 5_usize..=41,
        ) {
            prop_assume!(Dimensions::new(width, height).is_ok());
            let grid = MazeBuilder::new(width, height)
                .expect("valid dimensions")
                .generate(&mut seeded_rng(seed));

            prop_assert!(
                border_is_closed_except_entrance_and_exit(&grid),
                "border breached for {width}x{height} seed={seed}"
            );
            prop_assert_eq!(
                reachable_from_start(&grid),
                grid.open_cell_count(),
                "unreachable open cells for {}x{} seed={}", width, height, seed
            );
            prop_assert_eq!(
                open_adjacencies(&grid) + 1,
                grid.open_cell_count(),
                "cycle in passages for {}x{} seed={}", width, height, seed
            );
        }
    }

    fn border_is_closed_except_entrance_and_exit(grid: &Grid) -> bool {
        let (width, height) = (grid.width(), grid.height());
        let entrance = grid.entrance();
        let exit = grid.exit();
        for y in 0..height {
            for x in 0..width {
                let on_border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if !on_border {
                    continue;
                }
                let pos = Pos { y: y as i32, x: x as i32 };
                let should_be_open = pos == entrance || pos == exit;
                if grid.is_open(pos) != should_be_open {
                    return false;
                }
            }
        }
        true
    }

    fn reachable_from_start(grid: &Grid) -> usize {
        let start = Pos { y: 1, x: 1 };
        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in [
                Pos { y: pos.y - 1, x: pos.x },
                Pos { y: pos.y, x: pos.x + 1 },
                Pos { y: pos.y + 1, x: pos.x },
                Pos { y: pos.y, x: pos.x - 1 },
            ] {
                if grid.is_open(next) && seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen.len()
    }

    /// Right and down neighbours only, so each open pair is counted once.
    fn open_adjacencies(grid: &Grid) -> usize {
        let mut edges = 0;
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let pos = Pos { y, x };
                if !grid.is_open(pos) {
                    continue;
                }
                edges += usize::from(grid.is_open(Pos { y, x: x + 1 }));
                edges += usize::from(grid.is_open(Pos { y: y + 1, x }));
            }
        }
        edges
    }
}

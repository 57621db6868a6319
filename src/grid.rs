//! The Game of Life grid and its generation step.
//!
//! Edges are hard: neighbors past the border simply do not exist. Each
//! generation is computed from a single snapshot; changes are collected as
//! [`PendingUpdate`]s and applied only after the whole grid has been scanned.

use rand::Rng;

use crate::patterns::{Pattern, DEFAULT_PATTERN};
use crate::tilemap::Tilemap;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

/// A deferred mutation produced while scanning a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingUpdate {
    pub row: usize,
    pub col: usize,
    pub state: Cell,
}

/// Fixed-size board with an incrementally maintained live-cell count.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Tilemap<Cell>,
    alive: usize,
}

impl Grid {
    /// All-dead grid of `rows x cols`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Tilemap::new(rows, cols),
            alive: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.rows
    }

    pub fn cols(&self) -> usize {
        self.cells.cols
    }

    /// Live-cell counter. Always equal to [`Grid::count_alive`].
    pub fn live_count(&self) -> usize {
        self.alive
    }

    /// Count live cells by scanning the whole grid.
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|(_, _, c)| c.is_alive()).count()
    }

    /// State at `(row, col)`. Off-grid positions read as dead.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells.get(row, col).copied().unwrap_or_default()
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_alive()
    }

    /// Set one cell, keeping the live counter in step.
    /// Returns true if the cell actually changed; off-grid writes change nothing.
    pub fn set(&mut self, row: usize, col: usize, state: Cell) -> bool {
        let Some(cell) = self.cells.get_mut(row, col) else {
            return false;
        };
        if *cell == state {
            return false;
        }
        *cell = state;
        if state.is_alive() {
            self.alive += 1;
        } else {
            self.alive -= 1;
        }
        true
    }

    /// One row of cells, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        self.cells.row(row)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
        self.alive = 0;
    }

    /// Place the startup pattern at its usual position.
    pub fn seed(&mut self) {
        self.seed_pattern(&DEFAULT_PATTERN, DEFAULT_PATTERN.origin);
    }

    /// Place `pattern` with its top-left offset at `origin`.
    /// Cells landing outside the grid are dropped. Returns how many cells
    /// were placed.
    pub fn seed_pattern(&mut self, pattern: &Pattern, origin: (usize, usize)) -> usize {
        let (r0, c0) = origin;
        let mut placed = 0;
        for &(dr, dc) in pattern.cells {
            let (row, col) = (r0 + dr, c0 + dc);
            if self.cells.contains(row, col) {
                self.set(row, col, Cell::Alive);
                placed += 1;
            }
        }
        placed
    }

    /// Replace the grid with random soup; each cell is alive with probability `density`.
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        self.clear();
        let density = density.clamp(0.0, 1.0);
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if rng.gen_bool(density) {
                    self.set(row, col, Cell::Alive);
                }
            }
        }
    }

    /// Number of live cells among the up-to-8 in-bounds neighbors.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.cells
            .neighbors_8(row, col)
            .filter(|&(r, c)| self.is_alive(r, c))
            .count() as u8
    }

    /// Changes the next generation would make, computed against the current state.
    pub fn pending_updates(&self) -> Vec<PendingUpdate> {
        let mut changes = Vec::new();
        for (row, col, &cell) in self.cells.iter() {
            let neighbors = self.count_live_neighbors(row, col);
            let next = match (cell, neighbors) {
                (Cell::Alive, n) if !(2..=3).contains(&n) => Cell::Dead,
                (Cell::Dead, 3) => Cell::Alive,
                _ => continue,
            };
            changes.push(PendingUpdate { row, col, state: next });
        }
        changes
    }

    /// Step one generation. Returns the number of cells that changed state.
    pub fn advance(&mut self) -> usize {
        let changes = self.pending_updates();
        for op in &changes {
            self.set(op.row, op.col, op.state);
        }
        changes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                if ch == 'X' {
                    grid.set(r, c, Cell::Alive);
                }
            }
        }
        grid
    }

    fn pattern_of(grid: &Grid) -> Vec<String> {
        (0..grid.rows())
            .map(|r| grid.row(r).iter().map(|c| if c.is_alive() { 'X' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(40, 80);
        assert_eq!(grid.rows(), 40);
        assert_eq!(grid.cols(), 80);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_seed_places_five_cells() {
        let mut grid = Grid::new(40, 80);
        grid.seed();
        assert_eq!(grid.live_count(), 5);
        for (r, c) in [(9, 25), (10, 24), (10, 25), (11, 25), (11, 26)] {
            assert!(grid.is_alive(r, c), "({}, {}) should be alive", r, c);
        }
    }

    #[test]
    fn test_seed_pattern_clips_to_grid() {
        let mut grid = Grid::new(10, 10);
        let placed = grid.seed_pattern(&DEFAULT_PATTERN, (8, 8));
        // Only offsets (0,1), (1,0), (1,1) fit.
        assert_eq!(placed, 3);
        assert_eq!(grid.live_count(), 3);
        assert_eq!(grid.count_alive(), 3);
    }

    #[test]
    fn test_set_keeps_counter() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(1, 1, Cell::Alive));
        assert!(!grid.set(1, 1, Cell::Alive));
        assert_eq!(grid.live_count(), 1);
        assert!(grid.set(1, 1, Cell::Dead));
        assert!(!grid.set(1, 1, Cell::Dead));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_set_past_last_column_is_ignored() {
        let mut grid = Grid::new(4, 5);
        assert!(!grid.set(0, 5, Cell::Alive));
        assert!(!grid.is_alive(1, 0));
        assert_eq!(grid.get(0, 5), Cell::Dead);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.count_alive(), 0);

        assert!(!grid.set(4, 0, Cell::Alive));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_neighbor_count_bounds() {
        let full = grid_from(&["XXX", "XXX", "XXX"]);
        assert_eq!(full.count_live_neighbors(1, 1), 8);
        assert_eq!(full.count_live_neighbors(0, 0), 3);
        assert_eq!(full.count_live_neighbors(0, 1), 5);
        assert_eq!(full.count_live_neighbors(2, 2), 3);

        let lone = grid_from(&["X"]);
        assert_eq!(lone.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A live column on the right edge must not count toward the left edge.
        let grid = grid_from(&["....X", "....X", "....X"]);
        assert_eq!(grid.count_live_neighbors(1, 0), 0);
        assert_eq!(grid.count_live_neighbors(1, 3), 3);
    }

    #[test]
    fn test_survival_rules() {
        // Center with 2 neighbors survives, with 3 survives.
        let mut two = grid_from(&["X..", ".X.", "..X"]);
        two.advance();
        assert!(two.is_alive(1, 1));

        let mut three = grid_from(&["X.X", ".X.", "..X"]);
        three.advance();
        assert!(three.is_alive(1, 1));
    }

    #[test]
    fn test_death_rules() {
        // One neighbor: underpopulation.
        let mut one = grid_from(&["X..", ".X.", "..."]);
        one.advance();
        assert!(!one.is_alive(1, 1));

        // Four neighbors: overpopulation.
        let mut four = grid_from(&["X.X", ".X.", "X.X"]);
        four.advance();
        assert!(!four.is_alive(1, 1));
    }

    #[test]
    fn test_birth_rules() {
        let mut three = grid_from(&["X.X", "...", ".X."]);
        three.advance();
        assert!(three.is_alive(1, 1));

        let mut two = grid_from(&["X.X", "...", "..."]);
        two.advance();
        assert!(!two.is_alive(1, 1));

        let mut four = grid_from(&["X.X", "...", "X.X"]);
        four.advance();
        assert!(!four.is_alive(1, 1));
    }

    #[test]
    fn test_empty_grid_is_fixed_point() {
        let mut grid = Grid::new(6, 7);
        assert_eq!(grid.advance(), 0);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 2, Cell::Alive);
        assert_eq!(grid.advance(), 1);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_plus_becomes_ring() {
        let mut grid = grid_from(&[".X.", "XXX", ".X."]);
        assert_eq!(grid.live_count(), 5);
        grid.advance();
        assert_eq!(pattern_of(&grid), vec!["XXX", "X.X", "XXX"]);
        assert_eq!(grid.live_count(), 8);
        assert_eq!(grid.count_alive(), 8);
    }

    #[test]
    fn test_updates_use_single_snapshot() {
        // A blinker only oscillates correctly if no cell sees a half-applied generation.
        let mut grid = grid_from(&[".....", ".....", ".XXX.", ".....", "....."]);
        grid.advance();
        assert_eq!(pattern_of(&grid), vec![".....", "..X..", "..X..", "..X..", "....."]);
        grid.advance();
        assert_eq!(pattern_of(&grid), vec![".....", ".....", ".XXX.", ".....", "....."]);
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = grid_from(&["....", ".XX.", ".XX.", "...."]);
        assert!(grid.pending_updates().is_empty());
        assert_eq!(grid.advance(), 0);
        assert_eq!(grid.live_count(), 4);
    }

    #[test]
    fn test_counter_matches_scan_over_many_generations() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut grid = Grid::new(24, 31);
        grid.randomize(0.35, &mut rng);
        assert_eq!(grid.live_count(), grid.count_alive());
        for _ in 0..50 {
            grid.advance();
            assert_eq!(grid.live_count(), grid.count_alive());
        }
    }

    #[test]
    fn test_randomize_is_deterministic_per_seed() {
        let mut a = Grid::new(10, 10);
        let mut b = Grid::new(10, 10);
        a.randomize(0.5, &mut ChaCha8Rng::seed_from_u64(42));
        b.randomize(0.5, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(pattern_of(&a), pattern_of(&b));

        let mut empty = Grid::new(4, 4);
        empty.randomize(0.0, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(empty.live_count(), 0);
    }
}

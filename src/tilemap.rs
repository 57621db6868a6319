/// A 2D tilemap grid addressed by `(row, col)` with hard edges (no wrapping).
#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub rows: usize,
    pub cols: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Tilemap<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Row-major index, or `None` when `(row, col)` is off the map.
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if self.contains(row, col) {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index(row, col).map(|idx| &self.data[idx])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        let idx = self.index(row, col)?;
        Some(&mut self.data[idx])
    }

    /// Store `value` at `(row, col)`. Returns false and stores nothing when off the map.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        match self.get_mut(row, col) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Fill the entire map with a value.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// 8-connected neighbors of `(row, col)`, including diagonals.
    /// Positions past any edge are skipped, so corners yield 3 and edges 5.
    pub fn neighbors_8(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        (-1i64..=1)
            .flat_map(|dr| (-1i64..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let nr = row as i64 + dr;
                let nc = col as i64 + dc;
                if nr >= 0 && nc >= 0 && (nr as usize) < self.rows && (nc as usize) < self.cols {
                    Some((nr as usize, nc as usize))
                } else {
                    None
                }
            })
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(idx, val)| (idx / cols, idx % cols, val))
    }

    /// Iterate over one row.
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }
}

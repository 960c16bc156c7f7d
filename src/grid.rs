use crate::COLUMNS;
use crate::ROWS;

/// A fixed size grid of cells, `R` rows by `C` columns. A cell is either alive (`true`) or dead
/// (`false`).
///
/// The default dimensions are the board the simulation runs on. Smaller grids only show up in
/// tests.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid<const R: usize = ROWS, const C: usize = COLUMNS> {
    cells: [[bool; C]; R],
}

impl<const R: usize, const C: usize> Default for Grid<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> Grid<R, C> {
    /// An all dead grid
    pub const fn new() -> Self {
        Self {
            cells: [[false; C]; R],
        }
    }

    /// Build a grid from ASCII rows, `#` meaning alive and `.` meaning dead.
    ///
    /// Rows shorter than `C` are padded with dead cells, and missing rows are dead.
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(rows.len() <= R, "too many rows for the grid");

        let mut grid = Self::new();

        for (row, line) in rows.iter().enumerate() {
            assert!(line.len() <= C, "row {row} is wider than the grid");

            for (col, b) in line.bytes().enumerate() {
                grid.cells[row][col] = match b {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("pattern rows may only contain '.' or '#'"),
                };
            }
        }

        grid
    }

    /// Whether the cell at `(row, col)` is alive
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < R, "row is out of bounds");
        assert!(col < C, "col is out of bounds");

        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(row < R, "row is out of bounds");
        assert!(col < C, "col is out of bounds");

        self.cells[row][col] = alive;
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells = [[false; C]; R];
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }

    /// Number of cells whose state differs between `self` and `other`
    pub fn diff(&self, other: &Self) -> usize {
        self.cells
            .iter()
            .flatten()
            .zip(other.cells.iter().flatten())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Row-major traversal of `(row, col, alive)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &alive)| (row, col, alive))
        })
    }

    /// Counts the live cells among the (up to) 8 neighbors of `(row, col)`. Positions past the
    /// edge of the grid don't exist, there is no wraparound.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let rows = row.saturating_sub(1)..=(row + 1).min(R - 1);
        let cols = col.saturating_sub(1)..=(col + 1).min(C - 1);

        let mut n = 0;

        for y in rows {
            for x in cols.clone() {
                if (y, x) != (row, col) && self.cells[y][x] {
                    n += 1;
                }
            }
        }

        n
    }

    pub(crate) fn rows(&self) -> &[[bool; C]; R] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [[bool; C]; R] {
        &mut self.cells
    }
}

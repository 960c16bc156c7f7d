use crate::COLUMNS;
use crate::ROWS;
use crate::grid::Grid;

/// Double buffer of grids. One of them is the current generation, the other is scratch space the
/// next generation gets written into. Advancing flips which one is current, grids are never copied.
#[derive(Clone, Debug)]
pub struct Generations<const R: usize = ROWS, const C: usize = COLUMNS> {
    grids: [Grid<R, C>; 2],

    /// Index of the current grid in `grids`
    current: usize,
}

impl<const R: usize, const C: usize> Default for Generations<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const R: usize, const C: usize> Generations<R, C> {
    /// Both grids dead, the first one current
    pub const fn new() -> Self {
        Self {
            grids: [Grid::new(), Grid::new()],
            current: 0,
        }
    }

    /// Start from the given generation
    pub fn from_grid(grid: Grid<R, C>) -> Self {
        Self {
            grids: [grid, Grid::new()],
            current: 0,
        }
    }

    pub fn current(&self) -> &Grid<R, C> {
        &self.grids[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Grid<R, C> {
        &mut self.grids[self.current]
    }

    pub fn scratch_mut(&mut self) -> &mut Grid<R, C> {
        &mut self.grids[self.current ^ 1]
    }

    /// Borrow the current grid for reading and the scratch grid for writing at the same time
    pub(crate) fn split(&mut self) -> (&Grid<R, C>, &mut Grid<R, C>) {
        let [a, b] = &mut self.grids;

        if self.current == 0 { (&*a, b) } else { (&*b, a) }
    }

    /// Make the scratch grid current. Only call this once the scratch grid is fully written.
    pub(crate) fn swap(&mut self) {
        self.current ^= 1;
    }
}

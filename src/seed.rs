use rand::Rng;

use crate::generations::Generations;
use crate::grid::Grid;

/// Offsets from the center of the fixed pattern: a ring of 8 around a dead center, and 4 spikes
/// sticking out of it.
const PATTERN: [(isize, isize); 12] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
    // spikes
    (0, 2),
    (0, -2),
    (4, 0),
    (-4, 0),
];

/// How a fresh generation gets picked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedMode {
    /// Every cell alive with probability 1/2
    #[default]
    Random,

    /// The fixed pattern on an otherwise dead grid
    Pattern,

    /// The fixed pattern drawn over a random grid
    Overlay,
}

/// Seed `gens` according to `mode`
pub fn seed<const R: usize, const C: usize, G: Rng>(
    mode: SeedMode,
    gens: &mut Generations<R, C>,
    rng: &mut G,
) {
    match mode {
        SeedMode::Random => seed_random(gens, rng),
        SeedMode::Pattern => seed_fixed_pattern(gens),
        SeedMode::Overlay => {
            seed_random(gens, rng);
            place_pattern(gens.current_mut());
        }
    }
}

/// Fill the current grid with independent fair coin flips. The scratch grid is cleared so nothing
/// stale survives the next swap.
pub fn seed_random<const R: usize, const C: usize, G: Rng>(
    gens: &mut Generations<R, C>,
    rng: &mut G,
) {
    for row in gens.current_mut().rows_mut() {
        for cell in row.iter_mut() {
            *cell = rng.random_bool(0.5);
        }
    }

    gens.scratch_mut().clear();
}

/// Clear both grids and place the fixed pattern around `(R / 2 - 1, C / 2 - 1)`
pub fn seed_fixed_pattern<const R: usize, const C: usize>(gens: &mut Generations<R, C>) {
    gens.scratch_mut().clear();

    let grid = gens.current_mut();
    grid.clear();
    place_pattern(grid);
}

/// Center of the fixed pattern
pub const fn pattern_center<const R: usize, const C: usize>() -> (usize, usize) {
    (R / 2 - 1, C / 2 - 1)
}

fn place_pattern<const R: usize, const C: usize>(grid: &mut Grid<R, C>) {
    let (cy, cx) = pattern_center::<R, C>();

    for (dy, dx) in PATTERN {
        let y = cy.checked_add_signed(dy);
        let x = cx.checked_add_signed(dx);

        // Only a grid too small to hold the pattern ends up here
        if let (Some(y), Some(x)) = (y, x) {
            if y < R && x < C {
                grid.set(y, x, true);
            }
        }
    }
}

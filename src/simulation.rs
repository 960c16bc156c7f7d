use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use tracing::info;

use crate::COLUMNS;
use crate::ChangeCount;
use crate::ROWS;
use crate::color::Rgb565;
use crate::engine;
use crate::generations::Generations;
use crate::grid::Grid;
use crate::rule_set::RuleSet;
use crate::seed;
use crate::seed::SeedMode;

/// Activity at or below this many changed cells per generation counts as stagnant
pub const DEFAULT_THRESHOLD: ChangeCount = 35;

/// What happened during a [`Simulation::tick`]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tick {
    /// Generation number after the tick
    pub generation: u64,

    /// Cells that changed state during the advance
    pub changes: ChangeCount,

    /// Whether the grid was reseeded before advancing
    pub reseeded: bool,
}

/// The whole simulation state: both generations, the color live cells are drawn in, and the
/// bookkeeping needed to notice when the board stops doing anything interesting.
pub struct Simulation<const R: usize = ROWS, const C: usize = COLUMNS> {
    gens: Generations<R, C>,

    color: Rgb565,

    rules: RuleSet,

    /// Reseed once an advance changes at most this many cells
    threshold: ChangeCount,

    rng: ChaCha8Rng,

    /// Changes made by the last advance. `None` right after seeding.
    last_changes: Option<ChangeCount>,

    /// Generations advanced since the last seed
    generation: u64,

    /// Changes across every advance, for statistics
    total_changes: u64,

    /// Number of stagnation reseeds so far
    reseeds: u64,
}

impl<const R: usize, const C: usize> Simulation<R, C> {
    /// A dead board drawn in red, reseeding below [`DEFAULT_THRESHOLD`]
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self {
            gens: Generations::new(),
            color: Rgb565::default(),
            rules: RuleSet::default(),
            threshold: DEFAULT_THRESHOLD,
            rng,
            last_changes: None,
            generation: 0,
            total_changes: 0,
            reseeds: 0,
        }
    }

    /// Use a reproducible random source seeded with `seed`, or the OS when `None`
    pub fn with_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        Self::new(rng)
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_threshold(mut self, threshold: ChangeCount) -> Self {
        self.threshold = threshold;
        self
    }

    /// Start over from a fresh seed
    pub fn seed(&mut self, mode: SeedMode) {
        seed::seed(mode, &mut self.gens, &mut self.rng);

        self.last_changes = None;
        self.generation = 0;

        debug!(?mode, population = self.gens.current().population(), "seeded");
    }

    /// Start over from a given generation
    pub fn load(&mut self, grid: Grid<R, C>) {
        self.gens = Generations::from_grid(grid);
        self.last_changes = None;
        self.generation = 0;
    }

    /// Advance one generation, returning how many cells changed
    pub fn advance(&mut self) -> ChangeCount {
        let changes = engine::advance_with(&self.rules, &mut self.gens);

        self.last_changes = Some(changes);
        self.generation += 1;
        self.total_changes += changes as u64;

        changes
    }

    /// Whether the last advance was quiet enough to warrant a reseed
    pub fn is_stagnant(&self) -> bool {
        self.last_changes.is_some_and(|n| n <= self.threshold)
    }

    /// One step of the main loop: reseed randomly if the board went stagnant, then advance.
    pub fn tick(&mut self) -> Tick {
        let reseeded = self.is_stagnant();

        if reseeded {
            info!(
                generation = self.generation,
                changes = self.last_changes,
                threshold = self.threshold,
                "board stagnated, reseeding"
            );

            self.reseeds += 1;
            self.seed(SeedMode::Random);
        }

        let changes = self.advance();

        debug!(generation = self.generation, changes, "tick");

        Tick {
            generation: self.generation,
            changes,
            reseeded,
        }
    }

    /// Visit every cell of the current generation in row-major order
    pub fn for_each_cell<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize, bool),
    {
        for (row, col, alive) in self.gens.current().iter() {
            f(row, col, alive);
        }
    }

    pub fn current(&self) -> &Grid<R, C> {
        self.gens.current()
    }

    pub fn color(&self) -> Rgb565 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb565) {
        self.color = color;
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn threshold(&self) -> ChangeCount {
        self.threshold
    }

    pub fn last_changes(&self) -> Option<ChangeCount> {
        self.last_changes
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn total_changes(&self) -> u64 {
        self.total_changes
    }

    pub fn reseeds(&self) -> u64 {
        self.reseeds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small = Simulation<8, 8>;

    fn small() -> Small {
        Simulation::new(ChaCha8Rng::seed_from_u64(3))
    }

    #[test]
    fn fresh_seed_is_not_stagnant() {
        let mut sim = small();
        sim.load(Grid::new());

        assert!(!sim.is_stagnant());
        assert_eq!(sim.last_changes(), None);

        let tick = sim.tick();
        assert!(!tick.reseeded);
        assert_eq!(tick.changes, 0);
        assert_eq!(sim.last_changes(), Some(0));
        assert!(sim.is_stagnant());
    }

    #[test]
    fn stagnation_reseeds_on_next_tick() {
        let mut sim = small().with_threshold(0);
        sim.load(Grid::from_rows(&["", "", "..##", "..##"]));

        let tick = sim.tick();
        assert_eq!(tick.changes, 0);
        assert!(!tick.reseeded);

        let tick = sim.tick();
        assert!(tick.reseeded);
        assert_eq!(tick.generation, 1);
        assert_eq!(sim.last_changes(), Some(tick.changes));
        assert_eq!(sim.reseeds(), 1);
    }

    #[test]
    fn active_board_keeps_going() {
        let mut sim = small().with_threshold(3);
        sim.load(Grid::from_rows(&["", "", "", "..###"]));

        for n in 1..=6 {
            let tick = sim.tick();

            assert!(!tick.reseeded);
            assert_eq!(tick.changes, 4);
            assert_eq!(tick.generation, n);
        }

        assert_eq!(sim.total_changes(), 24);
    }

    #[test]
    fn for_each_cell_visits_current_generation() {
        let mut sim = small();
        sim.load(Grid::from_rows(&["", "", "", "..###"]));
        sim.advance();

        let mut alive = Vec::new();
        let mut visited = 0;
        sim.for_each_cell(|r, c, a| {
            visited += 1;
            if a {
                alive.push((r, c));
            }
        });

        assert_eq!(visited, 64);
        assert_eq!(alive, vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn same_seed_same_history() {
        let mut a: Simulation = Simulation::with_seed(Some(99));
        let mut b: Simulation = Simulation::with_seed(Some(99));
        a.seed(SeedMode::Random);
        b.seed(SeedMode::Random);

        for _ in 0..50 {
            assert_eq!(a.tick(), b.tick());
        }
        assert_eq!(a.current(), b.current());
    }

    #[test]
    fn color_is_settable() {
        let mut sim = small().with_color(Rgb565::new(125, 76, 0));
        assert_eq!(sim.color(), Rgb565::new(125, 76, 0));

        sim.set_color(Rgb565::BLACK);
        assert_eq!(sim.color(), Rgb565::BLACK);
    }
}

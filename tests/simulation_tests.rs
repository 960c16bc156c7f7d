use lifeboard::COLUMNS;
use lifeboard::ROWS;
use lifeboard::camera::Camera;
use lifeboard::grid::Grid;
use lifeboard::render::PixelSink;
use lifeboard::render::draw_generation;
use lifeboard::seed::SeedMode;
use lifeboard::simulation::Simulation;

fn pattern_board() -> Simulation {
    let mut sim: Simulation = Simulation::with_seed(Some(0));
    sim.seed(SeedMode::Pattern);
    sim
}

#[test]
fn fixed_pattern_frame() -> anyhow::Result<()> {
    let sim = pattern_board();

    let mut cam = Camera::new(COLUMNS, ROWS);
    draw_generation(&sim, &mut cam);
    cam.show()?;

    insta::assert_snapshot!("fixed_pattern_frame", cam.frame());

    Ok(())
}

#[test]
fn fixed_pattern_evolution() -> anyhow::Result<()> {
    let mut sim = pattern_board();

    let changes: Vec<_> = (0..3).map(|_| sim.advance()).collect();
    assert_eq!(changes, [12, 10, 18]);
    assert_eq!(sim.current().population(), 12);

    let mut cam = Camera::new(COLUMNS, ROWS);
    draw_generation(&sim, &mut cam);
    cam.show()?;

    insta::assert_snapshot!("fixed_pattern_third_generation", cam.frame());

    Ok(())
}

#[test]
fn change_count_matches_diff_on_the_board() {
    let mut sim: Simulation = Simulation::with_seed(Some(1234));
    sim.seed(SeedMode::Random);

    for _ in 0..100 {
        let before = *sim.current();
        let changes = sim.advance();

        assert_eq!(changes as usize, before.diff(sim.current()));
    }
}

#[test]
fn traversal_is_row_major_over_the_whole_board() {
    let mut sim: Simulation = Simulation::with_seed(Some(5));
    sim.seed(SeedMode::Random);
    sim.advance();

    let mut cells = Vec::with_capacity(ROWS * COLUMNS);
    sim.for_each_cell(|r, c, alive| cells.push((r, c, alive)));

    assert_eq!(cells.len(), ROWS * COLUMNS);
    for (i, &(r, c, alive)) in cells.iter().enumerate() {
        assert_eq!((r, c), (i / COLUMNS, i % COLUMNS));
        assert_eq!(alive, sim.current().get(r, c));
    }
}

#[test]
fn dead_board_reseeds_and_keeps_running() {
    let mut sim: Simulation = Simulation::with_seed(Some(77));
    sim.load(Grid::new());

    let first = sim.tick();
    assert_eq!(first.changes, 0);
    assert!(!first.reseeded);

    let second = sim.tick();
    assert!(second.reseeded);
    assert!(second.changes > sim.threshold());
    assert_eq!(sim.reseeds(), 1);
}

#[test]
fn long_run_never_stays_stagnant() {
    let mut sim: Simulation = Simulation::with_seed(Some(2024));
    sim.seed(SeedMode::Random);

    let mut quiet_streak = 0;

    for _ in 0..2_000 {
        let tick = sim.tick();

        if tick.changes <= sim.threshold() {
            quiet_streak += 1;
        } else {
            quiet_streak = 0;
        }

        // A quiet generation is always followed by a reseed
        assert!(quiet_streak <= 1);
    }
}

#[test]
fn fixed_pattern_gives_way_to_random_at_default_threshold() {
    let mut sim = pattern_board();

    let first = sim.tick();
    assert_eq!(first.changes, 12);
    assert!(!first.reseeded);
    assert!(sim.is_stagnant());

    let second = sim.tick();
    assert!(second.reseeded);
    assert_eq!(second.generation, 1);

    // A threshold under the pattern's activity lets it keep evolving
    let mut sim = pattern_board().with_threshold(9);
    for _ in 0..3 {
        assert!(!sim.tick().reseeded);
    }
}

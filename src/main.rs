use std::thread;
use std::time::Duration;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::event;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lifeboard::COLUMNS;
use lifeboard::ROWS;
use lifeboard::camera::Camera;
use lifeboard::render::PixelSink;
use lifeboard::render::draw_generation;
use lifeboard::simulation::Simulation;
use lifeboard::simulation::Tick;

use config::Config;
use events::Event;
use terminal::Terminal;

mod config;
mod events;
mod io;
mod terminal;

const TITLE: &str = "Conway's\nGame\nof\nLife.";

/// Keeps generations a fixed interval apart, no matter how long drawing took
struct Pacer {
    interval: Duration,
    deadline: Instant,
}

impl Pacer {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: Instant::now() + interval,
        }
    }

    fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Move on to the next interval. If we fell behind, start counting from now instead of trying
    /// to catch up.
    fn advance(&mut self) {
        let now = Instant::now();
        self.deadline = (self.deadline + self.interval).max(now);
    }
}

/// Wait for `deadline` to pass, handling terminal events meanwhile. Returns `true` if the user
/// asked to exit.
fn wait_until(term: &mut Terminal, deadline: Instant) -> anyhow::Result<bool> {
    loop {
        let left = deadline.saturating_duration_since(Instant::now());

        if !event::poll(left).context("Failed to poll terminal events")? {
            return Ok(false);
        }

        let event = event::read().context("Failed to read terminal event")?;

        match io::convert_event(event) {
            Some(Event::Exit) => return Ok(true),
            Some(Event::Resize { cols, rows }) => {
                info!(cols, rows, "terminal resized");
                term.redraw()?;
            }
            None => {}
        }
    }
}

fn status_line(tick: &Tick, sim: &Simulation) -> String {
    format!(
        "gen {:<6} changes {:<5} reseeds {:<4} (q to quit)",
        tick.generation,
        tick.changes,
        sim.reseeds()
    )
}

fn run_terminal(config: &Config, sim: &mut Simulation) -> anyhow::Result<()> {
    let mut term = Terminal::enter(COLUMNS, ROWS).context("Failed to set up the terminal")?;

    term.splash(TITLE)?;
    if wait_until(&mut term, Instant::now() + config.splash())? {
        return Ok(());
    }

    term.clear()?;
    draw_generation(&*sim, &mut term);
    term.show()?;
    if wait_until(&mut term, Instant::now() + config.hold())? {
        return Ok(());
    }

    let mut pacer = Pacer::new(config.interval());
    let mut ticks = 0;

    while config.generations.is_none_or(|n| ticks < n) {
        let tick = sim.tick();
        ticks += 1;

        draw_generation(&*sim, &mut term);
        term.show()?;
        term.status(&status_line(&tick, sim))?;

        if wait_until(&mut term, pacer.deadline())? {
            break;
        }
        pacer.advance();
    }

    Ok(())
}

fn run_headless(config: &Config, sim: &mut Simulation) -> anyhow::Result<()> {
    let mut pacer = Pacer::new(config.interval());
    let mut ticks = 0;

    while config.generations.is_none_or(|n| ticks < n) {
        let tick = sim.tick();
        ticks += 1;

        info!(
            generation = tick.generation,
            changes = tick.changes,
            reseeded = tick.reseeded,
            population = sim.current().population(),
            "tick"
        );

        // Batch runs go as fast as they can
        if config.generations.is_none() {
            thread::sleep(pacer.deadline().saturating_duration_since(Instant::now()));
            pacer.advance();
        }
    }

    let mut cam = Camera::new(COLUMNS, ROWS);
    draw_generation(&*sim, &mut cam);
    cam.show()?;
    print!("{}", cam.frame());

    info!(
        ticks,
        last_changes = sim.last_changes(),
        total_changes = sim.total_changes(),
        reseeds = sim.reseeds(),
        "done"
    );

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // The terminal UI owns the screen, so only problems get logged there unless asked otherwise
    let default_level = if config.headless { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    config.check();

    let mut sim: Simulation = Simulation::with_seed(config.seed)
        .with_color(config.color)
        .with_rules(config.rule)
        .with_threshold(config.threshold);

    info!(
        mode = ?config.mode,
        rule = %sim.rules(),
        threshold = sim.threshold(),
        color = %sim.color(),
        "starting"
    );

    sim.seed(config.mode.into());

    if config.headless {
        run_headless(&config, &mut sim)
    } else {
        run_terminal(&config, &mut sim)
    }
}

use std::time::Duration;

use clap::Parser;
use clap::ValueEnum;
use tracing::warn;

use lifeboard::COLUMNS;
use lifeboard::ChangeCount;
use lifeboard::ROWS;
use lifeboard::color::Rgb565;
use lifeboard::rule_set::RuleSet;
use lifeboard::seed::SeedMode;
use lifeboard::simulation::DEFAULT_THRESHOLD;

/// Command line spelling of [`SeedMode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Every cell alive with even odds
    Random,

    /// The fixed pattern, centered on an empty board
    Pattern,

    /// The fixed pattern on top of a random board
    Overlay,
}

impl From<Mode> for SeedMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Random => SeedMode::Random,
            Mode::Pattern => SeedMode::Pattern,
            Mode::Overlay => SeedMode::Overlay,
        }
    }
}

/// Conway's Game of Life on a 32x64 board, drawn in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Config {
    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 100)]
    pub interval_ms: u64,

    /// Reseed randomly once a generation changes this many cells or fewer
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: ChangeCount,

    /// How the first generation is picked. Later seeds are always random. The fixed pattern only
    /// changes 12 cells on its first step, so under the default threshold it gets replaced by a
    /// random board on the next tick.
    #[arg(short, long, value_enum, default_value_t = Mode::Random)]
    pub mode: Mode,

    /// Seed for the random source, taken from the OS if absent
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Color of live cells, as 8 bit "r,g,b"
    #[arg(short, long, default_value = "125,76,0")]
    pub color: Rgb565,

    /// Birth/survival rule, like "b3s23" or "3/23"
    #[arg(short, long, default_value = "b3s23")]
    pub rule: RuleSet,

    /// Stop after this many generations, run forever if absent
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Don't take over the terminal. Logs every generation and prints the last one.
    #[arg(long)]
    pub headless: bool,

    /// How long the title screen stays up, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub splash_ms: u64,

    /// How long the first generation stays up before evolving, in milliseconds
    #[arg(long, default_value_t = 2000)]
    pub hold_ms: u64,
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }

    /// Complain about settings that are allowed but probably not what was meant
    pub fn check(&self) {
        let cells = (ROWS * COLUMNS) as ChangeCount;

        if self.threshold >= cells {
            warn!(
                threshold = self.threshold,
                cells, "threshold covers the whole board, every generation will reseed"
            );
        }

        if self.generations == Some(0) {
            warn!("zero generations requested, only the seed will be shown");
        }

        if self.color == Rgb565::BLACK {
            warn!("live cells are black and won't be visible");
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["lifeboard"]);

        assert_eq!(config.interval(), Duration::from_millis(100));
        assert_eq!(config.threshold, 35);
        assert_eq!(config.mode, Mode::Random);
        assert_eq!(config.color, Rgb565::new(125, 76, 0));
        assert_eq!(config.rule, RuleSet::default());
        assert_eq!(config.seed, None);
        assert!(!config.headless);
    }

    #[test]
    fn overrides() {
        let config = Config::parse_from([
            "lifeboard",
            "--mode",
            "pattern",
            "-s",
            "7",
            "-c",
            "0,255,0",
            "-r",
            "b36/s23",
            "-g",
            "10",
            "--headless",
        ]);

        assert_eq!(SeedMode::from(config.mode), SeedMode::Pattern);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.color, Rgb565::new(0, 255, 0));
        assert_eq!(config.rule.to_string(), "B36/S23");
        assert_eq!(config.generations, Some(10));
        assert!(config.headless);
    }

    #[test]
    fn every_mode_maps_to_its_seed_mode() {
        for (arg, mode) in [
            ("random", SeedMode::Random),
            ("pattern", SeedMode::Pattern),
            ("overlay", SeedMode::Overlay),
        ] {
            let config = Config::parse_from(["lifeboard", "-m", arg]);
            assert_eq!(SeedMode::from(config.mode), mode, "failed on {arg:?}");
        }
    }

    #[test]
    fn mode_help_mentions_the_pattern_reseed() {
        let command = Config::command();
        let help = command
            .get_arguments()
            .find(|arg| arg.get_id() == "mode")
            .and_then(|arg| arg.get_long_help().or(arg.get_help()))
            .map(|help| help.to_string())
            .unwrap_or_default();

        assert!(help.contains("12 cells"), "help was {help:?}");
        assert!(help.contains("random board on the next tick"), "help was {help:?}");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(Config::try_parse_from(["lifeboard", "-c", "1,2"]).is_err());
        assert!(Config::try_parse_from(["lifeboard", "-r", "b9s23"]).is_err());
        assert!(Config::try_parse_from(["lifeboard", "-m", "glider"]).is_err());
    }
}

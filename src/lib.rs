pub mod camera;
pub mod color;
pub mod engine;
pub mod generations;
pub mod grid;
pub mod render;
pub mod rule_set;
pub mod seed;
pub mod simulation;

/// Rows on the board
pub const ROWS: usize = 32;

/// Columns on the board
pub const COLUMNS: usize = 64;

/// Number of cells that changed state over one generation
pub type ChangeCount = u32;

/// Things the driver loop reacts to while it waits for the next generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// The terminal changed size, the screen needs a full redraw
    Resize { cols: u16, rows: u16 },

    /// Exit the application
    Exit,
}

use std::io;

use crate::color::Rgb565;
use crate::simulation::Simulation;

/// Something a generation can be drawn on, one pixel at a time. `x` is the column and `y` the row.
pub trait PixelSink {
    fn draw_pixel(&mut self, x: usize, y: usize, color: Rgb565);

    /// Push whatever was drawn out to the actual display
    fn show(&mut self) -> io::Result<()>;
}

/// Draw the current generation: live cells in the simulation color, dead ones black.
///
/// Every pixel gets written, so the sink doesn't need clearing in between.
pub fn draw_generation<S, const R: usize, const C: usize>(sim: &Simulation<R, C>, sink: &mut S)
where
    S: PixelSink + ?Sized,
{
    let on = sim.color();

    sim.for_each_cell(|row, col, alive| {
        let color = if alive { on } else { Rgb565::BLACK };
        sink.draw_pixel(col, row, color);
    });
}

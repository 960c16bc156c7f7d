use std::io;

use crate::color::Rgb565;
use crate::render::PixelSink;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// An off-screen display made of braille characters, each one covering 2x4 pixels.
///
/// Pixels are either lit or dark. The color of the last lit pixel is remembered so the whole frame
/// can be printed in it.
pub struct Camera {
    /// The pixel buffer
    pb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,

    color: Rgb565,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // With `bw = ceil(w / 2)` and `bh = ceil(h / 4)` braille characters across and down, that's
        // `3 * (bw * bh) + bh` bytes. Reserving it up front means redrawing never allocates.
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        let mut cam = Self {
            pb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
            color: Rgb565::BLACK,
        };

        cam.render();
        cam
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Color of the last lit pixel drawn
    pub fn color(&self) -> Rgb565 {
        self.color
    }

    /// Whether the pixel at `(x, y)` is lit
    pub fn lit(&self, x: usize, y: usize) -> bool {
        self.pb[self.xy_from(x, y)]
    }

    /// Rebuild the frame from the pixel buffer and return it. Every row of braille ends with a
    /// newline.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.pb.iter().enumerate() {
            if px {
                let (x, y) = self.xy_to(n);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Only dot bits ever get added to the blank pattern, which keeps us inside the braille
            // block
            self.fb
                .push(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }
        self.fb.push('\n');

        &self.fb
    }

    /// The last rendered frame
    pub fn frame(&self) -> &str {
        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

impl PixelSink for Camera {
    fn draw_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let i = self.xy_from(x, y);
        let lit = color != Rgb565::BLACK;

        self.pb[i] = lit;

        if lit {
            self.color = color;
        }
    }

    fn show(&mut self) -> io::Result<()> {
        self.render();
        Ok(())
    }
}

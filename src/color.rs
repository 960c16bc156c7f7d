use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A 16 bit color, packed as
/// ```notrust
/// rrrr_rggg_gggb_bbbb
/// ```
///
/// This is the format LED matrix drivers usually expect, the simulation treats it as opaque.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);
    pub const RED: Rgb565 = Rgb565::new(255, 0, 0);

    /// Pack 8 bit channels, dropping their low bits
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16 & 0xF8) << 8;
        let g = (g as u16 & 0xFC) << 3;
        let b = (b as u16) >> 3;

        Self(r | g | b)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Expand back to 8 bit channels. The low bits are filled from the high ones, so full
    /// intensity stays full intensity.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;

        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }
}

impl Default for Rgb565 {
    fn default() -> Self {
        Self::RED
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Expected three channels like \"125,76,0\", got {got}")]
    ChannelCount { got: usize },

    #[error("Invalid channel \"{channel}\", expected 0-255")]
    InvalidChannel { channel: String },
}

/// Parses `r,g,b` with 8 bit channels
impl FromStr for Rgb565 {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels: Vec<&str> = s.split(',').map(str::trim).collect();

        let [r, g, b] = channels[..] else {
            return Err(ColorError::ChannelCount {
                got: channels.len(),
            });
        };

        let parse = |c: &str| {
            c.parse::<u8>().map_err(|_| ColorError::InvalidChannel {
                channel: c.to_string(),
            })
        };

        Ok(Rgb565::new(parse(r)?, parse(g)?, parse(b)?))
    }
}

impl fmt::Display for Rgb565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb();
        write!(f, "{r},{g},{b}")
    }
}

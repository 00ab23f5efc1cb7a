//! Display adapter for addressable LED strips.

use core::fmt::Debug;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::DisplayDriver;
use crate::cells::CellIndex;
use crate::log::log_event;

/// Color of lit cells unless configured otherwise
pub const DEFAULT_COLOR: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};

/// Paints cell sets onto a strip of `N` LEDs.
///
/// Lit cells get a single color, all others are off. Cells past the end of
/// the strip are ignored.
pub struct StripDisplay<W, const N: usize> {
    writer: W,
    frame: [RGB8; N],
    color: RGB8,
}

impl<W, const N: usize> StripDisplay<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    pub fn new(writer: W) -> Self {
        Self::with_color(writer, DEFAULT_COLOR)
    }

    pub fn with_color(writer: W, color: RGB8) -> Self {
        Self {
            writer,
            frame: [RGB8::default(); N],
            color,
        }
    }

    /// Color used from the next frame on
    pub fn set_color(&mut self, color: RGB8) {
        self.color = color;
    }

    /// Last frame handed to the strip
    pub fn frame(&self) -> &[RGB8; N] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> DisplayDriver for StripDisplay<W, N>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    fn show(&mut self, cells: &[CellIndex]) {
        self.frame.fill(RGB8::default());
        for &cell in cells {
            if let Some(led) = self.frame.get_mut(usize::from(cell)) {
                *led = self.color;
            }
        }

        if let Err(err) = self.writer.write(self.frame.iter().copied()) {
            log_event!("[strip] write failed: {:?}", err);
        }
    }
}

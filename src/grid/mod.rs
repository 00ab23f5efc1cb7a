//! Grid variants
//!
//! A grid variant describes one physical front panel: which strip cells sit
//! behind which letters, and therefore which cells light up a given word.
//! All shipped variants are compile-time data, see [`BUILTIN_VARIANTS`].

mod catalog;
mod en_v1;
mod nl_v1;
mod nl_v2;
mod nl_v3;
mod nl_v4;
mod registry;

pub use catalog::{BUILTIN_VARIANTS, DEFAULT_VARIANT_ID};
pub use registry::{GridRegistry, VariantRef};

use crate::cells::CellIndex;
use crate::error::LayoutError;

/// Soft limit of cells per word. Layouts are checked against it in tests only.
pub const MAX_WORD_CELLS: usize = 20;

/// Number of minute-tick cells below the letter matrix
pub const EXTRA_MINUTE_CELLS: usize = 4;

/// Letter matrix shared by every Dutch front panel
pub(crate) const DUTCH_LETTERS: &[&str] = &[
    "HETBISWYBRC",
    "RTIENMMUHLC",
    "VIJFCWKWART",
    "OVERXTTXLVB",
    "QKEVOORTFIG",
    "DRIEKBZEVEN",
    "VTTIENELNRC",
    "TWAALFSFRSF",
    "EENEGENACHT",
    "XEVIJFJXUUR",
    "..-.-.-.-..",
];

/// Cells lighting one word of the front panel, in reveal order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordAddress {
    pub word: &'static str,
    pub cells: &'static [CellIndex],
}

impl WordAddress {
    pub const fn new(word: &'static str, cells: &'static [CellIndex]) -> Self {
        Self { word, cells }
    }
}

/// One spatial layout of the clock face
#[derive(Debug)]
pub struct GridVariant {
    /// Small stable id, used by persisted settings
    pub id: u8,
    /// Stable string key such as `NL_V2`
    pub key: &'static str,
    /// Human readable name
    pub label: &'static str,
    /// ISO language code
    pub language: &'static str,
    /// Layout revision
    pub version: &'static str,
    /// Cells behind the letter matrix
    pub grid_cells: u16,
    /// Cells after the matrix (minute ticks and spacers)
    pub extra_cells: u16,
    /// Letter rows, for display in user interfaces only
    pub letters: &'static [&'static str],
    pub words: &'static [WordAddress],
    /// Minute-tick cells, first to fourth
    pub extra_minutes: [CellIndex; EXTRA_MINUTE_CELLS],
    /// Cell spelling the digit zero (the "O" of `OVER`)
    pub zero_cell: CellIndex,
}

/// Identity of a variant without its layout data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridVariantSummary {
    pub id: u8,
    pub key: &'static str,
    pub label: &'static str,
    pub language: &'static str,
    pub version: &'static str,
}

impl GridVariant {
    /// Length of the strip this layout is wired for
    pub const fn total_cells(&self) -> u16 {
        self.grid_cells.saturating_add(self.extra_cells)
    }

    pub const fn summary(&self) -> GridVariantSummary {
        GridVariantSummary {
            id: self.id,
            key: self.key,
            label: self.label,
            language: self.language,
            version: self.version,
        }
    }

    /// Check that word names are unique and every cell fits on the strip
    pub fn validate(&self) -> Result<(), LayoutError> {
        let total = self.total_cells();
        let out_of_range = |word: &'static str, cell: CellIndex| LayoutError::CellOutOfRange {
            variant: self.key,
            word,
            cell,
            total,
        };

        for (position, address) in self.words.iter().enumerate() {
            let duplicate = self.words[..position]
                .iter()
                .any(|earlier| earlier.word == address.word);
            if duplicate {
                return Err(LayoutError::DuplicateWord {
                    variant: self.key,
                    word: address.word,
                });
            }
            if let Some(&cell) = address.cells.iter().find(|&&cell| cell >= total) {
                return Err(out_of_range(address.word, cell));
            }
        }

        if let Some(&cell) = self.extra_minutes.iter().find(|&&cell| cell >= total) {
            return Err(out_of_range("extra minute", cell));
        }
        if self.zero_cell >= total {
            return Err(out_of_range("zero", self.zero_cell));
        }
        Ok(())
    }
}

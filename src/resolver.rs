//! Word name to strip cells lookup.

use crate::cells::CellIndex;
use crate::grid::{GridVariant, WordAddress};

/// Look up the address record of `word` in `variant`.
///
/// Word names are case sensitive.
pub fn find_word(variant: &'static GridVariant, word: &str) -> Option<&'static WordAddress> {
    variant.words.iter().find(|address| address.word == word)
}

/// Cells lighting `word`, or an empty slice when the layout lacks it.
pub fn resolve(variant: &'static GridVariant, word: &str) -> &'static [CellIndex] {
    find_word(variant, word).map_or(&[], |address| address.cells)
}

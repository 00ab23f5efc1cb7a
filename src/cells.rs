//! Cell indices and the bounded buffers that carry them to the display.

/// Position of one light on the strip
pub type CellIndex = u16;

/// Upper bound of lit cells in a single frame.
///
/// The longest phrase is six words plus four minute ticks; even with every
/// word at its soft limit of 20 cells this stays below the capacity.
pub const MAX_LIT_CELLS: usize = 128;

/// Cells to illuminate during one tick
pub type CellSet = heapless::Vec<CellIndex, MAX_LIT_CELLS>;

/// Append `cells` to `out`, dropping whatever does not fit
pub(crate) fn push_cells(out: &mut CellSet, cells: &[CellIndex]) {
    for &cell in cells {
        if out.push(cell).is_err() {
            return;
        }
    }
}

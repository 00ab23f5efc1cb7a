use super::{DUTCH_LETTERS, GridVariant, WordAddress};

// 14 cells per row, three of them in the bend. Even rows run right to left
// (cell = 14 * row + 10 - column), odd rows left to right (14 * row + column).
const WORDS: &[WordAddress] = &[
    WordAddress::new("HET", &[10, 9, 8]),
    WordAddress::new("IS", &[6, 5]),
    WordAddress::new("VIJF_M", &[38, 37, 36, 35]),
    WordAddress::new("TIEN_M", &[15, 16, 17, 18]),
    WordAddress::new("OVER", &[42, 43, 44, 45]),
    WordAddress::new("VOOR", &[63, 62, 61, 60]),
    WordAddress::new("KWART", &[32, 31, 30, 29, 28]),
    WordAddress::new("HALF", &[22, 30, 50, 58]),
    WordAddress::new("UUR", &[134, 135, 136]),
    WordAddress::new("EEN", &[122, 121, 120]),
    WordAddress::new("TWEE", &[93, 99, 121, 127]),
    WordAddress::new("DRIE", &[70, 71, 72, 73]),
    WordAddress::new("VIER", &[51, 57, 79, 85]),
    WordAddress::new("VIJF", &[128, 129, 130, 131]),
    WordAddress::new("ZES", &[76, 88, 104]),
    WordAddress::new("ZEVEN", &[76, 77, 78, 79, 80]),
    WordAddress::new("ACHT", &[115, 114, 113, 112]),
    WordAddress::new("NEGEN", &[120, 119, 118, 117, 116]),
    WordAddress::new("TIEN", &[92, 91, 90, 89]),
    WordAddress::new("ELF", &[77, 87, 105]),
    WordAddress::new("TWAALF", &[98, 99, 100, 101, 102, 103]),
];

/// Fourth Dutch panel, the default selection. The cell numbers are derived
/// from the row formula above rather than taken from a measured panel.
pub(crate) const NL_V4: GridVariant = GridVariant {
    id: 3,
    key: "NL_V4",
    label: "Nederlands V4",
    language: "nl",
    version: "v4",
    grid_cells: 137,
    extra_cells: 14,
    letters: DUTCH_LETTERS,
    words: WORDS,
    extra_minutes: [150, 148, 146, 144],
    zero_cell: 42,
};

use super::{DUTCH_LETTERS, GridVariant, WordAddress};

const WORDS: &[WordAddress] = &[
    WordAddress::new("HET", &[10, 9, 8]),
    WordAddress::new("IS", &[6, 5]),
    WordAddress::new("VIJF_M", &[40, 39, 38, 37]),
    WordAddress::new("TIEN_M", &[16, 17, 18, 19]),
    WordAddress::new("OVER", &[45, 46, 47, 48]),
    WordAddress::new("VOOR", &[66, 65, 64, 63]),
    WordAddress::new("KWART", &[34, 33, 32, 31, 30]),
    WordAddress::new("HALF", &[23, 32, 53, 61]),
    WordAddress::new("UUR", &[142, 143, 144]),
    WordAddress::new("EEN", &[129, 128, 127]),
    WordAddress::new("TWEE", &[98, 105, 128, 135]),
    WordAddress::new("DRIE", &[74, 75, 76, 77]),
    WordAddress::new("VIER", &[54, 60, 83, 90]),
    WordAddress::new("VIJF", &[136, 137, 138, 139]),
    WordAddress::new("ZES", &[80, 93, 110]),
    WordAddress::new("ZEVEN", &[80, 81, 82, 83, 84]),
    WordAddress::new("ACHT", &[122, 121, 120, 119]),
    WordAddress::new("NEGEN", &[127, 126, 125, 124, 123]),
    WordAddress::new("TIEN", &[97, 96, 95, 94]),
    WordAddress::new("ELF", &[81, 92, 111]),
    WordAddress::new("TWAALF", &[104, 105, 106, 107, 108, 109]),
];

/// Third Dutch panel. Same as V2 with one spare cell less in the middle rows.
pub(crate) const NL_V3: GridVariant = GridVariant {
    id: 2,
    key: "NL_V3",
    label: "Nederlands V3",
    language: "nl",
    version: "v3",
    grid_cells: 144,
    extra_cells: 14,
    letters: DUTCH_LETTERS,
    words: WORDS,
    extra_minutes: [157, 155, 153, 151],
    zero_cell: 45,
};

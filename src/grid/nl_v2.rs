use super::{DUTCH_LETTERS, GridVariant, WordAddress};

const WORDS: &[WordAddress] = &[
    WordAddress::new("HET", &[10, 9, 8]),
    WordAddress::new("IS", &[6, 5]),
    WordAddress::new("VIJF_M", &[40, 39, 38, 37]),
    WordAddress::new("TIEN_M", &[16, 17, 18, 19]),
    WordAddress::new("OVER", &[45, 46, 47, 48]),
    WordAddress::new("VOOR", &[67, 66, 65, 64]),
    WordAddress::new("KWART", &[34, 33, 32, 31, 30]),
    WordAddress::new("HALF", &[23, 32, 53, 62]),
    WordAddress::new("UUR", &[143, 144, 145]),
    WordAddress::new("EEN", &[130, 129, 128]),
    WordAddress::new("TWEE", &[99, 106, 129, 136]),
    WordAddress::new("DRIE", &[75, 76, 77, 78]),
    WordAddress::new("VIER", &[54, 61, 84, 91]),
    WordAddress::new("VIJF", &[137, 138, 139, 140]),
    WordAddress::new("ZES", &[81, 94, 111]),
    WordAddress::new("ZEVEN", &[81, 82, 83, 84, 85]),
    WordAddress::new("ACHT", &[123, 122, 121, 120]),
    WordAddress::new("NEGEN", &[128, 127, 126, 125, 124]),
    WordAddress::new("TIEN", &[98, 97, 96, 95]),
    WordAddress::new("ELF", &[82, 93, 112]),
    WordAddress::new("TWAALF", &[105, 106, 107, 108, 109, 110]),
];

/// Second Dutch panel: mirrored wiring, the first row runs right to left.
pub(crate) const NL_V2: GridVariant = GridVariant {
    id: 1,
    key: "NL_V2",
    label: "Nederlands V2",
    language: "nl",
    version: "v2",
    grid_cells: 145,
    extra_cells: 14,
    letters: DUTCH_LETTERS,
    words: WORDS,
    extra_minutes: [158, 156, 154, 152],
    zero_cell: 45,
};

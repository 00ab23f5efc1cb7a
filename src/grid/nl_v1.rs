use super::{DUTCH_LETTERS, GridVariant, WordAddress};

/// First Dutch panel. The strip snakes through the rows with two spare
/// cells at every bend.
pub(crate) const WORDS: &[WordAddress] = &[
    WordAddress::new("HET", &[1, 2, 3]),
    WordAddress::new("IS", &[5, 6]),
    WordAddress::new("VIJF_M", &[31, 32, 33, 34]),
    WordAddress::new("TIEN_M", &[25, 24, 23, 22]),
    WordAddress::new("OVER", &[56, 55, 54, 53]),
    WordAddress::new("VOOR", &[64, 65, 66, 67]),
    WordAddress::new("KWART", &[37, 38, 39, 40, 41]),
    WordAddress::new("HALF", &[18, 39, 48, 69]),
    WordAddress::new("UUR", &[138, 137, 136]),
    WordAddress::new("EEN", &[121, 122, 123]),
    WordAddress::new("TWEE", &[92, 115, 122, 145]),
    WordAddress::new("DRIE", &[86, 85, 84, 83]),
    WordAddress::new("VIER", &[47, 70, 77, 100]),
    WordAddress::new("VIJF", &[144, 143, 142, 141]),
    WordAddress::new("ZES", &[80, 97, 110]),
    WordAddress::new("ZEVEN", &[80, 79, 78, 77, 76]),
    WordAddress::new("ACHT", &[128, 129, 130, 131]),
    WordAddress::new("NEGEN", &[123, 124, 125, 126, 127]),
    WordAddress::new("TIEN", &[93, 94, 95, 96]),
    WordAddress::new("ELF", &[79, 98, 109]),
    WordAddress::new("TWAALF", &[116, 115, 114, 113, 112, 111]),
];

pub(crate) const NL_V1: GridVariant = GridVariant {
    id: 0,
    key: "NL_V1",
    label: "Nederlands V1",
    language: "nl",
    version: "v1",
    grid_cells: 146,
    extra_cells: 15,
    letters: DUTCH_LETTERS,
    words: WORDS,
    extra_minutes: [153, 155, 157, 159],
    zero_cell: 56,
};

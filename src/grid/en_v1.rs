use super::{DUTCH_LETTERS, GridVariant, nl_v1};

// No English panel has been produced yet. Until one exists the entry mirrors
// the first Dutch wiring so the id stays reserved.
pub(crate) const EN_V1: GridVariant = GridVariant {
    id: 4,
    key: "EN_V1",
    label: "English V1",
    language: "en",
    version: "v1",
    grid_cells: 146,
    extra_cells: 15,
    letters: DUTCH_LETTERS,
    words: nl_v1::WORDS,
    extra_minutes: [153, 155, 157, 159],
    zero_cell: 56,
};

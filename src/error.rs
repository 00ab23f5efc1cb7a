use derive_more::{Display, Error};

/// Lookup of a grid variant by id or key failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum VariantError {
    #[display("unknown grid variant")]
    NotFound,
}

/// A grid catalog violates one of the layout invariants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum LayoutError {
    #[display("grid catalog is empty")]
    EmptyCatalog,
    #[display("variant {key} (id {id}) is listed twice")]
    DuplicateVariant { id: u8, key: &'static str },
    #[display("{variant}: word {word} is defined twice")]
    DuplicateWord {
        variant: &'static str,
        word: &'static str,
    },
    #[display("{variant}: cell {cell} of {word} is outside {total} cells")]
    CellOutOfRange {
        variant: &'static str,
        word: &'static str,
        cell: u16,
        total: u16,
    },
}

//! Time to phrase compilation.
//!
//! Minutes are rounded down to five minute buckets, each bucket maps to a
//! fixed sequence of words. The remainder is shown on the minute-tick cells.
//! Segments are word names only; they are resolved against whichever grid
//! variant is active when the cells are needed.

use crate::cells::{CellSet, push_cells};
use crate::grid::GridVariant;
use crate::resolver::resolve;

/// The two leading words ("it is")
pub const PREFIX_WORDS: [&str; 2] = ["HET", "IS"];

/// Number of leading segments covered by the prefix visibility timer
pub const PREFIX_SEGMENTS: usize = PREFIX_WORDS.len();

/// Longest phrase: prefix plus four words
pub const MAX_SEGMENTS: usize = 6;

/// Hour names indexed by `hour % 12`
pub const HOUR_WORDS: [&str; 12] = [
    "TWAALF", "EEN", "TWEE", "DRIE", "VIER", "VIJF", "ZES", "ZEVEN", "ACHT", "NEGEN", "TIEN",
    "ELF",
];

/// Buckets from which the phrase refers to the next hour ("tien voor half drie")
const NEXT_HOUR_FROM: u8 = 20;

/// Ordered phrase segments
pub type Segments = heapless::Vec<&'static str, MAX_SEGMENTS>;

#[derive(Clone, Copy)]
enum Part {
    Word(&'static str),
    Hour,
}

use Part::{Hour, Word};

/// Words following the prefix, indexed by `rounded_minute / 5`
const PATTERNS: [&[Part]; 12] = [
    &[Hour, Word("UUR")],
    &[Word("VIJF_M"), Word("OVER"), Hour],
    &[Word("TIEN_M"), Word("OVER"), Hour],
    &[Word("KWART"), Word("OVER"), Hour],
    &[Word("TIEN_M"), Word("VOOR"), Word("HALF"), Hour],
    &[Word("VIJF_M"), Word("VOOR"), Word("HALF"), Hour],
    &[Word("HALF"), Hour],
    &[Word("VIJF_M"), Word("OVER"), Word("HALF"), Hour],
    &[Word("TIEN_M"), Word("OVER"), Word("HALF"), Hour],
    &[Word("KWART"), Word("VOOR"), Hour],
    &[Word("TIEN_M"), Word("VOOR"), Hour],
    &[Word("VIJF_M"), Word("VOOR"), Hour],
];

/// Five minute bucket of a wall time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Minute rounded down to a multiple of five
    pub rounded_minute: u8,
    /// Minutes past the bucket start, 0 to 4
    pub extra_ticks: u8,
}

/// Split `minute` into its bucket and the remaining ticks.
pub const fn bucket(minute: u8) -> Bucket {
    Bucket {
        rounded_minute: minute / 5 * 5,
        extra_ticks: minute % 5,
    }
}

/// Hour word shown for `hour` within bucket `rounded_minute`.
pub fn hour_word(hour: u8, rounded_minute: u8) -> &'static str {
    let mut hour12 = hour % 12;
    if rounded_minute >= NEXT_HOUR_FROM {
        hour12 = (hour12 + 1) % 12;
    }
    HOUR_WORDS[usize::from(hour12)]
}

/// Phrase segments for a time, without the minute ticks.
///
/// Minutes 60 to 64 wrap into the next hour. Buckets past 60 have no pattern
/// and yield the prefix only.
pub fn phrase_segments(hour: u8, minute: u8) -> Segments {
    let mut hour = hour % 24;
    let mut rounded = bucket(minute).rounded_minute;
    if rounded == 60 {
        rounded = 0;
        hour = (hour + 1) % 24;
    }

    let mut segments = Segments::new();
    for word in PREFIX_WORDS {
        let _ = segments.push(word);
    }

    let Some(pattern) = PATTERNS.get(usize::from(rounded / 5)) else {
        return segments;
    };
    for part in pattern.iter() {
        let word = match *part {
            Word(word) => word,
            Hour => hour_word(hour, rounded),
        };
        let _ = segments.push(word);
    }
    segments
}

/// Compiled phrase: segments plus the minute ticks shown after them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub segments: Segments,
    pub extra_ticks: u8,
}

/// Compile the full phrase for a time.
pub fn compile_phrase(hour: u8, minute: u8) -> Phrase {
    Phrase {
        segments: phrase_segments(hour, minute),
        extra_ticks: bucket(minute).extra_ticks,
    }
}

impl Phrase {
    /// Resolve the phrase into `out`: words in order, then the minute ticks.
    ///
    /// Unknown words contribute nothing. With `include_prefix` unset the
    /// leading `HET IS` is left out.
    pub fn collect_cells(
        &self,
        variant: &'static GridVariant,
        include_prefix: bool,
        out: &mut CellSet,
    ) {
        let skip = if include_prefix { 0 } else { PREFIX_SEGMENTS };
        for word in self.segments.iter().skip(skip) {
            push_cells(out, resolve(variant, word));
        }
        let ticks = usize::from(self.extra_ticks).min(variant.extra_minutes.len());
        push_cells(out, &variant.extra_minutes[..ticks]);
    }
}

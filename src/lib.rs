#![no_std]

pub mod cells;
pub mod channel;
pub mod clock;
mod error;
pub mod frame_scheduler;
pub mod grid;
pub mod intent_processor;
mod log;
pub mod phrase;
pub mod power_on;
pub mod renderer;
pub mod resolver;
pub mod settings;
pub mod strip;
pub mod wall_time;

pub use cells::{CellIndex, CellSet};
pub use clock::{ClockConfig, WordClock};
pub use error::{LayoutError, VariantError};
pub use frame_scheduler::FrameScheduler;
pub use grid::{GridRegistry, GridVariant, GridVariantSummary, VariantRef, WordAddress};
pub use intent_processor::{
    ClockIntent, IntentChannel, IntentEffects, IntentProcessor, IntentReceiver, IntentSender,
    SettingsIntent, VariantSelector,
};
pub use phrase::{Phrase, compile_phrase, phrase_segments};
pub use power_on::{AddressFrame, PowerOnSequence, PowerOnState, PowerOnTimings, encode_address};
pub use renderer::{PhraseRenderer, PrefixDeadline, RenderPhase, RenderTimings, TickInput};
pub use resolver::{find_word, resolve};
pub use settings::{PrefixVisibility, RenderSettings, SELL_MODE_TIME};
pub use strip::StripDisplay;
pub use wall_time::{AddressSource, TimeSource, WallTime};

pub use core::net::Ipv4Addr;
pub use embassy_time::{Duration, Instant};

/// Abstract display driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scheduler is generic over this trait.
pub trait DisplayDriver {
    /// Light exactly `cells`, everything else off.
    ///
    /// Indices past the end of the strip must be ignored.
    fn show(&mut self, cells: &[CellIndex]);
}

//! User settings consumed by the renderer.

use embassy_time::Duration;

use crate::grid::DEFAULT_VARIANT_ID;
use crate::wall_time::WallTime;

/// Longest prefix visibility, also the "always visible" marker
pub const MAX_PREFIX_VISIBILITY_SECS: u16 = 360;

/// Time shown while sell mode is on
pub const SELL_MODE_TIME: WallTime = WallTime {
    hour: 10,
    minute: 47,
};

/// Settings snapshot, read by value on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Seconds `HET IS` stays lit after a reveal: 0 never, 360 always
    pub prefix_visibility_secs: u16,
    /// Reveal new phrases word by word
    pub animate: bool,
    /// Show [`SELL_MODE_TIME`] instead of the real time
    pub sell_mode: bool,
    pub active_variant_id: u8,
    /// Blank the display while off
    pub display_enabled: bool,
}

impl RenderSettings {
    pub const DEFAULT: Self = Self {
        prefix_visibility_secs: MAX_PREFIX_VISIBILITY_SECS,
        animate: false,
        sell_mode: false,
        active_variant_id: DEFAULT_VARIANT_ID,
        display_enabled: true,
    };

    /// Store a visibility duration, clamped to the supported range.
    pub fn set_prefix_visibility_secs(&mut self, secs: u16) {
        self.prefix_visibility_secs = secs.min(MAX_PREFIX_VISIBILITY_SECS);
    }

    pub fn prefix_visibility(&self) -> PrefixVisibility {
        PrefixVisibility::from_secs(self.prefix_visibility_secs)
    }

    /// Time to display: the sell mode time while enabled, else `wall_time`.
    pub fn effective_time(&self, wall_time: WallTime) -> WallTime {
        if self.sell_mode {
            SELL_MODE_TIME
        } else {
            wall_time
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How long the prefix stays lit after a phrase is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixVisibility {
    Never,
    For(Duration),
    Always,
}

impl PrefixVisibility {
    /// Interpret a seconds value; anything above the maximum means always.
    pub const fn from_secs(secs: u16) -> Self {
        match secs {
            0 => PrefixVisibility::Never,
            secs if secs >= MAX_PREFIX_VISIBILITY_SECS => PrefixVisibility::Always,
            secs => PrefixVisibility::For(Duration::from_secs(secs as u64)),
        }
    }
}

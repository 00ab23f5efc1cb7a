//! Intent processing module
//!
//! Applies queued control requests to the settings snapshot and reports the
//! side effects the clock has to carry out itself.

use crate::channel::{Channel, Receiver, Sender};
use crate::grid::VariantRef;
use crate::log::log_event;
use crate::settings::RenderSettings;
use crate::wall_time::WallTime;

/// Longest variant key accepted over the wire
pub const MAX_VARIANT_KEY_LEN: usize = 16;

/// Owned variant reference, so it can travel through the intent channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantSelector {
    Id(u8),
    Key(heapless::String<MAX_VARIANT_KEY_LEN>),
}

impl VariantSelector {
    /// Selector for `key`, `None` if the key is too long to be valid
    pub fn key(key: &str) -> Option<Self> {
        heapless::String::try_from(key).ok().map(VariantSelector::Key)
    }

    pub fn as_variant_ref(&self) -> VariantRef<'_> {
        match self {
            VariantSelector::Id(id) => VariantRef::Id(*id),
            VariantSelector::Key(key) => VariantRef::Key(key.as_str()),
        }
    }
}

/// Requested settings changes. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsIntent {
    pub prefix_visibility_secs: Option<u16>,
    pub animate: Option<bool>,
    pub sell_mode: Option<bool>,
    pub display_enabled: Option<bool>,
    pub variant: Option<VariantSelector>,
}

/// Request to the clock from another context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockIntent {
    /// Change one or more settings
    Settings(SettingsIntent),
    /// Reveal this time once, then follow the clock again
    ForceTime(WallTime),
    /// Run the boot self test again
    StartPowerOn,
}

/// Side effects from processing intents that the clock should apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentEffects {
    /// Latest forced time
    pub forced_time: Option<WallTime>,
    pub start_power_on: bool,
    /// New sell mode state, set only when it actually changed
    pub sell_mode: Option<bool>,
    /// Variant to activate
    pub variant: Option<VariantSelector>,
}

impl IntentEffects {
    /// Check if any effects need to be applied
    pub fn has_effects(&self) -> bool {
        self.forced_time.is_some()
            || self.start_power_on
            || self.sell_mode.is_some()
            || self.variant.is_some()
    }
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, ClockIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, ClockIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<ClockIntent, SIZE>;

/// Drains the intent channel into the settings snapshot
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Process all pending intents from the channel (non-blocking)
    ///
    /// Settings changes are written to `settings` right away, everything the
    /// clock has to act on is returned. Later intents override earlier ones.
    pub fn process_pending(&mut self, settings: &mut RenderSettings) -> IntentEffects {
        let mut effects = IntentEffects::default();

        for intent in self.intents.drain() {
            match intent {
                ClockIntent::Settings(intent) => {
                    Self::apply_settings(settings, intent, &mut effects);
                }
                ClockIntent::ForceTime(time) => {
                    log_event!("[intent] force {:02}:{:02}", time.hour, time.minute);
                    effects.forced_time = Some(time);
                }
                ClockIntent::StartPowerOn => {
                    effects.start_power_on = true;
                }
            }
        }

        effects
    }

    fn apply_settings(
        settings: &mut RenderSettings,
        intent: SettingsIntent,
        effects: &mut IntentEffects,
    ) {
        if let Some(secs) = intent.prefix_visibility_secs {
            settings.set_prefix_visibility_secs(secs);
            log_event!("[intent] prefix visibility {}s", settings.prefix_visibility_secs);
        }

        if let Some(animate) = intent.animate {
            settings.animate = animate;
            log_event!("[intent] animate {}", animate);
        }

        if let Some(sell_mode) = intent.sell_mode {
            if settings.sell_mode != sell_mode {
                settings.sell_mode = sell_mode;
                effects.sell_mode = Some(sell_mode);
                // The toggle's own reveal replaces any earlier forced time
                effects.forced_time = None;
                log_event!("[intent] sell mode {}", sell_mode);
            }
        }

        if let Some(enabled) = intent.display_enabled {
            settings.display_enabled = enabled;
            log_event!("[intent] display enabled {}", enabled);
        }

        if let Some(variant) = intent.variant {
            effects.variant = Some(variant);
        }
    }
}

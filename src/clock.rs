//! Composition root of the word clock.

use embassy_time::Instant;

use crate::cells::CellIndex;
use crate::error::VariantError;
use crate::grid::{GridRegistry, GridVariant, VariantRef};
use crate::intent_processor::{IntentEffects, IntentProcessor, IntentReceiver};
use crate::log::log_event;
use crate::power_on::{PowerOnSequence, PowerOnTimings};
use crate::renderer::{PhraseRenderer, RenderTimings, TickInput};
use crate::settings::{RenderSettings, SELL_MODE_TIME};
use crate::wall_time::{AddressSource, WallTime};

/// Configuration for the word clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub render: RenderTimings,
    pub power_on: PowerOnTimings,
    /// Settings restored from storage
    pub settings: RenderSettings,
}

impl ClockConfig {
    pub const DEFAULT: Self = Self {
        render: RenderTimings::DEFAULT,
        power_on: PowerOnTimings::DEFAULT,
        settings: RenderSettings::DEFAULT,
    };
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Word Clock - the main orchestrator
///
/// Owns the layout registry, the settings snapshot and both state machines.
/// The boot sequence has priority; once it is done the phrase renderer
/// drives the display.
pub struct WordClock<'a, const INTENT_CHANNEL_SIZE: usize> {
    intent_processor: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    registry: GridRegistry,
    settings: RenderSettings,
    renderer: PhraseRenderer,
    power_on: PowerOnSequence,
    // One-shot, consumed by the next tick with a valid time
    forced_time: Option<WallTime>,
}

impl<'a, const INTENT_CHANNEL_SIZE: usize> WordClock<'a, INTENT_CHANNEL_SIZE> {
    /// Create a clock over the shipped layouts
    pub fn new(intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>, config: &ClockConfig) -> Self {
        Self::with_registry(intents, GridRegistry::builtin(), config)
    }

    /// Create a clock over a custom registry.
    ///
    /// An unknown `active_variant_id` in the settings falls back to the
    /// registry's current selection.
    pub fn with_registry(
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
        mut registry: GridRegistry,
        config: &ClockConfig,
    ) -> Self {
        let mut settings = config.settings;
        settings.set_prefix_visibility_secs(settings.prefix_visibility_secs);
        if registry
            .set_active(VariantRef::Id(settings.active_variant_id))
            .is_err()
        {
            settings.active_variant_id = registry.active_id();
        }

        Self {
            intent_processor: IntentProcessor::new(intents),
            registry,
            settings,
            renderer: PhraseRenderer::new(config.render),
            power_on: PowerOnSequence::new(config.power_on),
            forced_time: None,
        }
    }

    /// Process one tick
    ///
    /// `wall_time` is the current local time, `None` while unsynchronised.
    /// `address` is only read when the boot sweep completes.
    pub fn tick<A: AddressSource + ?Sized>(
        &mut self,
        now: Instant,
        wall_time: Option<WallTime>,
        address: &A,
    ) -> &[CellIndex] {
        self.process_intents(now, wall_time);

        if self.power_on.is_running() {
            return self.power_on.update(now, self.registry.active(), address);
        }

        if !self.settings.display_enabled {
            self.renderer.reset();
            return &[];
        }

        let forced_time = if wall_time.is_some() {
            self.forced_time.take()
        } else {
            None
        };
        let input = TickInput {
            now,
            wall_time,
            forced_time,
        };
        self.renderer
            .render(self.registry.active(), &self.settings, input)
    }

    /// Restart the boot sequence
    pub fn start_power_on(&mut self, now: Instant) {
        self.power_on.start(now);
        self.renderer.reset();
    }

    /// Reveal `time` once on the next tick with a valid wall time
    pub fn force_time(&mut self, time: WallTime) {
        self.forced_time = Some(time);
    }

    /// Switch the layout and record it in the settings snapshot
    pub fn set_active_variant(
        &mut self,
        variant: VariantRef<'_>,
    ) -> Result<&'static GridVariant, VariantError> {
        let active = self.registry.set_active(variant)?;
        self.settings.active_variant_id = active.id;
        Ok(active)
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn registry(&self) -> &GridRegistry {
        &self.registry
    }

    pub fn active_variant(&self) -> &'static GridVariant {
        self.registry.active()
    }

    pub fn renderer(&self) -> &PhraseRenderer {
        &self.renderer
    }

    pub fn power_on(&self) -> &PowerOnSequence {
        &self.power_on
    }

    pub fn is_power_on_running(&self) -> bool {
        self.power_on.is_running()
    }

    /// Forced time waiting for the next tick
    pub fn pending_forced_time(&self) -> Option<WallTime> {
        self.forced_time
    }

    /// Process pending intents from the channel (non-blocking)
    fn process_intents(&mut self, now: Instant, wall_time: Option<WallTime>) {
        let effects = self.intent_processor.process_pending(&mut self.settings);
        if effects.has_effects() {
            self.apply_effects(effects, now, wall_time);
        }
    }

    /// Apply side effects from intent processing
    fn apply_effects(&mut self, effects: IntentEffects, now: Instant, wall_time: Option<WallTime>) {
        if let Some(selector) = effects.variant {
            // Unknown variants are logged by the registry and otherwise ignored
            let _ = self.set_active_variant(selector.as_variant_ref());
        }

        // Show the new effective time straight away
        if let Some(sell_mode) = effects.sell_mode {
            let target = if sell_mode {
                Some(SELL_MODE_TIME)
            } else {
                wall_time
            };
            if let Some(target) = target {
                self.forced_time = Some(target);
            }
        }

        if let Some(forced_time) = effects.forced_time {
            self.forced_time = Some(forced_time);
        }

        if effects.start_power_on {
            log_event!("[clock] power-on sequence requested");
            self.start_power_on(now);
        }
    }
}

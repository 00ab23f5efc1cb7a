use embassy_time::{Duration, Instant};

use crate::cells::{CellIndex, CellSet, push_cells};
use crate::grid::GridVariant;
use crate::log::log_event;
use crate::phrase::{PREFIX_SEGMENTS, Segments, bucket, compile_phrase, phrase_segments};
use crate::resolver::resolve;
use crate::settings::{PrefixVisibility, RenderSettings};
use crate::wall_time::WallTime;

/// Timing of the word reveal and the waiting-for-time indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderTimings {
    /// Delay between two revealed words
    pub word_step: Duration,
    /// Part of each blink period the minute cells are lit
    pub blink_on: Duration,
    /// Length of one blink cycle while no time is available
    pub blink_period: Duration,
}

impl RenderTimings {
    pub const DEFAULT: Self = Self {
        word_step: Duration::from_millis(500),
        blink_on: Duration::from_millis(500),
        blink_period: Duration::from_millis(5000),
    };
}

impl Default for RenderTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Inputs of a single render tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInput {
    pub now: Instant,
    /// Current local time, `None` while unsynchronised
    pub wall_time: Option<WallTime>,
    /// One-shot override that starts a new reveal of this time
    pub forced_time: Option<WallTime>,
}

impl TickInput {
    pub const fn new(now: Instant, wall_time: Option<WallTime>) -> Self {
        Self {
            now,
            wall_time,
            forced_time: None,
        }
    }

    #[must_use]
    pub const fn with_forced_time(mut self, forced_time: WallTime) -> Self {
        self.forced_time = Some(forced_time);
        self
    }
}

/// Moment the leading `HET IS` goes dark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixDeadline {
    AlwaysVisible,
    Expired,
    At(Instant),
}

impl PrefixDeadline {
    /// Deadline for a phrase completed at `now`
    pub fn arm(visibility: PrefixVisibility, now: Instant) -> Self {
        match visibility {
            PrefixVisibility::Never => PrefixDeadline::Expired,
            PrefixVisibility::Always => PrefixDeadline::AlwaysVisible,
            PrefixVisibility::For(duration) => PrefixDeadline::At(now + duration),
        }
    }

    pub fn is_expired(self, now: Instant) -> bool {
        match self {
            PrefixDeadline::AlwaysVisible => false,
            PrefixDeadline::Expired => true,
            PrefixDeadline::At(deadline) => now >= deadline,
        }
    }
}

/// Externally visible state of the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Static,
    Animating,
    WaitingForTime,
}

/// Progress of a word-by-word reveal
#[derive(Debug)]
struct Reveal {
    segments: Segments,
    revealed: usize,
    last_step: Instant,
}

impl Reveal {
    fn is_complete(&self) -> bool {
        self.revealed >= self.segments.len()
    }
}

#[derive(Debug)]
enum RenderState {
    Static,
    Animating(Reveal),
}

/// Turns the current time into lit cells, tick by tick.
///
/// New phrases either appear at once or word by word, depending on the
/// `animate` setting. Once complete, the prefix visibility timer decides
/// how long `HET IS` stays lit.
#[derive(Debug)]
pub struct PhraseRenderer {
    timings: RenderTimings,
    state: RenderState,
    // Rounded minute of the phrase on display
    last_bucket: Option<u8>,
    deadline: PrefixDeadline,
    prefix_hidden: bool,
    waiting_since: Option<Instant>,
    last_minute: Option<u8>,
    output: CellSet,
}

impl PhraseRenderer {
    pub fn new(timings: RenderTimings) -> Self {
        Self {
            timings,
            state: RenderState::Static,
            last_bucket: None,
            deadline: PrefixDeadline::AlwaysVisible,
            prefix_hidden: false,
            waiting_since: None,
            last_minute: None,
            output: CellSet::new(),
        }
    }

    pub fn timings(&self) -> RenderTimings {
        self.timings
    }

    pub fn phase(&self) -> RenderPhase {
        if self.waiting_since.is_some() {
            return RenderPhase::WaitingForTime;
        }
        match self.state {
            RenderState::Static => RenderPhase::Static,
            RenderState::Animating(_) => RenderPhase::Animating,
        }
    }

    pub fn prefix_deadline(&self) -> PrefixDeadline {
        self.deadline
    }

    /// Forget every phrase and timer, as if freshly constructed
    pub fn reset(&mut self) {
        self.state = RenderState::Static;
        self.last_bucket = None;
        self.deadline = PrefixDeadline::AlwaysVisible;
        self.prefix_hidden = false;
        self.waiting_since = None;
        self.last_minute = None;
        self.output.clear();
    }

    /// Compute the cells to light for this tick
    ///
    /// Call once per tick with the active variant and a fresh settings
    /// snapshot. The result stays valid until the next call.
    pub fn render(
        &mut self,
        variant: &'static GridVariant,
        settings: &RenderSettings,
        input: TickInput,
    ) -> &[CellIndex] {
        self.output.clear();
        let now = input.now;

        let Some(wall_time) = input.wall_time else {
            self.render_waiting(variant, now);
            return &self.output;
        };
        if self.waiting_since.take().is_some() {
            log_event!("[clock] time available, resuming");
        }

        let visibility = settings.prefix_visibility();
        let effective = settings.effective_time(wall_time);
        if self.last_minute != Some(effective.minute) {
            self.last_minute = Some(effective.minute);
            log_event!("[clock] {:02}:{:02}", effective.hour, effective.minute);
        }

        let rounded = bucket(effective.minute).rounded_minute;
        if self.last_bucket != Some(rounded) || input.forced_time.is_some() {
            self.last_bucket = Some(rounded);
            let source = input.forced_time.unwrap_or(effective);
            self.start_cycle(settings.animate, visibility, source, now);
        }

        if let RenderState::Animating(reveal) = &mut self.state {
            let due = reveal.revealed == 0
                || now.saturating_duration_since(reveal.last_step) >= self.timings.word_step;
            if due {
                if let Some(word) = reveal.segments.get(reveal.revealed) {
                    reveal.revealed += 1;
                    reveal.last_step = now;
                    log_event!("[clock] reveal {}", word);
                }
            }
            for word in &reveal.segments[..reveal.revealed] {
                push_cells(&mut self.output, resolve(variant, word));
            }
            if reveal.is_complete() {
                log_event!(
                    "[clock] animation complete, {} segments, prefix {:?}",
                    reveal.segments.len(),
                    visibility
                );
                self.state = RenderState::Static;
                self.deadline = PrefixDeadline::arm(visibility, now);
            }
            return &self.output;
        }

        self.render_static(variant, visibility, effective, now);
        &self.output
    }

    fn start_cycle(
        &mut self,
        animate: bool,
        visibility: PrefixVisibility,
        source: WallTime,
        now: Instant,
    ) {
        if !animate {
            self.state = RenderState::Static;
            self.deadline = PrefixDeadline::arm(visibility, now);
            return;
        }

        let mut segments = phrase_segments(source.hour, source.minute);
        if visibility == PrefixVisibility::Never {
            segments = segments.iter().skip(PREFIX_SEGMENTS).copied().collect();
        }
        log_event!(
            "[clock] animating {:02}:{:02}, {} segments",
            source.hour,
            source.minute,
            segments.len()
        );
        self.state = RenderState::Animating(Reveal {
            segments,
            revealed: 0,
            last_step: now,
        });
        // Rearmed once the reveal completes
        self.deadline = PrefixDeadline::AlwaysVisible;
    }

    fn render_static(
        &mut self,
        variant: &'static GridVariant,
        visibility: PrefixVisibility,
        effective: WallTime,
        now: Instant,
    ) {
        let hide_prefix = match visibility {
            PrefixVisibility::Never => true,
            PrefixVisibility::Always => false,
            PrefixVisibility::For(_) => self.deadline.is_expired(now),
        };
        if hide_prefix && !self.prefix_hidden {
            log_event!("[clock] prefix hidden");
        }
        self.prefix_hidden = hide_prefix;

        compile_phrase(effective.hour, effective.minute).collect_cells(
            variant,
            !hide_prefix,
            &mut self.output,
        );
    }

    fn render_waiting(&mut self, variant: &'static GridVariant, now: Instant) {
        let since = *self.waiting_since.get_or_insert_with(|| {
            log_event!("[clock] no time available, showing indicator");
            now
        });
        // Stale phrases must not survive the outage
        self.state = RenderState::Static;
        self.last_bucket = None;
        self.last_minute = None;

        let period = self.timings.blink_period.as_millis().max(1);
        let phase = now.saturating_duration_since(since).as_millis() % period;
        if phase < self.timings.blink_on.as_millis() {
            push_cells(&mut self.output, &variant.extra_minutes);
        }
    }
}

impl Default for PhraseRenderer {
    fn default() -> Self {
        Self::new(RenderTimings::DEFAULT)
    }
}

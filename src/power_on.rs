//! Boot self test.
//!
//! Every cell of the strip lights up once in order, then the device's IPv4
//! address is spelled digit by digit with the hour words of the clock face.

use core::net::Ipv4Addr;

use embassy_time::{Duration, Instant};

use crate::cells::{CellIndex, CellSet, push_cells};
use crate::grid::{EXTRA_MINUTE_CELLS, GridVariant};
use crate::log::log_event;
use crate::resolver::resolve;
use crate::wall_time::AddressSource;

/// Words spelling the digits 1 to 9. Zero has its own cell.
pub const DIGIT_WORDS: [&str; 9] = [
    "EEN", "TWEE", "DRIE", "VIER", "VIJF", "ZES", "ZEVEN", "ACHT", "NEGEN",
];

/// Twelve digits and three separators
pub const MAX_ADDRESS_FRAMES: usize = 15;

pub type AddressFrames = heapless::Vec<AddressFrame, MAX_ADDRESS_FRAMES>;

/// Timings of the self test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerOnTimings {
    /// Time each cell of the sweep is lit
    pub sweep_step: Duration,
    /// Time each address frame is shown
    pub address_step: Duration,
    /// Blank pause before the clock takes over
    pub pause: Duration,
}

impl PowerOnTimings {
    pub const DEFAULT: Self = Self {
        sweep_step: Duration::from_millis(20),
        address_step: Duration::from_millis(1000),
        pause: Duration::from_millis(2000),
    };
}

impl Default for PowerOnTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerOnState {
    Sweep,
    AddressDigits,
    AddressHoldLast,
    Pause,
    Done,
}

/// One step of the address announcement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFrame {
    Digit {
        digit: u8,
        cells: &'static [CellIndex],
    },
    Zero(CellIndex),
    /// Dot between two octets, shown on the minute-tick cells
    Separator([CellIndex; EXTRA_MINUTE_CELLS]),
}

impl AddressFrame {
    pub fn cells(&self) -> &[CellIndex] {
        match self {
            AddressFrame::Digit { cells, .. } => cells,
            AddressFrame::Zero(cell) => core::slice::from_ref(cell),
            AddressFrame::Separator(cells) => cells,
        }
    }

    /// Character this frame stands for
    pub fn label(&self) -> char {
        match self {
            AddressFrame::Digit { digit, .. } => char::from(b'0' + digit),
            AddressFrame::Zero(_) => '0',
            AddressFrame::Separator(_) => '.',
        }
    }
}

fn digit_frame(variant: &'static GridVariant, digit: u8) -> AddressFrame {
    match digit {
        0 => AddressFrame::Zero(variant.zero_cell),
        digit => AddressFrame::Digit {
            digit,
            cells: DIGIT_WORDS
                .get(usize::from(digit) - 1)
                .map_or(&[], |word| resolve(variant, word)),
        },
    }
}

/// Frames spelling `address` in decimal, octets separated by a dot frame.
pub fn encode_address(variant: &'static GridVariant, address: Ipv4Addr) -> AddressFrames {
    let mut frames = AddressFrames::new();
    for (position, octet) in address.octets().into_iter().enumerate() {
        if position > 0 {
            let _ = frames.push(AddressFrame::Separator(variant.extra_minutes));
        }
        let digits = [octet / 100, octet / 10 % 10, octet % 10];
        let skip = match octet {
            100.. => 0,
            10.. => 1,
            _ => 2,
        };
        for &digit in &digits[skip..] {
            let _ = frames.push(digit_frame(variant, digit));
        }
    }
    frames
}

/// Boot sequence state machine
///
/// Idle (`Done`) until [`start`](Self::start) is called. While running,
/// [`update`](Self::update) returns the cells to show on every tick.
#[derive(Debug)]
pub struct PowerOnSequence {
    timings: PowerOnTimings,
    state: PowerOnState,
    sweep_index: CellIndex,
    step: usize,
    last_update: Instant,
    frames: AddressFrames,
    output: CellSet,
}

impl PowerOnSequence {
    pub fn new(timings: PowerOnTimings) -> Self {
        Self {
            timings,
            state: PowerOnState::Done,
            sweep_index: 0,
            step: 0,
            last_update: Instant::from_ticks(0),
            frames: AddressFrames::new(),
            output: CellSet::new(),
        }
    }

    /// Restart the sequence from the sweep, whatever the current state
    pub fn start(&mut self, now: Instant) {
        self.state = PowerOnState::Sweep;
        self.sweep_index = 0;
        self.step = 0;
        self.last_update = now;
        self.frames.clear();
        self.output.clear();
        log_event!("[power-on] sweep started");
    }

    pub fn is_running(&self) -> bool {
        self.state != PowerOnState::Done
    }

    pub fn state(&self) -> PowerOnState {
        self.state
    }

    /// Address frames of the running announcement, empty before the sweep ends
    pub fn frames(&self) -> &[AddressFrame] {
        &self.frames
    }

    /// Advance the sequence and return the cells to show.
    ///
    /// `address` is read once, when the sweep completes.
    pub fn update<A: AddressSource + ?Sized>(
        &mut self,
        now: Instant,
        variant: &'static GridVariant,
        address: &A,
    ) -> &[CellIndex] {
        let elapsed = now.saturating_duration_since(self.last_update);

        match self.state {
            PowerOnState::Sweep => {
                let total = variant.total_cells();
                if self.sweep_index < total && elapsed >= self.timings.sweep_step {
                    self.show(&[self.sweep_index]);
                    self.sweep_index += 1;
                    self.last_update = now;
                }
                if self.sweep_index >= total {
                    self.finish_sweep(now, variant, address.address());
                }
            }
            PowerOnState::AddressDigits => {
                if elapsed >= self.timings.address_step {
                    self.show_next_frame();
                    self.last_update = now;
                }
                if self.step >= self.frames.len() {
                    self.state = PowerOnState::AddressHoldLast;
                }
            }
            PowerOnState::AddressHoldLast => {
                if elapsed >= self.timings.address_step {
                    self.output.clear();
                    self.state = PowerOnState::Pause;
                    self.last_update = now;
                    log_event!("[power-on] pause");
                }
            }
            PowerOnState::Pause => {
                if elapsed >= self.timings.pause {
                    self.output.clear();
                    self.state = PowerOnState::Done;
                    log_event!("[power-on] completed");
                }
            }
            PowerOnState::Done => self.output.clear(),
        }

        &self.output
    }

    fn finish_sweep(&mut self, now: Instant, variant: &'static GridVariant, address: Ipv4Addr) {
        log_event!("[power-on] announcing {}", address);
        self.frames = encode_address(variant, address);
        self.state = PowerOnState::AddressDigits;
        self.last_update = now;
        self.show_next_frame();
        if self.frames.is_empty() {
            self.state = PowerOnState::AddressHoldLast;
        }
    }

    fn show_next_frame(&mut self) {
        let Some(frame) = self.frames.get(self.step).copied() else {
            return;
        };
        log_event!("[power-on] address part {}", frame.label());
        self.show(frame.cells());
        self.step += 1;
    }

    fn show(&mut self, cells: &[CellIndex]) {
        self.output.clear();
        push_cells(&mut self.output, cells);
    }
}

impl Default for PowerOnSequence {
    fn default() -> Self {
        Self::new(PowerOnTimings::DEFAULT)
    }
}

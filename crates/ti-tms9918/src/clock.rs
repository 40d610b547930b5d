//! Conversion between the host clock and the VDP's internal clock.
//!
//! Three clocks are involved. The host delivers time in half-cycles of its
//! own clock (3.58 MHz on the machines concerned). The VDP's internal clock
//! runs at 3/2 that rate (5.37 MHz) and places borders, syncs and pixels.
//! Memory access windows tick at half the internal rate.

use emu_core::HalfCycles;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClockConverter {
    /// Quarter-cycles carried between conversions, 0..4.
    cycles_error: u64,
}

impl ClockConverter {
    pub const CYCLES_PER_LINE: usize = 342;
    pub const ACCESS_WINDOW_CYCLES_PER_LINE: usize = 171;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Internal cycles elapsed over `source` host half-cycles. The
    /// fractional remainder carries into the next call.
    pub fn to_internal(&mut self, source: HalfCycles) -> u64 {
        let result = source.get() * 3 + self.cycles_error;
        self.cycles_error = result & 3;
        result >> 2
    }

    /// Host half-cycles that can run before `internal` more internal cycles
    /// have elapsed.
    #[must_use]
    pub fn half_cycles_before_internal_cycles(&self, internal: u64) -> HalfCycles {
        let quarters = (internal << 2) as i64 + 2 - self.cycles_error as i64;
        HalfCycles::new((quarters / 3).max(0) as u64)
    }

    /// Position on the memory-access clock for internal cycle `internal`.
    #[must_use]
    pub const fn to_access_clock(internal: u64) -> u64 {
        internal >> 1
    }

    #[must_use]
    pub fn residue(&self) -> u64 {
        self.cycles_error
    }
}

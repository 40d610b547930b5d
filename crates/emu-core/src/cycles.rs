//! External clock unit.

/// A count of half-cycles of the host's clock.
///
/// Hosts advance their peripherals in half-cycles so that components clocked
/// at odd ratios of the CPU (3/4 for the TMS9918 family) can be expressed
/// without rounding. Conversion to a component's internal clock is the
/// component's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HalfCycles(pub u64);

impl HalfCycles {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// Whole cycles' worth of half-cycles.
    #[must_use]
    pub const fn from_cycles(cycles: u64) -> Self {
        Self(cycles * 2)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Complete cycles contained, discarding any trailing half.
    #[must_use]
    pub const fn cycles(self) -> u64 {
        self.0 >> 1
    }
}

impl core::ops::Add for HalfCycles {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::AddAssign for HalfCycles {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl core::ops::Sub for HalfCycles {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

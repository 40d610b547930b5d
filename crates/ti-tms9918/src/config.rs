//! VDP configuration and presets.
//!
//! The personality fixes the chip; the renderer and each line's buffer are
//! built from it.

use std::fmt;

use crate::draw::Renderer;
use crate::line_buffer::LineBuffer;
use crate::mode::ScreenMode;
use crate::personality::Personality;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownPersonality(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPersonality(name) => write!(
                f,
                "unknown VDP personality: {name:?} (expected tms9918a, v9938, v9958, sms, sms2 or gamegear)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A VDP as fitted to a particular machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VdpConfig {
    pub personality: Personality,
}

impl VdpConfig {
    #[must_use]
    pub fn new(personality: Personality) -> Self {
        log::debug!("VDP config: {personality}");
        Self { personality }
    }

    /// Parse a personality name such as `sms` or `v9958`.
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.trim().parse()?))
    }

    /// MSX1: TMS9918A.
    #[must_use]
    pub fn msx1() -> Self {
        Self::new(Personality::Tms9918A)
    }

    /// MSX2: V9938.
    #[must_use]
    pub fn msx2() -> Self {
        Self::new(Personality::V9938)
    }

    /// Master System (315-5124).
    #[must_use]
    pub fn master_system() -> Self {
        Self::new(Personality::SmsVdp)
    }

    #[must_use]
    pub fn game_gear() -> Self {
        Self::new(Personality::GameGearVdp)
    }

    /// A renderer with power-on palette state.
    #[must_use]
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.personality)
    }

    /// An empty line in `mode`, with this chip's fetch mode and sprite limit.
    #[must_use]
    pub fn line_buffer(&self, mode: ScreenMode) -> LineBuffer {
        LineBuffer::new(self.personality, mode)
    }
}

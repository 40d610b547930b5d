//! Screen modes and the fetch/draw family each one belongs to.

use crate::personality::Personality;

/// Display mode in effect for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScreenMode {
    #[default]
    Blank,
    /// 40 columns of 6-pixel characters, two colours.
    Text,
    /// 4x4 coloured blocks.
    MultiColour,
    /// Graphics 1: 32 columns, one colour byte per eight patterns.
    ColouredText,
    /// Graphics 2: 32 columns, a colour byte per pattern row.
    Graphics,
    /// Sega Mode 4: four bit planes, per-tile flags.
    SmsMode4,
    YamahaText80,
    YamahaGraphics3,
    YamahaGraphics4,
    YamahaGraphics5,
    YamahaGraphics6,
    YamahaGraphics7,
}

/// Fetch pattern the line was collected with; picks the draw entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FetchMode {
    Text,
    Character,
    /// Refresh-only line: nothing to draw.
    #[default]
    Refresh,
    Sms,
    Yamaha,
}

/// Pixels produced per byte of fetched data. Zero for a blank line.
#[must_use]
pub const fn pixels_per_byte(mode: ScreenMode) -> usize {
    match mode {
        ScreenMode::Blank => 0,
        ScreenMode::Text | ScreenMode::YamahaText80 => 6,
        ScreenMode::MultiColour
        | ScreenMode::SmsMode4
        | ScreenMode::YamahaGraphics4
        | ScreenMode::YamahaGraphics6 => 2,
        ScreenMode::ColouredText | ScreenMode::Graphics | ScreenMode::YamahaGraphics3 => 8,
        ScreenMode::YamahaGraphics5 => 4,
        ScreenMode::YamahaGraphics7 => 1,
    }
}

/// The register bits that decide the screen mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeRegisters {
    /// Display disabled (register 1 bit 6 clear).
    pub blank: bool,
    pub m1: bool,
    pub m2: bool,
    pub m3: bool,
    /// Sega Mode 4 select (register 0 bit 2).
    pub mode4: bool,
    /// Yamaha mode field, `M5 M4 M3 M2 M1` from bit 4 down to bit 0.
    pub yamaha_mode: u8,
}

impl ScreenMode {
    /// Decode the mode bits as `personality` would.
    ///
    /// Mode bit combinations the chip doesn't document produce
    /// [`ScreenMode::Blank`].
    #[must_use]
    pub fn select(personality: Personality, registers: &ModeRegisters) -> Self {
        if registers.blank {
            return Self::Blank;
        }

        if personality.is_sega_vdp() && registers.mode4 {
            return Self::SmsMode4;
        }

        if personality.is_yamaha_vdp() {
            return match registers.yamaha_mode & 0x1F {
                0b00001 => Self::Text,
                0b01001 => Self::YamahaText80,
                0b00010 => Self::MultiColour,
                0b00000 => Self::ColouredText,
                0b00100 => Self::Graphics,
                0b01000 => Self::YamahaGraphics3,
                0b01100 => Self::YamahaGraphics4,
                0b10000 => Self::YamahaGraphics5,
                0b10100 => Self::YamahaGraphics6,
                0b11100 => Self::YamahaGraphics7,
                _ => Self::Blank,
            };
        }

        match (registers.m1, registers.m2, registers.m3) {
            (false, false, false) => Self::ColouredText,
            (true, false, false) => Self::Text,
            (false, true, false) => Self::MultiColour,
            (false, false, true) => Self::Graphics,
            _ => Self::Blank,
        }
    }

    /// Fetch pattern the classic chips use for this mode.
    ///
    /// Yamaha parts always collect through their own fetcher; see
    /// [`ScreenMode::fetch_mode_for`].
    #[must_use]
    pub const fn fetch_mode(self) -> FetchMode {
        match self {
            Self::Blank => FetchMode::Refresh,
            Self::Text => FetchMode::Text,
            Self::MultiColour | Self::ColouredText | Self::Graphics => FetchMode::Character,
            Self::SmsMode4 => FetchMode::Sms,
            Self::YamahaText80
            | Self::YamahaGraphics3
            | Self::YamahaGraphics4
            | Self::YamahaGraphics5
            | Self::YamahaGraphics6
            | Self::YamahaGraphics7 => FetchMode::Yamaha,
        }
    }

    #[must_use]
    pub const fn fetch_mode_for(self, personality: Personality) -> FetchMode {
        match self {
            Self::Blank => FetchMode::Refresh,
            _ if personality.is_yamaha_vdp() => FetchMode::Yamaha,
            _ => self.fetch_mode(),
        }
    }

    /// Text modes use the narrower 240-pixel window.
    #[must_use]
    pub const fn is_text(self) -> bool {
        matches!(self, Self::Text | Self::YamahaText80)
    }

    /// Modes whose line is 512 pixels wide on a Yamaha part.
    #[must_use]
    pub const fn is_high_resolution(self) -> bool {
        matches!(
            self,
            Self::YamahaText80 | Self::YamahaGraphics5 | Self::YamahaGraphics6
        )
    }
}

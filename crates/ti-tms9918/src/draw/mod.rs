//! Scanline rendering.
//!
//! Each entry point turns a `[start, end)` slice of one line into pixels.
//! The caller may split a line into as many slices as it likes, provided
//! they arrive in order and don't overlap; the result is identical to a
//! single call over the whole line. Between slices the only state carried
//! is each sprite's `shift_position` in the [`LineBuffer`] and whatever bits
//! have been ORed into the [`Status`].

mod sms;
mod tms;
mod yamaha;

use emu_core::{Observable, Value};

use crate::line_buffer::{ActiveSprite, LineBuffer};
use crate::mode::FetchMode;
use crate::output::RowOutput;
use crate::palette::{TMS_PALETTE, game_gear_colour, sms_colour, yamaha_colour};
use crate::personality::Personality;
use crate::status::Status;

/// Widest line any scratch buffer needs to cover.
pub const MAX_LINE_PIXELS: usize = 512;

/// Pixels in a Mode 4 line; the left-column blank is applied when a slice
/// reaches this column.
pub const SMS_LINE_PIXELS: usize = 256;

/// Order in which the active sprite slots are drawn.
///
/// Highest slot first, so the lowest slot is drawn last and its pixels win
/// wherever sprites overlap.
pub fn sprite_draw_order(count: usize) -> impl Iterator<Item = usize> {
    (0..count).rev()
}

/// On the first slice of a line, skip the part of any sprite that hangs off
/// the left edge.
fn clip_left(sprites: &mut [ActiveSprite], shift_advance: i32) {
    for sprite in sprites.iter_mut().filter(|s| s.x < 0) {
        sprite.shift_position -= shift_advance * sprite.x;
    }
}

/// First column a sprite can touch within a slice starting at `start`.
fn sprite_pixel_start(sprite: &ActiveSprite, start: usize) -> usize {
    usize::try_from(sprite.x).map_or(start, |x| x.max(start))
}

/// Chip state that outlives a single line.
#[derive(Debug, Clone)]
pub struct Renderer {
    personality: Personality,

    /// Sprites drawn at double size.
    pub sprites_magnified: bool,
    /// TMS sprites are 16x16 rather than 8x8.
    pub sprites_16x16: bool,
    /// Sega: blank the leftmost 8 pixels to the backdrop.
    pub hide_left_column: bool,
    /// Sega: the top 16 rows ignore horizontal scroll.
    pub horizontal_scroll_lock: bool,

    palette: [u32; 16],
    colour_ram: [u32; 32],
}

impl Renderer {
    #[must_use]
    pub fn new(personality: Personality) -> Self {
        log::debug!("{personality} renderer");
        Self {
            personality,
            sprites_magnified: false,
            sprites_16x16: false,
            hide_left_column: false,
            horizontal_scroll_lock: false,
            palette: TMS_PALETTE,
            colour_ram: [0xFF00_0000; 32],
        }
    }

    #[must_use]
    pub fn personality(&self) -> Personality {
        self.personality
    }

    /// The 16-entry palette used by every non-Mode 4 renderer.
    #[must_use]
    pub fn palette(&self) -> &[u32; 16] {
        &self.palette
    }

    /// Sega colour RAM, already decoded to ARGB32.
    #[must_use]
    pub fn colour_ram(&self) -> &[u32; 32] {
        &self.colour_ram
    }

    /// Yamaha palette write: `first` is `0RRR0BBB`, `second` is `00000GGG`.
    /// Ignored on parts with a fixed palette.
    pub fn write_palette(&mut self, entry: usize, first: u8, second: u8) {
        if !self.personality.has_programmable_palette() {
            log::warn!("palette write to fixed-palette {}", self.personality);
            return;
        }
        let colour = yamaha_colour((first >> 4) & 7, second & 7, first & 7);
        log::debug!("palette[{}] = {colour:08X}", entry & 0xF);
        self.palette[entry & 0xF] = colour;
    }

    /// Sega CRAM write. `value` is a Master System byte or, on Game Gear, a
    /// 12-bit word. Ignored on non-Sega parts.
    pub fn write_colour_ram(&mut self, entry: usize, value: u16) {
        let colour = match self.personality {
            Personality::GameGearVdp => game_gear_colour(value),
            p if p.is_sega_vdp() => sms_colour(value as u8),
            p => {
                log::warn!("CRAM write to {p}, which has no CRAM");
                return;
            }
        };
        log::debug!("cram[{}] = {colour:08X}", entry & 0x1F);
        self.colour_ram[entry & 0x1F] = colour;
    }

    /// Colour for the border around the pixel area.
    #[must_use]
    pub fn border_colour(&self, line: &LineBuffer) -> u32 {
        let background = usize::from(line.background_colour & 0xF);
        if line.fetch_mode == FetchMode::Sms {
            self.colour_ram[16 + background]
        } else {
            self.palette[background]
        }
    }

    /// Draw `[start, end)` of `line` with the entry point its fetch mode
    /// selects. Refresh lines draw nothing.
    ///
    /// `start` and `end` are in the entry point's own units: pixels for the
    /// classic modes, quarter-pixels (internal cycles) for Yamaha lines.
    pub fn draw(
        &self,
        line: &mut LineBuffer,
        row: usize,
        out: &mut RowOutput<'_>,
        status: &mut Status,
        start: usize,
        end: usize,
        cram_dot: u32,
    ) {
        match line.fetch_mode {
            FetchMode::Character => self.draw_tms_character(line, out, status, start, end),
            FetchMode::Text => self.draw_tms_text(line, out, start, end),
            FetchMode::Sms => self.draw_sms(line, row, out, status, start, end, cram_dot),
            FetchMode::Yamaha => self.draw_yamaha(line, out, status, start, end),
            FetchMode::Refresh => {}
        }
    }

    /// Palette lookup with colour 0 standing in for the backdrop.
    fn resolve(&self, colour: u8, background: u8) -> u32 {
        let index = if colour & 0xF == 0 { background } else { colour };
        self.palette[usize::from(index & 0xF)]
    }
}

const QUERY_PATHS: &[&str] = &[
    "personality",
    "sprites.magnified",
    "sprites.16x16",
    "hide_left_column",
    "horizontal_scroll_lock",
    "palette.<n>",
    "cram.<n>",
];

impl Observable for Renderer {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "personality" => Some(self.personality.name().into()),
            "sprites.magnified" => Some(self.sprites_magnified.into()),
            "sprites.16x16" => Some(self.sprites_16x16.into()),
            "hide_left_column" => Some(self.hide_left_column.into()),
            "horizontal_scroll_lock" => Some(self.horizontal_scroll_lock.into()),
            _ => {
                if let Some(n) = path.strip_prefix("palette.") {
                    let index: usize = n.parse().ok()?;
                    self.palette.get(index).copied().map(Value::U32)
                } else if let Some(n) = path.strip_prefix("cram.") {
                    let index: usize = n.parse().ok()?;
                    self.colour_ram.get(index).copied().map(Value::U32)
                } else {
                    None
                }
            }
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}

//! Per-line state collected by the fetch stage.

use emu_core::{Observable, Value};

use crate::mode::{FetchMode, ScreenMode};
use crate::personality::Personality;

/// Most sprites any personality can hold for one line.
pub const MAX_ACTIVE_SPRITES: usize = 8;

/// Tile columns; 40 covers text mode.
pub const MAX_COLUMNS: usize = 40;

/// A sprite that intersects the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSprite {
    /// Sprite number in the attribute table.
    pub index: u8,
    /// Left edge in pixels; negative when partly off the left of the screen.
    pub x: i32,
    /// Pattern bytes then colour/flags. TMS: `[left, right, colour, _]`.
    /// Mode 4: four bit planes.
    pub image: [u8; 4],
    /// Progress through the pattern, in half-pixels for unmagnified sprites.
    /// Reset by the fetch stage at the start of each line.
    pub shift_position: i32,
}

/// Everything the renderer needs to draw one line.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    pub fetch_mode: FetchMode,
    pub screen_mode: ScreenMode,

    pub latched_horizontal_scroll: u8,
    /// Backdrop colour index, 0..16.
    pub background_colour: u8,
    /// Foreground colour for the text modes.
    pub text_colour: u8,

    /// Mode 4 tile flags per column.
    pub flags: [u8; MAX_COLUMNS],
    /// Per-column pattern data. Character modes use `[pattern, colour, ..]`,
    /// Mode 4 uses four planes, text modes use the first one or two bytes.
    pub patterns: [[u8; 4]; MAX_COLUMNS],
    /// Bitmap bytes for the Yamaha bitmap modes.
    pub bitmap: [u8; 256],

    pub active_sprites: [ActiveSprite; MAX_ACTIVE_SPRITES],
    pub active_sprite_slot: usize,
    /// Sprites the chip shows on a line; further pushes are refused.
    sprite_limit: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self {
            fetch_mode: FetchMode::Refresh,
            screen_mode: ScreenMode::Blank,
            latched_horizontal_scroll: 0,
            background_colour: 0,
            text_colour: 0,
            flags: [0; MAX_COLUMNS],
            patterns: [[0; 4]; MAX_COLUMNS],
            bitmap: [0; 256],
            active_sprites: [ActiveSprite::default(); MAX_ACTIVE_SPRITES],
            active_sprite_slot: 0,
            sprite_limit: MAX_ACTIVE_SPRITES,
        }
    }
}

impl LineBuffer {
    /// A blank line in `mode`, with fetch mode and sprite limit set for
    /// `personality`.
    #[must_use]
    pub fn new(personality: Personality, mode: ScreenMode) -> Self {
        let mut line = Self::default();
        line.set_mode(personality, mode);
        line
    }

    /// Latch the line's mode and derive its fetch mode.
    pub fn set_mode(&mut self, personality: Personality, mode: ScreenMode) {
        self.screen_mode = mode;
        self.fetch_mode = mode.fetch_mode_for(personality);
        self.sprite_limit = personality.max_sprites_per_line();
    }

    #[must_use]
    pub fn sprite_limit(&self) -> usize {
        self.sprite_limit
    }

    /// Empty the sprite list ahead of a new line's evaluation.
    pub fn reset_sprite_collection(&mut self) {
        self.active_sprite_slot = 0;
    }

    /// Append a sprite. Returns false, leaving the list unchanged, once the
    /// line holds as many sprites as the chip can show.
    pub fn push_sprite(&mut self, sprite: ActiveSprite) -> bool {
        if self.active_sprite_slot == self.sprite_limit {
            return false;
        }
        self.active_sprites[self.active_sprite_slot] = sprite;
        self.active_sprite_slot += 1;
        true
    }

    #[must_use]
    pub fn active_sprites(&self) -> &[ActiveSprite] {
        &self.active_sprites[..self.active_sprite_slot]
    }

    pub fn active_sprites_mut(&mut self) -> &mut [ActiveSprite] {
        &mut self.active_sprites[..self.active_sprite_slot]
    }

    fn query_sprite(&self, path: &str) -> Option<Value> {
        let (slot, field) = path.split_once('.')?;
        let sprite = self.active_sprites().get(slot.parse::<usize>().ok()?)?;
        match field {
            "index" => Some(sprite.index.into()),
            "x" => Some(sprite.x.into()),
            "shift" => Some(sprite.shift_position.into()),
            "pattern" => Some(u16::from_be_bytes([sprite.image[0], sprite.image[1]]).into()),
            _ => None,
        }
    }
}

const QUERY_PATHS: &[&str] = &[
    "screen_mode",
    "fetch_mode",
    "background",
    "scroll",
    "sprites.count",
    "sprites.<n>.index",
    "sprites.<n>.x",
    "sprites.<n>.shift",
    "sprites.<n>.pattern",
];

impl Observable for LineBuffer {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "screen_mode" => Some(Value::String(format!("{:?}", self.screen_mode))),
            "fetch_mode" => Some(Value::String(format!("{:?}", self.fetch_mode))),
            "background" => Some(self.background_colour.into()),
            "scroll" => Some(self.latched_horizontal_scroll.into()),
            "sprites.count" => Some((self.active_sprite_slot as u8).into()),
            _ => self.query_sprite(path.strip_prefix("sprites.")?),
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}

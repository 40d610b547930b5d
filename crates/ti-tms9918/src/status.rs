//! Status register.

use bitflags::bitflags;
use emu_core::{Observable, Value};

bitflags! {
    /// Status register bits. On TMS parts the low five bits report the
    /// number of the fifth sprite on the overflowing line.
    #[derive(Default)]
    pub struct Status: u8 {
        const INTERRUPT = 0x80;
        const SPRITE_OVERFLOW = 0x40;
        const SPRITE_COLLISION = 0x20;
        const FIFTH_SPRITE = 0x1F;
    }
}

impl Status {
    /// Sprite number latched alongside [`Status::SPRITE_OVERFLOW`].
    #[must_use]
    pub fn fifth_sprite(self) -> u8 {
        self.bits() & Self::FIFTH_SPRITE.bits()
    }
}

impl Observable for Status {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "interrupt" => Some(self.contains(Self::INTERRUPT).into()),
            "sprite_overflow" => Some(self.contains(Self::SPRITE_OVERFLOW).into()),
            "sprite_collision" => Some(self.contains(Self::SPRITE_COLLISION).into()),
            "fifth_sprite" => Some(self.fifth_sprite().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &["interrupt", "sprite_overflow", "sprite_collision", "fifth_sprite"]
    }
}

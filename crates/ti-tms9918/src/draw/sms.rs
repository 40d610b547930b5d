//! Sega Mode 4.

use super::{
    MAX_LINE_PIXELS, Renderer, SMS_LINE_PIXELS, clip_left, sprite_draw_order, sprite_pixel_start,
};
use crate::line_buffer::LineBuffer;
use crate::output::RowOutput;
use crate::status::Status;

/// Tile flag: mirror horizontally.
const FLAG_HFLIP: u8 = 0x02;
/// Tile flag bits that become the palette select (0x10) and the priority
/// marker (0x20) once shifted left by one.
const FLAG_PALETTE_PRIORITY: u8 = 0x18;
const PRIORITY: u8 = 0x20;
const SPRITE_PALETTE: u8 = 0x10;
/// Rows at the top of the screen exempt from horizontal scroll when locked.
const SCROLL_LOCK_ROWS: usize = 16;

/// Colour index for a pixel built from four bit planes. `bit` selects the
/// pixel within each plane byte.
fn plane_colour(planes: [u8; 4], bit: u32) -> u8 {
    planes
        .iter()
        .enumerate()
        .fold(0, |colour, (plane, byte)| colour | (((byte >> bit) & 1) << plane))
}

impl Renderer {
    /// Mode 4: scrolled tiles, sprites, priority merge and colour RAM lookup.
    ///
    /// Intermediate colours are 5-bit CRAM indices: bit 4 selects the sprite
    /// half of CRAM, bit 5 marks a tile that has priority over sprites.
    /// `cram_dot` is ORed into the first pixel of the slice.
    pub fn draw_sms(
        &self,
        line: &mut LineBuffer,
        row: usize,
        out: &mut RowOutput<'_>,
        status: &mut Status,
        start: usize,
        end: usize,
        cram_dot: u32,
    ) {
        if !self.personality.is_sega_vdp() {
            log::trace!("Mode 4 requested on {}; nothing drawn", self.personality);
            return;
        }
        debug_assert!(start <= end && end <= SMS_LINE_PIXELS && end <= out.width());
        debug_assert_eq!(out.position(), start);
        if start == end {
            return;
        }

        let mut colour_buffer = [0u8; MAX_LINE_PIXELS];
        let background = line.background_colour & 0xF;

        // Pixels before the fine scroll offset show the backdrop.
        let mut tile_start = start;
        let mut tile_end = end;
        let mut tile_offset = start;
        if row >= SCROLL_LOCK_ROWS || !self.horizontal_scroll_lock {
            let fine_scroll = usize::from(line.latched_horizontal_scroll & 7);
            let border_end = end.min(fine_scroll);
            if start < border_end {
                colour_buffer[start..border_end].fill(16 + background);
                tile_offset = border_end;
            }
            tile_start = start.saturating_sub(fine_scroll);
            tile_end = end.saturating_sub(fine_scroll);
        }

        let mut t = tile_start;
        while t < tile_end {
            let column = t >> 3;
            let flags = line.flags[column];
            let planes = line.patterns[column];
            let palette_offset = (flags & FLAG_PALETTE_PRIORITY) << 1;
            let run_end = tile_end.min((column + 1) << 3);
            for x in t..run_end {
                let bit = if flags & FLAG_HFLIP != 0 {
                    x & 7
                } else {
                    7 - (x & 7)
                };
                colour_buffer[tile_offset] = plane_colour(planes, bit as u32) | palette_offset;
                tile_offset += 1;
            }
            t = run_end;
        }

        if line.active_sprite_slot != 0 {
            self.draw_sms_sprites(line, &mut colour_buffer, status, start, end);
        }

        let mut colours = colour_buffer[start..end].iter();
        if let Some(&first) = colours.next() {
            out.push(self.colour_ram[usize::from(first & 0x1F)] | cram_dot);
        }
        for &colour in colours {
            out.push(self.colour_ram[usize::from(colour & 0x1F)]);
        }

        // The last slice of the line paints over whatever the first eight
        // columns received.
        if end == SMS_LINE_PIXELS && self.hide_left_column {
            let backdrop = self.colour_ram[usize::from(16 + background)];
            out.origin()[..8].fill(backdrop);
        }
    }

    /// 8-pixel-wide, four-plane sprites. Collision is any two opaque sprite
    /// pixels in one column; the visible result then loses to tiles with
    /// priority unless the tile pixel is colour 0.
    fn draw_sms_sprites(
        &self,
        line: &mut LineBuffer,
        colour_buffer: &mut [u8; MAX_LINE_PIXELS],
        status: &mut Status,
        start: usize,
        end: usize,
    ) {
        let shift_advance = if self.sprites_magnified { 1 } else { 2 };
        if start == 0 {
            clip_left(line.active_sprites_mut(), shift_advance);
        }

        let mut sprite_buffer = [0u8; MAX_LINE_PIXELS];
        let mut collision = false;
        for slot in sprite_draw_order(line.active_sprite_slot) {
            let sprite = &mut line.active_sprites[slot];
            if sprite.shift_position >= 16 {
                continue;
            }

            for c in sprite_pixel_start(sprite, start)..end {
                if sprite.shift_position >= 16 {
                    break;
                }
                let bit = 7 - (sprite.shift_position >> 1) as u32;
                let colour = plane_colour(sprite.image, bit);
                if colour != 0 {
                    collision |= sprite_buffer[c] != 0;
                    sprite_buffer[c] = colour | SPRITE_PALETTE;
                }
                sprite.shift_position += shift_advance;
            }
        }

        for (tile, &sprite) in colour_buffer[start..end]
            .iter_mut()
            .zip(&sprite_buffer[start..end])
        {
            if sprite != 0 && (*tile & PRIORITY == 0 || *tile & 0xF == 0) {
                *tile = sprite;
            }
        }

        if collision {
            log::trace!("sprite collision in {start}..{end}");
            *status |= Status::SPRITE_COLLISION;
        }
    }
}

//! Graphics 1/2, MultiColour and Text.

use super::{MAX_LINE_PIXELS, Renderer, clip_left, sprite_draw_order, sprite_pixel_start};
use crate::line_buffer::LineBuffer;
use crate::mode::ScreenMode;
use crate::output::RowOutput;
use crate::status::Status;

impl Renderer {
    /// Graphics 1, Graphics 2 or MultiColour background, then TMS sprites.
    pub fn draw_tms_character(
        &self,
        line: &mut LineBuffer,
        out: &mut RowOutput<'_>,
        status: &mut Status,
        start: usize,
        end: usize,
    ) {
        self.draw_tms_background(line, out, start, end);
        self.draw_tms_sprites(line, out, status, start, end);
    }

    pub(super) fn draw_tms_background(
        &self,
        line: &LineBuffer,
        out: &mut RowOutput<'_>,
        start: usize,
        end: usize,
    ) {
        debug_assert!(start <= end && end <= out.width());
        debug_assert_eq!(out.position(), start);
        let background = line.background_colour;

        if line.screen_mode == ScreenMode::MultiColour {
            // Left four pixels of each column take the high nibble.
            for c in start..end {
                let colour = (line.patterns[c >> 3][0] >> ((c & 4) ^ 4)) & 0xF;
                out.push(self.resolve(colour, background));
            }
            return;
        }

        let mut c = start;
        while c < end {
            let column = c >> 3;
            let [pattern, colour, ..] = line.patterns[column];
            let colours = [
                self.resolve(colour & 0xF, background),
                self.resolve(colour >> 4, background),
            ];
            let run_end = end.min((column + 1) << 3);
            for x in c..run_end {
                let bit = (pattern >> (7 - (x & 7))) & 1;
                out.push(colours[usize::from(bit)]);
            }
            c = run_end;
        }
    }

    /// Overlay 8x8 or 16x16 sprites on pixels already pushed for
    /// `[start, end)`.
    ///
    /// Two opaque sprite pixels landing on the same column set
    /// [`Status::SPRITE_COLLISION`], even if the sprite's colour is 0 and
    /// nothing is drawn.
    fn draw_tms_sprites(
        &self,
        line: &mut LineBuffer,
        out: &mut RowOutput<'_>,
        status: &mut Status,
        start: usize,
        end: usize,
    ) {
        // An empty slice at column 0 mustn't trigger the left clip.
        if line.active_sprite_slot == 0 || start == end {
            return;
        }
        debug_assert!(end <= MAX_LINE_PIXELS);

        let shift_advance = if self.sprites_magnified { 1 } else { 2 };
        if start == 0 {
            clip_left(line.active_sprites_mut(), shift_advance);
        }

        let shifter_target = if self.sprites_16x16 { 32 } else { 16 };
        let mut sprite_buffer = [0u8; MAX_LINE_PIXELS];
        let mut collision = 0;
        let origin = out.origin();

        for slot in sprite_draw_order(line.active_sprite_slot) {
            let sprite = &mut line.active_sprites[slot];
            if sprite.shift_position >= shifter_target {
                continue;
            }

            let colour = sprite.image[2] & 0xF;
            for c in sprite_pixel_start(sprite, start)..end {
                if sprite.shift_position >= shifter_target {
                    break;
                }
                let shift = (sprite.shift_position >> 1) ^ 7;
                let bit = (sprite.image[(shift >> 3) as usize] >> (shift & 7)) & 1;

                collision |= sprite_buffer[c] & bit;
                sprite_buffer[c] |= bit;
                if bit != 0 && colour != 0 {
                    origin[c] = self.palette[usize::from(colour)];
                }

                sprite.shift_position += shift_advance;
            }
        }

        if collision != 0 {
            log::trace!("sprite collision in {start}..{end}");
            *status |= Status::SPRITE_COLLISION;
        }
    }

    /// Text mode: 40 columns of 6-pixel glyphs in the text and backdrop
    /// colours.
    pub fn draw_tms_text(&self, line: &LineBuffer, out: &mut RowOutput<'_>, start: usize, end: usize) {
        self.draw_text(line, out, start, end, |column| line.patterns[column][0]);
    }

    /// Shared by 40- and 80-column text. `glyph` yields the pattern row for
    /// a character column.
    pub(super) fn draw_text(
        &self,
        line: &LineBuffer,
        out: &mut RowOutput<'_>,
        start: usize,
        end: usize,
        glyph: impl Fn(usize) -> u8,
    ) {
        debug_assert!(start <= end && end <= out.width());
        debug_assert_eq!(out.position(), start);
        let colours = [
            self.palette[usize::from(line.background_colour & 0xF)],
            self.palette[usize::from(line.text_colour & 0xF)],
        ];

        let mut c = start;
        while c < end {
            let column = c / 6;
            let pattern = glyph(column);
            let run_end = end.min((column + 1) * 6);
            for x in c..run_end {
                let bit = (pattern >> (7 - x % 6)) & 1;
                out.push(colours[usize::from(bit)]);
            }
            c = run_end;
        }
    }
}

//! Yamaha V9938/V9958 modes.
//!
//! Slices arrive in internal cycles, four per pixel of a 256-wide line and
//! two per pixel of a 512-wide one.

use super::Renderer;
use crate::line_buffer::LineBuffer;
use crate::mode::ScreenMode;
use crate::output::RowOutput;
use crate::palette::graphics7_colour;
use crate::status::Status;

impl Renderer {
    /// Draw a Yamaha line.
    ///
    /// Text, MultiColour and Graphics 1/2 look as they do on the TMS9918A,
    /// sprites included. Graphics 3 takes the Graphics 2 background. The
    /// bitmap modes read `line.bitmap`. Sprite mode 2 (Graphics 3 and up)
    /// is not drawn. Neither text mode has sprites.
    pub fn draw_yamaha(
        &self,
        line: &mut LineBuffer,
        out: &mut RowOutput<'_>,
        status: &mut Status,
        start: usize,
        end: usize,
    ) {
        if !self.personality.is_yamaha_vdp() {
            log::trace!("Yamaha line requested on {}; nothing drawn", self.personality);
            return;
        }

        match line.screen_mode {
            ScreenMode::Text => self.draw_tms_text(line, out, start >> 2, end >> 2),
            ScreenMode::MultiColour | ScreenMode::ColouredText | ScreenMode::Graphics => {
                self.draw_tms_character(line, out, status, start >> 2, end >> 2);
            }
            ScreenMode::YamahaGraphics3 => {
                self.draw_tms_background(line, out, start >> 2, end >> 2);
            }
            ScreenMode::YamahaText80 => {
                let patterns = &line.patterns;
                self.draw_text(line, out, start >> 1, end >> 1, |column| {
                    patterns[column >> 1][column & 1]
                });
            }
            ScreenMode::YamahaGraphics4 => {
                for c in start >> 2..end >> 2 {
                    let byte = line.bitmap[c >> 1];
                    let index = (byte >> (((c & 1) ^ 1) << 2)) & 0xF;
                    out.push(self.palette[usize::from(index)]);
                }
            }
            ScreenMode::YamahaGraphics5 => {
                for c in start >> 1..end >> 1 {
                    let byte = line.bitmap[c >> 2];
                    let index = (byte >> (((c & 3) ^ 3) << 1)) & 3;
                    out.push(self.palette[usize::from(index)]);
                }
            }
            ScreenMode::YamahaGraphics6 => {
                for c in start >> 1..end >> 1 {
                    let byte = line.bitmap[c >> 1];
                    let index = (byte >> (((c & 1) ^ 1) << 2)) & 0xF;
                    out.push(self.palette[usize::from(index)]);
                }
            }
            ScreenMode::YamahaGraphics7 => {
                for c in start >> 2..end >> 2 {
                    out.push(graphics7_colour(line.bitmap[c]));
                }
            }
            ScreenMode::Blank | ScreenMode::SmsMode4 => {
                log::trace!("{:?} has no Yamaha renderer", line.screen_mode);
                return;
            }
        }

        if line.active_sprite_slot != 0 && uses_sprite_mode_2(line.screen_mode) {
            log::trace!(
                "{} sprite-mode-2 sprites not drawn in {:?}",
                line.active_sprite_slot,
                line.screen_mode
            );
        }
    }
}

fn uses_sprite_mode_2(mode: ScreenMode) -> bool {
    matches!(
        mode,
        ScreenMode::YamahaGraphics3
            | ScreenMode::YamahaGraphics4
            | ScreenMode::YamahaGraphics5
            | ScreenMode::YamahaGraphics6
            | ScreenMode::YamahaGraphics7
    )
}

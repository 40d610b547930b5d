//! Assembles a full 342-cycle line from region callbacks.
//!
//! A [`LineComposer`] is driven by a [`SubrangeDispatcher`] over one of the
//! [`layout`](crate::layout) classifiers. Border cycles take the border
//! colour, blanking is black, and the pixel region is handed to the
//! [`Renderer`] in pixel-relative coordinates. Any number of ordered
//! dispatches may make up a line.

use emu_core::{SubrangeDispatcher, SubrangeTarget};

use crate::clock::ClockConverter;
use crate::draw::Renderer;
use crate::layout::{LineRegion, StandardLayout, TextLayout, pixel_width};
use crate::line_buffer::LineBuffer;
use crate::mode::FetchMode;
use crate::output::RowOutput;
use crate::status::Status;

/// Per-dispatch state threaded through to the renderer.
pub struct ComposeArgs<'a> {
    pub renderer: &'a Renderer,
    pub line: &'a mut LineBuffer,
    /// Display row, for the Sega scroll lock.
    pub row: usize,
    pub status: &'a mut Status,
    /// Colour ORed into the first entry written by this dispatch, border or
    /// pixel. Consumed by that entry; blanking swallows it.
    pub cram_dot: u32,
}

/// Writes one output entry per internal cycle.
pub struct LineComposer<'a> {
    output: &'a mut [u32],
    cursor: usize,
    pixel_origin: Option<usize>,
}

impl<'a> LineComposer<'a> {
    #[must_use]
    pub fn new(output: &'a mut [u32]) -> Self {
        debug_assert!(output.len() >= ClockConverter::CYCLES_PER_LINE);
        Self {
            output,
            cursor: 0,
            pixel_origin: None,
        }
    }

    /// Next cycle to be composed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    fn draw_pixels(&mut self, start: usize, end: usize, args: &mut ComposeArgs<'_>) {
        debug_assert!(self.pixel_origin.is_some(), "pixel region entered without a begin");
        let Some(origin) = self.pixel_origin else {
            return;
        };
        let (relative_start, relative_end) = (start - origin, end - origin);

        // Lines with nothing fetched, and Yamaha lines too wide for a
        // cycle-per-pixel output, show the border.
        let bordered = match args.line.fetch_mode {
            FetchMode::Refresh => true,
            FetchMode::Yamaha => args.line.screen_mode.is_high_resolution(),
            _ => false,
        };
        if bordered {
            self.fill_border(start, end, args);
            return;
        }

        let line = &mut *args.line;
        let width = pixel_width(line.screen_mode);
        debug_assert!(relative_end <= width);
        let mut out = RowOutput::resume(&mut self.output[origin..origin + width], relative_start);
        if line.fetch_mode == FetchMode::Yamaha {
            args.renderer.draw_yamaha(
                line,
                &mut out,
                args.status,
                relative_start << 2,
                relative_end << 2,
            );
        } else {
            args.renderer.draw(
                line,
                args.row,
                &mut out,
                args.status,
                relative_start,
                relative_end,
                args.cram_dot,
            );
        }
        // The dot belongs to the first pixel only.
        args.cram_dot = 0;
    }

    /// Border colour over `start..end`, with any pending CRAM dot on the
    /// first entry.
    fn fill_border(&mut self, start: usize, end: usize, args: &mut ComposeArgs<'_>) {
        let colour = args.renderer.border_colour(args.line);
        self.output[start..end].fill(colour);
        if args.renderer.personality().is_sega_vdp() {
            self.output[start] |= args.cram_dot;
        }
        args.cram_dot = 0;
    }
}

impl<'b> SubrangeTarget<LineRegion, ComposeArgs<'b>> for LineComposer<'_> {
    fn begin(&mut self, region: LineRegion, position: usize) {
        debug_assert_eq!(position, self.cursor);
        if region == LineRegion::Pixels {
            self.pixel_origin = Some(position);
        }
    }

    fn advance(&mut self, region: LineRegion, length: usize, args: &mut ComposeArgs<'b>) {
        let start = self.cursor;
        let end = start + length;
        match region {
            LineRegion::Border => self.fill_border(start, end, args),
            LineRegion::Blank => {
                // A dot landing in blanking is never seen.
                self.output[start..end].fill(0);
                args.cram_dot = 0;
            }
            LineRegion::Pixels => self.draw_pixels(start, end, args),
        }
        self.cursor = end;
    }

    fn end(&mut self, region: LineRegion, position: usize) {
        if region == LineRegion::Pixels {
            self.pixel_origin = None;
        }
        if position == ClockConverter::CYCLES_PER_LINE {
            log::trace!("line complete");
        }
    }
}

/// Dispatchers for both line layouts, built once.
#[derive(Default)]
pub struct LineLayouts {
    standard: SubrangeDispatcher<StandardLayout>,
    text: SubrangeDispatcher<TextLayout>,
}

impl LineLayouts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose cycles `begin..end` of the line in `args`, using the text
    /// layout for the text modes.
    pub fn compose_line(
        &self,
        composer: &mut LineComposer<'_>,
        begin: usize,
        end: usize,
        args: &mut ComposeArgs<'_>,
    ) {
        if args.line.screen_mode.is_text() {
            self.text.dispatch(composer, begin, end, args);
        } else {
            self.standard.dispatch(composer, begin, end, args);
        }
    }
}

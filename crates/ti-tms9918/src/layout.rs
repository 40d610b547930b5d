//! Where border, blanking and pixels fall on the 342-cycle internal line.
//!
//! Cycle 0 is the first cycle after the pixel area of the previous line, so
//! a line reads: right border, blanking and sync, left border, pixels.

use emu_core::Classifier;

use crate::clock::ClockConverter;
use crate::mode::ScreenMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRegion {
    Border,
    /// Horizontal blanking and sync.
    Blank,
    Pixels,
}

pub const END_OF_RIGHT_BORDER: usize = 15;
pub const END_OF_BLANK: usize = END_OF_RIGHT_BORDER + 58;
pub const FIRST_PIXEL: usize = END_OF_BLANK + 13;
pub const FIRST_TEXT_PIXEL: usize = FIRST_PIXEL + 8;
pub const END_OF_TEXT_PIXELS: usize = FIRST_TEXT_PIXEL + 240;

/// Length of the pixel region that `mode`'s layout classifies.
#[must_use]
pub const fn pixel_width(mode: ScreenMode) -> usize {
    if mode.is_text() {
        END_OF_TEXT_PIXELS - FIRST_TEXT_PIXEL
    } else {
        ClockConverter::CYCLES_PER_LINE - FIRST_PIXEL
    }
}

/// 256 pixels running to the end of the line.
pub struct StandardLayout;

impl Classifier for StandardLayout {
    type Region = LineRegion;
    const MAX: usize = ClockConverter::CYCLES_PER_LINE;

    fn region(n: usize) -> LineRegion {
        match n {
            0..END_OF_RIGHT_BORDER => LineRegion::Border,
            END_OF_RIGHT_BORDER..END_OF_BLANK => LineRegion::Blank,
            END_OF_BLANK..FIRST_PIXEL => LineRegion::Border,
            _ => LineRegion::Pixels,
        }
    }
}

/// Text modes: 240 pixels inset by eight cycles on each side.
pub struct TextLayout;

impl Classifier for TextLayout {
    type Region = LineRegion;
    const MAX: usize = ClockConverter::CYCLES_PER_LINE;

    fn region(n: usize) -> LineRegion {
        match n {
            0..END_OF_RIGHT_BORDER => LineRegion::Border,
            END_OF_RIGHT_BORDER..END_OF_BLANK => LineRegion::Blank,
            END_OF_BLANK..FIRST_TEXT_PIXEL => LineRegion::Border,
            FIRST_TEXT_PIXEL..END_OF_TEXT_PIXELS => LineRegion::Pixels,
            _ => LineRegion::Border,
        }
    }
}

#[cfg(test)]
mod tests {
    use emu_core::{Run, SubrangeDispatcher};

    use super::*;

    #[test]
    fn standard_runs() {
        let dispatcher = SubrangeDispatcher::<StandardLayout>::new();
        let spans: Vec<_> = dispatcher
            .runs()
            .iter()
            .map(|&Run { region, start, end }| (region, start, end))
            .collect();
        assert_eq!(
            spans,
            vec![
                (LineRegion::Border, 0, 15),
                (LineRegion::Blank, 15, 73),
                (LineRegion::Border, 73, 86),
                (LineRegion::Pixels, 86, 342),
            ]
        );
    }

    #[test]
    fn text_pixels_are_240_wide() {
        let dispatcher = SubrangeDispatcher::<TextLayout>::new();
        let pixels = dispatcher.run_containing(200).map(Run::len);
        assert_eq!(pixels, Some(240));
        assert_eq!(
            dispatcher.run_containing(340).map(|r| r.region),
            Some(LineRegion::Border)
        );
        assert_eq!(dispatcher.runs().len(), 5);
    }

    #[test]
    fn pixel_width_matches_pixel_runs() {
        let standard = SubrangeDispatcher::<StandardLayout>::new();
        let text = SubrangeDispatcher::<TextLayout>::new();
        assert_eq!(
            standard.run_containing(FIRST_PIXEL).map(Run::len),
            Some(pixel_width(ScreenMode::Graphics))
        );
        assert_eq!(
            text.run_containing(FIRST_TEXT_PIXEL).map(Run::len),
            Some(pixel_width(ScreenMode::YamahaText80))
        );
    }
}

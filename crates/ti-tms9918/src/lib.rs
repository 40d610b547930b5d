//! TMS9918A-family video display processor: scanline rendering.
//!
//! Covers the TMS9918A and its descendants: the Sega Master System and Game
//! Gear VDPs (Mode 4) and the Yamaha V9938/V9958 (bitmap and 80-column
//! modes). An external fetch stage fills a [`LineBuffer`] per scanline; the
//! [`Renderer`] turns slices of it into ARGB32 pixels.
//!
//! Timing (NTSC):
//! - Host clock: 3.58 MHz; internal clock 3/2 that, 5.37 MHz
//! - One line: 228 host cycles = 342 internal cycles
//! - One frame: 262 lines (313 PAL)
//!
//! # Line layout (internal cycles)
//!
//! | Cycles    | Region |
//! |-----------|--------|
//! | 0–15      | Right border |
//! | 15–73     | Blanking and sync |
//! | 73–86     | Left border |
//! | 86–342    | 256 pixels (text: 94–334, 240 pixels) |

pub mod clock;
pub mod compose;
pub mod config;
mod draw;
pub mod layout;
mod line_buffer;
pub mod mode;
mod output;
pub mod palette;
mod personality;
mod status;

pub use clock::ClockConverter;
pub use compose::{ComposeArgs, LineComposer, LineLayouts};
pub use config::{ConfigError, VdpConfig};
pub use draw::{MAX_LINE_PIXELS, Renderer, SMS_LINE_PIXELS, sprite_draw_order};
pub use layout::{LineRegion, StandardLayout, TextLayout};
pub use line_buffer::{ActiveSprite, LineBuffer, MAX_ACTIVE_SPRITES, MAX_COLUMNS};
pub use mode::{FetchMode, ModeRegisters, ScreenMode, pixels_per_byte};
pub use output::RowOutput;
pub use personality::Personality;
pub use status::Status;

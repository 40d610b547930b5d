//! Colour tables and CRAM decoding. All colours are ARGB32, alpha opaque.

/// Pack 8-bit channels into an opaque ARGB32 pixel.
#[must_use]
pub const fn palette_pack(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// The fixed TMS9918A palette. Entry 0 is transparent on the chip; it is
/// given black here and the renderers substitute the backdrop.
pub const TMS_PALETTE: [u32; 16] = [
    palette_pack(0, 0, 0),
    palette_pack(0, 0, 0),
    palette_pack(33, 200, 66),
    palette_pack(94, 220, 120),
    palette_pack(84, 85, 237),
    palette_pack(125, 118, 252),
    palette_pack(212, 82, 77),
    palette_pack(66, 235, 245),
    palette_pack(252, 85, 84),
    palette_pack(255, 121, 120),
    palette_pack(212, 193, 84),
    palette_pack(230, 206, 128),
    palette_pack(33, 176, 59),
    palette_pack(201, 91, 186),
    palette_pack(204, 204, 204),
    palette_pack(255, 255, 255),
];

const SMS_RG_SCALE: [u8; 4] = [0, 85, 170, 255];
// The Master System's blue DAC is not linear.
const SMS_B_SCALE: [u8; 4] = [0, 104, 170, 255];

/// Master System CRAM byte, `--BBGGRR`.
#[must_use]
pub const fn sms_colour(byte: u8) -> u32 {
    palette_pack(
        SMS_RG_SCALE[(byte & 3) as usize],
        SMS_RG_SCALE[((byte >> 2) & 3) as usize],
        SMS_B_SCALE[((byte >> 4) & 3) as usize],
    )
}

/// Game Gear CRAM word, `----BBBBGGGGRRRR`.
#[must_use]
pub const fn game_gear_colour(word: u16) -> u32 {
    palette_pack(
        (word & 0xF) as u8 * 17,
        ((word >> 4) & 0xF) as u8 * 17,
        ((word >> 8) & 0xF) as u8 * 17,
    )
}

const fn expand3(v: u8) -> u8 {
    ((v & 7) as u16 * 255 / 7) as u8
}

/// V9938 palette entry, three bits per channel.
#[must_use]
pub const fn yamaha_colour(r: u8, g: u8, b: u8) -> u32 {
    palette_pack(expand3(r), expand3(g), expand3(b))
}

/// Graphics 7 direct colour, `GGGRRRBB`.
#[must_use]
pub const fn graphics7_colour(byte: u8) -> u32 {
    palette_pack(
        expand3((byte >> 2) & 7),
        expand3(byte >> 5),
        (byte & 3) * 85,
    )
}

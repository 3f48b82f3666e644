//! Character generator ROM.
//!
//! The A00 character set: ASCII from `0x20` to `0x7F`, an empty block from
//! `0x80` to `0x9F`, and katakana and symbols from `0xA0` to `0xFF`. Each
//! glyph is eight rows of five dots, bit 4 being the leftmost dot; the
//! eighth row is the cursor line and is blank in every ROM glyph.
//!
//! Codes `0x00..=0x0F` are not in ROM. They select the eight user-defined
//! glyphs held in CGRAM (`0x08..=0x0F` mirror `0x00..=0x07`). Codes
//! `0x10..=0x1F` have no glyph at all and render blank.

use crate::CGRAM_SIZE;

/// First character code held in ROM.
pub const ROM_FIRST_CODE: u8 = 0x20;

/// Number of dot rows in a stored glyph.
pub const GLYPH_ROWS: usize = 8;

/// A glyph, one byte per dot row.
pub type Glyph = [u8; GLYPH_ROWS];

/// Glyph with no dots lit.
pub const BLANK_GLYPH: Glyph = [0; GLYPH_ROWS];

/// A00 character ROM, indexed by `code - ROM_FIRST_CODE`.
#[rustfmt::skip]
pub const FONT_ROM: [Glyph; 224] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, 0x00], // 0x21
    [0x0A, 0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x22
    [0x0A, 0x0A, 0x1F, 0x0A, 0x1F, 0x0A, 0x0A, 0x00], // 0x23
    [0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04, 0x00], // 0x24
    [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03, 0x00], // 0x25
    [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D, 0x00], // 0x26
    [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27
    [0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, 0x00], // 0x28
    [0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // 0x29
    [0x00, 0x04, 0x15, 0x0E, 0x15, 0x04, 0x00, 0x00], // 0x2A
    [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00], // 0x2B
    [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08, 0x00], // 0x2C
    [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00], // 0x2D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00], // 0x2E
    [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00], // 0x2F
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00], // 0x30
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x31
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F, 0x00], // 0x32
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E, 0x00], // 0x33
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02, 0x00], // 0x34
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E, 0x00], // 0x35
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E, 0x00], // 0x36
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08, 0x00], // 0x37
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E, 0x00], // 0x38
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C, 0x00], // 0x39
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00, 0x00], // 0x3A
    [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x04, 0x08, 0x00], // 0x3B
    [0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, 0x00], // 0x3C
    [0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x00], // 0x3D
    [0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00], // 0x3E
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04, 0x00], // 0x3F
    [0x0E, 0x11, 0x01, 0x0D, 0x15, 0x15, 0x0E, 0x00], // 0x40
    [0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00], // 0x41
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E, 0x00], // 0x42
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E, 0x00], // 0x43
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E, 0x00], // 0x44
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F, 0x00], // 0x45
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10, 0x00], // 0x46
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F, 0x00], // 0x47
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x00], // 0x48
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x49
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C, 0x00], // 0x4A
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, 0x00], // 0x4B
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F, 0x00], // 0x4C
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11, 0x00], // 0x4D
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x00], // 0x4E
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x4F
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10, 0x00], // 0x50
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D, 0x00], // 0x51
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11, 0x00], // 0x52
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E, 0x00], // 0x53
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x54
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x55
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 0x56
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A, 0x00], // 0x57
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11, 0x00], // 0x58
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x00], // 0x59
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F, 0x00], // 0x5A
    [0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E, 0x00], // 0x5B
    [0x11, 0x0A, 0x1F, 0x04, 0x1F, 0x04, 0x04, 0x00], // 0x5C
    [0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E, 0x00], // 0x5D
    [0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x5E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00], // 0x5F
    [0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x60
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0x61
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E, 0x00], // 0x62
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E, 0x00], // 0x63
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F, 0x00], // 0x64
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00], // 0x65
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08, 0x00], // 0x66
    [0x00, 0x00, 0x0F, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0x67
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0x68
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x69
    [0x02, 0x06, 0x02, 0x02, 0x02, 0x12, 0x0C, 0x00], // 0x6A
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12, 0x00], // 0x6B
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E, 0x00], // 0x6C
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11, 0x00], // 0x6D
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0x6E
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0x6F
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10, 0x00], // 0x70
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01, 0x00], // 0x71
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, 0x00], // 0x72
    [0x00, 0x00, 0x0F, 0x10, 0x0E, 0x01, 0x1E, 0x00], // 0x73
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06, 0x00], // 0x74
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0x75
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04, 0x00], // 0x76
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A, 0x00], // 0x77
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00], // 0x78
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E, 0x00], // 0x79
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F, 0x00], // 0x7A
    [0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, 0x00], // 0x7B
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00], // 0x7C
    [0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, 0x00], // 0x7D
    [0x00, 0x04, 0x02, 0x1F, 0x02, 0x04, 0x00, 0x00], // 0x7E
    [0x00, 0x04, 0x08, 0x1F, 0x08, 0x04, 0x00, 0x00], // 0x7F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x80
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x81
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x82
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x83
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x84
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x85
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x86
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x87
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x88
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x89
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x8F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x90
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x91
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x92
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x93
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x94
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x95
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x96
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x97
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x98
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x99
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9A
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9B
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9C
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9D
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9E
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x9F
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xA0
    [0x00, 0x00, 0x00, 0x00, 0x1C, 0x14, 0x1C, 0x00], // 0xA1
    [0x07, 0x04, 0x04, 0x04, 0x00, 0x00, 0x00, 0x00], // 0xA2
    [0x00, 0x00, 0x00, 0x04, 0x04, 0x04, 0x1C, 0x00], // 0xA3
    [0x00, 0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x00], // 0xA4
    [0x00, 0x00, 0x00, 0x0C, 0x0C, 0x00, 0x00, 0x00], // 0xA5
    [0x00, 0x1F, 0x01, 0x1F, 0x01, 0x02, 0x04, 0x00], // 0xA6
    [0x00, 0x00, 0x1F, 0x01, 0x06, 0x04, 0x08, 0x00], // 0xA7
    [0x00, 0x00, 0x02, 0x04, 0x0C, 0x14, 0x04, 0x00], // 0xA8
    [0x00, 0x00, 0x04, 0x1F, 0x11, 0x01, 0x06, 0x00], // 0xA9
    [0x00, 0x00, 0x00, 0x1F, 0x04, 0x04, 0x1F, 0x00], // 0xAA
    [0x00, 0x00, 0x02, 0x1F, 0x06, 0x0A, 0x12, 0x00], // 0xAB
    [0x00, 0x00, 0x08, 0x1F, 0x09, 0x0A, 0x08, 0x00], // 0xAC
    [0x00, 0x00, 0x00, 0x0E, 0x02, 0x02, 0x1F, 0x00], // 0xAD
    [0x00, 0x00, 0x1E, 0x02, 0x1E, 0x02, 0x1E, 0x00], // 0xAE
    [0x00, 0x00, 0x00, 0x15, 0x15, 0x01, 0x06, 0x00], // 0xAF
    [0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], // 0xB0
    [0x1F, 0x01, 0x05, 0x06, 0x04, 0x04, 0x08, 0x00], // 0xB1
    [0x01, 0x02, 0x04, 0x0C, 0x14, 0x04, 0x04, 0x00], // 0xB2
    [0x04, 0x1F, 0x11, 0x11, 0x01, 0x02, 0x04, 0x00], // 0xB3
    [0x00, 0x00, 0x1F, 0x04, 0x04, 0x04, 0x1F, 0x00], // 0xB4
    [0x02, 0x1F, 0x02, 0x06, 0x0A, 0x12, 0x02, 0x00], // 0xB5
    [0x08, 0x1F, 0x09, 0x09, 0x09, 0x09, 0x12, 0x00], // 0xB6
    [0x04, 0x1F, 0x04, 0x1F, 0x04, 0x04, 0x04, 0x00], // 0xB7
    [0x00, 0x0F, 0x09, 0x11, 0x01, 0x02, 0x0C, 0x00], // 0xB8
    [0x08, 0x0F, 0x12, 0x02, 0x02, 0x02, 0x04, 0x00], // 0xB9
    [0x00, 0x1F, 0x01, 0x01, 0x01, 0x01, 0x1F, 0x00], // 0xBA
    [0x0A, 0x1F, 0x0A, 0x0A, 0x02, 0x04, 0x08, 0x00], // 0xBB
    [0x00, 0x18, 0x01, 0x19, 0x01, 0x02, 0x1C, 0x00], // 0xBC
    [0x00, 0x1F, 0x01, 0x02, 0x04, 0x0A, 0x11, 0x00], // 0xBD
    [0x08, 0x1F, 0x09, 0x0A, 0x08, 0x08, 0x07, 0x00], // 0xBE
    [0x00, 0x11, 0x11, 0x09, 0x01, 0x02, 0x0C, 0x00], // 0xBF
    [0x00, 0x0F, 0x09, 0x15, 0x03, 0x02, 0x0C, 0x00], // 0xC0
    [0x02, 0x1C, 0x04, 0x1F, 0x04, 0x04, 0x08, 0x00], // 0xC1
    [0x00, 0x15, 0x15, 0x01, 0x01, 0x02, 0x04, 0x00], // 0xC2
    [0x0E, 0x00, 0x1F, 0x04, 0x04, 0x04, 0x08, 0x00], // 0xC3
    [0x08, 0x08, 0x08, 0x0C, 0x0A, 0x08, 0x08, 0x00], // 0xC4
    [0x04, 0x04, 0x1F, 0x04, 0x04, 0x08, 0x10, 0x00], // 0xC5
    [0x00, 0x0E, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00], // 0xC6
    [0x00, 0x1F, 0x01, 0x0A, 0x04, 0x0A, 0x10, 0x00], // 0xC7
    [0x04, 0x1F, 0x02, 0x04, 0x0E, 0x15, 0x04, 0x00], // 0xC8
    [0x02, 0x02, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00], // 0xC9
    [0x00, 0x04, 0x02, 0x11, 0x11, 0x11, 0x11, 0x00], // 0xCA
    [0x10, 0x10, 0x1F, 0x10, 0x10, 0x10, 0x0F, 0x00], // 0xCB
    [0x00, 0x1F, 0x01, 0x01, 0x01, 0x02, 0x0C, 0x00], // 0xCC
    [0x00, 0x08, 0x14, 0x02, 0x01, 0x01, 0x00, 0x00], // 0xCD
    [0x04, 0x1F, 0x04, 0x04, 0x15, 0x15, 0x04, 0x00], // 0xCE
    [0x00, 0x1F, 0x01, 0x01, 0x0A, 0x04, 0x02, 0x00], // 0xCF
    [0x00, 0x0E, 0x00, 0x0E, 0x00, 0x0E, 0x01, 0x00], // 0xD0
    [0x00, 0x04, 0x08, 0x10, 0x11, 0x1F, 0x01, 0x00], // 0xD1
    [0x00, 0x01, 0x01, 0x0A, 0x04, 0x0A, 0x10, 0x00], // 0xD2
    [0x00, 0x1F, 0x08, 0x1F, 0x08, 0x08, 0x07, 0x00], // 0xD3
    [0x08, 0x08, 0x1F, 0x09, 0x0A, 0x08, 0x08, 0x00], // 0xD4
    [0x00, 0x0E, 0x02, 0x02, 0x02, 0x02, 0x1F, 0x00], // 0xD5
    [0x00, 0x1F, 0x01, 0x1F, 0x01, 0x01, 0x1F, 0x00], // 0xD6
    [0x0E, 0x00, 0x1F, 0x01, 0x01, 0x02, 0x04, 0x00], // 0xD7
    [0x12, 0x12, 0x12, 0x12, 0x02, 0x04, 0x08, 0x00], // 0xD8
    [0x00, 0x04, 0x14, 0x14, 0x15, 0x15, 0x16, 0x00], // 0xD9
    [0x00, 0x10, 0x10, 0x11, 0x12, 0x14, 0x18, 0x00], // 0xDA
    [0x00, 0x1F, 0x11, 0x11, 0x11, 0x11, 0x1F, 0x00], // 0xDB
    [0x00, 0x1F, 0x11, 0x11, 0x01, 0x02, 0x04, 0x00], // 0xDC
    [0x00, 0x18, 0x00, 0x01, 0x01, 0x02, 0x1C, 0x00], // 0xDD
    [0x04, 0x12, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDE
    [0x1C, 0x14, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xDF
    [0x00, 0x00, 0x09, 0x15, 0x12, 0x12, 0x0D, 0x00], // 0xE0
    [0x0A, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00], // 0xE1
    [0x00, 0x0E, 0x11, 0x1E, 0x11, 0x1E, 0x10, 0x00], // 0xE2
    [0x00, 0x00, 0x0E, 0x10, 0x0C, 0x11, 0x0E, 0x00], // 0xE3
    [0x00, 0x11, 0x11, 0x11, 0x13, 0x1D, 0x10, 0x00], // 0xE4
    [0x00, 0x00, 0x0F, 0x14, 0x12, 0x11, 0x0E, 0x00], // 0xE5
    [0x00, 0x06, 0x09, 0x11, 0x11, 0x1E, 0x10, 0x00], // 0xE6
    [0x00, 0x0F, 0x11, 0x11, 0x11, 0x0F, 0x01, 0x00], // 0xE7
    [0x00, 0x00, 0x07, 0x04, 0x04, 0x14, 0x08, 0x00], // 0xE8
    [0x02, 0x1A, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xE9
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x02, 0x02, 0x00], // 0xEA
    [0x00, 0x14, 0x08, 0x14, 0x00, 0x00, 0x00, 0x00], // 0xEB
    [0x04, 0x0E, 0x14, 0x15, 0x0E, 0x04, 0x00, 0x00], // 0xEC
    [0x08, 0x08, 0x1C, 0x08, 0x1C, 0x08, 0x0F, 0x00], // 0xED
    [0x0E, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, 0x00], // 0xEE
    [0x0A, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00], // 0xEF
    [0x00, 0x16, 0x19, 0x11, 0x11, 0x1E, 0x10, 0x00], // 0xF0
    [0x00, 0x0D, 0x13, 0x11, 0x11, 0x0F, 0x01, 0x00], // 0xF1
    [0x0E, 0x11, 0x1F, 0x11, 0x11, 0x0E, 0x00, 0x00], // 0xF2
    [0x00, 0x00, 0x00, 0x00, 0x0B, 0x15, 0x1A, 0x00], // 0xF3
    [0x00, 0x0E, 0x11, 0x11, 0x0A, 0x1B, 0x00, 0x00], // 0xF4
    [0x0A, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00], // 0xF5
    [0x1F, 0x10, 0x08, 0x04, 0x08, 0x10, 0x1F, 0x00], // 0xF6
    [0x00, 0x1F, 0x0A, 0x0A, 0x0A, 0x13, 0x00, 0x00], // 0xF7
    [0x1F, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x00], // 0xF8
    [0x00, 0x11, 0x11, 0x11, 0x11, 0x0F, 0x01, 0x00], // 0xF9
    [0x01, 0x1E, 0x04, 0x1F, 0x04, 0x04, 0x00, 0x00], // 0xFA
    [0x00, 0x1F, 0x08, 0x0F, 0x09, 0x11, 0x00, 0x00], // 0xFB
    [0x00, 0x1F, 0x15, 0x1F, 0x11, 0x11, 0x00, 0x00], // 0xFC
    [0x00, 0x00, 0x04, 0x00, 0x1F, 0x00, 0x04, 0x00], // 0xFD
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0xFE
    [0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00], // 0xFF
];

/// ROM glyph for `code`, if the code is in ROM.
#[must_use]
pub fn rom_glyph(code: u8) -> Option<&'static Glyph> {
    code.checked_sub(ROM_FIRST_CODE)
        .and_then(|offset| FONT_ROM.get(usize::from(offset)))
}

/// Resolve the glyph displayed for `code`.
///
/// User-defined codes read their rows from `cgram`, keeping the low five
/// bits of each row.
#[must_use]
pub fn glyph(code: u8, cgram: &[u8; CGRAM_SIZE]) -> Glyph {
    match code {
        0x00..=0x0F => {
            let start = usize::from(code & 0x07) * GLYPH_ROWS;
            let mut rows = BLANK_GLYPH;
            for (row, bits) in rows.iter_mut().zip(&cgram[start..start + GLYPH_ROWS]) {
                *row = bits & 0x1F;
            }
            rows
        }
        0x10..=0x1F => BLANK_GLYPH,
        _ => rom_glyph(code).copied().unwrap_or(BLANK_GLYPH),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_rom_covers_upper_codes() {
        assert_eq!(FONT_ROM.len(), 256 - usize::from(ROM_FIRST_CODE));
        assert!(rom_glyph(0x1F).is_none());
        assert!(rom_glyph(0x20).is_some());
        assert!(rom_glyph(0xFF).is_some());
    }

    #[test]
    fn test_known_glyphs() {
        assert_eq!(rom_glyph(b' '), Some(&BLANK_GLYPH));
        assert_eq!(
            rom_glyph(b'A'),
            Some(&[0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x00])
        );
        assert_eq!(
            rom_glyph(b'0'),
            Some(&[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E, 0x00])
        );
        // Solid block at the end of the ROM
        assert_eq!(
            rom_glyph(0xFF),
            Some(&[0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x1F, 0x00])
        );
    }

    #[test]
    fn test_rom_glyphs_fit_five_dots() {
        for glyph in &FONT_ROM {
            assert!(glyph.iter().all(|row| row & !0x1F == 0));
            assert_eq!(glyph[GLYPH_ROWS - 1], 0, "cursor line must be blank");
        }
    }

    #[test]
    fn test_empty_block() {
        for code in 0x80..=0x9F {
            assert_eq!(glyph(code, &[0; CGRAM_SIZE]), BLANK_GLYPH);
        }
    }

    #[test]
    fn test_cgram_glyphs() {
        let mut cgram = [0u8; CGRAM_SIZE];
        // Glyph 2 is a box, upper bits must be ignored
        for (row, bits) in cgram[16..24].iter_mut().enumerate() {
            *bits = 0xE0 | if row == 0 || row == 7 { 0x1F } else { 0x11 };
        }

        let expected = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];
        assert_eq!(glyph(0x02, &cgram), expected);
        // 0x08-0x0F mirror the eight user glyphs
        assert_eq!(glyph(0x0A, &cgram), expected);
        assert_eq!(glyph(0x00, &cgram), BLANK_GLYPH);
    }

    #[test]
    fn test_codes_without_glyph_are_blank() {
        let cgram = [0xFF; CGRAM_SIZE];
        for code in 0x10..0x20 {
            assert_eq!(glyph(code, &cgram), BLANK_GLYPH);
        }
    }
}

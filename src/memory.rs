//! Character memory: DDRAM, CGRAM and the display position state.
//!
//! [`CharacterMemory`] owns the two RAMs of the controller and the segment
//! framebuffer they are rendered into. Every DDRAM store redraws the glyph of
//! that one cell; every CGRAM store redraws all 80 cells, since any of them
//! may show the user glyph that just changed.
//!
//! Cell placement on the segment outputs depends on the line mode:
//!
//! - one line: cell `i` starts at segment `5 * i`, upper half-line
//! - two lines: cell `i` starts at segment `5 * (i % 40)`, upper half-line
//!   for cells `0..40` and lower half-line for cells `40..80`
//!
//! The cursor position and scroll offset are bookkeeping for a host that
//! wants to draw a cursor or pan the window; they do not move glyphs.

use crate::font::{self, Glyph, BLANK_GLYPH};
use crate::segment::{HalfLine, SegmentFrameBuffer};
use crate::{CGRAM_SIZE, DDRAM_SIZE, GLYPH_WIDTH, MEMORY_PER_LINE};

/// Value returned for reads past the end of DDRAM.
pub const DDRAM_SENTINEL: u8 = 0xFF;

/// Character code of the space glyph.
const SPACE: u8 = b' ';

/// Rest pattern primed on the upper half-line at power on.
const REST_ON: Glyph = [0x1F; 8];

/// DDRAM, CGRAM and display flags of one controller.
#[derive(Clone, PartialEq, Eq)]
pub struct CharacterMemory {
    ddram: [u8; DDRAM_SIZE],
    cgram: [u8; CGRAM_SIZE],
    framebuffer: SegmentFrameBuffer,
    cursor_x: u8,
    cursor_y: u8,
    scroll_offset: u8,
    two_line: bool,
    display_on: bool,
    cursor_on: bool,
    blink_on: bool,
    dirty: bool,
}

impl CharacterMemory {
    /// Take ownership of `framebuffer` and bring it to the power-on state.
    ///
    /// DDRAM is cleared to spaces in one-line mode, CGRAM is zeroed and the
    /// glass is primed with the rest pattern: a solid block on the upper
    /// half-line and a blank glyph on the lower half-line of every cell.
    #[must_use]
    pub fn new(framebuffer: SegmentFrameBuffer) -> Self {
        let mut memory = Self {
            ddram: [SPACE; DDRAM_SIZE],
            cgram: [0; CGRAM_SIZE],
            framebuffer,
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            two_line: false,
            display_on: false,
            cursor_on: false,
            blink_on: false,
            dirty: false,
        };
        memory.clear();
        for cell in 0..DDRAM_SIZE {
            let column = cell * GLYPH_WIDTH;
            memory.store(column, HalfLine::Upper, &REST_ON);
            memory.store(column, HalfLine::Lower, &BLANK_GLYPH);
        }
        memory
    }

    /// Select one or two display lines. Anything but 2 means one line.
    pub fn set_line_count(&mut self, lines: u8) {
        self.two_line = lines == 2;
    }

    /// Character code stored in DDRAM cell `index`, or
    /// [`DDRAM_SENTINEL`] past the end.
    #[must_use]
    pub fn ddram(&self, index: usize) -> u8 {
        self.ddram.get(index).copied().unwrap_or(DDRAM_SENTINEL)
    }

    /// Store a character code and redraw its cell. Ignored past the end.
    pub fn set_ddram(&mut self, index: usize, value: u8) {
        let Some(cell) = self.ddram.get_mut(index) else {
            log::trace!("ddram store at {index} ignored");
            return;
        };
        *cell = value;
        self.render(index);
    }

    /// CGRAM byte at `index & 63`.
    #[must_use]
    pub fn cgram(&self, index: usize) -> u8 {
        self.cgram[index % CGRAM_SIZE]
    }

    /// Store a CGRAM row at `index & 63` and redraw every cell.
    pub fn set_cgram(&mut self, index: usize, value: u8) {
        self.cgram[index % CGRAM_SIZE] = value;
        self.render_all();
    }

    /// Update the display, cursor and blink enables. Nothing is redrawn.
    pub fn set_display(&mut self, display_on: bool, cursor_on: bool, blink_on: bool) {
        self.display_on = display_on;
        self.cursor_on = cursor_on;
        self.blink_on = blink_on;
    }

    /// Move the display window by `offset` cells, wrapping within a line.
    pub fn scroll_display(&mut self, offset: i8) {
        let line = MEMORY_PER_LINE as i16;
        self.scroll_offset = (i16::from(self.scroll_offset) + i16::from(offset)).rem_euclid(line) as u8;
        self.render_all();
    }

    /// Move the cursor by `offset` cells.
    ///
    /// Leaving either end of a line wraps the cursor to the other end and
    /// switches it to the other line.
    pub fn scroll_cursor(&mut self, offset: i8) {
        let line = MEMORY_PER_LINE as i16;
        let mut x = i16::from(self.cursor_x) + i16::from(offset);
        while x < 0 {
            x += line;
            self.cursor_y ^= 1;
        }
        while x >= line {
            x -= line;
            self.cursor_y ^= 1;
        }
        self.cursor_x = x as u8;
    }

    /// Cursor and scroll offset back to the origin. Nothing is redrawn.
    pub fn cursor_home(&mut self) {
        self.cursor_x = 0;
        self.cursor_y = 0;
        self.scroll_offset = 0;
    }

    /// Fill DDRAM with spaces, redrawing every cell, then home the cursor.
    pub fn clear(&mut self) {
        for index in 0..DDRAM_SIZE {
            self.set_ddram(index, SPACE);
        }
        self.cursor_home();
    }

    /// Fill the glass with a diagnostic pattern without touching DDRAM.
    ///
    /// Cell `p` shows `'A' + p` on the upper half-line and `'a' + p` on the
    /// lower half-line. Codes past the ROM show its last entry.
    pub fn draw_test_pattern(&mut self) {
        let last = font::FONT_ROM.len() - 1;
        let entry = |first: u8, position: usize| {
            &font::FONT_ROM[(usize::from(first - font::ROM_FIRST_CODE) + position).min(last)]
        };
        for position in 0..DDRAM_SIZE {
            let column = position * GLYPH_WIDTH;
            self.store(column, HalfLine::Upper, entry(b'A', position));
            self.store(column, HalfLine::Lower, entry(b'a', position));
        }
    }

    /// Two-line mode selected.
    #[must_use]
    pub const fn is_two_line(&self) -> bool {
        self.two_line
    }

    /// Display enabled.
    #[must_use]
    pub const fn display_on(&self) -> bool {
        self.display_on
    }

    /// Underline cursor enabled.
    #[must_use]
    pub const fn cursor_on(&self) -> bool {
        self.cursor_on
    }

    /// Blinking cursor enabled.
    #[must_use]
    pub const fn blink_on(&self) -> bool {
        self.blink_on
    }

    /// Cursor position as `(x, y)`.
    #[must_use]
    pub const fn cursor(&self) -> (u8, u8) {
        (self.cursor_x, self.cursor_y)
    }

    /// Display window offset in `0..40`.
    #[must_use]
    pub const fn scroll_offset(&self) -> u8 {
        self.scroll_offset
    }

    /// Segment framebuffer the memory renders into.
    #[must_use]
    pub const fn framebuffer(&self) -> &SegmentFrameBuffer {
        &self.framebuffer
    }

    /// Whether the framebuffer changed since the last call, clearing the
    /// flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::take(&mut self.dirty)
    }

    fn render_all(&mut self) {
        for index in 0..DDRAM_SIZE {
            self.render(index);
        }
    }

    fn render(&mut self, index: usize) {
        let Some(&code) = self.ddram.get(index) else {
            return;
        };
        let (column, half_line) = if self.two_line {
            (
                GLYPH_WIDTH * (index % MEMORY_PER_LINE),
                HalfLine::from_index((index / MEMORY_PER_LINE) as u8),
            )
        } else {
            (GLYPH_WIDTH * index, HalfLine::Upper)
        };
        let rows = font::glyph(code, &self.cgram);
        self.store(column, half_line, &rows);
    }

    fn store(&mut self, column: usize, half_line: HalfLine, rows: &[u8]) {
        match self.framebuffer.store_glyph(column, half_line, rows) {
            Ok(()) => self.dirty = true,
            Err(err) => log::warn!("glyph store rejected: {err}"),
        }
    }
}

impl core::fmt::Debug for CharacterMemory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CharacterMemory")
            .field("two_line", &self.two_line)
            .field("display_on", &self.display_on)
            .field("cursor", &(self.cursor_x, self.cursor_y))
            .field("scroll_offset", &self.scroll_offset)
            .field("framebuffer", &self.framebuffer)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CharacterMemory {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CharacterMemory two_line: {} display_on: {} cursor: ({}, {}) scroll: {}",
            self.two_line,
            self.display_on,
            self.cursor_x,
            self.cursor_y,
            self.scroll_offset
        );
    }
}

//! Segment framebuffer representing the electrical state of the glass.
//!
//! A multiplexed dot-matrix LCD is driven by two sets of electrodes: the
//! *segments* run down the glass (one per dot column) and the *commons* run
//! across it (one per dot row). A dot is dark when its segment and common
//! are driven together. The controller scans the commons one after another
//! and for each one drives the segment pattern of that row.
//!
//! This module stores that pattern column-major: one 16-bit word per segment
//! output, where bit *k* is set when common *k* is driven at that segment.
//! How many of the 16 bits carry meaning depends on the controller [`Duty`]:
//!
//! | Duty | Commons | Layout                                                 |
//! |------|---------|--------------------------------------------------------|
//! | 8    | 8       | bits 0-7, one character line                          |
//! | 11   | 11      | bits 0-10, one character line of 5 x 10 + cursor      |
//! | 16   | 16      | bits 0-7 = half-line 0, bits 8-15 = half-line 1       |
//!
//! At duty 16 each segment serves two glass lines, so stores are confined to
//! the half of the word that belongs to the addressed [`HalfLine`] and never
//! disturb the other half.
//!
//! # Example
//! ```rust
//! use hd44780_sim::segment::{HalfLine, SegmentFrameBuffer};
//! use hd44780_sim::Duty;
//!
//! let mut fb = SegmentFrameBuffer::new(Duty::Sixteen);
//!
//! // A vertical bar in the middle column of the first character
//! let bar = [0x04; 8];
//! fb.store_glyph(0, HalfLine::Upper, &bar).unwrap();
//! assert_eq!(fb.snapshot()[2], 0x00FF);
//! assert_eq!(fb.snapshot()[1], 0x0000);
//! ```

use embedded_dma::ReadBuffer;

use crate::error::SegmentError;
use crate::{Duty, FrameBuffer, GLYPH_WIDTH, NR_COMMONS, NR_SEGMENTS};

/// Which half of a segment word a store addresses.
///
/// Only duty 16 splits segment words into two independent halves; at duty 8
/// and 11 both variants address the whole meaningful range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalfLine {
    /// Commons 0-7 (logical half-line 0)
    #[default]
    Upper,
    /// Commons 8-15 (logical half-line 1)
    Lower,
}

impl HalfLine {
    /// Half-line for a logical line number; anything but 0 selects
    /// [`HalfLine::Lower`].
    #[must_use]
    pub const fn from_index(line: u8) -> Self {
        if line == 0 {
            Self::Upper
        } else {
            Self::Lower
        }
    }

    /// Bits of a segment word owned by this half-line at `duty`.
    #[must_use]
    pub const fn mask(self, duty: Duty) -> u16 {
        match (duty, self) {
            (Duty::Sixteen, Self::Upper) | (Duty::Eight, _) => 0x00FF,
            (Duty::Sixteen, Self::Lower) => 0xFF00,
            (Duty::Eleven, _) => 0x07FF,
        }
    }

    /// Common driven by the first glyph row of this half-line.
    #[must_use]
    pub const fn common_base(self, duty: Duty) -> usize {
        match (duty, self) {
            (Duty::Sixteen, Self::Lower) => 8,
            _ => 0,
        }
    }
}

/// Rotate row-major glyph rows into one column's multiplexed bit pattern.
///
/// Font row bit 4 (`0x10`) is the leftmost glyph column. Only the first
/// `duty.rows()` rows are considered; rows past the end of `rows` are blank.
#[must_use]
pub fn glyph_column(rows: &[u8], column: usize, half_line: HalfLine, duty: Duty) -> u16 {
    let font_mask = 0x10u8 >> column;
    let base = half_line.common_base(duty);
    rows.iter()
        .take(duty.rows())
        .enumerate()
        .filter(|(_, bits)| *bits & font_mask != 0)
        .fold(0u16, |pattern, (row, _)| pattern | (1u16 << (base + row)))
}

/// Framebuffer holding the multiplexed state of every segment output.
///
/// Indexing follows the hardware: word 0 is SEG0, bit 0 is COM0.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
#[repr(align(4))]
pub struct SegmentFrameBuffer {
    words: [u16; NR_SEGMENTS],
    duty: Duty,
}

impl SegmentFrameBuffer {
    /// Create a blank framebuffer for a controller running at `duty`.
    #[must_use]
    pub const fn new(duty: Duty) -> Self {
        Self {
            words: [0; NR_SEGMENTS],
            duty,
        }
    }

    /// Controller duty this framebuffer was built for.
    #[must_use]
    pub const fn duty(&self) -> Duty {
        self.duty
    }

    /// Store one character glyph at `base_column`.
    ///
    /// Each of the five glyph columns is rotated out of `rows` (see
    /// [`glyph_column`]) and merged with [`store_column`](Self::store_column),
    /// so only the bits belonging to `half_line` change.
    ///
    /// # Errors
    ///
    /// [`SegmentError::IndexOutOfRange`] if any of the five columns lies past
    /// the framebuffer. Nothing is stored in that case.
    pub fn store_glyph(
        &mut self,
        base_column: usize,
        half_line: HalfLine,
        rows: &[u8],
    ) -> Result<(), SegmentError> {
        if base_column
            .checked_add(GLYPH_WIDTH)
            .is_none_or(|end| end > NR_SEGMENTS)
        {
            return Err(SegmentError::IndexOutOfRange {
                column: base_column.max(NR_SEGMENTS),
            });
        }
        for column in 0..GLYPH_WIDTH {
            let pattern = glyph_column(rows, column, half_line, self.duty);
            self.store_column(base_column + column, pattern, half_line)?;
        }
        Ok(())
    }

    /// Store a complete multiplexed pattern for one segment column.
    ///
    /// Bits outside `half_line`'s mask are left as they were.
    ///
    /// # Errors
    ///
    /// [`SegmentError::IndexOutOfRange`] if `column` is past the framebuffer.
    pub fn store_column(
        &mut self,
        column: usize,
        pattern: u16,
        half_line: HalfLine,
    ) -> Result<(), SegmentError> {
        let mask = half_line.mask(self.duty);
        let word = self
            .words
            .get_mut(column)
            .ok_or(SegmentError::IndexOutOfRange { column })?;
        *word = (*word & !mask) | (pattern & mask);
        Ok(())
    }

    /// Current segment words, SEG0 first.
    #[must_use]
    pub const fn snapshot(&self) -> &[u16; NR_SEGMENTS] {
        &self.words
    }

    /// Word of a single segment column.
    #[must_use]
    pub fn segment(&self, column: usize) -> Option<u16> {
        self.words.get(column).copied()
    }

    /// Whether `common` is driven at segment `column`.
    #[must_use]
    pub fn is_driven(&self, column: usize, common: usize) -> bool {
        common < NR_COMMONS && self.segment(column).is_some_and(|word| word & (1 << common) != 0)
    }

    fn driven_dots(&self) -> u32 {
        self.words.iter().map(|word| word.count_ones()).sum()
    }
}

impl Default for SegmentFrameBuffer {
    fn default() -> Self {
        Self::new(Duty::Sixteen)
    }
}

impl FrameBuffer for SegmentFrameBuffer {
    fn duty(&self) -> Duty {
        self.duty
    }

    fn segments(&self) -> &[u16; NR_SEGMENTS] {
        &self.words
    }
}

unsafe impl ReadBuffer for SegmentFrameBuffer {
    type Word = u16;

    unsafe fn read_buffer(&self) -> (*const u16, usize) {
        (self.words.as_ptr(), self.words.len())
    }
}

impl core::fmt::Debug for SegmentFrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SegmentFrameBuffer")
            .field("duty", &self.duty)
            .field("size", &core::mem::size_of_val(&self.words))
            .field("driven_dots", &self.driven_dots())
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SegmentFrameBuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "SegmentFrameBuffer<{}>", self.duty);
        defmt::write!(f, " size: {}", core::mem::size_of_val(&self.words));
        defmt::write!(f, " driven_dots: {}", self.driven_dots());
    }
}

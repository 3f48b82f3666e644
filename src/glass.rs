//! Mapping of segment words onto the dots of the glass.
//!
//! The segment framebuffer is laid out the way the controller drives it;
//! the glass is laid out the way a person reads it. [`Glass`] remaps one to
//! the other for a given [`PanelConfig`]:
//!
//! - segment `s` belongs to cell `c = s / char_width`, dot column
//!   `s % char_width`
//! - at duty 16 each group of `chars_per_line` cells carries two glass
//!   lines, the upper half-line first; at duty 8 and 11 a group carries one
//! - the common inside the half-line is the dot row
//!
//! Cells and lines are separated by one blank dot, like the gaps between
//! character blocks on a real module.
//!
//! # Example
//! ```rust
//! use embedded_graphics::mock_display::MockDisplay;
//! use embedded_graphics::pixelcolor::BinaryColor;
//! use embedded_graphics::Drawable;
//! use hd44780_sim::config::PanelConfig;
//! use hd44780_sim::controller::Controller;
//! use hd44780_sim::glass::Glass;
//! use hd44780_sim::Duty;
//!
//! let lcd = Controller::new(PanelConfig::new(Duty::Sixteen, 2, 4)).unwrap();
//! let glass = Glass::new(lcd.framebuffer(), lcd.config());
//!
//! let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
//! glass.draw(&mut display).unwrap();
//! ```

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Point, Size};
use embedded_graphics::{Drawable, Pixel};

use crate::config::PanelConfig;
use crate::segment::HalfLine;
use crate::{Duty, FrameBuffer, NR_COMMONS};

/// Read-only view of a framebuffer as glass dots.
#[derive(Debug, Clone, Copy)]
pub struct Glass<'a, F: FrameBuffer> {
    framebuffer: &'a F,
    config: &'a PanelConfig,
}

impl<'a, F: FrameBuffer> Glass<'a, F> {
    /// View `framebuffer` through the geometry of `config`.
    #[must_use]
    pub const fn new(framebuffer: &'a F, config: &'a PanelConfig) -> Self {
        Self {
            framebuffer,
            config,
        }
    }

    /// Whether the dot at `(x, y)` is lit, or `None` outside the glass.
    ///
    /// Spacing dots between cells and lines are never lit.
    #[must_use]
    pub fn dot(&self, x: u32, y: u32) -> Option<bool> {
        let size = self.size();
        if x >= size.width || y >= size.height {
            return None;
        }
        let pitch_x = u32::from(self.config.char_width) + 1;
        let pitch_y = u32::from(self.config.char_height) + 1;
        let (cell, column) = (x / pitch_x, x % pitch_x);
        let (line, row) = (y / pitch_y, y % pitch_y);
        if column == pitch_x - 1 || row == pitch_y - 1 {
            return Some(false);
        }

        let (group, half_line) = match self.framebuffer.duty() {
            Duty::Sixteen => (line / 2, HalfLine::from_index((line % 2) as u8)),
            Duty::Eight | Duty::Eleven => (line, HalfLine::Upper),
        };
        let cells_before = group * u32::from(self.config.chars_per_line) + cell;
        let segment = cells_before * u32::from(self.config.char_width) + column;
        let common = half_line.common_base(self.framebuffer.duty()) + row as usize;

        let word = *self.framebuffer.segments().get(segment as usize)?;
        Some(common < NR_COMMONS && word & (1u16 << common) != 0)
    }

    fn color(&self, x: u32, y: u32) -> BinaryColor {
        BinaryColor::from(self.dot(x, y).unwrap_or(false))
    }
}

impl<F: FrameBuffer> OriginDimensions for Glass<'_, F> {
    fn size(&self) -> Size {
        let config = self.config;
        let width = u32::from(config.chars_per_line) * (u32::from(config.char_width) + 1);
        let height = u32::from(config.glass_lines) * (u32::from(config.char_height) + 1);
        Size::new(width.saturating_sub(1), height.saturating_sub(1))
    }
}

impl<F: FrameBuffer> Drawable for Glass<'_, F> {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let size = self.size();
        let dots = (0..size.height).flat_map(|y| {
            (0..size.width)
                .map(move |x| Pixel(Point::new(x as i32, y as i32), self.color(x, y)))
        });
        target.draw_iter(dots)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::command::{CLEAR_DISPLAY, EIGHT_BIT_MODE, FUNCTION_SET, SET_DDRAM_ADDR, TWO_LINE};
    use crate::controller::Controller;
    use crate::segment::SegmentFrameBuffer;

    fn two_by_two() -> Controller {
        let mut lcd = Controller::new(PanelConfig::new(Duty::Sixteen, 2, 2)).unwrap();
        lcd.write_command(FUNCTION_SET | EIGHT_BIT_MODE | TWO_LINE);
        lcd.write_command(CLEAR_DISPLAY);
        lcd
    }

    #[test]
    fn test_glass_size() {
        let config = PanelConfig::new(Duty::Sixteen, 2, 20);
        let fb = SegmentFrameBuffer::new(Duty::Sixteen);
        let glass = Glass::new(&fb, &config);
        assert_eq!(glass.size(), Size::new(119, 17));

        let config = PanelConfig::new(Duty::Eleven, 1, 16).with_char_size(5, 10);
        let glass = Glass::new(&fb, &config);
        assert_eq!(glass.size(), Size::new(95, 10));
    }

    #[test]
    fn test_dot_outside_glass() {
        let config = PanelConfig::new(Duty::Sixteen, 2, 2);
        let fb = SegmentFrameBuffer::new(Duty::Sixteen);
        let glass = Glass::new(&fb, &config);
        assert_eq!(glass.dot(11, 0), None);
        assert_eq!(glass.dot(0, 17), None);
        assert_eq!(glass.dot(10, 16), Some(false));
    }

    #[test]
    fn test_power_on_shows_upper_blocks() {
        let lcd = Controller::new(PanelConfig::new(Duty::Sixteen, 2, 2)).unwrap();
        let glass = Glass::new(lcd.framebuffer(), lcd.config());
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        glass.draw(&mut display).unwrap();
        display.assert_pattern(&[
            "#####.#####",
            "#####.#####",
            "#####.#####",
            "#####.#####",
            "#####.#####",
            "#####.#####",
            "#####.#####",
            "#####.#####",
            "...........",
            "...........",
            "...........",
            "...........",
            "...........",
            "...........",
            "...........",
            "...........",
            "...........",
        ]);
    }

    #[test]
    fn test_draw_text_on_both_lines() {
        let mut lcd = two_by_two();
        lcd.write_command(SET_DDRAM_ADDR | 0x01);
        lcd.write_data(b'-');
        lcd.write_command(SET_DDRAM_ADDR | 0x40);
        lcd.write_data(b'A');

        let glass = Glass::new(lcd.framebuffer(), lcd.config());
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        glass.draw(&mut display).unwrap();
        display.assert_pattern(&[
            "...........",
            "...........",
            "...........",
            "......#####",
            "...........",
            "...........",
            "...........",
            "...........",
            "...........",
            ".###.......",
            "#...#......",
            "#...#......",
            "#...#......",
            "#####......",
            "#...#......",
            "#...#......",
            "...........",
        ]);
    }

    #[test]
    fn test_four_line_glass_uses_second_segment_group() {
        // Lines 2 and 3 of a 4 x 2 glass show cells 2 and 3 of each DDRAM line
        let mut lcd = Controller::new(PanelConfig::new(Duty::Sixteen, 4, 2)).unwrap();
        lcd.write_command(FUNCTION_SET | EIGHT_BIT_MODE | TWO_LINE);
        lcd.write_command(CLEAR_DISPLAY);
        lcd.write_command(SET_DDRAM_ADDR | 0x42);
        lcd.write_data(0xFF);

        let glass = Glass::new(lcd.framebuffer(), lcd.config());
        // Line 3 starts at y = 27
        for x in 0..5 {
            for y in 27..34 {
                assert_eq!(glass.dot(x, y), Some(true), "({x}, {y})");
            }
            assert_eq!(glass.dot(x, 0), Some(false));
        }
    }

    #[test]
    fn test_duty_eight_single_line() {
        let mut lcd = Controller::new(PanelConfig::new(Duty::Eight, 1, 4)).unwrap();
        lcd.write_command(SET_DDRAM_ADDR | 0x02);
        lcd.write_data(b'|');

        let glass = Glass::new(lcd.framebuffer(), lcd.config());
        assert_eq!(glass.size(), Size::new(23, 8));
        // '|' is the middle column of cell 2
        assert_eq!(glass.dot(14, 0), Some(true));
        assert_eq!(glass.dot(13, 0), Some(false));
        assert_eq!(glass.dot(2, 0), Some(false));
    }

    #[test]
    fn test_rows_past_last_common_stay_dark() {
        // A 10 dot tall lower line at duty 16 runs two rows past COM15
        let config = PanelConfig::new(Duty::Sixteen, 2, 1).with_char_size(5, 10);
        let mut fb = SegmentFrameBuffer::new(Duty::Sixteen);
        for column in 0..5 {
            fb.store_column(column, 0xFFFF, HalfLine::Upper).unwrap();
            fb.store_column(column, 0xFFFF, HalfLine::Lower).unwrap();
        }

        let glass = Glass::new(&fb, &config);
        assert_eq!(glass.size(), Size::new(5, 21));
        for x in 0..5 {
            // Lower line starts at y = 11, COM15 is its row 7
            assert_eq!(glass.dot(x, 11), Some(true));
            assert_eq!(glass.dot(x, 18), Some(true));
            assert_eq!(glass.dot(x, 19), Some(false));
            assert_eq!(glass.dot(x, 20), Some(false));
        }
    }
}

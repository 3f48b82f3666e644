//! HD44780 instruction set.
//!
//! Instructions are identified by their highest set bit; every bit below it
//! is a parameter of that instruction:
//!
//! | Byte pattern  | Instruction                    |
//! |---------------|--------------------------------|
//! | `1AAA AAAA`   | Set DDRAM address              |
//! | `01AA AAAA`   | Set CGRAM address              |
//! | `001D NF--`   | Function set                   |
//! | `0001 SR--`   | Cursor or display shift        |
//! | `0000 1DCB`   | Display on/off control         |
//! | `0000 01IS`   | Entry mode set                 |
//! | `0000 001-`   | Return home                    |
//! | `0000 0001`   | Clear display                  |
//!
//! So `0x83` is "set DDRAM address 3", never a clear.

use bitfield::bitfield;

// instructions
/// Clear display
pub const CLEAR_DISPLAY: u8 = 0x01;
/// Return home
pub const RETURN_HOME: u8 = 0x02;
/// Entry mode set
pub const ENTRY_MODE_SET: u8 = 0x04;
/// Display on/off control
pub const DISPLAY_CONTROL: u8 = 0x08;
/// Cursor or display shift
pub const CURSOR_SHIFT: u8 = 0x10;
/// Function set
pub const FUNCTION_SET: u8 = 0x20;
/// Set CGRAM address
pub const SET_CGRAM_ADDR: u8 = 0x40;
/// Set DDRAM address
pub const SET_DDRAM_ADDR: u8 = 0x80;

// entry mode flags
/// Move the address counter up after each write
pub const ENTRY_INCREMENT: u8 = 0x02;
/// Shift the display with each write
pub const ENTRY_SHIFT: u8 = 0x01;

// display control flags
/// Display on
pub const DISPLAY_ON: u8 = 0x04;
/// Cursor on
pub const CURSOR_ON: u8 = 0x02;
/// Cursor blink on
pub const BLINK_ON: u8 = 0x01;

// shift flags
/// Shift the display instead of the cursor
pub const DISPLAY_MOVE: u8 = 0x08;
/// Shift to the right
pub const MOVE_RIGHT: u8 = 0x04;

// function set flags
/// 8-bit bus
pub const EIGHT_BIT_MODE: u8 = 0x10;
/// Two display lines
pub const TWO_LINE: u8 = 0x08;
/// 5 x 10 dot font
pub const FONT_5X10: u8 = 0x04;

bitfield! {
    /// Parameter view of an instruction byte.
    ///
    /// Fields overlap because each instruction reads its own subset of the
    /// low bits:
    /// - Set DDRAM address: bits 6-0
    /// - Set CGRAM address: bits 5-0
    /// - Function set: bit 4 data length, bit 3 lines, bit 2 font
    /// - Shift: bit 3 display/cursor, bit 2 right/left
    /// - Display control: bit 2 display, bit 1 cursor, bit 0 blink
    /// - Entry mode: bit 1 increment/decrement, bit 0 shift
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    #[repr(transparent)]
    struct Instruction(u8);
    impl Debug;
    pub ddram_address, set_ddram_address: 6, 0;
    pub cgram_address, set_cgram_address: 5, 0;
    pub eight_bit, set_eight_bit: 4;
    pub two_line, set_two_line: 3;
    pub large_font, set_large_font: 2;
    pub shift_display, set_shift_display: 3;
    pub shift_right, set_shift_right: 2;
    pub display_on, set_display_on: 2;
    pub cursor_on, set_cursor_on: 1;
    pub blink_on, set_blink_on: 0;
    pub increment, set_increment: 1;
    pub entry_shift, set_entry_shift: 0;
}

/// Width of the host bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitMode {
    /// Bytes arrive as two nibbles on DB4-DB7, high nibble first
    Four,
    /// Bytes arrive whole
    #[default]
    Eight,
}

/// Number of display lines selected by function set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineCount {
    /// One 80 character line
    #[default]
    One,
    /// Two 40 character lines
    Two,
}

impl LineCount {
    /// Number of lines.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Character font selected by function set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// 5 x 8 dots
    #[default]
    Dots5x8,
    /// 5 x 10 dots
    Dots5x10,
}

/// Direction the address counter moves after a data write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EntryDirection {
    /// +1
    #[default]
    Increment,
    /// -1
    Decrement,
}

impl EntryDirection {
    /// Signed step applied to the address counter.
    #[must_use]
    pub const fn offset(self) -> i8 {
        match self {
            Self::Increment => 1,
            Self::Decrement => -1,
        }
    }
}

/// What a shift instruction moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftTarget {
    /// The cursor and address counter
    Cursor,
    /// The whole display window
    Display,
}

/// Direction of a shift instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftDirection {
    /// -1
    Left,
    /// +1
    Right,
}

impl ShiftDirection {
    /// Signed step of the shift.
    #[must_use]
    pub const fn offset(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// A decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Fill DDRAM with spaces, address counter to 0, entry mode to increment
    ClearDisplay,
    /// Address counter and display shift to 0
    ReturnHome,
    /// Address step direction and display shift on write
    EntryModeSet {
        /// Address counter direction
        direction: EntryDirection,
        /// Shift the display on every write
        auto_scroll: bool,
    },
    /// Display, cursor and blink enables
    DisplayControl {
        /// Display on
        display: bool,
        /// Underline cursor on
        cursor: bool,
        /// Blinking block cursor on
        blink: bool,
    },
    /// Move the cursor or the display by one position
    Shift {
        /// Cursor or display
        target: ShiftTarget,
        /// Left or right
        direction: ShiftDirection,
    },
    /// Bus width, line count and font
    FunctionSet {
        /// Bus width
        bit_mode: BitMode,
        /// Number of display lines
        lines: LineCount,
        /// Character font
        font: Font,
    },
    /// Select CGRAM and load the address counter (6 bits)
    SetCgramAddress(u8),
    /// Select DDRAM and load the address counter (7 bits)
    SetDdramAddress(u8),
}

impl Command {
    /// Decode an instruction byte.
    ///
    /// The highest set bit selects the instruction and only that
    /// instruction's parameter bits are read. `0x00` is not an instruction.
    #[must_use]
    pub fn decode(byte: u8) -> Option<Self> {
        let bits = Instruction(byte);
        let command = match byte.leading_zeros() {
            0 => Self::SetDdramAddress(bits.ddram_address()),
            1 => Self::SetCgramAddress(bits.cgram_address()),
            2 => Self::FunctionSet {
                bit_mode: if bits.eight_bit() {
                    BitMode::Eight
                } else {
                    BitMode::Four
                },
                lines: if bits.two_line() {
                    LineCount::Two
                } else {
                    LineCount::One
                },
                font: if bits.large_font() {
                    Font::Dots5x10
                } else {
                    Font::Dots5x8
                },
            },
            3 => Self::Shift {
                target: if bits.shift_display() {
                    ShiftTarget::Display
                } else {
                    ShiftTarget::Cursor
                },
                direction: if bits.shift_right() {
                    ShiftDirection::Right
                } else {
                    ShiftDirection::Left
                },
            },
            4 => Self::DisplayControl {
                display: bits.display_on(),
                cursor: bits.cursor_on(),
                blink: bits.blink_on(),
            },
            5 => Self::EntryModeSet {
                direction: if bits.increment() {
                    EntryDirection::Increment
                } else {
                    EntryDirection::Decrement
                },
                auto_scroll: bits.entry_shift(),
            },
            6 => Self::ReturnHome,
            7 => Self::ClearDisplay,
            _ => return None,
        };
        Some(command)
    }

    /// Encode the instruction byte, leaving unused parameter bits clear.
    #[must_use]
    pub fn encode(self) -> u8 {
        let mut bits = Instruction(0);
        match self {
            Self::ClearDisplay => return CLEAR_DISPLAY,
            Self::ReturnHome => return RETURN_HOME,
            Self::EntryModeSet {
                direction,
                auto_scroll,
            } => {
                bits.0 = ENTRY_MODE_SET;
                bits.set_increment(direction == EntryDirection::Increment);
                bits.set_entry_shift(auto_scroll);
            }
            Self::DisplayControl {
                display,
                cursor,
                blink,
            } => {
                bits.0 = DISPLAY_CONTROL;
                bits.set_display_on(display);
                bits.set_cursor_on(cursor);
                bits.set_blink_on(blink);
            }
            Self::Shift { target, direction } => {
                bits.0 = CURSOR_SHIFT;
                bits.set_shift_display(target == ShiftTarget::Display);
                bits.set_shift_right(direction == ShiftDirection::Right);
            }
            Self::FunctionSet {
                bit_mode,
                lines,
                font,
            } => {
                bits.0 = FUNCTION_SET;
                bits.set_eight_bit(bit_mode == BitMode::Eight);
                bits.set_two_line(lines == LineCount::Two);
                bits.set_large_font(font == Font::Dots5x10);
            }
            Self::SetCgramAddress(address) => {
                bits.0 = SET_CGRAM_ADDR;
                bits.set_cgram_address(address);
            }
            Self::SetDdramAddress(address) => {
                bits.0 = SET_DDRAM_ADDR;
                bits.set_ddram_address(address);
            }
        }
        bits.0
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_instruction_field_extraction() {
        let bits = Instruction(0xFF);
        assert_eq!(bits.ddram_address(), 0x7F);
        assert_eq!(bits.cgram_address(), 0x3F);
        assert!(bits.eight_bit());
        assert!(bits.blink_on());

        let bits = Instruction(0x00);
        assert_eq!(bits.ddram_address(), 0);
        assert!(!bits.two_line());
    }

    #[test]
    fn test_decode_each_instruction() {
        assert_eq!(Command::decode(0x01), Some(Command::ClearDisplay));
        assert_eq!(Command::decode(0x02), Some(Command::ReturnHome));
        assert_eq!(Command::decode(0x03), Some(Command::ReturnHome));
        assert_eq!(
            Command::decode(ENTRY_MODE_SET | ENTRY_INCREMENT),
            Some(Command::EntryModeSet {
                direction: EntryDirection::Increment,
                auto_scroll: false
            })
        );
        assert_eq!(
            Command::decode(ENTRY_MODE_SET | ENTRY_SHIFT),
            Some(Command::EntryModeSet {
                direction: EntryDirection::Decrement,
                auto_scroll: true
            })
        );
        assert_eq!(
            Command::decode(DISPLAY_CONTROL | DISPLAY_ON | BLINK_ON),
            Some(Command::DisplayControl {
                display: true,
                cursor: false,
                blink: true
            })
        );
        assert_eq!(
            Command::decode(CURSOR_SHIFT | MOVE_RIGHT),
            Some(Command::Shift {
                target: ShiftTarget::Cursor,
                direction: ShiftDirection::Right
            })
        );
        assert_eq!(
            Command::decode(CURSOR_SHIFT | DISPLAY_MOVE),
            Some(Command::Shift {
                target: ShiftTarget::Display,
                direction: ShiftDirection::Left
            })
        );
        assert_eq!(
            Command::decode(FUNCTION_SET | EIGHT_BIT_MODE | TWO_LINE),
            Some(Command::FunctionSet {
                bit_mode: BitMode::Eight,
                lines: LineCount::Two,
                font: Font::Dots5x8
            })
        );
        assert_eq!(
            Command::decode(FUNCTION_SET | FONT_5X10),
            Some(Command::FunctionSet {
                bit_mode: BitMode::Four,
                lines: LineCount::One,
                font: Font::Dots5x10
            })
        );
        assert_eq!(
            Command::decode(SET_CGRAM_ADDR | 0x15),
            Some(Command::SetCgramAddress(0x15))
        );
        assert_eq!(
            Command::decode(SET_DDRAM_ADDR | 0x40),
            Some(Command::SetDdramAddress(0x40))
        );
    }

    #[test]
    fn test_decode_zero_is_not_an_instruction() {
        assert_eq!(Command::decode(0x00), None);
    }

    #[test]
    fn test_highest_bit_wins() {
        // Clear bit set alongside DDRAM address
        assert_eq!(Command::decode(0x83), Some(Command::SetDdramAddress(0x03)));
        // CGRAM address swallows every lower instruction bit
        assert_eq!(Command::decode(0x7F), Some(Command::SetCgramAddress(0x3F)));
        // Function set ignores the two lowest bits
        assert_eq!(
            Command::decode(0x3F),
            Some(Command::FunctionSet {
                bit_mode: BitMode::Eight,
                lines: LineCount::Two,
                font: Font::Dots5x10
            })
        );
        // Shift ignores bits 1-0
        assert_eq!(
            Command::decode(0x13),
            Some(Command::Shift {
                target: ShiftTarget::Cursor,
                direction: ShiftDirection::Left
            })
        );
    }

    #[test]
    fn test_decode_priority_for_every_byte() {
        for byte in 1..=u8::MAX {
            let command = Command::decode(byte).unwrap();
            let top = 0x80u8 >> byte.leading_zeros();
            let opcode = match command {
                Command::ClearDisplay => CLEAR_DISPLAY,
                Command::ReturnHome => RETURN_HOME,
                Command::EntryModeSet { .. } => ENTRY_MODE_SET,
                Command::DisplayControl { .. } => DISPLAY_CONTROL,
                Command::Shift { .. } => CURSOR_SHIFT,
                Command::FunctionSet { .. } => FUNCTION_SET,
                Command::SetCgramAddress(_) => SET_CGRAM_ADDR,
                Command::SetDdramAddress(_) => SET_DDRAM_ADDR,
            };
            assert_eq!(opcode, top, "byte {byte:#04x}");
        }
    }

    #[test]
    fn test_encode_matches_raw_constants() {
        assert_eq!(Command::ClearDisplay.encode(), 0x01);
        assert_eq!(Command::ReturnHome.encode(), 0x02);
        assert_eq!(
            Command::FunctionSet {
                bit_mode: BitMode::Eight,
                lines: LineCount::Two,
                font: Font::Dots5x8
            }
            .encode(),
            FUNCTION_SET | EIGHT_BIT_MODE | TWO_LINE
        );
        assert_eq!(
            Command::DisplayControl {
                display: true,
                cursor: true,
                blink: false
            }
            .encode(),
            DISPLAY_CONTROL | DISPLAY_ON | CURSOR_ON
        );
        assert_eq!(
            Command::Shift {
                target: ShiftTarget::Display,
                direction: ShiftDirection::Right
            }
            .encode(),
            CURSOR_SHIFT | DISPLAY_MOVE | MOVE_RIGHT
        );
        assert_eq!(
            Command::EntryModeSet {
                direction: EntryDirection::Increment,
                auto_scroll: true
            }
            .encode(),
            ENTRY_MODE_SET | ENTRY_INCREMENT | ENTRY_SHIFT
        );
        assert_eq!(Command::SetCgramAddress(0x08).encode(), 0x48);
        assert_eq!(Command::SetDdramAddress(0x40).encode(), 0xC0);
    }

    #[test]
    fn test_encode_truncates_addresses() {
        assert_eq!(Command::SetCgramAddress(0xFF).encode(), 0x7F);
        assert_eq!(Command::SetDdramAddress(0xFF).encode(), 0xFF);
        assert_eq!(
            Command::decode(Command::SetCgramAddress(0x41).encode()),
            Some(Command::SetCgramAddress(0x01))
        );
    }

    #[test]
    fn test_offsets() {
        assert_eq!(EntryDirection::Increment.offset(), 1);
        assert_eq!(EntryDirection::Decrement.offset(), -1);
        assert_eq!(ShiftDirection::Right.offset(), 1);
        assert_eq!(ShiftDirection::Left.offset(), -1);
        assert_eq!(LineCount::One.count(), 1);
        assert_eq!(LineCount::Two.count(), 2);
    }
}

//! The HD44780 controller: bus transfers, instruction execution and the
//! address counter.
//!
//! The host sees four register-level operations:
//!
//! - [`write_command`](Controller::write_command) with RS low
//! - [`write_data`](Controller::write_data) with RS high
//! - [`read_command`](Controller::read_command) for the address counter
//! - [`read_data`](Controller::read_data) for the data register
//!
//! ## Address counter
//!
//! In one-line mode the counter is a plain index into the 80 DDRAM cells.
//! In two-line mode it is a *virtual* address: line 0 is `0x00..=0x27` and
//! line 1 is `0x40..=0x67`. Stepping past the end of one line lands at the
//! start of the other:
//!
//! ```text
//!   0x00 .. 0x27 --+
//!                  |   +1
//!   0x40 .. 0x67 <-+
//! ```
//!
//! ## Four-bit transfers
//!
//! With a four-bit bus every byte takes two transfers on DB4-DB7, high
//! nibble first. Reads and writes share one phase flag, and a function set
//! resynchronises it to the high nibble.

use crate::command::{BitMode, Command, EntryDirection, ShiftTarget};
use crate::config::PanelConfig;
use crate::error::ConfigError;
use crate::memory::CharacterMemory;
use crate::segment::SegmentFrameBuffer;
use crate::{RefreshListener, DDRAM_SIZE, MEMORY_PER_LINE, NR_SEGMENTS};

/// Bit selecting line 1 of a two-line virtual address.
const LINE_ONE_BIT: u8 = 0x40;

/// Memory addressed by data transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RamTarget {
    /// Display data RAM, selected by "set DDRAM address"
    #[default]
    Ddram,
    /// Character generator RAM, selected by "set CGRAM address"
    Cgram,
}

/// Translate an address counter value into a linear DDRAM index.
///
/// In two-line mode, addresses with bit `0x40` set belong to line 1 and map
/// to cells `40..80`. Any value still past the end of DDRAM is reduced
/// modulo 80.
#[must_use]
pub fn address_to_index(address: u8, two_line: bool) -> usize {
    let address = usize::from(address);
    let index = if two_line && address & usize::from(LINE_ONE_BIT) != 0 {
        address - usize::from(LINE_ONE_BIT) + MEMORY_PER_LINE
    } else {
        address
    };
    index % DDRAM_SIZE
}

/// Step the address counter after a DDRAM data write.
///
/// In two-line mode both lines are treated as one 40 cell line; running off
/// either end wraps to the other end and flips the line bit. In one-line
/// mode running off either end of the 80 cells wraps to the other end.
#[must_use]
pub fn step_address(address: u8, direction: EntryDirection, two_line: bool) -> u8 {
    let stepped = address.wrapping_add_signed(direction.offset());
    let restart = |last: u8| match direction {
        EntryDirection::Increment => 0,
        EntryDirection::Decrement => last,
    };
    if two_line {
        if usize::from(stepped & !LINE_ONE_BIT) >= MEMORY_PER_LINE {
            restart(MEMORY_PER_LINE as u8 - 1) | ((stepped ^ LINE_ONE_BIT) & LINE_ONE_BIT)
        } else {
            stepped
        }
    } else if usize::from(stepped) >= DDRAM_SIZE {
        restart(DDRAM_SIZE as u8 - 1)
    } else {
        stepped
    }
}

/// A simulated HD44780 controller driving one panel.
///
/// `L` is notified once after every completed transfer that changed the
/// segment framebuffer.
pub struct Controller<L = ()> {
    config: PanelConfig,
    memory: CharacterMemory,
    listener: L,
    address_counter: u8,
    data_register: u8,
    instr_register: u8,
    target: RamTarget,
    bit_mode: BitMode,
    entry: EntryDirection,
    auto_scroll: bool,
    high_nibble_next: bool,
}

impl Controller {
    /// Build a controller for `config` with no refresh listener.
    ///
    /// # Errors
    ///
    /// The [`ConfigError`] returned by [`PanelConfig::validate`].
    pub fn new(config: PanelConfig) -> Result<Self, ConfigError> {
        Self::with_listener(config, ())
    }
}

impl<L: RefreshListener> Controller<L> {
    /// Build a controller for `config` that notifies `listener` of glass
    /// changes.
    ///
    /// The controller starts in its power-on state: eight-bit bus, one-line
    /// mode, DDRAM selected at address 0 with increment entry mode.
    ///
    /// # Errors
    ///
    /// The [`ConfigError`] returned by [`PanelConfig::validate`]. Nothing is
    /// built in that case.
    pub fn with_listener(config: PanelConfig, listener: L) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut memory = CharacterMemory::new(SegmentFrameBuffer::new(config.duty));
        memory.take_dirty();
        log::debug!(
            "controller ready: duty {}, {} x {} glass, {} segments",
            config.duty.commons(),
            config.glass_lines,
            config.chars_per_line,
            config.glass_segments()
        );
        Ok(Self {
            config,
            memory,
            listener,
            address_counter: 0,
            data_register: 0,
            instr_register: 0,
            target: RamTarget::Ddram,
            bit_mode: BitMode::Eight,
            entry: EntryDirection::Increment,
            auto_scroll: false,
            high_nibble_next: true,
        })
    }

    /// Transfer an instruction byte (or nibble) to the controller.
    pub fn write_command(&mut self, byte: u8) {
        let (instruction, complete) = self.write_nibble(byte, self.instr_register);
        self.instr_register = instruction;
        if !complete {
            return;
        }
        match Command::decode(instruction) {
            Some(command) => {
                log::trace!("command {instruction:#04x}: {command:?}");
                self.execute(command);
            }
            None => log::trace!("command {instruction:#04x} ignored"),
        }
        self.notify_if_dirty();
    }

    /// Transfer a data byte (or nibble) to the controller.
    ///
    /// The byte goes to the RAM selected by the last address instruction at
    /// the address counter, which then moves one step in the entry
    /// direction.
    pub fn write_data(&mut self, byte: u8) {
        let (data, complete) = self.write_nibble(byte, self.data_register);
        self.data_register = data;
        if !complete {
            return;
        }
        log::trace!(
            "data {data:#04x} to {:?} at {:#04x}",
            self.target,
            self.address_counter
        );
        match self.target {
            RamTarget::Cgram => {
                self.memory.set_cgram(usize::from(self.address_counter), data);
                let next = self.address_counter.wrapping_add_signed(self.entry.offset());
                self.set_cgram_address(next);
            }
            RamTarget::Ddram => {
                self.memory.set_ddram(self.index(), data);
                self.address_counter =
                    step_address(self.address_counter, self.entry, self.memory.is_two_line());
                self.set_ddram_address(self.address_counter);
            }
        }
        self.notify_if_dirty();
    }

    /// Read the address counter. The busy flag (bit 7) is never set.
    pub fn read_command(&mut self) -> u8 {
        self.read_nibble(self.address_counter & 0x7F)
    }

    /// Read the data register.
    ///
    /// After a "set DDRAM address" it holds the character at that address.
    /// The address counter does not move.
    pub fn read_data(&mut self) -> u8 {
        self.read_nibble(self.data_register)
    }

    /// Fill the glass with the diagnostic pattern of
    /// [`CharacterMemory::draw_test_pattern`].
    pub fn draw_test_pattern(&mut self) {
        self.memory.draw_test_pattern();
        self.notify_if_dirty();
    }

    /// Current segment words.
    #[must_use]
    pub fn snapshot(&self) -> &[u16; NR_SEGMENTS] {
        self.memory.framebuffer().snapshot()
    }

    /// Segment framebuffer, for use with [`Glass`](crate::glass::Glass) or a
    /// DMA transfer.
    #[must_use]
    pub fn framebuffer(&self) -> &SegmentFrameBuffer {
        self.memory.framebuffer()
    }

    /// Character memory.
    #[must_use]
    pub const fn memory(&self) -> &CharacterMemory {
        &self.memory
    }

    /// Panel geometry.
    #[must_use]
    pub const fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Refresh listener.
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// Address counter.
    #[must_use]
    pub const fn address_counter(&self) -> u8 {
        self.address_counter
    }

    /// RAM targeted by data transfers.
    #[must_use]
    pub const fn target(&self) -> RamTarget {
        self.target
    }

    /// Bus width.
    #[must_use]
    pub const fn bit_mode(&self) -> BitMode {
        self.bit_mode
    }

    /// Entry mode direction.
    #[must_use]
    pub const fn entry_direction(&self) -> EntryDirection {
        self.entry
    }

    /// Display shift on write, as last set by entry mode. Not acted upon.
    #[must_use]
    pub const fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::SetDdramAddress(address) => self.set_ddram_address(address),
            Command::SetCgramAddress(address) => self.set_cgram_address(address),
            Command::FunctionSet {
                bit_mode, lines, ..
            } => {
                log::debug!("function set: {bit_mode:?} bus, {} line(s)", lines.count());
                self.bit_mode = bit_mode;
                self.high_nibble_next = true;
                self.memory.set_line_count(lines.count());
            }
            Command::Shift { target, direction } => match target {
                ShiftTarget::Display => self.memory.scroll_display(direction.offset()),
                ShiftTarget::Cursor => {
                    self.address_counter = self.address_counter.wrapping_add_signed(direction.offset());
                    self.memory.scroll_cursor(direction.offset());
                }
            },
            Command::DisplayControl {
                display,
                cursor,
                blink,
            } => self.memory.set_display(display, cursor, blink),
            Command::EntryModeSet {
                direction,
                auto_scroll,
            } => {
                self.entry = direction;
                self.auto_scroll = auto_scroll;
            }
            Command::ReturnHome => {
                self.address_counter = 0;
                self.memory.cursor_home();
            }
            Command::ClearDisplay => {
                log::debug!("clear display");
                self.address_counter = 0;
                self.entry = EntryDirection::Increment;
                self.auto_scroll = false;
                self.memory.clear();
            }
        }
    }

    fn set_ddram_address(&mut self, address: u8) {
        self.address_counter = address;
        self.target = RamTarget::Ddram;
        self.data_register = self.memory.ddram(self.index());
    }

    fn set_cgram_address(&mut self, address: u8) {
        self.address_counter = address;
        self.target = RamTarget::Cgram;
    }

    fn index(&self) -> usize {
        address_to_index(self.address_counter, self.memory.is_two_line())
    }

    /// Returns the updated latch and whether the byte is complete.
    fn write_nibble(&mut self, incoming: u8, latch: u8) -> (u8, bool) {
        if self.bit_mode == BitMode::Eight {
            return (incoming, true);
        }
        let high = self.high_nibble_next;
        self.high_nibble_next = !high;
        if high {
            (incoming & 0xF0, false)
        } else {
            ((latch & 0xF0) | (incoming >> 4), true)
        }
    }

    fn read_nibble(&mut self, value: u8) -> u8 {
        if self.bit_mode == BitMode::Eight {
            return value;
        }
        let high = self.high_nibble_next;
        self.high_nibble_next = !high;
        if high {
            value & 0xF0
        } else {
            value << 4
        }
    }

    fn notify_if_dirty(&mut self) {
        if self.memory.take_dirty() {
            self.listener.notify();
        }
    }
}

impl<L> core::fmt::Debug for Controller<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("config", &self.config)
            .field("address_counter", &self.address_counter)
            .field("target", &self.target)
            .field("bit_mode", &self.bit_mode)
            .field("entry", &self.entry)
            .field("memory", &self.memory)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "defmt")]
impl<L> defmt::Format for Controller<L> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Controller address: {=u8:#x} target: {} bus: {} entry: {}",
            self.address_counter,
            self.target,
            self.bit_mode,
            self.entry
        );
    }
}

//! Register-level simulator for HD44780 character LCD controllers.
//!
//! ## How an HD44780 Character LCD Works
//!
//! The HD44780 is the controller found behind most 1 x 8 to 4 x 40
//! character modules. A host talks to it over a small parallel bus and never
//! addresses pixels: it writes *character codes* into the controller's
//! memory and the controller generates the dot patterns on the glass.
//!
//! ### Signal names
//! - **DB0-DB7** – Data bus; in 4-bit mode only DB4-DB7 are wired and every
//!   byte is transferred as two nibbles, high nibble first
//! - **RS** – Register select: instruction register (0) or data register (1)
//! - **R/W** – Read (1) or write (0)
//! - **E** – Enable strobe; a transfer happens on its falling edge
//!
//! ### Memories
//! - **DDRAM** (80 bytes) – one character code per display position. In
//!   two-line mode the first line lives at addresses `0x00..=0x27` and the
//!   second at `0x40..=0x67`.
//! - **CGRAM** (64 bytes) – eight user-defined 5 x 8 glyphs, shown for
//!   character codes `0x00..=0x07` (mirrored at `0x08..=0x0F`).
//! - **CGROM** – the fixed character generator, see [`font`].
//!
//! A single 7-bit *address counter* points into DDRAM or CGRAM, whichever
//! was selected last. Every data write stores at the address counter and
//! then moves it by one position in the direction chosen by the entry mode.
//!
//! ### Driving the glass
//! The glass is a passive matrix of segment electrodes (one per dot column)
//! and common electrodes (one per dot row). The controller multiplexes the
//! commons: at 1/16 duty it scans 16 commons, which covers two text lines of
//! 8 dot rows each, sharing one set of segment outputs. The state of every
//! segment output across all commons is modelled by
//! [`segment::SegmentFrameBuffer`].
//!
//! ## Using the simulator
//!
//! A [`controller::Controller`] owns the whole chip. Push instructions with
//! [`write_command`](controller::Controller::write_command) and characters
//! with [`write_data`](controller::Controller::write_data), then read the
//! segment words back with [`snapshot`](controller::Controller::snapshot) or
//! draw them with a [`glass::Glass`] view.
//!
//! ```rust
//! use hd44780_sim::command::{Command, BitMode, Font, LineCount};
//! use hd44780_sim::config::PanelConfig;
//! use hd44780_sim::controller::Controller;
//!
//! let mut lcd = Controller::new(PanelConfig::default()).unwrap();
//! lcd.write_command(
//!     Command::FunctionSet {
//!         bit_mode: BitMode::Eight,
//!         lines: LineCount::Two,
//!         font: Font::Dots5x8,
//!     }
//!     .encode(),
//! );
//! lcd.write_command(Command::ClearDisplay.encode());
//! for byte in b"Hello" {
//!     lcd.write_data(*byte);
//! }
//! assert_eq!(lcd.memory().ddram(0), b'H');
//! ```
//!
//! ## Available Feature Flags
//!
//! ### `defmt` Feature
//! Implements `defmt::Format` for the public types so they can be emitted
//! with the `defmt` logging framework. No functional changes.
//!
//! ### `serde` Feature
//! Derives `Serialize` and `Deserialize` for [`config::PanelConfig`] so a
//! host can read the panel geometry from a configuration file.
#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use embedded_dma::ReadBuffer;

pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod font;
pub mod glass;
pub mod memory;
pub mod segment;

/// Number of segment outputs held by the framebuffer.
pub const NR_SEGMENTS: usize = 400;

/// Number of commons a segment word can represent.
pub const NR_COMMONS: usize = 16;

/// Maximum number of glass lines one controller can be wired to.
pub const MAX_GLASS_LINES: usize = 6;

/// Size of display data RAM.
pub const DDRAM_SIZE: usize = 80;

/// Size of character generator RAM.
pub const CGRAM_SIZE: usize = 64;

/// DDRAM cells per line in two-line mode.
pub const MEMORY_PER_LINE: usize = 40;

/// Segment columns occupied by one character.
pub const GLYPH_WIDTH: usize = 5;

/// Number of commons scanned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Duty {
    /// 1/8 duty: one line of 5 x 8 characters
    Eight,
    /// 1/11 duty: one line of 5 x 10 characters plus cursor
    Eleven,
    /// 1/16 duty: two lines of 5 x 8 characters
    #[default]
    Sixteen,
}

impl Duty {
    /// Number of commons scanned.
    #[must_use]
    pub const fn commons(self) -> u8 {
        match self {
            Self::Eight => 8,
            Self::Eleven => 11,
            Self::Sixteen => 16,
        }
    }

    /// Number of dot rows available to one character line.
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Eight | Self::Sixteen => 8,
            Self::Eleven => 11,
        }
    }
}

impl TryFrom<u8> for Duty {
    type Error = error::ConfigError;

    fn try_from(commons: u8) -> Result<Self, Self::Error> {
        match commons {
            8 => Ok(Self::Eight),
            11 => Ok(Self::Eleven),
            16 => Ok(Self::Sixteen),
            other => Err(error::ConfigError::InvalidDuty(other)),
        }
    }
}

impl From<Duty> for u8 {
    fn from(duty: Duty) -> Self {
        duty.commons()
    }
}

/// Trait for read-only segment framebuffers
///
/// This is what a rendering collaborator consumes: the multiplexed segment
/// words and the duty needed to interpret them. The words can also be
/// streamed out through the [`ReadBuffer`] implementation.
pub trait FrameBuffer: ReadBuffer<Word = u16> {
    /// Returns the duty the segment words are laid out for
    fn duty(&self) -> Duty;

    /// Returns the segment words, SEG0 first
    fn segments(&self) -> &[u16; NR_SEGMENTS];
}

/// Capability notified when the glass contents change.
///
/// Injected into a [`controller::Controller`] so a host can schedule a
/// redraw without polling. `notify` is called at most once per completed
/// transfer.
pub trait RefreshListener {
    /// The segment framebuffer changed.
    fn notify(&mut self);
}

impl RefreshListener for () {
    fn notify(&mut self) {}
}

impl<T: RefreshListener + ?Sized> RefreshListener for &mut T {
    fn notify(&mut self) {
        (**self).notify();
    }
}

//! Error types for panel construction and framebuffer access.
//!
//! The controller itself never fails: out-of-range DDRAM accesses are
//! absorbed the way the chip absorbs "don't care" addresses. The only
//! fallible operations are building a panel from a geometry that cannot be
//! driven, and addressing a segment column that does not exist.

use core::fmt;

use crate::Duty;

/// Reasons a [`PanelConfig`](crate::config::PanelConfig) cannot be used to
/// build a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Glass lines, characters per line or dot-matrix size is zero
    ZeroDimension,
    /// More glass lines than a segment driver can address
    TooManyGlassLines {
        /// Requested number of glass lines
        lines: u8,
    },
    /// Dot-matrix width outside `1..=8`
    CharWidthOutOfRange {
        /// Requested dot-matrix width
        width: u8,
    },
    /// Dot-matrix height needs more commons than one half-line provides
    CharHeightExceedsDuty {
        /// Requested dot-matrix height
        height: u8,
        /// Configured controller duty
        duty: Duty,
    },
    /// The glass needs more segment columns than the framebuffer holds
    TooManySegments {
        /// Number of segment columns the geometry requires
        required: usize,
    },
    /// Duty value other than 8, 11 or 16
    InvalidDuty(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => f.write_str("panel dimensions must be non-zero"),
            Self::TooManyGlassLines { lines } => {
                write!(f, "{lines} glass lines requested, at most {} supported", crate::MAX_GLASS_LINES)
            }
            Self::CharWidthOutOfRange { width } => {
                write!(f, "dot-matrix width {width} outside 1..=8")
            }
            Self::CharHeightExceedsDuty { height, duty } => write!(
                f,
                "dot-matrix height {height} exceeds the {} rows of duty {}",
                duty.rows(),
                duty.commons()
            ),
            Self::TooManySegments { required } => write!(
                f,
                "glass needs {required} segment columns, framebuffer has {}",
                crate::NR_SEGMENTS
            ),
            Self::InvalidDuty(duty) => write!(f, "duty {duty} is not one of 8, 11 or 16"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Errors raised by [`SegmentFrameBuffer`](crate::segment::SegmentFrameBuffer)
/// stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmentError {
    /// Segment column past the end of the framebuffer
    IndexOutOfRange {
        /// Offending segment column
        column: usize,
    },
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { column } => write!(
                f,
                "segment column {column} out of range (0..{})",
                crate::NR_SEGMENTS
            ),
        }
    }
}

impl core::error::Error for SegmentError {}

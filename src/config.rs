//! Panel geometry.
//!
//! A panel is described once, when it is built, and never changes
//! afterwards. The geometry says how the controller's segment outputs are
//! wired to the glass: how many commons are multiplexed ([`Duty`]), how many
//! character lines the glass has, how many characters sit on each line and
//! how large each character's dot matrix is.
//!
//! # Example
//! ```rust
//! use hd44780_sim::config::PanelConfig;
//! use hd44780_sim::Duty;
//!
//! // A 2 x 16 module driven at 1/16 duty with 5 x 8 characters
//! let config = PanelConfig::new(Duty::Sixteen, 2, 16);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.glass_segments(), 80);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::{Duty, MAX_GLASS_LINES, NR_SEGMENTS};

/// Computes the number of segment columns a glass layout occupies.
///
/// At duty 16 two glass lines share one set of segments (one per half-line),
/// otherwise every glass line needs its own segments.
///
/// # Arguments
///
/// * `duty` - Controller duty
/// * `glass_lines` - Number of character lines on the glass
/// * `chars_per_line` - Number of characters per glass line
/// * `char_width` - Dot-matrix width of one character
#[must_use]
pub const fn compute_glass_segments(
    duty: Duty,
    glass_lines: u8,
    chars_per_line: u8,
    char_width: u8,
) -> usize {
    let groups = match duty {
        Duty::Sixteen => (glass_lines as usize).div_ceil(2),
        Duty::Eight | Duty::Eleven => glass_lines as usize,
    };
    groups * chars_per_line as usize * char_width as usize
}

/// Geometry of one simulated panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Number of commons multiplexed by the controller
    pub duty: Duty,
    /// Number of glass lines
    pub glass_lines: u8,
    /// Number of characters per glass line
    pub chars_per_line: u8,
    /// Dots across one character
    #[cfg_attr(feature = "serde", serde(default = "default_char_width"))]
    pub char_width: u8,
    /// Dots down one character
    #[cfg_attr(feature = "serde", serde(default = "default_char_height"))]
    pub char_height: u8,
}

#[cfg(feature = "serde")]
fn default_char_width() -> u8 {
    5
}

#[cfg(feature = "serde")]
fn default_char_height() -> u8 {
    8
}

impl PanelConfig {
    /// Geometry with the usual 5 x 8 character matrix.
    #[must_use]
    pub const fn new(duty: Duty, glass_lines: u8, chars_per_line: u8) -> Self {
        Self {
            duty,
            glass_lines,
            chars_per_line,
            char_width: 5,
            char_height: 8,
        }
    }

    /// Replace the character dot-matrix size.
    #[must_use]
    pub const fn with_char_size(mut self, width: u8, height: u8) -> Self {
        self.char_width = width;
        self.char_height = height;
        self
    }

    /// Number of segment columns wired to the glass.
    #[must_use]
    pub const fn glass_segments(&self) -> usize {
        compute_glass_segments(
            self.duty,
            self.glass_lines,
            self.chars_per_line,
            self.char_width,
        )
    }

    /// Check that the geometry can be driven by one controller.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.glass_lines == 0
            || self.chars_per_line == 0
            || self.char_width == 0
            || self.char_height == 0
        {
            return Err(ConfigError::ZeroDimension);
        }
        if usize::from(self.glass_lines) > MAX_GLASS_LINES {
            return Err(ConfigError::TooManyGlassLines {
                lines: self.glass_lines,
            });
        }
        if self.char_width > 8 {
            return Err(ConfigError::CharWidthOutOfRange {
                width: self.char_width,
            });
        }
        if usize::from(self.char_height) > self.duty.rows() {
            return Err(ConfigError::CharHeightExceedsDuty {
                height: self.char_height,
                duty: self.duty,
            });
        }
        let required = self.glass_segments();
        if required > NR_SEGMENTS {
            return Err(ConfigError::TooManySegments { required });
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    /// Two lines of twenty 5 x 7 characters at 1/16 duty.
    fn default() -> Self {
        Self::new(Duty::Sixteen, 2, 20).with_char_size(5, 7)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = PanelConfig::default();
        assert_eq!(config.duty, Duty::Sixteen);
        assert_eq!(config.glass_lines, 2);
        assert_eq!(config.chars_per_line, 20);
        assert_eq!(config.char_width, 5);
        assert_eq!(config.char_height, 7);
        assert_eq!(config.glass_segments(), 100);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_compute_glass_segments() {
        // Duty 16 folds two glass lines onto one segment group
        assert_eq!(compute_glass_segments(Duty::Sixteen, 2, 20, 5), 100);
        assert_eq!(compute_glass_segments(Duty::Sixteen, 4, 20, 5), 200);
        assert_eq!(compute_glass_segments(Duty::Sixteen, 1, 16, 5), 80);
        assert_eq!(compute_glass_segments(Duty::Sixteen, 3, 20, 5), 200);

        // Duty 8 and 11 need a segment group per glass line
        assert_eq!(compute_glass_segments(Duty::Eight, 1, 80, 5), 400);
        assert_eq!(compute_glass_segments(Duty::Eleven, 2, 16, 5), 160);
    }

    #[test]
    fn test_realistic_panel_configurations() {
        let configs = [
            PanelConfig::new(Duty::Eight, 1, 8),
            PanelConfig::new(Duty::Eight, 1, 40),
            PanelConfig::new(Duty::Eleven, 1, 16).with_char_size(5, 10),
            PanelConfig::new(Duty::Sixteen, 2, 16),
            PanelConfig::new(Duty::Sixteen, 2, 40),
            PanelConfig::new(Duty::Sixteen, 4, 20).with_char_size(5, 7),
        ];
        for config in configs {
            assert_eq!(config.validate(), Ok(()), "{config:?}");
            assert!(config.glass_segments() <= NR_SEGMENTS);
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let base = PanelConfig::default();
        let cases = [
            PanelConfig {
                glass_lines: 0,
                ..base
            },
            PanelConfig {
                chars_per_line: 0,
                ..base
            },
            base.with_char_size(0, 7),
            base.with_char_size(5, 0),
        ];
        for config in cases {
            assert_eq!(config.validate(), Err(ConfigError::ZeroDimension));
        }
    }

    #[test]
    fn test_too_many_glass_lines() {
        let config = PanelConfig::new(Duty::Sixteen, 7, 4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyGlassLines { lines: 7 })
        );
    }

    #[test]
    fn test_char_width_limit() {
        let config = PanelConfig::default().with_char_size(9, 7);
        assert_eq!(
            config.validate(),
            Err(ConfigError::CharWidthOutOfRange { width: 9 })
        );
    }

    #[test]
    fn test_char_height_limited_by_duty() {
        // Duty 16 splits into two 8 common halves
        let config = PanelConfig::new(Duty::Sixteen, 2, 16).with_char_size(5, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::CharHeightExceedsDuty {
                height: 10,
                duty: Duty::Sixteen
            })
        );

        // Duty 11 drives 5 x 10 characters plus the cursor line
        let config = PanelConfig::new(Duty::Eleven, 1, 16).with_char_size(5, 11);
        assert_eq!(config.validate(), Ok(()));
        let config = PanelConfig::new(Duty::Eleven, 1, 16).with_char_size(5, 12);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_too_many_segments() {
        // Exactly fills the framebuffer
        let config = PanelConfig::new(Duty::Eight, 2, 40);
        assert_eq!(config.validate(), Ok(()));

        let config = PanelConfig::new(Duty::Eight, 3, 40);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManySegments { required: 600 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_from_toml() {
        let config: PanelConfig = toml::from_str(
            r#"
            duty = 16
            glass_lines = 2
            chars_per_line = 16
            "#,
        )
        .unwrap();
        assert_eq!(config, PanelConfig::new(Duty::Sixteen, 2, 16));

        let config: PanelConfig = toml::from_str(
            r#"
            duty = 11
            glass_lines = 1
            chars_per_line = 20
            char_width = 5
            char_height = 10
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            PanelConfig::new(Duty::Eleven, 1, 20).with_char_size(5, 10)
        );

        let result: Result<PanelConfig, _> = toml::from_str(
            r#"
            duty = 12
            glass_lines = 1
            chars_per_line = 20
            "#,
        );
        assert!(result.is_err());
    }
}

//! Three-channel colors with clamped brightness arithmetic.
//!
//! Colors are plain values; reading a neighbor's color copies three bytes.
//! Two darkening models are in use: additive steps clamped at the channel
//! bounds ([`Color::brighter`] / [`Color::darker`]) and a multiplicative
//! fade ([`Color::scaled_down`]) that never quite reaches black.

use serde::{Deserialize, Serialize};

/// An RGB color with 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Color {
    /// `(0, 0, 0)`.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// `(255, 255, 255)`.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// `(128, 128, 128)`.
    pub const GRAY: Self = Self::new(128, 128, 128);
    /// `(255, 0, 0)`.
    pub const RED: Self = Self::new(255, 0, 0);
    /// `(0, 255, 0)`.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// `(0, 0, 255)`.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// `(255, 255, 0)`.
    pub const YELLOW: Self = Self::new(255, 255, 0);
    /// `(255, 175, 175)`.
    pub const PINK: Self = Self::new(255, 175, 175);
    /// `(255, 200, 0)`.
    pub const ORANGE: Self = Self::new(255, 200, 0);
    /// `(255, 0, 255)`.
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// `(0, 255, 255)`.
    pub const CYAN: Self = Self::new(0, 255, 255);

    /// Create a color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Add `step` to every channel, clamping at 255.
    pub const fn brighter(self, step: u8) -> Self {
        Self {
            red: self.red.saturating_add(step),
            green: self.green.saturating_add(step),
            blue: self.blue.saturating_add(step),
        }
    }

    /// Subtract `step` from every channel, clamping at 0.
    pub const fn darker(self, step: u8) -> Self {
        Self {
            red: self.red.saturating_sub(step),
            green: self.green.saturating_sub(step),
            blue: self.blue.saturating_sub(step),
        }
    }

    /// Fade every channel by `percent` of its current value, truncating.
    ///
    /// `percent` above 100 is treated as 100.
    pub fn scaled_down(self, percent: u8) -> Self {
        let keep = 100_u16.saturating_sub(u16::from(percent));
        Self {
            red: scale_channel(self.red, keep),
            green: scale_channel(self.green, keep),
            blue: scale_channel(self.blue, keep),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLUE
    }
}

impl core::fmt::Display for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// `channel * keep / 100`; `keep` is at most 100 so the result fits a `u8`.
fn scale_channel(channel: u8, keep: u16) -> u8 {
    let scaled = u16::from(channel).saturating_mul(keep) / 100;
    u8::try_from(scaled).unwrap_or(u8::MAX)
}

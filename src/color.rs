//! The logical pixel color.

use palette::LinSrgb;
use smart_leds::RGB8;

/// A 4-channel (R, G, B, W) color value.
///
/// Channels are raw 0–255 intensities with no intrinsic unit. Whether the
/// white channel reaches the wire is decided by the strip's
/// [`Protocol`](crate::Protocol), not by the color itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    /// Red channel intensity.
    pub red: u8,
    /// Green channel intensity.
    pub green: u8,
    /// Blue channel intensity.
    pub blue: u8,
    /// White channel intensity.
    pub white: u8,
}

impl Color {
    /// Creates a color from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, white: u8) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    /// Creates a color with the white channel off.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 0)
    }

    /// Unpacks a `red << 24 | green << 16 | blue << 8 | white` value.
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            red: (packed >> 24) as u8,
            green: (packed >> 16) as u8,
            blue: (packed >> 8) as u8,
            white: packed as u8,
        }
    }

    /// Packs the channels into a single `u32`; exact inverse of
    /// [`from_packed`](Self::from_packed).
    pub const fn to_packed(self) -> u32 {
        (self.red as u32) << 24
            | (self.green as u32) << 16
            | (self.blue as u32) << 8
            | self.white as u32
    }
}

/// Raw RGB data.
impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self::rgb(channels[0], channels[1], channels[2])
    }
}

/// Raw RGBW data.
impl From<[u8; 4]> for Color {
    fn from(channels: [u8; 4]) -> Self {
        Self::new(channels[0], channels[1], channels[2], channels[3])
    }
}

/// RGB data from the [smart_leds] ecosystem.
impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// 8-bit Linear sRGB, which is the color space
/// most NeoPixel strips are in.
///
/// Be aware that this differs from normal,
/// gamma-corrected sRGB. A conversion has to take place.
///
/// More info can be found in the documentation of the
/// [palette] crate.
impl From<LinSrgb<u8>> for Color {
    fn from(rgb: LinSrgb<u8>) -> Self {
        Self::rgb(rgb.red, rgb.green, rgb.blue)
    }
}

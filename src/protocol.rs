//! Per-protocol wire format: channel order and bit timing.

use crate::color::Color;
use crate::pulse::{Level, Pulse};

// All bundled protocols assume a 100ns tick: an 80 MHz source clock
// divided by 8.
const CLOCK_DIVIDER_100NS: u8 = 8;

// WS2812: '0' is 0.3us high + 0.9us low, '1' is 0.9us high + 0.3us low.
const WS2812_TICKS_B0_H: u16 = 3;
const WS2812_TICKS_B0_L: u16 = 9;
const WS2812_TICKS_B1_H: u16 = 9;
const WS2812_TICKS_B1_L: u16 = 3;

// SK6812: same 1.2us period, but '1' splits it 0.6us/0.6us.
const SK6812_TICKS_B0_H: u16 = 3;
const SK6812_TICKS_B0_L: u16 = 9;
const SK6812_TICKS_B1_H: u16 = 6;
const SK6812_TICKS_B1_L: u16 = 6;

/// The bit-encoding strategy of one LED protocol.
///
/// A protocol defines how many bits one pixel occupies on the wire, the
/// order in which channel bytes leave the strip, and the pulse shape of a
/// logical '0' and '1'. The first phase of either pulse is electrically
/// active and the second returns the line to idle; a '1' holds the line
/// high longer than a '0' (mark-space encoding).
///
/// Implementations are zero-sized markers, bound to a
/// [`Strip`](crate::Strip) for its entire lifetime.
pub trait Protocol {
    /// The return type of the [wire_bytes()](Protocol::wire_bytes) function.
    type WireIter: Iterator<Item = u8>;

    /// Pulses needed to transmit one pixel.
    const BITS_PER_PIXEL: usize;

    /// Source clock divisor the tick durations below assume.
    const CLOCK_DIVIDER: u8;

    /// Pulse shape of a logical '0' bit.
    const ZERO: Pulse;

    /// Pulse shape of a logical '1' bit.
    const ONE: Pulse;

    /// Returns the channel bytes of `color` in wire order.
    ///
    /// Bits within each byte are transmitted most significant first.
    fn wire_bytes(color: Color) -> Self::WireIter;
}

/// The 24-bit GRB protocol of WS2812/WS2812B strips.
///
/// The white channel is not transmitted.
pub struct Ws2812;

impl Protocol for Ws2812 {
    type WireIter = core::array::IntoIter<u8, 3>;

    const BITS_PER_PIXEL: usize = 24;
    const CLOCK_DIVIDER: u8 = CLOCK_DIVIDER_100NS;
    const ZERO: Pulse = Pulse::new(Level::High, WS2812_TICKS_B0_H, Level::Low, WS2812_TICKS_B0_L);
    const ONE: Pulse = Pulse::new(Level::High, WS2812_TICKS_B1_H, Level::Low, WS2812_TICKS_B1_L);

    fn wire_bytes(color: Color) -> Self::WireIter {
        // Neopixel strips want GRB data
        [color.green, color.red, color.blue].into_iter()
    }
}

/// The 32-bit GRBW protocol of SK6812-RGBW strips.
pub struct Sk6812Rgbw;

impl Protocol for Sk6812Rgbw {
    type WireIter = core::array::IntoIter<u8, 4>;

    const BITS_PER_PIXEL: usize = 32;
    const CLOCK_DIVIDER: u8 = CLOCK_DIVIDER_100NS;
    const ZERO: Pulse = Pulse::new(Level::High, SK6812_TICKS_B0_H, Level::Low, SK6812_TICKS_B0_L);
    const ONE: Pulse = Pulse::new(Level::High, SK6812_TICKS_B1_H, Level::Low, SK6812_TICKS_B1_L);

    fn wire_bytes(color: Color) -> Self::WireIter {
        [color.green, color.red, color.blue, color.white].into_iter()
    }
}

//! Conversion of pixel sequences into transmit-ready pulse sequences.

use crate::color::Color;
use crate::protocol::Protocol;
use crate::pulse::Pulse;

/// Exact number of pulses a frame of `pixel_count` pixels occupies under
/// protocol `P`.
pub const fn waveform_len<P: Protocol>(pixel_count: usize) -> usize {
    pixel_count * P::BITS_PER_PIXEL
}

/// Streams the pulses that encode a sequence of pixels under protocol `P`.
///
/// Pixels are consumed in order; each pixel contributes its channel bytes
/// in the protocol's wire order, and each byte its bits from most to least
/// significant. The stream yields exactly
/// [`waveform_len::<P>`](waveform_len) pulses per `pixel_count` pixels.
pub struct PulseStream<P, I>
where
    P: Protocol,
    I: Iterator,
    I::Item: Into<Color>,
{
    pixels: I,
    wire_bytes: Option<P::WireIter>,
    current_byte: u8,
    bits_left: u8,
    finished: bool,
}

impl<P, I> PulseStream<P, I>
where
    P: Protocol,
    I: Iterator,
    I::Item: Into<Color>,
{
    fn new(pixels: I) -> Self {
        Self {
            pixels,
            wire_bytes: None,
            current_byte: 0,
            bits_left: 0,
            finished: false,
        }
    }
}

impl<P, I> Iterator for PulseStream<P, I>
where
    P: Protocol,
    I: Iterator,
    I::Item: Into<Color>,
{
    type Item = Pulse;

    fn next(&mut self) -> Option<Pulse> {
        loop {
            if self.finished {
                return None;
            }

            if self.bits_left > 0 {
                self.bits_left -= 1;
                let bit = self.current_byte >> self.bits_left & 0x01;
                return Some(if bit == 0 { P::ZERO } else { P::ONE });
            }

            if self.wire_bytes.is_none() {
                self.wire_bytes = self.pixels.next().map(|p| P::wire_bytes(p.into()));
            }

            if let Some(wire_bytes) = self.wire_bytes.as_mut() {
                if let Some(byte) = wire_bytes.next() {
                    self.current_byte = byte;
                    self.bits_left = 8;
                } else {
                    self.wire_bytes = None;
                }
            } else {
                self.finished = true;
            }
        }
    }
}

/// Converts an iterator of pixels into a pulse stream, usable to fill a
/// waveform buffer.
pub trait IntoPulseStream {
    /// The pixel type.
    type Pixel: Into<Color>;
    /// The pixel iterator type.
    type PixelIter: Iterator<Item = Self::Pixel>;

    /// Converts the current object into a pulse stream encoding protocol `P`.
    fn into_pulse_stream<P: Protocol>(self) -> PulseStream<P, Self::PixelIter>;
}

impl<T> IntoPulseStream for T
where
    T: IntoIterator,
    <T as IntoIterator>::Item: Into<Color>,
{
    type Pixel = <T as IntoIterator>::Item;
    type PixelIter = <T as IntoIterator>::IntoIter;

    fn into_pulse_stream<P: Protocol>(self) -> PulseStream<P, Self::PixelIter> {
        PulseStream::new(self.into_iter())
    }
}

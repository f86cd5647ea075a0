//! The LED strip driver.

use core::marker::PhantomData;
use core::time::Duration;

use snafu::prelude::*;

use crate::color::Color;
use crate::errors::{
    ChannelSnafu, ShowError, StripInitError, TransmitSnafu, WaitIdleSnafu, WaveformCapacitySnafu,
};
use crate::protocol::Protocol;
use crate::pulse::{Level, Pulse};
use crate::pulsestream::{waveform_len, IntoPulseStream};
use crate::transmit::{ChannelConfig, PulseChannel, TransmitMode};

/// An addressable LED strip driven through an RMT-style pulse channel.
///
/// The strip owns the logical frame (one [`Color`] per pixel) and the
/// derived waveform buffer. `LEN` is the pixel count; `BUF` must equal
/// [`waveform_len::<P>(LEN)`](waveform_len), which [`init`](Self::init)
/// enforces.
///
/// One instance is meant to be driven from a single execution context;
/// [`show`](Self::show) serializes against the hardware, but not against
/// concurrent pixel mutation. Independent strips on separate channels are
/// fully independent.
///
/// ```rust,ignore
/// const LEN: usize = 48;
/// let mut strip =
///     Strip::<Ws2812, _, LEN, { waveform_len::<Ws2812>(LEN) }>::init(channel, 15, 0)?;
/// strip.set_pixel(0, Color::rgb(255, 0, 0));
/// strip.show()?;
/// ```
pub struct Strip<P, C, const LEN: usize, const BUF: usize>
where
    P: Protocol,
    C: PulseChannel,
{
    pixels: [Color; LEN],
    waveform: [Pulse; BUF],
    channel: C,
    show_timeout: Option<Duration>,
    _protocol: PhantomData<P>,
}

impl<P, C, const LEN: usize, const BUF: usize> Strip<P, C, LEN, BUF>
where
    P: Protocol,
    C: PulseChannel,
{
    /// Claims `channel` for protocol `P` on `pin` and returns the ready
    /// strip.
    ///
    /// The channel is configured for one-shot transmission with the line
    /// idling low; the idle gap between frames is what latches the strip,
    /// so no reset pulse is ever appended to the waveform.
    ///
    /// Fails if `BUF` does not hold exactly one waveform, or if the
    /// peripheral rejects the configuration. No usable strip exists in
    /// either case.
    pub fn init(mut channel: C, pin: u8, channel_id: u8) -> Result<Self, StripInitError> {
        ensure!(
            BUF == waveform_len::<P>(LEN),
            WaveformCapacitySnafu {
                expected: waveform_len::<P>(LEN),
                actual: BUF,
            }
        );

        channel
            .configure(&ChannelConfig {
                pin,
                channel: channel_id,
                clock_divider: P::CLOCK_DIVIDER,
                idle_level: Level::Low,
                idle_output: true,
                carrier_enabled: false,
                loop_enabled: false,
            })
            .context(ChannelSnafu)?;

        log::debug!(
            "Configured pulse channel {} on pin {}: divider {}, {} pixels, {} pulses per frame.",
            channel_id,
            pin,
            P::CLOCK_DIVIDER,
            LEN,
            BUF
        );

        Ok(Self {
            pixels: [Color::default(); LEN],
            waveform: [Pulse::default(); BUF],
            channel,
            show_timeout: None,
            _protocol: PhantomData,
        })
    }

    /// Number of pixels on the strip.
    pub const fn len(&self) -> usize {
        LEN
    }

    /// Whether the strip has zero pixels.
    pub const fn is_empty(&self) -> bool {
        LEN == 0
    }

    /// The current logical frame.
    pub fn pixels(&self) -> &[Color; LEN] {
        &self.pixels
    }

    /// Bounds the wait for the previous transmission inside
    /// [`show`](Self::show).
    ///
    /// `None` (the default) waits indefinitely.
    pub fn set_show_timeout(&mut self, timeout: Option<Duration>) {
        self.show_timeout = timeout;
    }

    /// Sets one pixel of the logical frame.
    ///
    /// Writes beyond the strip are silently ignored. The waveform stays
    /// untouched until the next [`show`](Self::show).
    pub fn set_pixel(&mut self, index: usize, color: impl Into<Color>) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color.into();
        }
    }

    /// Sets one pixel from raw channel values.
    ///
    /// Writes beyond the strip are silently ignored.
    pub fn set_pixel_rgbw(&mut self, index: usize, red: u8, green: u8, blue: u8, white: u8) {
        self.set_pixel(index, Color::new(red, green, blue, white));
    }

    /// Turns every pixel of the logical frame off.
    pub fn clear(&mut self) {
        self.pixels = [Color::default(); LEN];
    }

    /// Encodes the logical frame and hands it to the pulse channel.
    ///
    /// Blocks until the previous transmission on this channel has finished
    /// (bounded by [`set_show_timeout`](Self::set_show_timeout)), rewrites
    /// the full waveform buffer, then starts the new transmission without
    /// waiting for it; the hardware emits the waveform on its own.
    pub fn show(&mut self) -> Result<(), ShowError> {
        self.channel
            .wait_idle(self.show_timeout)
            .context(WaitIdleSnafu)?;

        let pulses = self.pixels.iter().copied().into_pulse_stream::<P>();
        for (slot, pulse) in self.waveform.iter_mut().zip(pulses) {
            *slot = pulse;
        }
        log::debug!("Pulses output {}.", BUF);

        self.channel
            .transmit(&self.waveform, TransmitMode::NonBlocking)
            .context(TransmitSnafu)
    }

    /// Releases the pulse channel.
    pub fn free(self) -> C {
        self.channel
    }
}

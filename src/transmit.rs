//! The consumed pulse-peripheral interface.

use core::time::Duration;

use snafu::prelude::*;

use crate::pulse::{Level, Pulse};

/// Errors reported by a [`PulseChannel`] implementation.
#[derive(Debug, Snafu, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// The peripheral rejected the requested configuration.
    Config,
    /// The hardware channel could not be claimed.
    Install,
    /// A transmission was already in flight.
    Busy,
    /// The channel did not become idle within the bounded wait.
    Timeout,
    /// The transmission could not be started.
    Transmit,
}

/// Configuration a strip requests from its pulse channel.
///
/// Field meanings follow RMT-class transmit units; implementations map
/// them onto the actual peripheral registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    /// GPIO pin the waveform leaves on.
    pub pin: u8,
    /// Hardware channel claimed for this strip.
    pub channel: u8,
    /// Source clock divisor; determines the tick length of pulse durations.
    pub clock_divider: u8,
    /// Line level while no transmission is active.
    pub idle_level: Level,
    /// Whether the channel keeps driving the line while idle.
    pub idle_output: bool,
    /// Whether the waveform is modulated onto a carrier.
    pub carrier_enabled: bool,
    /// Whether the waveform repeats after completion.
    pub loop_enabled: bool,
}

/// How [`transmit`](PulseChannel::transmit) returns relative to the
/// emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransmitMode {
    /// Hand the buffer to the hardware and return immediately.
    NonBlocking,
    /// Return only after the waveform has been fully emitted.
    Blocking,
}

/// An RMT-style transmit unit that emits a pulse train on a GPIO pin.
///
/// Implementations wrap the actual peripheral driver (an ESP32 RMT
/// channel, a PIO state machine, a simulation). A
/// [`NonBlocking`](TransmitMode::NonBlocking) transmit is a fire-and-forget
/// handoff: the hardware keeps reading the pulse buffer after the call
/// returns, so the caller must leave the buffer untouched until
/// [`wait_idle`](PulseChannel::wait_idle) succeeds.
/// [`Strip`](crate::Strip) upholds this by waiting for idleness before it
/// re-encodes.
pub trait PulseChannel {
    /// Applies the channel configuration and claims the hardware.
    fn configure(&mut self, config: &ChannelConfig) -> Result<(), ChannelError>;

    /// Blocks until the channel has no transmission in flight.
    ///
    /// `None` waits indefinitely. Expiry of a bounded wait is reported as
    /// [`ChannelError::Timeout`].
    fn wait_idle(&mut self, timeout: Option<Duration>) -> Result<(), ChannelError>;

    /// Starts emitting `pulses` on the configured pin.
    fn transmit(&mut self, pulses: &[Pulse], mode: TransmitMode) -> Result<(), ChannelError>;
}

//! Errors of the strip lifecycle.

use snafu::prelude::*;

use crate::transmit::ChannelError;

/// Errors of the [Strip::init](crate::Strip::init) function.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StripInitError {
    /// The waveform buffer does not hold exactly one encoded frame.
    #[snafu(display(
        "waveform buffer holds {actual} pulses, the protocol needs {expected}"
    ))]
    WaveformCapacity {
        /// Pulses one frame occupies: pixel count times bits per pixel.
        expected: usize,
        /// Pulses the buffer actually holds.
        actual: usize,
    },
    /// The pulse channel rejected the configuration.
    Channel {
        /// The channel's own report.
        source: ChannelError,
    },
}

/// Errors of the [Strip::show](crate::Strip::show) function.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ShowError {
    /// The previous transmission did not finish in time.
    WaitIdle {
        /// The channel's own report.
        source: ChannelError,
    },
    /// The waveform handoff to the peripheral failed.
    Transmit {
        /// The channel's own report.
        source: ChannelError,
    },
}

#![no_std]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod color;
pub mod errors;
pub mod protocol;
pub mod pulse;
pub mod pulsestream;
pub mod strip;
pub mod transmit;

pub use color::Color;
pub use protocol::{Protocol, Sk6812Rgbw, Ws2812};
pub use pulse::{Level, Pulse};
pub use strip::Strip;
pub use transmit::{ChannelConfig, ChannelError, PulseChannel, TransmitMode};

//! Drives a small WS2812 strip through a stub channel and prints what
//! would reach the hardware.

use core::time::Duration;

use ws2812_pulse::pulsestream::waveform_len;
use ws2812_pulse::{ChannelConfig, ChannelError, Pulse, PulseChannel, Strip, TransmitMode, Ws2812};

struct PrintChannel;

impl PulseChannel for PrintChannel {
    fn configure(&mut self, config: &ChannelConfig) -> Result<(), ChannelError> {
        println!(
            "configure: pin {}, channel {}, clock divider {}",
            config.pin, config.channel, config.clock_divider
        );
        Ok(())
    }

    fn wait_idle(&mut self, _timeout: Option<Duration>) -> Result<(), ChannelError> {
        Ok(())
    }

    fn transmit(&mut self, pulses: &[Pulse], _mode: TransmitMode) -> Result<(), ChannelError> {
        println!("transmit: {} pulses", pulses.len());
        for (index, pulse) in pulses.iter().enumerate().take(8) {
            println!(
                "  [{index}] {:?} for {} ticks, {:?} for {} ticks",
                pulse.level0(),
                pulse.duration0(),
                pulse.level1(),
                pulse.duration1()
            );
        }
        Ok(())
    }
}

const LEN: usize = 12;

fn main() {
    let mut strip = Strip::<Ws2812, _, LEN, { waveform_len::<Ws2812>(LEN) }>::init(
        PrintChannel,
        15,
        0,
    )
    .expect("stub channel accepts any configuration");

    strip.clear();
    strip.set_pixel_rgbw(0, 1, 1, 1, 0);
    strip.set_pixel_rgbw(1, 10, 10, 10, 0);
    strip.set_pixel_rgbw(5, 1, 0, 0, 0);
    strip.show().expect("stub channel accepts any waveform");
}

//! Abstraction of all inputs.
//!
//! Switches are sampled on every call. Encoder lines are watched through
//! GPIO interrupts, since polling them would miss transitions of a fast
//! turn. Their transitions are only decoded once sampled, so all the
//! decoding still happens on the control thread.

mod encoder;
mod switches;

use std::time::Instant as StdInstant;

use hackpad_control::{Instant, Snapshot, LEDS};
use rppal::gpio::Gpio;

pub use encoder::{Encoder, EncoderPins, Line, Lines};
pub use switches::Switches;

use super::Error;

pub struct Inputs {
    pub switches: Switches,
    pub brightness: Encoder,
    pub volume: Encoder,
    origin: StdInstant,
}

pub struct Config {
    pub switches: [u8; LEDS],
    pub brightness: EncoderPins,
    pub volume: EncoderPins,
    pub max_steps: i32,
}

impl Inputs {
    pub fn new(gpio: &Gpio, config: Config) -> Result<Self, Error> {
        Ok(Self {
            switches: Switches::new(gpio, config.switches)?,
            brightness: Encoder::new(gpio, config.brightness, config.max_steps)?,
            volume: Encoder::new(gpio, config.volume, config.max_steps)?,
            origin: StdInstant::now(),
        })
    }

    pub fn sample(&mut self) -> Snapshot {
        Snapshot {
            timestamp: self.timestamp(),
            switch: self.switches.sample(),
            brightness_steps: self.brightness.sample(),
            volume_steps: self.volume.sample(),
        }
    }

    fn timestamp(&self) -> Instant {
        let millis = u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX);
        Instant::from_ticks(millis)
    }
}

use hackpad_control::LEDS;
use rppal::gpio::{Gpio, InputPin};

use crate::system::Error;

pub struct Switches {
    pins: Vec<InputPin>,
}

impl Switches {
    pub fn new(gpio: &Gpio, lines: [u8; LEDS]) -> Result<Self, Error> {
        let mut pins = Vec::with_capacity(LEDS);
        for line in lines {
            pins.push(gpio.get(line)?.into_input_pullup());
        }
        Ok(Self { pins })
    }

    /// Raw level of each switch, true when pressed.
    ///
    /// Switches pull their line low when pressed.
    pub fn sample(&self) -> [bool; LEDS] {
        core::array::from_fn(|i| self.pins[i].is_low())
    }
}

mod audio;
mod error;
pub mod inputs;
mod leds;

pub use audio::{volume_argument, Amixer};
pub use error::Error;
pub use leds::Strip;

use hackpad_control::{Config, LEDS};
use rppal::gpio::Gpio;
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use ws2812_spi::Ws2812;

use inputs::{Config as InputsConfig, EncoderPins, Inputs};

// Pin assignments, BCM numbering.
// Switches 1-9  - GPIO 5, 6, 13, 19, 26, 12, 16, 20, 21  pull-up, active low
// Brightness    - GPIO 17 (A), 27 (B)                    pull-up, active low
// Volume        - GPIO 22 (A), 23 (B)                    pull-up, active low
// LED strip     - SPI0 MOSI, GPIO 10

pub const SWITCH_PINS: [u8; LEDS] = [5, 6, 13, 19, 26, 12, 16, 20, 21];
pub const BRIGHTNESS_ENCODER_PINS: EncoderPins = EncoderPins { a: 17, b: 27 };
pub const VOLUME_ENCODER_PINS: EncoderPins = EncoderPins { a: 22, b: 23 };

// WS2812 over SPI needs the clock between 2 and 3.8 MHz.
const STRIP_SPI_CLOCK_HZ: u32 = 3_000_000;

pub const MIXER_CONTROL: &str = "Master";

pub type SpiStrip = Strip<Ws2812<Spi>>;

pub struct System {
    pub inputs: Inputs,
    pub strip: SpiStrip,
    /// `None` when audio control was not available during start.
    pub audio: Option<Amixer>,
}

impl System {
    /// Initialize system abstraction.
    ///
    /// Failing to claim GPIO lines or the SPI bus is fatal. Failing to reach
    /// the mixer only disables volume control.
    pub fn init(config: &Config) -> Result<Self, Error> {
        let gpio = Gpio::new()?;

        let inputs = Inputs::new(
            &gpio,
            InputsConfig {
                switches: SWITCH_PINS,
                brightness: BRIGHTNESS_ENCODER_PINS,
                volume: VOLUME_ENCODER_PINS,
                max_steps: config.max_steps,
            },
        )?;

        let spi = Spi::new(Bus::Spi0, SlaveSelect::Ss0, STRIP_SPI_CLOCK_HZ, Mode::Mode0)?;
        let strip = Strip::new(Ws2812::new(spi), config.brightness.initial);

        let audio = match Amixer::open(MIXER_CONTROL) {
            Ok(amixer) => {
                tracing::info!("Audio control initialized");
                Some(amixer)
            }
            Err(err) => {
                tracing::warn!("Audio control not available: {err}");
                None
            }
        };

        Ok(Self {
            inputs,
            strip,
            audio,
        })
    }
}

use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access GPIO")]
    Gpio(#[from] rppal::gpio::Error),
    #[error("failed to open SPI bus of the LED strip")]
    Spi(#[from] rppal::spi::Error),
    #[error("failed to run amixer")]
    AmixerSpawn(#[from] std::io::Error),
    #[error("amixer exited with {0}")]
    AmixerStatus(ExitStatus),
}

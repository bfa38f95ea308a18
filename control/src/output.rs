//! Boundary to the output peripherals.

use core::fmt::Debug;

use smart_leds_trait::RGB8;

/// Addressable LED strip with a buffered frame.
///
/// Pixels and brightness are only staged by the setters. Nothing reaches the
/// hardware until `commit` is called.
pub trait LedStrip {
    type Error: Debug;

    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Global brightness scalar within `0.0..=1.0`.
    fn set_brightness(&mut self, brightness: f32);

    fn commit(&mut self) -> Result<(), Self::Error>;
}

/// Master volume of the host audio system.
pub trait VolumeSink {
    type Error: Debug;

    /// Volume scalar within `0.0..=1.0`.
    fn set_master_volume_scalar(&mut self, volume: f32) -> Result<(), Self::Error>;
}

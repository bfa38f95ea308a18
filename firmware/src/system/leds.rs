use core::fmt::Debug;

use hackpad_control::{LedStrip, BLACK, LEDS, RGB8};
use smart_leds::SmartLedsWrite;

/// Frame buffer in front of an addressable LED driver.
///
/// The whole frame is written out on every commit, scaled by the global
/// brightness. Pixel order on the wire is handled by the driver.
pub struct Strip<W> {
    writer: W,
    frame: [RGB8; LEDS],
    brightness: f32,
}

impl<W> Strip<W> {
    pub fn new(writer: W, brightness: f32) -> Self {
        Self {
            writer,
            frame: [BLACK; LEDS],
            brightness: brightness.clamp(0.0, 1.0),
        }
    }

    pub fn frame(&self) -> &[RGB8; LEDS] {
        &self.frame
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    fn brightness_level(&self) -> u8 {
        (self.brightness * 255.0).round() as u8
    }
}

impl<W> LedStrip for Strip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: Debug,
{
    type Error = W::Error;

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness.clamp(0.0, 1.0);
    }

    fn commit(&mut self) -> Result<(), Self::Error> {
        let level = self.brightness_level();
        self.writer
            .write(smart_leds::brightness(self.frame.iter().copied(), level))
    }
}

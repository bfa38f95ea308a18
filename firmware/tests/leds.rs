use std::convert::Infallible;

use hackpad_control::{LedStrip, BLACK, LEDS, PALETTE, RGB8};
use hackpad_firmware::system::Strip;
use smart_leds::SmartLedsWrite;

#[derive(Default)]
struct Recorder {
    frames: Vec<Vec<RGB8>>,
}

impl SmartLedsWrite for Recorder {
    type Error = Infallible;
    type Color = RGB8;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        self.frames.push(iterator.into_iter().map(Into::into).collect());
        Ok(())
    }
}

#[test]
fn pixels_reach_the_driver_only_on_commit() {
    let mut strip = Strip::new(Recorder::default(), 1.0);
    strip.set_pixel(0, PALETTE[0]);
    strip.set_pixel(4, PALETTE[4]);
    assert!(strip.writer().frames.is_empty());

    strip.commit().unwrap();

    let frames = &strip.writer().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].len(), LEDS);
    assert_eq!(frames[0][0], PALETTE[0]);
    assert_eq!(frames[0][4], PALETTE[4]);
    assert_eq!(frames[0][1], BLACK);
}

#[test]
fn whole_frame_is_scaled_by_brightness() {
    let mut strip = Strip::new(Recorder::default(), 1.0);
    strip.set_pixel(0, RGB8 { r: 255, g: 0, b: 0 });
    strip.set_brightness(0.5);
    strip.commit().unwrap();
    assert_eq!(strip.writer().frames[0][0], RGB8 { r: 128, g: 0, b: 0 });

    strip.set_brightness(0.0);
    strip.commit().unwrap();
    assert_eq!(strip.writer().frames[1][0], BLACK);
}

#[test]
fn brightness_outside_of_range_is_clamped() {
    let mut strip = Strip::new(Recorder::default(), 0.5);
    strip.set_pixel(8, RGB8 { r: 255, g: 255, b: 255 });
    strip.set_brightness(3.0);
    strip.commit().unwrap();
    assert_eq!(strip.writer().frames[0][8], RGB8 { r: 255, g: 255, b: 255 });
}

#[test]
fn pixel_outside_of_strip_is_ignored() {
    let mut strip = Strip::new(Recorder::default(), 1.0);
    strip.set_pixel(LEDS, PALETTE[0]);
    strip.commit().unwrap();
    assert_eq!(strip.frame(), &[BLACK; LEDS]);
}

//! On/off state of the switch LEDs.

use smart_leds_trait::RGB8;

use crate::config::{Palette, LEDS};

pub const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// State machine of all LEDs.
///
/// Each LED is either off, rendered black, or on, rendered in the color
/// assigned to it by the palette. No other color is reachable.
#[derive(Debug, Clone, Copy)]
pub struct Leds {
    on: [bool; LEDS],
    palette: Palette,
}

impl Leds {
    pub fn new(palette: Palette) -> Self {
        Self {
            on: [false; LEDS],
            palette,
        }
    }

    /// Flip the LED and return the color it should now be rendered with.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`LEDS`].
    pub fn toggle(&mut self, index: usize) -> RGB8 {
        self.on[index] = !self.on[index];
        self.rendered(index)
    }

    pub fn is_on(&self, index: usize) -> bool {
        self.on[index]
    }

    pub fn rendered(&self, index: usize) -> RGB8 {
        if self.on[index] {
            self.palette[index]
        } else {
            BLACK
        }
    }

    pub fn turn_all_off(&mut self) {
        self.on = [false; LEDS];
    }
}

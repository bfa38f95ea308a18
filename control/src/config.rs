//! Compiled-in configuration of the surface.

use fugit::ExtU64;
use smart_leds_trait::RGB8;

use crate::input::Duration;
use crate::parameter::{BrightnessConfig, VolumeConfig};

/// Number of switches and LEDs. Switch `i` toggles LED `i`.
pub const LEDS: usize = 9;

pub type Palette = [RGB8; LEDS];

/// Color assigned to each LED, lit when its switch turns it on.
pub const PALETTE: Palette = [
    RGB8 { r: 255, g: 0, b: 0 },     // red
    RGB8 { r: 0, g: 255, b: 0 },     // green
    RGB8 { r: 0, g: 0, b: 255 },     // blue
    RGB8 { r: 255, g: 255, b: 0 },   // yellow
    RGB8 { r: 0, g: 255, b: 255 },   // cyan
    RGB8 { r: 255, g: 0, b: 255 },   // magenta
    RGB8 { r: 255, g: 165, b: 0 },   // orange
    RGB8 { r: 128, g: 0, b: 128 },   // purple
    RGB8 { r: 255, g: 255, b: 255 }, // white
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Minimum time between two accepted transitions of a switch.
    pub debounce: Duration,
    /// Both encoders saturate at `-max_steps..=max_steps`.
    pub max_steps: i32,
    pub brightness: BrightnessConfig,
    pub volume: VolumeConfig,
    pub palette: Palette,
    /// Pause between two iterations of the control loop.
    pub idle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce: 50.millis(),
            max_steps: 100,
            brightness: BrightnessConfig::default(),
            volume: VolumeConfig::default(),
            palette: PALETTE,
            idle: 10.millis(),
        }
    }
}

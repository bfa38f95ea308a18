//! Structures used to pass the current state of hardware peripherals.

use super::Instant;
use crate::config::LEDS;

/// The current state of all peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the control
/// package. It should pass pretty raw data, with one exception: quadrature
/// decoding is done by the caller, since it needs to see every transition
/// and not just the state at the time of sampling. The caller should use
/// [`QuadratureEncoder`](super::QuadratureEncoder) for it.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    pub timestamp: Instant,
    /// Raw level of each switch, true when pressed.
    pub switch: [bool; LEDS],
    pub brightness_steps: i32,
    pub volume_steps: i32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            timestamp: Instant::from_ticks(0),
            switch: [false; LEDS],
            brightness_steps: 0,
            volume_steps: 0,
        }
    }
}

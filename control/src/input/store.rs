//! Process all input peripherals over time.

use super::debounced::{Debounced, Edge};
use super::snapshot::Snapshot;
use super::Duration;
use crate::config::LEDS;

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into switch edges and encoder deltas.
///
/// Note that despite all its attributes are public, they should be only read
/// from.
#[derive(Debug)]
pub struct Store {
    pub switch: [Debounced; LEDS],
    pub brightness: StepTracker,
    pub volume: StepTracker,
}

/// What changed between two consecutive snapshots.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Changes {
    pub switch: [Option<Edge>; LEDS],
    pub brightness_delta: i32,
    pub volume_delta: i32,
}

/// Encoder position seen on the previous sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepTracker {
    pub previous: i32,
}

impl StepTracker {
    /// Distance traveled since the previous call. The baseline moves even
    /// when the position did not change.
    pub fn delta(&mut self, current: i32) -> i32 {
        let delta = current - self.previous;
        self.previous = current;
        delta
    }
}

impl Store {
    pub fn new(debounce: Duration) -> Self {
        Self {
            switch: [Debounced::new(debounce); LEDS],
            brightness: StepTracker::default(),
            volume: StepTracker::default(),
        }
    }

    /// Take the snapshot as a baseline, without reporting any changes.
    pub fn prime(&mut self, snapshot: &Snapshot) {
        for (switch, pressed) in self.switch.iter_mut().zip(snapshot.switch) {
            switch.prime(pressed, snapshot.timestamp);
        }
        self.brightness.previous = snapshot.brightness_steps;
        self.volume.previous = snapshot.volume_steps;
    }

    pub fn update(&mut self, snapshot: &Snapshot) -> Changes {
        let mut changes = Changes::default();
        for (i, switch) in self.switch.iter_mut().enumerate() {
            changes.switch[i] = switch.update(snapshot.switch[i], snapshot.timestamp);
        }
        changes.brightness_delta = self.brightness.delta(snapshot.brightness_steps);
        changes.volume_delta = self.volume.delta(snapshot.volume_steps);
        changes
    }
}

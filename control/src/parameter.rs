//! Integrators turning encoder steps into bounded parameters.
//!
//! Each parameter only reports a new value when it moved by more than its
//! threshold. Changes below it are dropped completely, so the hardware and
//! the OS are not flooded with imperceptible writes.

#[allow(unused_imports)]
use micromath::F32Ext;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessConfig {
    pub initial: f32,
    /// Change of brightness per encoder step.
    pub sensitivity: f32,
    pub threshold: f32,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            initial: 0.5,
            sensitivity: 0.02,
            threshold: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeConfig {
    pub initial: u8,
    /// Change of volume percent per encoder step.
    pub sensitivity: i32,
    pub threshold: u8,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            initial: 50,
            sensitivity: 2,
            threshold: 1,
        }
    }
}

pub const MAX_VOLUME: u8 = 100;

/// Global brightness of the strip, always within `0.0..=1.0`.
#[derive(Debug, Clone, Copy)]
pub struct Brightness {
    value: f32,
    config: BrightnessConfig,
}

impl Brightness {
    pub fn new(config: BrightnessConfig) -> Self {
        Self {
            value: config.initial.clamp(0.0, 1.0),
            config,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value in percent, as shown to the user. Rounded to the nearest
    /// percent rather than truncated, so 0.58 shows as 58 and not 57.
    pub fn percent(&self) -> u8 {
        (self.value * 100.0).round() as u8
    }

    /// Returns the new value if it moved past the threshold.
    pub fn apply_delta(&mut self, steps: i32) -> Option<f32> {
        let new = (self.value + steps as f32 * self.config.sensitivity).clamp(0.0, 1.0);
        if (new - self.value).abs() > self.config.threshold {
            self.value = new;
            Some(new)
        } else {
            None
        }
    }
}

/// System volume in percent, always within `0..=100`.
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    value: u8,
    config: VolumeConfig,
}

impl Volume {
    pub fn new(config: VolumeConfig) -> Self {
        Self {
            value: config.initial.min(MAX_VOLUME),
            config,
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Volume as expected by the host mixer.
    pub fn scalar(&self) -> f32 {
        f32::from(self.value) / 100.0
    }

    /// Returns the new value if it moved past the threshold.
    pub fn apply_delta(&mut self, steps: i32) -> Option<u8> {
        let new = steps
            .saturating_mul(self.config.sensitivity)
            .saturating_add(i32::from(self.value))
            .clamp(0, i32::from(MAX_VOLUME)) as u8;
        if new.abs_diff(self.value) > self.config.threshold {
            self.value = new;
            Some(new)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn when_brightness_moves_five_steps_up_it_reports_new_value() {
        let mut brightness = Brightness::new(BrightnessConfig::default());
        let new = brightness.apply_delta(5).unwrap();
        assert_relative_eq!(new, 0.6, epsilon = 1e-6);
        assert_relative_eq!(brightness.value(), 0.6, epsilon = 1e-6);
        assert_eq!(brightness.percent(), 60);
    }

    #[test]
    fn when_brightness_percent_is_shown_it_is_rounded_not_truncated() {
        let mut brightness = Brightness::new(BrightnessConfig::default());
        brightness.apply_delta(4).unwrap();
        assert_eq!(brightness.percent(), 58);
    }

    #[test]
    fn when_brightness_is_at_bound_further_steps_are_dropped() {
        let mut brightness = Brightness::new(BrightnessConfig::default());
        assert!(brightness.apply_delta(1000).is_some());
        assert_relative_eq!(brightness.value(), 1.0);
        assert_eq!(brightness.apply_delta(1), None);
        assert_relative_eq!(brightness.value(), 1.0);

        assert!(brightness.apply_delta(-1000).is_some());
        assert_relative_eq!(brightness.value(), 0.0);
        assert_eq!(brightness.apply_delta(-3), None);
    }

    #[test]
    fn when_brightness_change_is_below_threshold_it_is_not_applied() {
        let mut brightness = Brightness::new(BrightnessConfig {
            initial: 0.5,
            sensitivity: 0.005,
            threshold: 0.01,
        });
        assert_eq!(brightness.apply_delta(1), None);
        assert_eq!(brightness.apply_delta(-1), None);
        assert_relative_eq!(brightness.value(), 0.5);
        assert!(brightness.apply_delta(3).is_some());
    }

    #[test]
    fn when_volume_moves_it_scales_by_two_per_step() {
        let mut volume = Volume::new(VolumeConfig::default());
        assert_eq!(volume.apply_delta(3), Some(56));
        assert_eq!(volume.apply_delta(-10), Some(36));
        assert_relative_eq!(volume.scalar(), 0.36);
    }

    #[test]
    fn when_volume_is_at_bound_further_steps_are_dropped() {
        let mut volume = Volume::new(VolumeConfig::default());
        assert_eq!(volume.apply_delta(i32::MAX), Some(100));
        assert_eq!(volume.apply_delta(1), None);
        assert_eq!(volume.apply_delta(i32::MIN), Some(0));
        assert_eq!(volume.apply_delta(-1), None);
        assert_eq!(volume.value(), 0);
    }

    #[test]
    fn when_volume_change_is_within_threshold_it_is_not_applied() {
        let mut volume = Volume::new(VolumeConfig {
            initial: 99,
            ..VolumeConfig::default()
        });
        assert_eq!(volume.apply_delta(1), None);
        assert_eq!(volume.value(), 99);
        assert_eq!(volume.apply_delta(0), None);
    }

    proptest! {
        #[test]
        fn brightness_stays_within_bounds(deltas in prop::collection::vec(-200i32..200, 0..64)) {
            let mut brightness = Brightness::new(BrightnessConfig::default());
            for delta in deltas {
                let before = brightness.value();
                match brightness.apply_delta(delta) {
                    Some(new) => prop_assert!((new - before).abs() > 0.01),
                    None => prop_assert_eq!(brightness.value(), before),
                }
                prop_assert!((0.0..=1.0).contains(&brightness.value()));
            }
        }

        #[test]
        fn volume_stays_within_bounds(deltas in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut volume = Volume::new(VolumeConfig::default());
            for delta in deltas {
                let before = volume.value();
                match volume.apply_delta(delta) {
                    Some(new) => prop_assert!(new.abs_diff(before) > 1),
                    None => prop_assert_eq!(volume.value(), before),
                }
                prop_assert!(volume.value() <= 100);
            }
        }
    }
}

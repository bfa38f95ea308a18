//! The central piece tying inputs to reactions.

use crate::config::{Config, LEDS};
use crate::input::{Changes, Edge, Snapshot, Store};
use crate::led::{Leds, BLACK};
use crate::log;
use crate::output::{LedStrip, VolumeSink};
use crate::parameter::{Brightness, Volume};

/// Owner of all the surface state.
///
/// It takes [`Snapshot`] on its input, passes it through the input store to
/// detect edges and encoder movement, and reacts on those by toggling LEDs
/// and moving brightness and volume. Output peripherals are borrowed for
/// each call only.
///
/// The audio sink is passed as an `Option`. `None` means audio control was
/// not available when the system started, and volume changes are only
/// tracked and logged.
#[derive(Debug)]
pub struct Controller {
    store: Store,
    leds: Leds,
    brightness: Brightness,
    volume: Volume,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        Self {
            store: Store::new(config.debounce),
            leds: Leds::new(config.palette),
            brightness: Brightness::new(config.brightness),
            volume: Volume::new(config.volume),
        }
    }

    pub fn leds(&self) -> &Leds {
        &self.leds
    }

    pub fn brightness(&self) -> f32 {
        self.brightness.value()
    }

    pub fn volume(&self) -> u8 {
        self.volume.value()
    }

    /// Blank the strip, take the first snapshot as the input baseline and
    /// send the initial volume to the host.
    pub fn start<S, A>(
        &mut self,
        snapshot: &Snapshot,
        strip: &mut S,
        audio: Option<&mut A>,
    ) -> Result<(), S::Error>
    where
        S: LedStrip,
        A: VolumeSink,
    {
        self.leds.turn_all_off();
        for i in 0..LEDS {
            strip.set_pixel(i, BLACK);
        }
        strip.set_brightness(self.brightness.value());
        strip.commit()?;

        self.store.prime(snapshot);

        if let Some(audio) = audio {
            push_volume(audio, self.volume.scalar());
        }

        Ok(())
    }

    /// Process one sample of the inputs.
    ///
    /// Switches are handled first, in order of their index, followed by the
    /// brightness and volume encoders. Every change is committed right
    /// away.
    pub fn tick<S, A>(
        &mut self,
        snapshot: &Snapshot,
        strip: &mut S,
        audio: Option<&mut A>,
    ) -> Result<(), S::Error>
    where
        S: LedStrip,
        A: VolumeSink,
    {
        let changes = self.store.update(snapshot);
        self.react(&changes, strip, audio)
    }

    /// Turn all LEDs off and commit it. The controller should not be ticked
    /// after this.
    pub fn shutdown<S: LedStrip>(&mut self, strip: &mut S) -> Result<(), S::Error> {
        self.leds.turn_all_off();
        for i in 0..LEDS {
            strip.set_pixel(i, BLACK);
        }
        strip.commit()
    }

    fn react<S, A>(
        &mut self,
        changes: &Changes,
        strip: &mut S,
        audio: Option<&mut A>,
    ) -> Result<(), S::Error>
    where
        S: LedStrip,
        A: VolumeSink,
    {
        for (i, edge) in changes.switch.iter().enumerate() {
            match edge {
                Some(Edge::Pressed) => self.toggle_led(i, strip)?,
                Some(Edge::Released) => {
                    log::debug!("Switch {} released", i + 1);
                }
                None => (),
            }
        }

        if changes.brightness_delta != 0 {
            self.apply_brightness_delta(changes.brightness_delta, strip)?;
        }

        if changes.volume_delta != 0 {
            self.apply_volume_delta(changes.volume_delta, audio);
        }

        Ok(())
    }

    fn toggle_led<S: LedStrip>(&mut self, index: usize, strip: &mut S) -> Result<(), S::Error> {
        let color = self.leds.toggle(index);
        strip.set_pixel(index, color);

        if self.leds.is_on(index) {
            log::info!(
                "LED {} ON - Color: ({}, {}, {})",
                index + 1,
                color.r,
                color.g,
                color.b
            );
        } else {
            log::info!("LED {} OFF", index + 1);
        }

        strip.commit()
    }

    fn apply_brightness_delta<S: LedStrip>(
        &mut self,
        steps: i32,
        strip: &mut S,
    ) -> Result<(), S::Error> {
        if let Some(brightness) = self.brightness.apply_delta(steps) {
            strip.set_brightness(brightness);
            strip.commit()?;
            log::info!("Brightness: {}%", self.brightness.percent());
        }
        Ok(())
    }

    #[allow(unused_variables)]
    fn apply_volume_delta<A: VolumeSink>(&mut self, steps: i32, audio: Option<&mut A>) {
        if let Some(volume) = self.volume.apply_delta(steps) {
            if let Some(audio) = audio {
                push_volume(audio, self.volume.scalar());
            }
            log::info!("Volume: {}%", volume);
        }
    }
}

#[allow(unused_variables)]
fn push_volume<A: VolumeSink>(audio: &mut A, scalar: f32) {
    if let Err(err) = audio.set_master_volume_scalar(scalar) {
        log::warning!("Error setting volume: {:?}", err);
    }
}

use std::process::{Command, Stdio};

use hackpad_control::VolumeSink;

use super::Error;

/// System volume set through the `amixer` utility of alsa-utils.
///
/// Volumes are passed with `-M`, mapping the percentage onto the perceived
/// loudness curve instead of the raw register range.
#[derive(Debug)]
pub struct Amixer {
    control: &'static str,
}

impl Amixer {
    /// Probe that the mixer control exists.
    pub fn open(control: &'static str) -> Result<Self, Error> {
        run(&["sget", control])?;
        Ok(Self { control })
    }
}

impl VolumeSink for Amixer {
    type Error = Error;

    fn set_master_volume_scalar(&mut self, volume: f32) -> Result<(), Self::Error> {
        run(&["-M", "sset", self.control, &volume_argument(volume)])
    }
}

/// Format a volume scalar the way `amixer sset` expects it.
pub fn volume_argument(volume: f32) -> String {
    format!("{}%", (volume.clamp(0.0, 1.0) * 100.0).round() as u8)
}

fn run(args: &[&str]) -> Result<(), Error> {
    let status = Command::new("amixer")
        .arg("-q")
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::AmixerStatus(status))
    }
}

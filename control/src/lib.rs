//! Control logic of the Hackpad, a surface of nine lit switches and two
//! rotary encoders.
//!
//! This crate knows nothing about pins or the host operating system. The
//! hardware binding samples raw levels into an input [`Snapshot`], the
//! [`Controller`] turns it into LED and volume reactions, and those are
//! applied through the [`LedStrip`] and [`VolumeSink`] traits.
//!
//! ```text
//!     [ Switches ]   [ Encoders ]
//!           |             |
//!           +---(Snapshot)+
//!                  |
//!                  V
//!       [ Controller {Store, Leds, Brightness, Volume} ]
//!            |                         |
//!    (pixels, brightness)         (volume scalar)
//!            V                         V
//!       [ LedStrip ]              [ VolumeSink ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

mod config;
mod controller;
pub mod input;
mod led;
mod log;
pub mod output;
pub mod parameter;

pub use config::{Config, Palette, LEDS, PALETTE};
pub use controller::Controller;
pub use input::{Duration, Edge, Instant, Snapshot};
pub use led::{Leds, BLACK};
pub use output::{LedStrip, VolumeSink};
pub use smart_leds_trait::RGB8;

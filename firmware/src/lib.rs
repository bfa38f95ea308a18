//! Binding of the Hackpad control logic to a Raspberry Pi.
//!
//! Switches and encoders are read through the GPIO character device, the
//! SK6812 strip is driven over SPI and the system volume is set through the
//! ALSA mixer.

pub mod system;

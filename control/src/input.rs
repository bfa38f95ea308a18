//! Turning raw samples of switches and encoders into edges and deltas.

mod debounced;
mod encoder;
mod snapshot;
mod store;

pub use debounced::{Debounced, Edge};
pub use encoder::QuadratureEncoder;
pub use snapshot::Snapshot;
pub use store::{Changes, StepTracker, Store};

/// Millisecond timestamp of a sample, counted from an arbitrary origin.
pub type Instant = fugit::TimerInstantU64<1000>;

pub type Duration = fugit::MillisDurationU64;

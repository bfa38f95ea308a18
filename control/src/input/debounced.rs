//! Manage switch's state.

use super::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Pressed,
    Released,
}

/// Use this to hold a switch's debounced level over time.
///
/// A change of the raw level is accepted only once `bounce_time` passed
/// since the previously accepted one. Changes arriving sooner are ignored,
/// if the level still differs on a later sample, it gets accepted then.
#[derive(Debug, Clone, Copy)]
pub struct Debounced {
    bounce_time: Duration,
    pub pressed: bool,
    last_transition: Option<Instant>,
}

impl Debounced {
    pub fn new(bounce_time: Duration) -> Self {
        Self {
            bounce_time,
            pressed: false,
            last_transition: None,
        }
    }

    /// Adopt the current level without reporting an edge.
    pub fn prime(&mut self, pressed: bool, now: Instant) {
        self.pressed = pressed;
        self.last_transition = Some(now);
    }

    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<Edge> {
        if pressed == self.pressed {
            return None;
        }

        if let Some(last) = self.last_transition {
            let settled = now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= self.bounce_time);
            if !settled {
                return None;
            }
        }

        self.pressed = pressed;
        self.last_transition = Some(now);

        Some(if pressed { Edge::Pressed } else { Edge::Released })
    }
}

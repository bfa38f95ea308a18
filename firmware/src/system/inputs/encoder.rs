use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};

use hackpad_control::input::QuadratureEncoder;
use rppal::gpio::{Event, Gpio, InputPin, Trigger};

use crate::system::Error;

// Edges waiting for the control thread. A fast turn produces about a
// hundred per second, the control loop drains them every 10 ms.
const QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy)]
pub struct EncoderPins {
    pub a: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    A,
    B,
}

/// Levels of both encoder lines, true meaning active.
///
/// Each interrupt reports only its own line. Levels are composed here, on
/// the receiving side, so the pairs seen by the decoder follow the order
/// in which edges were queued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lines {
    pub a: bool,
    pub b: bool,
}

impl Lines {
    pub fn apply(&mut self, line: Line, active: bool) {
        match line {
            Line::A => self.a = active,
            Line::B => self.b = active,
        }
    }
}

pub struct Encoder {
    // Interrupt callbacks stay registered only while the pins are alive.
    _a: InputPin,
    _b: InputPin,
    edges: Receiver<(Line, bool)>,
    lines: Lines,
    decoder: QuadratureEncoder,
}

impl Encoder {
    pub fn new(gpio: &Gpio, pins: EncoderPins, max_steps: i32) -> Result<Self, Error> {
        let mut a = gpio.get(pins.a)?.into_input_pullup();
        let mut b = gpio.get(pins.b)?.into_input_pullup();

        let lines = Lines {
            a: a.is_low(),
            b: b.is_low(),
        };
        let (sender, edges) = mpsc::sync_channel(QUEUE_CAPACITY);
        watch(&mut a, Line::A, sender.clone())?;
        watch(&mut b, Line::B, sender)?;

        Ok(Self {
            _a: a,
            _b: b,
            edges,
            lines,
            decoder: QuadratureEncoder::new(max_steps),
        })
    }

    /// Decode all edges seen since the last call and return the absolute
    /// position.
    pub fn sample(&mut self) -> i32 {
        for (line, active) in self.edges.try_iter() {
            self.lines.apply(line, active);
            self.decoder.update(self.lines.a, self.lines.b);
        }
        self.decoder.current_steps()
    }
}

fn watch(pin: &mut InputPin, line: Line, sender: SyncSender<(Line, bool)>) -> Result<(), Error> {
    pin.set_async_interrupt(Trigger::Both, None, move |event: Event| {
        // Lines are pulled up, the falling edge makes them active.
        let active = matches!(event.trigger, Trigger::FallingEdge);
        if let Err(TrySendError::Full(_)) = sender.try_send((line, active)) {
            tracing::debug!("Encoder queue is full, dropping edge");
        }
    })?;
    Ok(())
}

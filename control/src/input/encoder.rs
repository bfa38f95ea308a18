//! Decoding of a two-line rotary encoder.

// Line levels are packed as `a << 1 | b`, true meaning the line is active.
const IDLE: u8 = 0b00;

// Change of phase for each (previous, current) pair of packed levels. Pairs
// where both lines flipped at once cannot be attributed to a direction.
#[rustfmt::skip]
const TRANSITION: [[i8; 4]; 4] = [
    //  00  01  10  11
    [    0, -1,  1,  0], // from 00
    [    1,  0,  0, -1], // from 01
    [   -1,  0,  0,  1], // from 10
    [    0,  1, -1,  0], // from 11
];

// Valid transitions forming one detent.
const PHASES_PER_STEP: i8 = 4;

/// Absolute position of a quadrature encoder.
///
/// The position changes by one once the lines travel a full cycle
/// `00 -> 10 -> 11 -> 01 -> 00` (up) or its reverse (down) and return to
/// idle. Bounces and half-turns rocking back are dropped. The counter
/// saturates at `-max_steps..=max_steps`.
#[derive(Debug, Clone, Copy)]
pub struct QuadratureEncoder {
    steps: i32,
    max_steps: i32,
    levels: u8,
    phase: i8,
}

impl QuadratureEncoder {
    pub fn new(max_steps: i32) -> Self {
        Self {
            steps: 0,
            max_steps: max_steps.abs(),
            levels: IDLE,
            phase: 0,
        }
    }

    pub fn update(&mut self, a: bool, b: bool) {
        let levels = (u8::from(a) << 1) | u8::from(b);
        if levels ^ self.levels == 0b11 {
            // Lost track of the cycle, wait for the next idle.
            self.phase = 0;
        } else {
            self.phase += TRANSITION[self.levels as usize][levels as usize];
        }
        self.levels = levels;

        if levels != IDLE {
            return;
        }

        if self.phase == PHASES_PER_STEP {
            self.step(1);
        } else if self.phase == -PHASES_PER_STEP {
            self.step(-1);
        }
        self.phase = 0;
    }

    pub fn current_steps(&self) -> i32 {
        self.steps
    }

    fn step(&mut self, direction: i32) {
        self.steps = (self.steps + direction).clamp(-self.max_steps, self.max_steps);
    }
}

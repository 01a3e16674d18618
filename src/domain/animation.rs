// src/domain/animation.rs

/// Milliseconds between two frames of the counter.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A number counting up (or down) to a target at a fixed tick rate.
///
/// Each tick adds a constant increment. The tick that reaches or passes the
/// target clamps to it and is the last one, so the final frame always shows
/// the exact value.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    start: f64,
    end: f64,
    increment: f64,
}

impl CounterAnimation {
    pub fn new(start: f64, end: f64, duration_ms: u64) -> Self {
        let ticks = duration_ms as f64 / FRAME_INTERVAL_MS as f64;
        Self {
            start,
            end,
            increment: (end - start) / ticks,
        }
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn frames(&self) -> Frames {
        Frames {
            current: self.start,
            end: self.end,
            increment: self.increment,
            done: false,
        }
    }
}

/// Values shown on each tick, already rounded.
#[derive(Debug, Clone)]
pub struct Frames {
    current: f64,
    end: f64,
    increment: f64,
    done: bool,
}

impl Iterator for Frames {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        let reached = (self.increment > 0.0 && self.current >= self.end)
            || (self.increment < 0.0 && self.current <= self.end);
        // A zero or NaN step never reaches the target on its own.
        if reached || !(self.increment.abs() > 0.0) {
            self.current = self.end;
            self.done = true;
        }
        Some(crate::domain::pricing::round_half_up(self.current) as i64)
    }
}

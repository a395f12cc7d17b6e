//! Random sources for particle seeding: xorshift32, no external crate needed

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniform randomness owned by a particle field.
///
/// Only `next_f32` is required; swap in a scripted implementation to make
/// seeding and respawns reproducible in tests.
pub trait RandomSource {
    /// Returns a float in [0, 1)
    fn next_f32(&mut self) -> f32;

    /// Returns a float in [min, max). Returns `min` when the range is empty.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        let v = min + self.next_f32() * (max - min);
        // Float rounding can land exactly on `max`
        if v < max {
            v
        } else {
            next_below(max)
        }
    }

    /// Returns true with the given probability
    fn chance(&mut self, probability: f32) -> bool {
        self.next_f32() < probability
    }
}

pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from the system clock
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(0xDEAD_BEEF);
        Self::new(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for ParticleRng {
    fn next_f32(&mut self) -> f32 {
        // 24 significant bits keep the result strictly below 1.0
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

/// Largest finite `f32` strictly below `x`
fn next_below(x: f32) -> f32 {
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

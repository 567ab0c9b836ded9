//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Used to draw a random seed color when the caller doesn't supply one.
//! Same seed always produces the same color sequence across platforms
//! (pure integer arithmetic).

use crate::color::Rgb;

/// Xorshift64 deterministic PRNG with the standard (13, 7, 17) shift
/// parameters. A seed of 0 is replaced with a non-zero fallback to avoid
/// the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed (0 falls back to a fixed
    /// non-zero constant).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Draws a random color from the low three bytes of the next value.
    pub fn next_rgb(&mut self) -> Rgb {
        let v = self.next_u64();
        Rgb {
            r: (v & 0xff) as u8,
            g: ((v >> 8) & 0xff) as u8,
            b: ((v >> 16) & 0xff) as u8,
        }
    }
}

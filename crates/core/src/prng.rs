//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Every random spawn attribute of a particle (position, size, density,
//! drift, tint) is drawn from this generator, so a seed fully determines a
//! particle population on every platform. The core algorithm is pure integer
//! arithmetic; floats only appear when a draw is mapped into a range, and
//! that mapping is the same IEEE operation everywhere.
//!
//! Populations are never drawn from the root generator directly. Each reseed
//! takes a [`Xorshift64::fork`], so replaying the same seed and the same
//! sequence of resizes reproduces every population along the way.

use serde::{Deserialize, Serialize};

/// Xorshift64 deterministic PRNG with shifts (13, 7, 17).
///
/// The shift triple is the standard full-period one, so every non-zero state
/// is visited before the sequence repeats. A seed of 0 is the all-zeros fixed
/// point of xorshift and is replaced with a non-zero fallback.
///
/// The state is serializable: a generator saved mid-sequence resumes exactly
/// where it left off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Replaces a seed of 0, which would make xorshift return 0 forever.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;
    /// Odd 64-bit constant (golden ratio) mixed into forked seeds.
    const FORK_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a generator from `seed`.
    ///
    /// If `seed` is 0, `0x5EED_DEAD_BEEF_CAFE` is used instead so the
    /// generator never sticks at the all-zeros fixed point.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    ///
    /// Never returns 0: xorshift maps non-zero states to non-zero states.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1).
    ///
    /// Takes the upper 53 bits of [`next_u64`](Self::next_u64) and divides by
    /// 2^53, which fills the whole mantissa and can never round up to 1.0.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    ///
    /// Callers pass `min < max`. With `min == max` every draw is `min`; an
    /// inverted pair yields values in `(max, min]`, which is why config
    /// ranges are validated before they reach here.
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns `true` with probability `p`.
    ///
    /// `p` is clamped to [0, 1], so `chance(0.0)` is always `false` and
    /// `chance(1.0)` always `true`. A NaN probability is never satisfied.
    /// Consumes exactly one draw either way, which keeps later draws aligned
    /// regardless of the outcome.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p.clamp(0.0, 1.0)
    }

    /// Splits off an independent generator and advances this one.
    ///
    /// The frame loop forks once per reseed so consecutive populations never
    /// replay the same draws, while the whole history stays reproducible from
    /// the root seed.
    pub fn fork(&mut self) -> Xorshift64 {
        Xorshift64::new(self.next_u64() ^ Self::FORK_MIX)
    }
}

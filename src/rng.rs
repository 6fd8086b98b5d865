//! Random draws for spawning and enemy fire.

/// Source of the game's random choices.
///
/// The simulation only ever asks for small bounded integers, so that is the
/// whole interface. Tests supply a scripted implementation.
pub trait Dice {
    /// Uniform integer in `lo..=hi`.
    fn between(&mut self, lo: i32, hi: i32) -> i32;

    /// True with probability `1 / n`. Never true for `n == 0`.
    fn one_in(&mut self, n: u32) -> bool {
        n != 0 && self.between(1, n as i32) == 1
    }
}

/// xorshift32 generator.
pub struct Xorshift32(u32);

impl Xorshift32 {
    pub const fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift.
        Self(if seed == 0 { 1 } else { seed })
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    pub fn range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Dice for Xorshift32 {
    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi - lo) as u32 + 1;
        lo + self.range(span) as i32
    }
}

//! The game's 32-bit linear congruential generator ("ARNG").
//!
//! Besides being usable on its own, three forward steps of this generator
//! spread a 32-bit seed across the xorshift state.

pub const ARNG_MULT: u32 = 0x6C07_8965;
pub const ARNG_ADD: u32 = 0x0000_0001;
pub const ARNG_RMULT: u32 = 0x9638_806D;
pub const ARNG_RADD: u32 = 0x69C7_7F93;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Arng {
    seed: u32,
}

impl Arng {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances one step and returns the new seed.
    #[inline]
    pub fn next(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(ARNG_MULT).wrapping_add(ARNG_ADD);
        self.seed
    }

    /// Undoes one step of [`Arng::next`] and returns the previous seed.
    #[inline]
    pub fn prev(&mut self) -> u32 {
        self.seed = self.seed.wrapping_mul(ARNG_RMULT).wrapping_add(ARNG_RADD);
        self.seed
    }

    pub fn advance(&mut self, count: usize) -> u32 {
        for _ in 0..count {
            self.next();
        }
        self.seed
    }

    pub fn reverse(&mut self, count: usize) -> u32 {
        for _ in 0..count {
            self.prev();
        }
        self.seed
    }
}

use core::fmt;
use core::str::FromStr;

use crate::arng::Arng;
use crate::error::ParseStateError;
use crate::state::{pack32to64, unpack64to32};

/// Four-word xorshift generator that reproduces the game's sequence bit for bit.
///
/// Each sequence owns its own value; copy it to fork a sequence. All
/// arithmetic wraps, and the all-zero state is accepted (it yields zeros
/// forever).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct XorShift128 {
    x: u32,
    y: u32,
    z: u32,
    w: u32,
}

impl XorShift128 {
    /// Spreads a 32-bit seed over the state with three [`Arng`] steps.
    pub fn new(seed: u32) -> Self {
        let mut arng = Arng::new(seed);
        let rng = Self {
            x: seed,
            y: arng.next(),
            z: arng.next(),
            w: arng.next(),
        };
        log::trace!("xorshift128 seeded from {seed:#010X}: {rng}");
        rng
    }

    pub fn from_state64(s0: u64, s1: u64) -> Self {
        let (x, y) = unpack64to32(s0);
        let (z, w) = unpack64to32(s1);
        let rng = Self { x, y, z, w };
        log::trace!("xorshift128 resumed from 64-bit state: {rng}");
        rng
    }

    pub fn from_state32(x: u32, y: u32, z: u32, w: u32) -> Self {
        let rng = Self { x, y, z, w };
        log::trace!("xorshift128 resumed from 32-bit state: {rng}");
        rng
    }

    pub fn state32(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.z, self.w)
    }

    pub fn state64(&self) -> (u64, u64) {
        (pack32to64(self.x, self.y), pack32to64(self.z, self.w))
    }

    /// `s1` then `s0` as 32 uppercase hex digits.
    pub fn full_state(&self) -> String {
        self.to_string()
    }

    /// Advances the state and returns the new `w` word.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let t = self.x ^ (self.x << 11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        self.w = self.w ^ (self.w >> 19) ^ t ^ (t >> 8);
        self.w
    }

    /// Same bits as [`XorShift128::next`].
    ///
    /// The game reads this value through a signed 32-bit integer; the
    /// reinterpretation is lossless, so the round trip through `i32` is kept
    /// to mirror it.
    #[inline]
    pub fn next_uint32(&mut self) -> u32 {
        self.next() as i32 as u32
    }

    /// `next_uint32() % max`, bias included.
    ///
    /// Panics on `max == 0`, like the game's own division fault.
    #[inline]
    pub fn next_uint32_bounded(&mut self, max: u32) -> u32 {
        self.next_uint32() % max
    }

    /// `next_int32_ranged(i32::MIN, i32::MAX)`.
    #[inline]
    pub fn next_int32(&mut self) -> i32 {
        self.next_int32_ranged(i32::MIN, i32::MAX)
    }

    /// Returns `start + next() % (end - start)` with wrapping arithmetic.
    ///
    /// `end < start` is not rejected; the span underflows to a large value.
    /// Panics when `start == end`, since the span is then zero.
    #[inline]
    pub fn next_int32_ranged(&mut self, start: i32, end: i32) -> i32 {
        let next = self.next();
        let delta = end.wrapping_sub(start) as u32;
        start.wrapping_add((next % delta) as i32)
    }

    /// Discards `count` outputs.
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            self.next();
        }
    }
}

impl fmt::Display for XorShift128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (s0, s1) = self.state64();
        write!(f, "{s1:016X}{s0:016X}")
    }
}

impl FromStr for XorShift128 {
    type Err = ParseStateError;

    /// Parses the [`XorShift128::full_state`] format, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseStateError::Length(s.len()));
        }
        if let Some(at) = s.bytes().position(|b| !b.is_ascii_hexdigit()) {
            return Err(ParseStateError::Digit(at));
        }
        let half = |text: &str, offset: usize| {
            u64::from_str_radix(text, 16).map_err(|_| ParseStateError::Digit(offset))
        };
        let s1 = half(&s[..16], 0)?;
        let s0 = half(&s[16..], 16)?;
        Ok(Self::from_state64(s0, s1))
    }
}

impl rand::RngCore for XorShift128 {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Sixteen bytes holding `s0` then `s1`, both little-endian.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct XorShift128Seed(pub [u8; 16]);

impl AsMut<[u8]> for XorShift128Seed {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl From<(u64, u64)> for XorShift128Seed {
    fn from((s0, s1): (u64, u64)) -> Self {
        let mut bytes = [0; 16];
        bytes[..8].copy_from_slice(&s0.to_le_bytes());
        bytes[8..].copy_from_slice(&s1.to_le_bytes());
        Self(bytes)
    }
}

impl rand::SeedableRng for XorShift128 {
    type Seed = XorShift128Seed;

    fn from_seed(seed: XorShift128Seed) -> Self {
        let mut s0 = [0; 8];
        let mut s1 = [0; 8];
        s0.copy_from_slice(&seed.0[..8]);
        s1.copy_from_slice(&seed.0[8..]);
        Self::from_state64(u64::from_le_bytes(s0), u64::from_le_bytes(s1))
    }
}

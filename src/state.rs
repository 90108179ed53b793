//! Conversions between the two views of the 128-bit state.
//!
//! Four 32-bit words `(x, y, z, w)` and two 64-bit halves `(s0, s1)` describe
//! the same bits: `s0 = x | y << 32` and `s1 = z | w << 32`.

#[inline]
pub const fn pack32to64(lo: u32, hi: u32) -> u64 {
    (lo as u64) | ((hi as u64) << 32)
}

#[inline]
pub const fn unpack64to32(value: u64) -> (u32, u32) {
    (value as u32, (value >> 32) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_word_is_low_half() {
        assert_eq!(pack32to64(0x0000_0001, 0x6C07_8966), 0x6C07_8966_0000_0001);
        assert_eq!(unpack64to32(0x6C07_8966_0000_0001), (0x0000_0001, 0x6C07_8966));
    }

    #[test]
    fn high_bits_survive() {
        let v = pack32to64(u32::MAX, 0x8000_0000);
        assert_eq!(v, 0x8000_0000_FFFF_FFFF);
        assert_eq!(unpack64to32(v), (u32::MAX, 0x8000_0000));
    }
}

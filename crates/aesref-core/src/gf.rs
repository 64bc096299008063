//! GF(2^8) arithmetic modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reduction polynomial 0x11b.
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by {02}.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Full field multiplication of `a` and `b`.
#[inline]
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    let mut bit = 0;
    while bit < 8 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
        bit += 1;
    }
    product
}

/// Returns the round constant following `prev`.
#[inline]
pub const fn next_rcon(prev: u8) -> u8 {
    xtime(prev)
}

/// Infinite round-constant sequence starting at {01}.
pub fn round_constants() -> impl Iterator<Item = u8> {
    core::iter::successors(Some(0x01u8), |&rc| Some(next_rcon(rc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtime_reduces_on_high_bit() {
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
        assert_eq!(xtime(0x80), 0x1b);
        assert_eq!(xtime(0x00), 0x00);
    }

    #[test]
    fn gmul_matches_fips_example() {
        // FIPS-197 section 4.2: {57} x {83} = {c1}, {57} x {13} = {fe}.
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn gmul_identities() {
        for a in 0..=255u8 {
            assert_eq!(gmul(a, 0x01), a);
            assert_eq!(gmul(a, 0x00), 0);
            assert_eq!(gmul(a, 0x02), xtime(a));
            assert_eq!(gmul(a, 0x03), xtime(a) ^ a);
        }
    }

    #[test]
    fn gmul_is_commutative() {
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(5) {
                assert_eq!(gmul(a, b), gmul(b, a));
            }
        }
    }

    #[test]
    fn rcon_sequence_matches_table() {
        let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];
        let actual: Vec<u8> = round_constants().take(10).collect();
        assert_eq!(actual, expected);
        assert_eq!(next_rcon(0x36), 0x6c);
    }
}

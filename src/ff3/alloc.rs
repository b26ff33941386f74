//! FF3 numeral operations that require a global allocator.

use alloc::{string::String, vec, vec::Vec};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::identities::Zero;

use super::{Alphabet, Numeral, ValueOutOfRange};

impl Numeral for BigUint {
    fn zero() -> Self {
        <BigUint as Zero>::zero()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn mul_add_radix(self, radix: u32, numeral: u32) -> Option<Self> {
        Some(self * radix + numeral)
    }

    fn div_rem_radix(self, radix: u32) -> (Self, u32) {
        let (q, r) = self.div_rem(&BigUint::from(radix));
        // r < radix, so it has at most one u32 digit (and none when zero).
        (q, r.iter_u32_digits().next().unwrap_or(0))
    }

    fn max_len(_radix: u32) -> Option<usize> {
        None
    }
}

/// Given a non-negative integer `x` less than radix<sup>m</sup>, returns the
/// representation of `x` as a string of `m` numerals of `alphabet`, in
/// decreasing order of significance (`STR^m_radix(x)`).
///
/// Shorter representations are padded on the left with the alphabet's first
/// character. Returns an error, rather than truncating, if `x` does not fit
/// in `m` numerals.
///
/// ```
/// use ff3::ff3::{str_radix, Alphabet};
///
/// let alphabet = Alphabet::try_from("0123456789").unwrap();
/// assert_eq!(str_radix(42u64, &alphabet, 5).unwrap(), "00042");
/// assert!(str_radix(100u64, &alphabet, 2).is_err());
/// ```
pub fn str_radix<N: Numeral>(
    mut x: N,
    alphabet: &Alphabet,
    m: usize,
) -> Result<String, ValueOutOfRange> {
    let radix = alphabet.radix();
    let mut res = vec![alphabet.numeral(0); m];
    for i in 0..m {
        if x.is_zero() {
            break;
        }
        let (q, r) = x.div_rem_radix(radix);
        res[m - 1 - i] = alphabet.numeral(r);
        x = q;
    }
    if !x.is_zero() {
        return Err(ValueOutOfRange { radix, m });
    }
    Ok(res.into_iter().collect())
}

/// Given a numeral string `x`, returns the numeral string that consists of
/// the numerals of `x` in reverse order (`REV(X)`).
pub fn rev(x: &str) -> String {
    x.chars().rev().collect()
}

/// Given a byte string `x`, returns the byte string that consists of the bytes
/// of `x` in reverse order (`REVB(X)`).
pub fn revb(x: &[u8]) -> Vec<u8> {
    x.iter().rev().copied().collect()
}

//! The numeral layer of the FF3-1 algorithm, specified in
//! [NIST Special Publication 800-38G Revision 1](https://doi.org/10.6028/NIST.SP.800-38Gr1-draft).
//!
//! FF3-1 works on numeral strings: strings over an ordered alphabet of `radix`
//! characters, read in decreasing order of significance. This module provides
//! the conversions between numeral strings and integers (`NUM_radix`, `NUM`,
//! `STR^m_radix`) and the reversal helpers (`REV`, `REVB`, `BYTELEN`) that the
//! Feistel rounds are built from.
//!
//! Every function here is pure. An [`Alphabet`] is validated once at
//! construction, in time linear in its size, and is immutable afterwards, so a
//! single instance can be shared between threads without synchronization.

mod error;
pub use error::{InvalidAlphabet, NumeralStringError, ValueOutOfRange};

#[cfg(feature = "alloc")]
mod alphabet;
#[cfg(feature = "alloc")]
pub use self::alphabet::Alphabet;

#[cfg(feature = "alloc")]
mod alloc;
#[cfg(feature = "alloc")]
pub use self::alloc::{rev, revb, str_radix};

/// Number of bits in a byte, for [`byte_len`].
const BYTE_BITS: usize = 8;

/// Radix of a byte string read as a numeral string.
const BYTE_RADIX: u32 = 256;

/// An unsigned integer that numeral strings can be converted to and from.
///
/// Bounded types report overflow instead of wrapping; the longest numeral
/// string that is always safe for a given radix is [`Numeral::max_len`].
pub trait Numeral: Sized {
    /// Returns zero.
    fn zero() -> Self;

    /// Returns whether this integer is zero.
    fn is_zero(&self) -> bool;

    /// Computes `self * radix + numeral`, or `None` if the result does not fit.
    fn mul_add_radix(self, radix: u32, numeral: u32) -> Option<Self>;

    /// Computes `(self / radix, self mod radix)` with exact integer division.
    fn div_rem_radix(self, radix: u32) -> (Self, u32);

    /// Returns the largest `m` such that every value below radix<sup>m</sup>
    /// fits in this type, or `None` if the type is unbounded.
    ///
    /// `radix` must be at least 2.
    fn max_len(radix: u32) -> Option<usize>;
}

macro_rules! impl_numeral {
    ($($t:ty),*) => {$(
        impl Numeral for $t {
            fn zero() -> Self {
                0
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn mul_add_radix(self, radix: u32, numeral: u32) -> Option<Self> {
                self.checked_mul(<$t>::from(radix))?
                    .checked_add(<$t>::from(numeral))
            }

            fn div_rem_radix(self, radix: u32) -> (Self, u32) {
                let radix = <$t>::from(radix);
                // The remainder is below radix, so it fits in a u32.
                (self / radix, (self % radix) as u32)
            }

            fn max_len(radix: u32) -> Option<usize> {
                if radix < 2 {
                    return None;
                }
                let radix = <$t>::from(radix);
                // bound = radix^len
                let mut bound: $t = 1;
                let mut len = 0;
                loop {
                    match bound.checked_mul(radix) {
                        Some(next) => {
                            bound = next;
                            len += 1;
                        }
                        None => {
                            // radix^(len + 1) - 1 may still be exactly MAX.
                            if <$t>::MAX / radix == bound - 1 && <$t>::MAX % radix == radix - 1 {
                                len += 1;
                            }
                            return Some(len);
                        }
                    }
                }
            }
        }
    )*};
}

impl_numeral!(u32, u64, u128);

/// Returns the first character of `x` that `numeral_of` does not map to a numeral.
fn check_numerals(
    x: &str,
    numeral_of: impl Fn(char) -> Option<u32>,
) -> Result<(), NumeralStringError> {
    match x
        .chars()
        .enumerate()
        .find(|(_, numeral)| numeral_of(*numeral).is_none())
    {
        Some((position, numeral)) => {
            Err(NumeralStringError::OutOfAlphabet { numeral, position })
        }
        None => Ok(()),
    }
}

/// Horner's method over already-validated numerals, most significant first.
fn horner<N: Numeral>(
    radix: u32,
    ns_len: usize,
    numerals: impl Iterator<Item = u32>,
) -> Result<N, NumeralStringError> {
    let mut res = N::zero();
    for numeral in numerals {
        res = res
            .mul_add_radix(radix, numeral)
            .ok_or_else(|| NumeralStringError::TooLong {
                ns_len,
                max_len: N::max_len(radix).unwrap_or(ns_len),
            })?;
    }
    Ok(res)
}

/// The number that the numeral string `x` represents in base `radix` when the
/// numerals are valued in decreasing order of significance (`NUM_radix(X)`).
///
/// Returns an error naming the first character that is not in `alphabet`, or,
/// if every character is valid, an error if the value does not fit in `N`.
///
/// ```
/// use ff3::ff3::{num_radix, Alphabet};
///
/// let alphabet = Alphabet::try_from("01234").unwrap();
/// assert_eq!(num_radix::<u64>("00011010", &alphabet), Ok(755));
/// ```
#[cfg(feature = "alloc")]
pub fn num_radix<N: Numeral>(x: &str, alphabet: &Alphabet) -> Result<N, NumeralStringError> {
    check_numerals(x, |c| alphabet.index_of(c))?;
    horner(
        alphabet.radix(),
        x.chars().count(),
        x.chars().filter_map(|c| alphabet.index_of(c)),
    )
}

fn bit_of(c: char) -> Option<u32> {
    match c {
        '0' => Some(0),
        '1' => Some(1),
        _ => None,
    }
}

/// The integer that the bit string `x` (of `'0'` and `'1'` characters)
/// represents when the bits are valued in decreasing order of significance
/// (`NUM(X)`).
///
/// This is [`num_radix`] with the alphabet `"01"`.
pub fn num<N: Numeral>(x: &str) -> Result<N, NumeralStringError> {
    check_numerals(x, bit_of)?;
    horner(2, x.chars().count(), x.chars().filter_map(bit_of))
}

/// The integer that the byte string `x` represents when the bytes are valued
/// in decreasing order of significance.
///
/// FF3-1 reads its block-cipher output this way after [`revb`]. A
/// [`NumeralStringError::TooLong`] counts bytes, not bits.
pub fn num_bytes<N: Numeral>(x: &[u8]) -> Result<N, NumeralStringError> {
    horner(BYTE_RADIX, x.len(), x.iter().map(|b| u32::from(*b)))
}

/// The number of bits in the byte string `x` (`BYTELEN(X)` scaled to bits).
pub fn byte_len(x: &[u8]) -> usize {
    x.len() * BYTE_BITS
}

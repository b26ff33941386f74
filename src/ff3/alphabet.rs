//! Ordered alphabets of numerals.

use alloc::vec::Vec;

use hashbrown::HashMap;

use super::{InvalidAlphabet, Numeral};

/// Number of characters with a direct rank slot.
const ASCII_LEN: usize = 128;

/// An ordered set of at least two distinct characters, each standing for the
/// numeral equal to its position.
///
/// The radix of the alphabet is its number of distinct characters. When the
/// input repeats a character, its first occurrence fixes its numeral and the
/// later ones are ignored.
///
/// Lookups in both directions are constant-time: numerals index the ordered
/// characters, ASCII characters index a rank table, and other characters go
/// through a hash map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    ascii: [Option<u32>; ASCII_LEN],
    extended: HashMap<char, u32>,
}

impl Alphabet {
    /// Creates an alphabet from characters in increasing numeral order.
    ///
    /// Returns an error if fewer than two distinct characters are given.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Result<Self, InvalidAlphabet> {
        let mut alphabet = Alphabet {
            chars: Vec::new(),
            ascii: [None; ASCII_LEN],
            extended: HashMap::new(),
        };

        for c in chars {
            if alphabet.contains(c) {
                continue;
            }
            // There are fewer than 2^21 distinct chars.
            let index = alphabet.chars.len() as u32;
            if c.is_ascii() {
                alphabet.ascii[c as usize] = Some(index);
            } else {
                alphabet.extended.insert(c, index);
            }
            alphabet.chars.push(c);
        }

        if alphabet.chars.len() < 2 {
            return Err(InvalidAlphabet(alphabet.chars.len()));
        }
        Ok(alphabet)
    }

    /// Returns the radix, the number of distinct characters.
    pub fn radix(&self) -> u32 {
        self.chars.len() as u32
    }

    /// Returns the characters in increasing numeral order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the numeral that `c` stands for, or `None` if `c` is not in
    /// this alphabet.
    pub fn index_of(&self, c: char) -> Option<u32> {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.extended.get(&c).copied()
        }
    }

    /// Returns the character for `numeral`, or `None` if it is not below the radix.
    pub fn char_at(&self, numeral: u32) -> Option<char> {
        self.chars.get(numeral as usize).copied()
    }

    /// Returns whether `c` is in this alphabet.
    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Returns whether every character of `x` is in this alphabet.
    pub fn is_valid(&self, x: &str) -> bool {
        x.chars().all(|c| self.contains(c))
    }

    /// Returns the longest numeral string length whose values all fit in `N`,
    /// or `None` if `N` is unbounded.
    pub fn max_len<N: Numeral>(&self) -> Option<usize> {
        N::max_len(self.radix())
    }

    /// Returns the character for a numeral known to be below the radix.
    pub(super) fn numeral(&self, numeral: u32) -> char {
        self.chars[numeral as usize]
    }
}

impl<'a> TryFrom<&'a str> for Alphabet {
    type Error = InvalidAlphabet;

    fn try_from(chars: &'a str) -> Result<Self, Self::Error> {
        Alphabet::new(chars.chars())
    }
}

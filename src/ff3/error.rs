use core::fmt;

/// Error indicating that an alphabet had fewer than two distinct characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidAlphabet(pub(super) usize);

impl InvalidAlphabet {
    /// Returns the number of distinct characters that were supplied.
    pub fn distinct(&self) -> usize {
        self.0
    }
}

impl fmt::Display for InvalidAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "An alphabet needs at least 2 distinct characters, got {}",
            self.0
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidAlphabet {}

/// Errors that can occur while reading the value of a numeral string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumeralStringError {
    /// The numeral string contained a character outside of the alphabet.
    OutOfAlphabet {
        /// The offending character.
        numeral: char,
        /// Its position in the numeral string, counted in characters.
        position: usize,
    },
    /// The value of the numeral string does not fit in the target integer type.
    TooLong {
        /// Length of the numeral string.
        ns_len: usize,
        /// Longest numeral string that always fits in the target integer type.
        max_len: usize,
    },
}

impl fmt::Display for NumeralStringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralStringError::OutOfAlphabet { numeral, position } => write!(
                f,
                "The numeral {:?} at position {} is not in the alphabet",
                numeral, position
            ),
            NumeralStringError::TooLong { ns_len, max_len } => write!(
                f,
                "The value of a numeral string of length {} does not fit (max safe length {})",
                ns_len, max_len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NumeralStringError {}

/// Error indicating that a value cannot be written with the requested number of numerals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueOutOfRange {
    pub(super) radix: u32,
    pub(super) m: usize,
}

impl ValueOutOfRange {
    /// Returns the radix of the alphabet the value was being written in.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Returns the requested numeral string length.
    pub fn ns_len(&self) -> usize {
        self.m
    }
}

impl fmt::Display for ValueOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The value is not less than {}^{} and cannot be written in {} numerals",
            self.radix, self.m, self.m
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValueOutOfRange {}

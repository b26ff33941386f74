//! Numeral strings over arbitrary alphabets, for format-preserving encryption.
//!
//! # Example
//!
//! ```
//! extern crate ff3;
//!
//! use ff3::ff3::{num_radix, str_radix, Alphabet};
//!
//! let alphabet = Alphabet::try_from("0123456789AB").unwrap();
//! let x = str_radix(559u64, &alphabet, 4).unwrap();
//! assert_eq!(x, "03A7");
//!
//! let y: u64 = num_radix(&x, &alphabet).unwrap();
//! assert_eq!(y, 559);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)] // refuse to compile if documentation is missing

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ff3;

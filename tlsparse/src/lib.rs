#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::module_name_repetitions)]
//! Runtime support for decoders generated by `tlsparse-gen`.
//!
//! Generated decode routines take a byte slice, walk it with a [`Reader`] and return either the fully
//! decoded record or a [`Malformed`] error. The wire format is the one used by TLS-family protocols:
//! big-endian unsigned integers, and variable sized values preceded by an 8, 16 or 24 bit length.
//!
//! ```
//! use tlsparse::{Malformed, Reader};
//!
//! // uint16 key_id; opaque key<0..2^8-1>;
//! let input = [0x00, 0x2a, 0x02, 0xab, 0xcd];
//! let mut reader = Reader::new(&input);
//! assert_eq!(reader.read_u16(), Ok(42));
//! assert_eq!(reader.read_u8_length_prefixed()?.as_slice(), &[0xab, 0xcd]);
//! assert!(reader.finish().is_ok());
//! # Ok::<(), Malformed>(())
//! ```

mod error;
mod reader;

pub use error::Malformed;
pub use reader::Reader;

// re-export the derive stuff
#[cfg(feature = "derive")]
pub use tlsparse_derive::Record;

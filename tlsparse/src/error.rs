#[cfg(not(feature = "std"))]
use core::fmt;
#[cfg(feature = "std")]
use std::fmt;

/// Error returned by generated decode routines when the input does not follow the wire format.
///
/// No decoded value is ever returned alongside this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// A read needed `required` bytes but only `remaining` were left.
    Truncated { required: usize, remaining: usize },
    /// The input was decoded completely but `remaining` bytes were left over.
    TrailingBytes { remaining: usize },
}

impl fmt::Display for Malformed {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                required,
                remaining,
            } => write!(
                fmt,
                "malformed input: expected {required} bytes, {remaining} bytes were remaining."
            ),
            Self::TrailingBytes { remaining } => write!(
                fmt,
                "malformed input: {remaining} trailing bytes after a complete value."
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Malformed {}

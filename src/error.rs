use core::fmt;

/// Returned when text does not hold a 32-digit hexadecimal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStateError {
    /// The input was not exactly 32 characters long.
    Length(usize),
    /// A character at the given byte offset is not a hex digit.
    Digit(usize),
}

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStateError::Length(len) => {
                write!(f, "expected 32 hex digits, got {len} characters")
            }
            ParseStateError::Digit(at) => write!(f, "invalid hex digit at offset {at}"),
        }
    }
}

impl std::error::Error for ParseStateError {}

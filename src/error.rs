use std::error::Error;
use std::fmt;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Everything that can stop a decode. Raised where the violation happens and
/// passed up unchanged; there is no partial result.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DecodeError {
    /// A read needed more bytes than are left after `offset`.
    TruncatedInput {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// A reposition or pointer target outside `[0, len]`.
    InvalidOffset {
        offset: isize,
        len: usize,
    },
    /// A compression pointer chain came back to a target it already visited.
    CompressionPointerCycle {
        offset: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::TruncatedInput { offset, needed, remaining } => write!(
                f,
                "truncated input: need {} byte(s) at offset {}, {} remaining",
                needed, offset, remaining
            ),
            DecodeError::InvalidOffset { offset, len } => {
                write!(f, "invalid offset {} for a buffer of {} byte(s)", offset, len)
            }
            DecodeError::CompressionPointerCycle { offset } => {
                write!(f, "compression pointer cycle through offset {}", offset)
            }
        }
    }
}

impl Error for DecodeError {}

//! Built-in container self-test.
//!
//! Appends the byte sequence `0, 1, ..., count - 1` to a one-byte
//! [`DynamicArray`], checks the length and every element, then destroys it.

use std::error::Error;
use std::fmt;
use std::io::Write;

use goto_vector::{DynamicArray, VectorConfig, VectorError};
use log::debug;

/// Number of elements the default self-test appends.
pub const DEFAULT_ELEMENT_COUNT: usize = 25;

/// Ways the self-test can fail.
#[derive(Debug)]
pub enum SelfTestError {
    /// A container operation returned an error.
    Vector(VectorError),
    /// The array reported the wrong number of elements.
    LengthMismatch {
        /// Elements appended.
        expected: usize,
        /// Length the array reported.
        actual: usize,
    },
    /// An element did not read back as written.
    ElementMismatch {
        /// Index of the element.
        index: usize,
        /// Byte that was appended.
        expected: u8,
        /// Bytes that were read back.
        actual: Vec<u8>,
    },
    /// The requested element count cannot be encoded as distinct bytes.
    InvalidCount {
        /// The rejected count.
        count: usize,
    },
    /// Writing a status line failed.
    Io(std::io::Error),
}

impl fmt::Display for SelfTestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vector(err) => write!(f, "vector operation failed: {err}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
            Self::ElementMismatch {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "element {index} mismatch: expected [{expected}], got {actual:?}"
                )
            }
            Self::InvalidCount { count } => {
                write!(f, "element count {count} must be between 1 and 256")
            }
            Self::Io(err) => write!(f, "failed to write status: {err}"),
        }
    }
}

impl Error for SelfTestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vector(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VectorError> for SelfTestError {
    fn from(err: VectorError) -> Self {
        Self::Vector(err)
    }
}

impl From<std::io::Error> for SelfTestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Run the vector self-test, writing its status line to `out`.
///
/// `count` must be in `1..=256` so every appended byte is distinct.
pub fn run_vector_selftest<W: Write>(
    out: &mut W,
    config: &VectorConfig,
    count: usize,
) -> Result<(), SelfTestError> {
    if count == 0 || count > 256 {
        return Err(SelfTestError::InvalidCount { count });
    }

    writeln!(out, "\t- Testing vectors")?;
    let mut arr = DynamicArray::with_config(1, config)?;
    debug!("self-test array: {arr:?}");

    for i in 0..count {
        arr.append(&[i as u8])?;
    }

    if arr.len() != count {
        return Err(SelfTestError::LengthMismatch {
            expected: count,
            actual: arr.len(),
        });
    }
    for index in 0..count {
        let expected = index as u8;
        let actual = arr.get(index)?;
        if actual != [expected].as_slice() {
            return Err(SelfTestError::ElementMismatch {
                index,
                expected,
                actual: actual.to_vec(),
            });
        }
    }

    debug!("self-test array before destroy: {arr:?}");
    arr.destroy();
    Ok(())
}

/// Run every self-test, framed by the `Running tests` and `Success` lines.
pub fn run_all<W: Write>(
    out: &mut W,
    config: &VectorConfig,
    count: usize,
) -> Result<(), SelfTestError> {
    writeln!(out, "Running tests")?;
    run_vector_selftest(&mut *out, config, count)?;
    writeln!(out, "Success")?;
    Ok(())
}

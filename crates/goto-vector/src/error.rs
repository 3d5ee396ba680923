//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors returned by container operations.
///
/// `AllocationFailed` is the only environmental failure. Every other variant
/// is a contract violation by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VectorError {
    /// The allocator could not provide the backing storage, or the byte size
    /// of the requested capacity does not fit in `usize`.
    AllocationFailed {
        /// Number of elements the storage was being sized for.
        capacity: usize,
        /// Bytes per element.
        element_size: usize,
    },
    /// `reserve` was asked for a capacity that does not exceed the current one.
    ShrinkRejected {
        /// The requested capacity.
        requested: usize,
        /// The capacity at the time of the call.
        capacity: usize,
    },
    /// Index at or beyond the number of stored elements.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements stored.
        length: usize,
    },
    /// An appended element does not have the container's element size.
    ElementSizeMismatch {
        /// The container's element size in bytes.
        expected: usize,
        /// Size of the supplied element in bytes.
        actual: usize,
    },
    /// A container was requested with an element size of zero bytes.
    ZeroElementSize,
    /// A configuration with an initial capacity of zero.
    ZeroCapacity,
    /// A configuration whose growth factor would not increase capacity.
    InvalidGrowthFactor {
        /// The rejected factor.
        factor: usize,
    },
    /// Operation on a container whose storage was already released.
    Destroyed,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                capacity,
                element_size,
            } => {
                write!(
                    f,
                    "allocation failed: {capacity} elements of {element_size} bytes"
                )
            }
            Self::ShrinkRejected {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "reserve must grow: requested {requested}, capacity {capacity}"
                )
            }
            Self::OutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for length {length}")
            }
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: expected {expected} bytes, got {actual}"
                )
            }
            Self::ZeroElementSize => write!(f, "element size must be non-zero"),
            Self::ZeroCapacity => write!(f, "initial capacity must be non-zero"),
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "growth factor {factor} must be at least 2")
            }
            Self::Destroyed => write!(f, "container used after destroy"),
        }
    }
}

impl Error for VectorError {}

impl VectorError {
    /// Whether this error reports a caller bug rather than resource exhaustion.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(self, Self::AllocationFailed { .. })
    }
}

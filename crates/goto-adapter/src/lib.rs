//! goto-adapter: foundation of a generic parser for the irep format used by
//! bounded model checkers such as ESBMC and CBMC.
//!
//! This facade re-exports the container crate and hosts the built-in
//! self-test that the `goto-adapter` binary runs.
//!
//! ```rust
//! use goto_adapter::prelude::*;
//!
//! let mut arr = DynamicArray::new(1).unwrap();
//! arr.append(&[42]).unwrap();
//! assert_eq!(arr.at(0), &[42]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod selftest;

/// Growable element containers (`goto-vector`).
pub use goto_vector as vector;

/// Common imports.
pub mod prelude {
    pub use goto_vector::{CapacityPreset, DynamicArray, TypedArray, VectorConfig, VectorError};

    pub use crate::selftest::{run_vector_selftest, SelfTestError};
}

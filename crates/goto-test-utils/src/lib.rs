//! Test fixtures for goto-adapter development.
//!
//! Provides deterministic element generators ([`sequential_bytes`],
//! [`ElementStream`]) and [`filled_array`] for building pre-populated
//! containers in tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{filled_array, sequential_bytes, ElementStream};

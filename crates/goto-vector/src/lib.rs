//! Growable element buffers for the goto irep adapter.
//!
//! The adapter's irep trees (an identifier, an ordered list of sub-nodes and
//! a map of named sub-nodes) are built on top of the containers in this
//! crate. Only the containers live here.
//!
//! # Containers
//!
//! - [`DynamicArray`]: element size chosen at runtime, elements stored as
//!   packed bytes. Used where the element type is erased.
//! - [`TypedArray`]: the same capacity and growth rules over a concrete `T`.
//!
//! Both start at a configured capacity ([`VectorConfig`], usually from a
//! [`CapacityPreset`]) and multiply it by the growth factor (default 2)
//! whenever an append finds them full. Capacity never shrinks.
//!
//! # Error policy
//!
//! Allocation failure is returned as [`VectorError::AllocationFailed`] from
//! construction, `reserve` and appends alike. Caller mistakes (bad index,
//! shrinking reserve, wrong element size, use after `destroy`) come back as
//! the other [`VectorError`] variants, except from the `at` accessors, which
//! panic on a bad index the way slice indexing does.
//!
//! # Features
//!
//! - `verification`: make [`CapacityPreset::Large`] the default preset.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dynamic;
pub mod error;
mod raw;
pub mod typed;

// Public re-exports for the primary API surface.
pub use config::{CapacityPreset, VectorConfig};
pub use dynamic::DynamicArray;
pub use error::VectorError;
pub use typed::TypedArray;

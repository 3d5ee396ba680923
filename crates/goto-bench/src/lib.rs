//! Benchmark workloads for the goto-adapter containers.
//!
//! - [`BenchProfile`]: element size, element count and starting capacity
//!   for one append workload.
//! - [`run_append_workload`]: fill a [`DynamicArray`] per profile and report
//!   how often it had to grow.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use goto_vector::{CapacityPreset, DynamicArray, VectorConfig, VectorError};

/// Shape of one append workload.
#[derive(Clone, Debug)]
pub struct BenchProfile {
    /// Bytes per element.
    pub element_size: usize,
    /// Elements appended per run.
    pub element_count: usize,
    /// Starting capacity.
    pub preset: CapacityPreset,
}

impl BenchProfile {
    /// 10K one-byte elements from the given preset.
    pub fn bytes_10k(preset: CapacityPreset) -> Self {
        Self {
            element_size: 1,
            element_count: 10_000,
            preset,
        }
    }

    /// 10K irep-node-sized (64-byte) elements from the given preset.
    pub fn nodes_10k(preset: CapacityPreset) -> Self {
        Self {
            element_size: 64,
            element_count: 10_000,
            preset,
        }
    }
}

/// Result of one workload run.
#[derive(Debug)]
pub struct WorkloadStats {
    /// The filled array.
    pub array: DynamicArray,
    /// Number of capacity increases during the run.
    pub growth_events: usize,
}

/// Append `profile.element_count` copies of `element` to a fresh array.
///
/// `element` must be `profile.element_size` bytes long.
pub fn run_append_workload(
    profile: &BenchProfile,
    element: &[u8],
) -> Result<WorkloadStats, VectorError> {
    let config = VectorConfig::new(profile.preset);
    let mut array = DynamicArray::with_config(profile.element_size, &config)?;
    let mut growth_events = 0;
    for _ in 0..profile.element_count {
        let before = array.capacity();
        array.append(element)?;
        if array.capacity() != before {
            growth_events += 1;
        }
    }
    Ok(WorkloadStats {
        array,
        growth_events,
    })
}

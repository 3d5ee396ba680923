//! Reusable element fixtures.
//!
//! - [`sequential_bytes`]: `0, 1, 2, ...` wrapping at 256.
//! - [`ElementStream`]: seeded pseudo-random elements of a fixed size.
//! - [`filled_array`]: a [`DynamicArray`] pre-populated from any element list.

use goto_vector::{DynamicArray, VectorConfig, VectorError};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The byte sequence `0, 1, 2, ...` of length `count`, wrapping at 256.
pub fn sequential_bytes(count: usize) -> Vec<u8> {
    (0..count).map(|i| i as u8).collect()
}

/// Deterministic stream of `element_size`-byte elements.
///
/// The same seed always yields the same elements, so failures reproduce.
pub struct ElementStream {
    rng: ChaCha8Rng,
    element_size: usize,
}

impl ElementStream {
    pub fn new(element_size: usize, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            element_size,
        }
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Collect the next `count` elements.
    pub fn take_elements(&mut self, count: usize) -> Vec<Vec<u8>> {
        self.by_ref().take(count).collect()
    }
}

impl Iterator for ElementStream {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        let mut element = vec![0u8; self.element_size];
        self.rng.fill_bytes(&mut element);
        Some(element)
    }
}

/// Build a [`DynamicArray`] holding `elements` in order.
///
/// All elements must share one size, which becomes the array's element size.
pub fn filled_array<E: AsRef<[u8]>>(
    element_size: usize,
    config: &VectorConfig,
    elements: &[E],
) -> Result<DynamicArray, VectorError> {
    let mut arr = DynamicArray::with_config(element_size, config)?;
    for element in elements {
        arr.append(element.as_ref())?;
    }
    Ok(arr)
}

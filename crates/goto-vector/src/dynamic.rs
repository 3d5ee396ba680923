//! Type-erased growable array of fixed-size byte elements.
//!
//! A [`DynamicArray`] stores elements whose size is only known at runtime.
//! Elements are packed back to back in one contiguous byte buffer: element
//! `i` occupies bytes `i * element_size .. (i + 1) * element_size`.

use std::fmt;
use std::slice::ChunksExact;

use log::{debug, trace, warn};

use crate::config::VectorConfig;
use crate::error::VectorError;
use crate::raw;

/// A contiguous, growable sequence of `element_size`-byte elements.
///
/// The array owns its storage exclusively. Capacity grows by the configured
/// factor whenever an append finds the array full, so `n` appends cost
/// amortised O(1) each. Capacity never shrinks while the array is live.
///
/// Views returned by [`at`](Self::at), [`get`](Self::get) and
/// [`get_mut`](Self::get_mut) borrow the array, so they cannot outlive a
/// growth event.
pub struct DynamicArray {
    /// Valid element bytes. `data.len()` is always `length * element_size`.
    data: Vec<u8>,
    element_size: usize,
    /// Logical capacity in elements. The byte buffer is reserved to match.
    capacity: usize,
    config: VectorConfig,
    destroyed: bool,
}

impl DynamicArray {
    /// Create an empty array of `element_size`-byte elements with the default
    /// configuration.
    pub fn new(element_size: usize) -> Result<Self, VectorError> {
        Self::with_config(element_size, &VectorConfig::default())
    }

    /// Create an empty array of `element_size`-byte elements.
    ///
    /// Fails with [`VectorError::ZeroElementSize`] for a zero element size,
    /// with a config error if `config` is invalid, and with
    /// [`VectorError::AllocationFailed`] if the initial storage cannot be
    /// obtained.
    pub fn with_config(element_size: usize, config: &VectorConfig) -> Result<Self, VectorError> {
        if element_size == 0 {
            return Err(VectorError::ZeroElementSize);
        }
        config.validate()?;

        let capacity = config.initial_capacity;
        let bytes = raw::slots_for(capacity, element_size)?;
        let data = raw::allocate(bytes, capacity, element_size)?;
        trace!("dynamic array created: {capacity} elements of {element_size} bytes");

        Ok(Self {
            data,
            element_size,
            capacity,
            config: config.clone(),
            destroyed: false,
        })
    }

    /// Release the backing storage.
    ///
    /// Calling this again is a no-op. Afterwards every checked operation
    /// returns [`VectorError::Destroyed`] and [`at`](Self::at) panics.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        trace!(
            "dynamic array destroyed: released {} bytes",
            self.memory_bytes()
        );
        self.data = Vec::new();
        self.capacity = 0;
        self.destroyed = true;
    }

    /// Grow the capacity to exactly `new_capacity` elements.
    ///
    /// All stored elements keep their indices and contents. A target that is
    /// not strictly larger than the current capacity is rejected with
    /// [`VectorError::ShrinkRejected`] and leaves the array untouched.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), VectorError> {
        self.ensure_live()?;
        if new_capacity <= self.capacity {
            warn!(
                "rejected reserve to {new_capacity} elements: capacity is already {}",
                self.capacity
            );
            return Err(VectorError::ShrinkRejected {
                requested: new_capacity,
                capacity: self.capacity,
            });
        }

        let bytes = raw::slots_for(new_capacity, self.element_size)?;
        raw::reserve_slots(&mut self.data, bytes, new_capacity, self.element_size)?;
        debug!(
            "dynamic array grew: {} -> {new_capacity} elements ({} bytes each)",
            self.capacity, self.element_size
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append one element, growing the storage first if the array is full.
    ///
    /// `element` must be exactly [`element_size`](Self::element_size) bytes.
    pub fn append(&mut self, element: &[u8]) -> Result<(), VectorError> {
        self.ensure_live()?;
        if element.len() != self.element_size {
            return Err(VectorError::ElementSizeMismatch {
                expected: self.element_size,
                actual: element.len(),
            });
        }

        if self.len() == self.capacity {
            let grown = self.config.next_capacity(self.capacity).ok_or(
                VectorError::AllocationFailed {
                    capacity: self.capacity,
                    element_size: self.element_size,
                },
            )?;
            self.reserve(grown)?;
        }

        self.data.extend_from_slice(element);
        Ok(())
    }

    /// Mutable view of the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` or the array has been destroyed. Use
    /// [`get_mut`](Self::get_mut) for a checked lookup.
    pub fn at(&mut self, index: usize) -> &mut [u8] {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("DynamicArray::at: {err}"),
        }
    }

    /// Shared view of the element at `index`.
    pub fn get(&self, index: usize) -> Result<&[u8], VectorError> {
        let range = self.element_range(index)?;
        Ok(&self.data[range])
    }

    /// Mutable view of the element at `index`.
    ///
    /// Writes are visible to later reads until the array is destroyed.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut [u8], VectorError> {
        let range = self.element_range(index)?;
        Ok(&mut self.data[range])
    }

    /// Number of elements stored.
    ///
    /// Defined after [`destroy`](Self::destroy): returns 0.
    pub fn len(&self) -> usize {
        self.data.len() / self.element_size
    }

    /// Whether no elements are stored. `true` after destroy.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the array holds before the next growth.
    ///
    /// Zero once destroyed.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per element.
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// All stored elements as one packed byte slice.
    ///
    /// Defined after [`destroy`](Self::destroy): returns an empty slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over the stored elements in index order.
    ///
    /// Defined after [`destroy`](Self::destroy): yields nothing.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.element_size)
    }

    /// Size of the logical backing storage in bytes.
    ///
    /// Defined after [`destroy`](Self::destroy): returns 0.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * self.element_size
    }

    fn ensure_live(&self) -> Result<(), VectorError> {
        if self.destroyed {
            Err(VectorError::Destroyed)
        } else {
            Ok(())
        }
    }

    fn element_range(&self, index: usize) -> Result<std::ops::Range<usize>, VectorError> {
        self.ensure_live()?;
        let length = self.len();
        if index >= length {
            return Err(VectorError::OutOfBounds { index, length });
        }
        let start = index * self.element_size;
        Ok(start..start + self.element_size)
    }
}

impl fmt::Debug for DynamicArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("length", &self.len())
            .field("capacity", &self.capacity)
            .field("element_size", &self.element_size)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl<'a> IntoIterator for &'a DynamicArray {
    type Item = &'a [u8];
    type IntoIter = ChunksExact<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

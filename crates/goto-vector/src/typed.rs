//! Statically typed counterpart of [`DynamicArray`](crate::DynamicArray).
//!
//! [`TypedArray`] follows the same capacity accounting and growth policy,
//! but stores `T` values directly instead of packed bytes.

use std::fmt;

use log::{debug, trace, warn};

use crate::config::VectorConfig;
use crate::error::VectorError;
use crate::raw;

/// A contiguous, growable sequence of `T` with explicit capacity control.
pub struct TypedArray<T> {
    data: Vec<T>,
    capacity: usize,
    config: VectorConfig,
    destroyed: bool,
}

impl<T> TypedArray<T> {
    /// Create an empty array with the default configuration.
    pub fn new() -> Result<Self, VectorError> {
        Self::with_config(&VectorConfig::default())
    }

    /// Create an empty array.
    ///
    /// Zero-sized `T` is rejected with [`VectorError::ZeroElementSize`].
    pub fn with_config(config: &VectorConfig) -> Result<Self, VectorError> {
        let element_size = std::mem::size_of::<T>();
        if element_size == 0 {
            return Err(VectorError::ZeroElementSize);
        }
        config.validate()?;

        let capacity = config.initial_capacity;
        raw::slots_for(capacity, element_size)?;
        let data = raw::allocate(capacity, capacity, element_size)?;
        trace!(
            "typed array created: {capacity} x {}",
            std::any::type_name::<T>()
        );

        Ok(Self {
            data,
            capacity,
            config: config.clone(),
            destroyed: false,
        })
    }

    /// Drop all elements and release the storage. Repeated calls do nothing.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        trace!("typed array destroyed: {} elements dropped", self.data.len());
        self.data = Vec::new();
        self.capacity = 0;
        self.destroyed = true;
    }

    /// Grow the capacity to exactly `new_capacity` elements.
    ///
    /// Rejects targets that do not exceed the current capacity.
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

        let element_size = std::mem::size_of::<T>();
        raw::slots_for(new_capacity, element_size)?;
        raw::reserve_slots(&mut self.data, new_capacity, new_capacity, element_size)?;
        debug!(
            "typed array grew: {} -> {new_capacity} elements",
            self.capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append `value`, growing by the configured factor if full.
    pub fn push(&mut self, value: T) -> Result<(), VectorError> {
        self.ensure_live()?;
        if self.data.len() == self.capacity {
            let grown = self.config.next_capacity(self.capacity).ok_or(
                VectorError::AllocationFailed {
                    capacity: self.capacity,
                    element_size: std::mem::size_of::<T>(),
                },
            )?;
            self.reserve(grown)?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Mutable reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` or the array has been destroyed.
    pub fn at(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("TypedArray::at: {err}"),
        }
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, VectorError> {
        self.ensure_live()?;
        let length = self.data.len();
        self.data
            .get(index)
            .ok_or(VectorError::OutOfBounds { index, length })
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        self.ensure_live()?;
        let length = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(VectorError::OutOfBounds { index, length })
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether no elements are stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements the array holds before the next growth. Zero once destroyed.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether [`destroy`](Self::destroy) has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The stored elements.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the stored elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    fn ensure_live(&self) -> Result<(), VectorError> {
        if self.destroyed {
            Err(VectorError::Destroyed)
        } else {
            Ok(())
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedArray")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl<'a, T> IntoIterator for &'a TypedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn config(capacity: usize) -> VectorConfig {
        VectorConfig::with_initial_capacity(capacity)
    }

    #[test]
    fn push_and_read_back() {
        let mut arr: TypedArray<u8> = TypedArray::new().unwrap();
        for i in 0u8..25 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.len(), 25);
        for i in 0..25 {
            assert_eq!(*arr.at(i), i as u8);
        }
    }

    #[test]
    fn growth_doubles_at_the_boundary() {
        let mut arr = TypedArray::with_config(&config(20)).unwrap();
        for i in 0u64..21 {
            arr.push(i).unwrap();
        }
        assert_eq!(arr.capacity(), 40);
        assert_eq!(arr.as_slice(), (0..21).collect::<Vec<u64>>().as_slice());
    }

    #[test]
    fn growth_follows_configured_factor() {
        let mut cfg = config(2);
        cfg.growth_factor = 4;
        let mut arr = TypedArray::with_config(&cfg).unwrap();
        for i in 0u16..9 {
            arr.push(i).unwrap();
        }
        // 2 -> 8 -> 32
        assert_eq!(arr.capacity(), 32);
        assert_eq!(arr.len(), 9);
    }

    #[test]
    fn zero_sized_types_rejected() {
        let result = TypedArray::<()>::new();
        assert!(matches!(result, Err(VectorError::ZeroElementSize)));
    }

    #[test]
    fn reserve_rejects_shrink() {
        let mut arr = TypedArray::<i32>::with_config(&config(8)).unwrap();
        assert_eq!(
            arr.reserve(8),
            Err(VectorError::ShrinkRejected {
                requested: 8,
                capacity: 8,
            })
        );
        arr.reserve(9).unwrap();
        assert_eq!(arr.capacity(), 9);
    }

    #[test]
    fn get_reports_out_of_bounds() {
        let mut arr = TypedArray::<i32>::new().unwrap();
        arr.push(-1).unwrap();
        assert_eq!(arr.get(0), Ok(&-1));
        assert_eq!(
            arr.get(3),
            Err(VectorError::OutOfBounds {
                index: 3,
                length: 1,
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn at_past_end_panics() {
        let mut arr = TypedArray::<i32>::new().unwrap();
        arr.push(1).unwrap();
        arr.at(1);
    }

    #[test]
    fn destroy_drops_elements_once() {
        let tracker = Rc::new(());
        let mut arr = TypedArray::new().unwrap();
        arr.push(Rc::clone(&tracker)).unwrap();
        arr.push(Rc::clone(&tracker)).unwrap();
        assert_eq!(Rc::strong_count(&tracker), 3);

        arr.destroy();
        arr.destroy();
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert!(arr.is_destroyed());
        assert_eq!(arr.push(Rc::clone(&tracker)), Err(VectorError::Destroyed));
    }

    #[test]
    fn non_copy_values_move_across_growth() {
        let mut arr = TypedArray::with_config(&config(1)).unwrap();
        arr.push(String::from("id")).unwrap();
        arr.push(String::from("sub")).unwrap();
        arr.push(String::from("named_sub")).unwrap();
        assert_eq!(arr.capacity(), 4);
        let joined: Vec<&str> = arr.iter().map(String::as_str).collect();
        assert_eq!(joined, ["id", "sub", "named_sub"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn contents_match_vec_model(
                values in proptest::collection::vec(any::<i64>(), 0..300),
                initial in 1usize..16,
            ) {
                let mut arr = TypedArray::with_config(&config(initial)).unwrap();
                for &v in &values {
                    arr.push(v).unwrap();
                }
                prop_assert_eq!(arr.as_slice(), values.as_slice());
                prop_assert!(arr.len() <= arr.capacity());
            }
        }
    }
}

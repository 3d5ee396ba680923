//! Low-level storage primitives shared by both containers.
//!
//! The containers keep their own logical capacity; these helpers make the
//! backing `Vec` actually hold that much, reporting allocator failure as
//! [`VectorError::AllocationFailed`] instead of aborting.

use crate::error::VectorError;

/// `capacity * element_size`, checked for overflow.
///
/// [`DynamicArray`](crate::DynamicArray) uses the result as its byte count.
/// [`TypedArray`](crate::TypedArray) only calls it to reject capacities whose
/// byte size overflows, since its `Vec<T>` counts whole values.
pub(crate) fn slots_for(capacity: usize, element_size: usize) -> Result<usize, VectorError> {
    capacity
        .checked_mul(element_size)
        .ok_or(VectorError::AllocationFailed {
            capacity,
            element_size,
        })
}

/// Allocate an empty buffer able to hold `slots` items without reallocating.
pub(crate) fn allocate<T>(
    slots: usize,
    capacity: usize,
    element_size: usize,
) -> Result<Vec<T>, VectorError> {
    let mut buf = Vec::new();
    reserve_slots(&mut buf, slots, capacity, element_size)?;
    Ok(buf)
}

/// Grow `buf` so it can hold `slots` items in total. Existing items are kept
/// in place.
pub(crate) fn reserve_slots<T>(
    buf: &mut Vec<T>,
    slots: usize,
    capacity: usize,
    element_size: usize,
) -> Result<(), VectorError> {
    let additional = slots.saturating_sub(buf.len());
    buf.try_reserve_exact(additional)
        .map_err(|_| VectorError::AllocationFailed {
            capacity,
            element_size,
        })
}

use std::ops::Deref;

use crate::obj::ObjParsingErrorDetail;

/// An array sized once up front. Pushing past that size is refused instead
/// of growing the allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedBuffer<T> {
    name: &'static str,
    data: Vec<T>,
    capacity: usize,
}

impl<T> FixedBuffer<T> {
    /// An empty buffer that owns no memory.
    pub(crate) const fn unallocated(name: &'static str) -> Self {
        Self {
            name,
            data: Vec::new(),
            capacity: 0,
        }
    }

    pub(crate) fn allocate(&mut self, capacity: usize) -> Result<(), ObjParsingErrorDetail> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|source| ObjParsingErrorDetail::AllocationFailure {
                buffer: self.name,
                source,
            })?;
        self.data = data;
        self.capacity = capacity;
        Ok(())
    }

    pub(crate) fn push(&mut self, value: T) -> Result<(), ObjParsingErrorDetail> {
        if self.is_full() {
            return Err(ObjParsingErrorDetail::CapacityExceeded {
                buffer: self.name,
                capacity: self.capacity,
            });
        }
        self.data.push(value);
        Ok(())
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    /// Frees the memory. Calling it again, or on a buffer that was never
    /// allocated, does nothing.
    pub fn release(&mut self) {
        self.data = Vec::new();
        self.capacity = 0;
    }

    /// Number of elements the buffer was sized for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Deref for FixedBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

use crate::DynamicArray;

/// Forward cursor into a [`DynamicArray`], a (array identity, position) pair.
///
/// The back-reference to the originating array is held as a raw pointer used
/// only for identity comparison and validation; dereference always borrows
/// through an array reference supplied by the caller. A cursor is logically
/// stale once the array undergoes a structural mutation other than the one
/// that returned it, or once the array value is moved.
pub struct ArrayCursor<T> where T: Default {
    _array: *const DynamicArray<T>,
    _index: usize,
}

impl<T> ArrayCursor<T> where T: Default {
    pub(crate) fn new(array: &DynamicArray<T>, index: usize) -> ArrayCursor<T> {
        ArrayCursor {
            _array: array as *const DynamicArray<T>,
            _index: index,
        }
    }

    #[inline(always)]
    pub fn position(&self) -> usize {
        self._index
    }

    /// Pre-increment. No bounds check; a cursor advanced past the end is
    /// simply rejected by any array operation that requires a live position.
    #[inline(always)]
    pub fn advance(&mut self) {
        self._index += 1;
    }

    /// Whether this cursor originated from `array`.
    pub fn belongs_to(&self, array: &DynamicArray<T>) -> bool {
        std::ptr::eq(self._array, array as *const DynamicArray<T>)
    }

    /// Reads the element at the cursor position through the array's raw
    /// indexing. The caller must ensure the position is live.
    pub fn read<'a>(&self, array: &'a DynamicArray<T>) -> &'a T {
        debug_assert!(self.belongs_to(array), "cursor read through a foreign array");
        &array[self._index]
    }

    pub fn read_mut<'a>(&self, array: &'a mut DynamicArray<T>) -> &'a mut T {
        debug_assert!(self.belongs_to(array), "cursor read through a foreign array");
        &mut array[self._index]
    }
}

impl<T> Clone for ArrayCursor<T> where T: Default {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayCursor<T> where T: Default {}

impl<T> PartialEq for ArrayCursor<T> where T: Default {
    fn eq(&self, other: &Self) -> bool {
        if self._index != other._index {
            return false;
        }
        std::ptr::eq(self._array, other._array)
    }
}

impl<T> Eq for ArrayCursor<T> where T: Default {}

impl<T> std::fmt::Debug for ArrayCursor<T> where T: Default {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayCursor")
            .field("position", &self._index)
            .finish()
    }
}

/// Borrowing iterator over the live elements of a [`DynamicArray`].
pub struct Iter<'a, T> where T: Default {
    array: &'a DynamicArray<T>,
    index: usize,
}

impl<'a, T> Iter<'a, T> where T: Default {
    pub(crate) fn new(array: &'a DynamicArray<T>) -> Iter<'a, T> {
        Iter { array, index: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> where T: Default {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.index >= self.array.len() {
            return None;
        }
        let item = &self.array[self.index];
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len() - self.index.min(self.array.len());
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> where T: Default {}

use crate::iter::{ArrayCursor, Iter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    IndexOutOfBounds { index: usize, length: usize },
    BadPosition { position: usize, length: usize },
    ForeignCursor,
    PopOnEmpty,
    CapacityOverflow { requested: usize },
    CapacityExhausted,
}

impl std::fmt::Display for ArrayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayError::IndexOutOfBounds { index, length } => write!(f, "Index {} is out of bounds for length {}", index, length),
            ArrayError::BadPosition { position, length } => write!(f, "Position {} is not valid for length {}", position, length),
            ArrayError::ForeignCursor => std::fmt::Display::fmt("Cursor belongs to a different array", f),
            ArrayError::PopOnEmpty => std::fmt::Display::fmt("Pop on empty array", f),
            ArrayError::CapacityOverflow { requested } => write!(f, "Capacity arithmetic cannot reach {} slots", requested),
            ArrayError::CapacityExhausted => std::fmt::Display::fmt("Growth did not produce enough room", f),
        }
    }
}

impl std::error::Error for ArrayError {}

/// Growable contiguous array with cursor-based positional insert and erase.
///
/// Elements live in the slots `[0, len)` of an exclusively owned buffer;
/// the remaining slots hold `T::default()` filler. The buffer starts at a
/// base capacity of 10 and doubles whenever an operation needs more room.
/// Capacity never shrinks.
///
/// Every fallible operation leaves the array untouched on failure: length,
/// capacity and all live slots keep their prior values.
// don't clone
pub struct DynamicArray<T> where T: Default {
    _len: usize,
    _data: Box<[T]>,
}

impl<T> DynamicArray<T> where T: Default {
    const BASE_CAP: usize = 10;
    const GROWTH_RATE: usize = 2;

    fn fresh_buffer(capacity: usize) -> Box<[T]> {
        (0..capacity).map(|_| T::default()).collect()
    }

    /// Creates an empty array with the base capacity.
    pub fn new() -> DynamicArray<T> {
        DynamicArray {
            _len: 0,
            _data: Self::fresh_buffer(Self::BASE_CAP),
        }
    }

    /// Creates an empty array with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> DynamicArray<T> {
        DynamicArray {
            _len: 0,
            _data: Self::fresh_buffer(capacity.max(1)),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self._len
    }

    /// Same as [`len`](Self::len), under the name positional containers
    /// traditionally use.
    #[inline(always)]
    pub fn size(&self) -> usize {
        self._len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self._len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self._data.len()
    }

    /// Checked access to a live element.
    ///
    /// The check is against the live length, not the allocated capacity:
    /// filler slots between `len` and `capacity` are never handed out.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        if index < self._len {
            Ok(&self._data[index])
        } else {
            Err(ArrayError::IndexOutOfBounds { index, length: self._len })
        }
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        if index < self._len {
            Ok(&mut self._data[index])
        } else {
            Err(ArrayError::IndexOutOfBounds { index, length: self._len })
        }
    }

    fn grown_capacity(&self, requested: usize) -> Result<usize, ArrayError> {
        let mut new_capacity = self.capacity().max(1);
        while new_capacity < requested {
            new_capacity = new_capacity
                .checked_mul(Self::GROWTH_RATE)
                .ok_or(ArrayError::CapacityOverflow { requested })?;
        }
        Ok(new_capacity)
    }

    /// Ensures the buffer holds at least `capacity` slots.
    ///
    /// Doubles the current capacity until the request is covered, then moves
    /// every old slot into a fresh buffer. Nothing is touched until the new
    /// capacity is known to be reachable, so a failed call leaves the array
    /// exactly as it was.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), ArrayError> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        let new_capacity = self.grown_capacity(capacity)?;
        debug!("grow {} -> {} slots", self.capacity(), new_capacity);
        let mut new_data = Self::fresh_buffer(new_capacity);
        for (new_slot, old_slot) in new_data.iter_mut().zip(self._data.iter_mut()) {
            std::mem::swap(new_slot, old_slot);
        }
        self._data = new_data;
        Ok(())
    }

    /// Appends `value` after the last live element, growing if full.
    pub fn push_back(&mut self, value: T) -> Result<(), ArrayError> {
        if self._len >= self.capacity() {
            self.reserve(self._len + 1)?;
        }
        if self._len >= self.capacity() {
            // unreachable if growth is correct
            return Err(ArrayError::CapacityExhausted);
        }
        self._data[self._len] = value;
        self._len += 1;
        Ok(())
    }

    /// Removes the last live element and returns it.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        if self._len == 0 {
            return Err(ArrayError::PopOnEmpty);
        }
        self._len -= 1;
        Ok(std::mem::take(&mut self._data[self._len]))
    }

    /// Inserts `value` at the cursor's position, in `[0, len]`.
    ///
    /// Elements at `[position, len)` shift one slot right, walking from the
    /// end toward the insertion point. The returned cursor is the one passed
    /// in; it now addresses the inserted element.
    pub fn insert(&mut self, cursor: ArrayCursor<T>, value: T) -> Result<ArrayCursor<T>, ArrayError> {
        if !cursor.belongs_to(self) {
            return Err(ArrayError::ForeignCursor);
        }
        let position = cursor.position();
        if position > self._len {
            return Err(ArrayError::BadPosition { position, length: self._len });
        }
        if self._len == self.capacity() {
            self.reserve(self._len + 1)?;
        }
        let mut index = self._len;
        while index > position {
            self._data.swap(index, index - 1);
            index -= 1;
        }
        self._data[position] = value;
        self._len += 1;
        trace!("insert at {}, {} live", position, self._len);
        Ok(cursor)
    }

    /// Erases the live element at the cursor's position, in `[0, len)`.
    ///
    /// The end position is not a live element and is rejected. Elements after
    /// the erased one shift one slot left; the vacated slot goes back to
    /// filler, dropping the erased element. The returned cursor is the one
    /// passed in.
    pub fn erase(&mut self, cursor: ArrayCursor<T>) -> Result<ArrayCursor<T>, ArrayError> {
        if !cursor.belongs_to(self) {
            return Err(ArrayError::ForeignCursor);
        }
        let position = cursor.position();
        if position >= self._len {
            return Err(ArrayError::BadPosition { position, length: self._len });
        }
        for index in position..self._len - 1 {
            self._data.swap(index, index + 1);
        }
        self._len -= 1;
        self._data[self._len] = T::default();
        trace!("erase at {}, {} live", position, self._len);
        Ok(cursor)
    }

    /// Cursor at position 0 of this array.
    pub fn begin(&self) -> ArrayCursor<T> {
        ArrayCursor::new(self, 0)
    }

    /// End sentinel cursor, one past the last live element.
    pub fn end(&self) -> ArrayCursor<T> {
        ArrayCursor::new(self, self._len)
    }

    /// Cursor at an arbitrary position of this array.
    pub fn cursor(&self, position: usize) -> ArrayCursor<T> {
        ArrayCursor::new(self, position)
    }

    /// Iterates over the live elements in index order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterates over the live elements mutably, in index order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self._data[..self._len].iter_mut()
    }
}

impl<T> Default for DynamicArray<T> where T: Default {
    fn default() -> Self {
        Self::new()
    }
}

/// Raw slot access, unchecked against the live length. The slice still
/// checks against the buffer, so an out-of-buffer index panics.
impl<T> std::ops::Index<usize> for DynamicArray<T> where T: Default {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self._data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for DynamicArray<T> where T: Default {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self._data[index]
    }
}

impl<T> std::fmt::Debug for DynamicArray<T> where T: std::fmt::Debug, T: Default {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for i in self.iter() {
            list.entry(i);
        }
        list.finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> where T: Default {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

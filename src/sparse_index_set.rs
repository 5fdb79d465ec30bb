use std::{fmt, iter::Copied, slice};

use num_traits::{PrimInt, ToPrimitive, Unsigned};

use crate::error::{Error, Result};

/// Iterator over the members of a [`SparseIndexSet`], in slot order.
pub type Iter<'a, T> = Copied<slice::Iter<'a, T>>;

/// A set of unsigned integers in `0..capacity`, where the capacity is chosen
/// once at construction and never grows. Every operation except construction
/// and iteration runs in constant time; clearing only resets the member count,
/// so a large set can be emptied and refilled without touching its storage.
///
/// The implementation isn't efficient in terms of space since it allocates
/// two vectors of size `capacity`: a sparse lookup table from value to slot,
/// and a dense list of the values in the set.
///
/// A value `v` is a member iff `sparse[v] < len && dense[sparse[v]] == v`.
/// Neither array is ever reset, so entries outside the live region may hold
/// stale slots from earlier removals or clears; the round trip through
/// `dense` is what keeps those from being mistaken for members.
#[derive(Clone)]
pub struct SparseIndexSet<T = usize> {
    sparse: Vec<usize>,
    dense: Vec<T>,
    len: usize,
}

fn filled<V: Clone>(capacity: usize, fill: V) -> Result<Vec<V>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(capacity)
        .map_err(|_| Error::Allocation { capacity })?;
    vec.resize(capacity, fill);
    Ok(vec)
}

impl<T: PrimInt + Unsigned> SparseIndexSet<T> {
    /// Creates an empty set that can hold the values `0..capacity`.
    ///
    /// # Panics
    ///
    /// Panics if the backing storage cannot be allocated. See
    /// [`try_new`](Self::try_new) for the fallible version.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(set) => set,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty set that can hold the values `0..capacity`,
    /// returning [`Error::Allocation`] if the backing storage cannot be
    /// allocated.
    pub fn try_new(capacity: usize) -> Result<Self> {
        tracing::trace!(capacity, "allocating sparse index set");

        let build = || -> Result<Self> {
            Ok(Self {
                sparse: filled(capacity, 0)?,
                dense: filled(capacity, T::zero())?,
                len: 0,
            })
        };

        build().map_err(|err| {
            tracing::warn!(capacity, %err, "sparse index set allocation failed");
            err
        })
    }

    pub fn capacity(&self) -> usize {
        self.sparse.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns `true` if `value` is in the set.
    ///
    /// Values outside `0..capacity` are never members, so this returns
    /// `false` for them instead of panicking.
    pub fn contains(&self, value: T) -> bool {
        match self.index_of(value) {
            Some(index) => self.is_member(index, value),
            None => false,
        }
    }

    /// Like [`contains`](Self::contains), but reports an out-of-range value
    /// as [`Error::OutOfRange`] rather than as a non-member.
    pub fn try_contains(&self, value: T) -> Result<bool> {
        let index = self.checked_index(value)?;
        Ok(self.is_member(index, value))
    }

    /// Adds `value` to the set, returning `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below the capacity of the set.
    pub fn insert(&mut self, value: T) -> bool {
        let index = self.expect_index(value);
        if self.is_member(index, value) {
            return false;
        }
        self.push_slot(index, value);
        true
    }

    /// Removes `value` from the set, returning `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below the capacity of the set.
    pub fn remove(&mut self, value: T) -> bool {
        let index = self.expect_index(value);
        if !self.is_member(index, value) {
            return false;
        }
        self.swap_remove_slot(index);
        true
    }

    /// Like [`insert`](Self::insert), but reports an out-of-range value as
    /// [`Error::OutOfRange`].
    pub fn try_insert(&mut self, value: T) -> Result<bool> {
        let index = self.checked_index(value)?;
        if self.is_member(index, value) {
            return Ok(false);
        }
        self.push_slot(index, value);
        Ok(true)
    }

    /// Like [`remove`](Self::remove), but reports an out-of-range value as
    /// [`Error::OutOfRange`].
    pub fn try_remove(&mut self, value: T) -> Result<bool> {
        let index = self.checked_index(value)?;
        if !self.is_member(index, value) {
            return Ok(false);
        }
        self.swap_remove_slot(index);
        Ok(true)
    }

    /// Adds `value` without checking whether it is already a member.
    ///
    /// The caller must ensure `value` is not in the set. Inserting a member
    /// twice is only caught in debug builds; in release builds it leaves the
    /// set with a duplicated slot and an inflated length.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below the capacity of the set, or if the
    /// set is already full.
    pub fn insert_unchecked(&mut self, value: T) {
        let index = self.expect_index(value);
        debug_assert!(
            !self.is_member(index, value),
            "insert_unchecked: value is already in the set"
        );
        self.push_slot(index, value);
    }

    /// Removes `value` without checking whether it is a member.
    ///
    /// The caller must ensure `value` is in the set. Removing a non-member
    /// is only caught in debug builds; in release builds it evicts whichever
    /// member its stale slot points at, or panics on an out-of-bounds slot.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not below the capacity of the set.
    pub fn remove_unchecked(&mut self, value: T) {
        let index = self.expect_index(value);
        debug_assert!(
            self.is_member(index, value),
            "remove_unchecked: value is not in the set"
        );
        self.swap_remove_slot(index);
    }

    /// Removes and returns the member occupying the last slot.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        // the last slot never needs relocating
        self.len -= 1;
        Some(self.dense[self.len])
    }

    /// Removes every member in constant time.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Iterates over the members. Members come out in insertion order until
    /// the first removal; after that the order is unspecified.
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter().copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.dense[..self.len]
    }

    fn index_of(&self, value: T) -> Option<usize> {
        value.to_usize().filter(|&index| index < self.capacity())
    }

    fn checked_index(&self, value: T) -> Result<usize> {
        self.index_of(value).ok_or_else(|| Error::OutOfRange {
            value: widen(value),
            capacity: self.capacity(),
        })
    }

    fn expect_index(&self, value: T) -> usize {
        match self.checked_index(value) {
            Ok(index) => index,
            Err(err) => panic!("{err}"),
        }
    }

    fn is_member(&self, index: usize, value: T) -> bool {
        // sparse[index] is either trash or a valid slot in `dense`
        let r = self.sparse[index];
        r < self.len && self.dense[r] == value
    }

    fn push_slot(&mut self, index: usize, value: T) {
        self.dense[self.len] = value;
        self.sparse[index] = self.len;
        self.len += 1;
    }

    fn swap_remove_slot(&mut self, index: usize) {
        let r = self.sparse[index];
        let last = self.len - 1;

        if r != last {
            let other = self.dense[last];
            self.dense[r] = other;
            let other_index = self.expect_index(other);
            self.sparse[other_index] = r;
        }

        self.len -= 1;
    }
}

fn widen<T: ToPrimitive>(value: T) -> u64 {
    value.to_u64().unwrap_or(u64::MAX)
}

impl<T: PrimInt + Unsigned> PartialEq for SparseIndexSet<T> {
    /// Two sets are equal when they have the same members, regardless of
    /// their capacities or slot order.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|value| other.contains(value))
    }
}

impl<T: PrimInt + Unsigned> Eq for SparseIndexSet<T> {}

impl<T: PrimInt + Unsigned + fmt::Debug> fmt::Debug for SparseIndexSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T: PrimInt + Unsigned> IntoIterator for &'a SparseIndexSet<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PrimInt + Unsigned> Extend<T> for SparseIndexSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: PrimInt + Unsigned> Extend<&'a T> for SparseIndexSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(*value);
        }
    }
}

use crate::raw::{self, RawTable};
use crate::Hashable;

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

// The table size used when no capacity is requested.
const DEFAULT_CAPACITY: usize = 11;

/// A hash table with open addressing and quadratic probing.
///
/// Elements are located through their [`Hashable`] implementation and compared
/// with [`Eq`]. The table keeps its slot count prime and at least twice the
/// number of stored elements, growing to the next prime past double its size
/// when that would be violated.
///
/// Removal is lazy: a removed element leaves a tombstone behind so that probe
/// sequences passing through its slot are not cut short. Tombstones are
/// discarded whenever the table is rebuilt.
///
/// # Examples
///
/// ```
/// use quadprobe::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("apple".to_string());
/// table.insert("pear".to_string());
///
/// assert_eq!(table.find("apple").map(String::as_str), Some("apple"));
///
/// table.remove("apple");
/// assert!(table.find("apple").is_none());
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<T> {
    raw: RawTable<T>,
}

/// A builder for a [`HashTable`].
///
/// # Examples
///
/// ```rust
/// use quadprobe::HashTable;
///
/// let table: HashTable<u64> = HashTable::builder()
///     // Set the initial capacity.
///     .capacity(1_000)
///     // Construct the table.
///     .build();
///
/// assert!(table.capacity() >= 1_000);
/// ```
pub struct HashTableBuilder<T> {
    capacity: usize,
    _t: PhantomData<T>,
}

impl<T> HashTableBuilder<T> {
    /// Set the initial capacity of the table.
    ///
    /// The number of slots is rounded up to a prime. The table holds up to half
    /// of its slots before it grows.
    pub fn capacity(self, capacity: usize) -> HashTableBuilder<T> {
        HashTableBuilder {
            capacity,
            _t: PhantomData,
        }
    }

    /// Construct a [`HashTable`] from the builder, using the configured options.
    pub fn build(self) -> HashTable<T> {
        HashTable {
            raw: RawTable::with_capacity(self.capacity),
        }
    }
}

impl<T> fmt::Debug for HashTableBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTableBuilder")
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> HashTable<T> {
    /// Creates an empty `HashTable` with the default capacity of 11 slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadprobe::HashTable;
    /// let table: HashTable<i32> = HashTable::new();
    /// assert_eq!(table.capacity(), 11);
    /// ```
    pub fn new() -> HashTable<T> {
        HashTable::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `HashTable` with at least `capacity` slots.
    ///
    /// The slot count is the smallest odd prime not below `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadprobe::HashTable;
    /// let table: HashTable<i32> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 101);
    /// ```
    pub fn with_capacity(capacity: usize) -> HashTable<T> {
        HashTable::builder().capacity(capacity).build()
    }

    /// Returns a builder for a `HashTable`.
    pub fn builder() -> HashTableBuilder<T> {
        HashTableBuilder {
            capacity: DEFAULT_CAPACITY,
            _t: PhantomData,
        }
    }

    /// Returns the number of elements in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the table contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in the table. Always prime.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Removes every element from the table.
    ///
    /// Tombstones are cleared as well. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadprobe::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(1);
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert!(table.find(&1).is_none());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// An iterator visiting all elements in slot order.
    ///
    /// The order is unspecified and changes when the table grows.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            raw: self.raw.slots(),
            remaining: self.len(),
        }
    }
}

impl<T> HashTable<T>
where
    T: Hashable + Eq,
{
    /// Inserts an element into the table.
    ///
    /// Returns `false`, dropping `value`, if an equal element is already
    /// present. Otherwise returns `true`. The table may grow, which moves every
    /// element to a new slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadprobe::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// assert!(table.insert(37));
    /// assert!(!table.insert(37));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Removes the element equal to `key`, returning `true` if one was present.
    ///
    /// The slot is left as a tombstone until the table is next rebuilt.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hashable + Eq + ?Sized,
    {
        self.raw.remove(key)
    }

    /// Returns a reference to the element equal to `key`.
    ///
    /// `key` may be any borrowed form of the element type, provided its
    /// [`Hashable`] and [`Eq`] implementations match those of `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadprobe::HashTable;
    ///
    /// let mut table = HashTable::new();
    /// table.insert(String::from("probe"));
    /// assert_eq!(table.find("probe"), Some(&String::from("probe")));
    /// assert_eq!(table.find("slot"), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hashable + Eq + ?Sized,
    {
        self.raw.find(key)
    }

    /// Returns `true` if the table contains an element equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hashable + Eq + ?Sized,
    {
        self.find(key).is_some()
    }
}

impl<T> Default for HashTable<T> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<T> fmt::Debug for HashTable<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> PartialEq for HashTable<T>
where
    T: Hashable + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|x| other.contains(x))
    }
}

impl<T> Eq for HashTable<T> where T: Hashable + Eq {}

impl<T> FromIterator<T> for HashTable<T>
where
    T: Hashable + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = HashTable::new();
        table.extend(iter);
        table
    }
}

impl<T> Extend<T> for HashTable<T>
where
    T: Hashable + Eq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a HashTable<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for HashTable<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            remaining: self.len(),
            raw: self.raw.into_slots().into_iter(),
        }
    }
}

/// An iterator over the elements of a [`HashTable`].
///
/// This struct is created by the [`iter`](HashTable::iter) method.
pub struct Iter<'a, T> {
    raw: std::slice::Iter<'a, raw::Slot<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.raw.by_ref().find_map(raw::Slot::active)?;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`HashTable`].
pub struct IntoIter<T> {
    raw: std::vec::IntoIter<raw::Slot<T>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.raw.by_ref().find_map(|mut slot| slot.take_active())?;
        self.remaining -= 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

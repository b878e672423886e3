use std::rc::Rc;
use std::sync::Arc;

/// Types that can be placed in a [`HashTable`](crate::HashTable).
///
/// `hash` maps an element to a home slot for a table of `table_size` slots.
///
/// # Contract
///
/// Implementations must be deterministic, must return a value in
/// `0..table_size`, and must agree with [`Eq`]: two equal elements hash to the
/// same slot for any table size. The table does not check any of this. An
/// element whose hash changes while it is stored, or that hashes differently
/// from an equal element, may become unreachable. Out-of-range results are
/// reduced modulo the table size.
///
/// # Examples
///
/// ```
/// use quadprobe::{HashTable, Hashable};
///
/// #[derive(PartialEq, Eq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Hashable for Point {
///     fn hash(&self, table_size: usize) -> usize {
///         (self.x.hash(table_size) * 31 + self.y.hash(table_size)) % table_size
///     }
/// }
///
/// let mut table = HashTable::new();
/// table.insert(Point { x: 1, y: 2 });
/// assert!(table.contains(&Point { x: 1, y: 2 }));
/// ```
pub trait Hashable {
    /// Returns the home slot of `self` in a table with `table_size` slots.
    fn hash(&self, table_size: usize) -> usize;
}

/// A polynomial hash for strings.
///
/// Folds the UTF-16 code units of `key` into a 32-bit signed accumulator as
/// `acc = 37 * acc + unit`, with wrapping overflow, then reduces the result
/// into `0..table_size`. An accumulator that overflowed to a negative value
/// still lands in range.
///
/// # Panics
///
/// Panics if `table_size` is zero.
///
/// # Examples
///
/// ```
/// let slot = quadprobe::hash("abc", 101);
/// assert_eq!(slot, quadprobe::hash("abc", 101));
/// assert!(slot < 101);
/// ```
pub fn hash(key: &str, table_size: usize) -> usize {
    assert!(table_size > 0, "table size must be non-zero");

    let acc = key.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_mul(37).wrapping_add(i32::from(unit))
    });

    // `rem_euclid` by a positive modulus is already normalized, and `i128`
    // holds every `usize` table size
    i128::from(acc).rem_euclid(table_size as i128) as usize
}

macro_rules! hashable_unsigned {
    ($($t:ty),*) => {$(
        impl Hashable for $t {
            #[inline]
            fn hash(&self, table_size: usize) -> usize {
                (*self as u128 % table_size as u128) as usize
            }
        }
    )*};
}

macro_rules! hashable_signed {
    ($($t:ty),*) => {$(
        impl Hashable for $t {
            #[inline]
            fn hash(&self, table_size: usize) -> usize {
                (self.unsigned_abs() as u128 % table_size as u128) as usize
            }
        }
    )*};
}

hashable_unsigned!(u8, u16, u32, u64, u128, usize);
hashable_signed!(i8, i16, i32, i64, i128, isize);

impl Hashable for bool {
    #[inline]
    fn hash(&self, table_size: usize) -> usize {
        usize::from(*self) % table_size
    }
}

impl Hashable for char {
    #[inline]
    fn hash(&self, table_size: usize) -> usize {
        u32::from(*self).hash(table_size)
    }
}

impl Hashable for str {
    #[inline]
    fn hash(&self, table_size: usize) -> usize {
        hash(self, table_size)
    }
}

impl Hashable for String {
    #[inline]
    fn hash(&self, table_size: usize) -> usize {
        hash(self, table_size)
    }
}

macro_rules! hashable_deref {
    ($($t:ty),*) => {$(
        impl<T: Hashable + ?Sized> Hashable for $t {
            #[inline]
            fn hash(&self, table_size: usize) -> usize {
                (**self).hash(table_size)
            }
        }
    )*};
}

hashable_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod hash;
mod raw;
mod table;

#[cfg(feature = "serde")]
mod serde_impls;

pub use hash::{hash, Hashable};
pub use table::{HashTable, HashTableBuilder, IntoIter, Iter};

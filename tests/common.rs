#![allow(dead_code)]

use quadprobe::{HashTable, Hashable};

// Run the test on different configurations of a `HashTable`.
pub fn with_table<T>(mut test: impl FnMut(&dyn Fn() -> HashTable<T>)) {
    // The default table.
    test(&(|| HashTable::new()));

    // The smallest possible table, to stress growth from 3 slots.
    test(&(|| HashTable::builder().capacity(0).build()));

    // A presized table that should not need to grow.
    test(&(|| HashTable::builder().capacity(4096).build()));
}

// Asserts the sizing invariants that hold after every insert.
pub fn check_invariants<T>(table: &HashTable<T>) {
    let capacity = table.capacity();
    assert!(is_prime(capacity), "capacity {} is not prime", capacity);
    assert!(
        table.len() <= capacity / 2,
        "{} elements in {} slots",
        table.len(),
        capacity
    );
    assert_eq!(table.iter().count(), table.len());
}

pub fn is_prime(n: usize) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

// An element that always hashes to `HASH`, producing maximal probe sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixed<const HASH: usize>(pub i32);

impl<const HASH: usize> Hashable for Fixed<HASH> {
    fn hash(&self, _table_size: usize) -> usize {
        HASH
    }
}

// Prints a log message if `RUST_LOG=debug` is set.
#[macro_export]
macro_rules! debug {
    ($($x:tt)*) => {
        if std::env::var("RUST_LOG").as_deref() == Ok("debug") {
            println!($($x)*);
        }
    };
}

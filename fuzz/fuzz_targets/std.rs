#![no_main]

use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use quadprobe::HashTable;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
enum Operation<K> {
    Insert(K),
    Remove(K),
    Find(K),
    Contains(K),
    Clear,
    Len,
    IsEmpty,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    capacity: u8,
    operations: Vec<Operation<u16>>,
}

fn fuzz_table(input: FuzzInput) {
    let mut std_set = HashSet::new();
    let mut table = HashTable::with_capacity(input.capacity as usize);

    for op in input.operations {
        match op {
            Operation::Insert(k) => {
                let std_result = std_set.insert(k);
                let table_result = table.insert(k);
                assert_eq!(std_result, table_result);
                assert!(table.len() <= table.capacity() / 2);
            }
            Operation::Remove(k) => {
                let std_result = std_set.remove(&k);
                let table_result = table.remove(&k);
                assert_eq!(std_result, table_result);
            }
            Operation::Find(k) => {
                let std_result = std_set.get(&k);
                let table_result = table.find(&k);
                assert_eq!(std_result, table_result);
            }
            Operation::Contains(k) => {
                let std_result = std_set.contains(&k);
                let table_result = table.contains(&k);
                assert_eq!(std_result, table_result);
            }
            Operation::Clear => {
                std_set.clear();
                table.clear();
            }
            Operation::Len => {
                assert_eq!(std_set.len(), table.len());
            }
            Operation::IsEmpty => {
                assert_eq!(std_set.is_empty(), table.is_empty());
            }
        }
    }

    // Final consistency checks
    for k in std_set.iter() {
        let table_result = table.find(k);
        assert_eq!(Some(k), table_result);
    }
    assert_eq!(std_set.len(), table.len());
    assert_eq!(std_set.len(), table.iter().count());
}

fuzz_target!(|data: FuzzInput| {
    fuzz_table(data);
});

mod probe;
mod slot;
mod utils;

use std::borrow::Borrow;
use std::mem;

use self::probe::Probe;
use self::utils::next_prime;
use crate::Hashable;

pub use self::slot::Slot;

// An open-addressed table with quadratic probing and lazy deletion.
#[derive(Clone)]
pub struct RawTable<T> {
    // The backing array. Its length is always prime.
    slots: Vec<Slot<T>>,
    // The number of active slots.
    len: usize,
    // The number of non-empty slots, active or deleted.
    occupied: usize,
}

impl<T> RawTable<T> {
    // Allocate a table with at least `capacity` slots.
    pub fn with_capacity(capacity: usize) -> RawTable<T> {
        RawTable {
            slots: RawTable::alloc(next_prime(capacity)),
            len: 0,
            occupied: 0,
        }
    }

    fn alloc(len: usize) -> Vec<Slot<T>> {
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, || Slot::Empty);
        slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    // Reset every slot to empty, keeping the allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }

        self.len = 0;
        self.occupied = 0;
    }

    // Returns an iterator over the slot array.
    pub fn slots(&self) -> std::slice::Iter<'_, Slot<T>> {
        self.slots.iter()
    }

    // Consume the table, returning the slot array.
    pub fn into_slots(self) -> Vec<Slot<T>> {
        self.slots
    }
}

impl<T> RawTable<T>
where
    T: Hashable + Eq,
{
    // Returns the index where a probe for `key` stops: either an empty slot, or
    // a slot holding an element equal to `key`, live or deleted.
    //
    // Terminates as long as at most half of the slots are occupied, which
    // `insert` maintains.
    fn find_pos<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hashable + Eq + ?Sized,
    {
        let len = self.slots.len();
        let mut probe = Probe::start(key.hash(len), len);

        loop {
            match self.slots[probe.i].element() {
                Some(x) if <T as Borrow<Q>>::borrow(x) != key => probe.next(),
                _ => return probe.i,
            }
        }
    }

    // Returns the live element equal to `key`.
    pub fn find<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hashable + Eq + ?Sized,
    {
        self.slots[self.find_pos(key)].active()
    }

    // Insert `value`, returning `false` if an equal element is already live.
    pub fn insert(&mut self, value: T) -> bool {
        let i = self.find_pos(&value);
        let slot = &mut self.slots[i];

        if slot.is_active() {
            return false;
        }

        if slot.is_empty() {
            self.occupied += 1;
        }

        // a deleted slot holding an equal element is revived in place
        *slot = Slot::Active(value);
        self.len += 1;

        let capacity = self.slots.len();
        if self.len > capacity / 2 {
            self.rehash();
        } else if self.occupied > capacity / 2 {
            // mostly tombstones, which a rebuild at the same size reclaims
            if self.len > capacity / 4 {
                self.rehash();
            } else {
                self.rebuild(capacity);
            }
        }

        true
    }

    // Turn the live element equal to `key` into a tombstone.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hashable + Eq + ?Sized,
    {
        let i = self.find_pos(key);

        if self.slots[i].deactivate() {
            self.len -= 1;
            return true;
        }

        false
    }

    // Grow to the next prime at least twice the current size.
    fn rehash(&mut self) {
        let len = self
            .slots
            .len()
            .checked_mul(2)
            .expect("capacity overflow");

        self.rebuild(next_prime(len));
    }

    // Move every live element into a new array of `len` slots.
    //
    // Elements are reinserted in slot order of the old array. Tombstones are
    // dropped.
    fn rebuild(&mut self, len: usize) {
        let old = mem::replace(&mut self.slots, RawTable::alloc(len));
        self.len = 0;
        self.occupied = 0;

        for mut slot in old {
            if let Some(value) = slot.take_active() {
                self.insert(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::utils::is_prime;
    use super::*;

    // Hashes every element to the same slot.
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Collide(u32);

    impl Hashable for Collide {
        fn hash(&self, _table_size: usize) -> usize {
            0
        }
    }

    fn check<T: Hashable + Eq>(table: &RawTable<T>) {
        let half = table.capacity() / 2;
        assert!(is_prime(table.capacity()));
        assert!(table.len() <= half);
        assert!(table.occupied() <= half);
        assert_eq!(table.slots().filter(|s| s.is_active()).count(), table.len());
        assert_eq!(table.slots().filter(|s| !s.is_empty()).count(), table.occupied());
    }

    #[test]
    fn capacity_is_prime() {
        for n in 0..64 {
            let table = RawTable::<u32>::with_capacity(n);
            assert!(is_prime(table.capacity()));
            assert!(table.capacity() >= n);
        }
    }

    #[test]
    fn collisions_follow_quadratic_offsets() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..5 {
            table.insert(Collide(i));
        }

        // home slot 0, then offsets 1, 4, 9, 16 mod 11
        let expected = [0, 1, 4, 9, 5];
        for (i, &pos) in expected.iter().enumerate() {
            assert_eq!(table.find_pos(&Collide(i as u32)), pos);
        }
        check(&table);
    }

    #[test]
    fn rehash_on_half_full() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..5u32 {
            table.insert(i);
        }
        assert_eq!(table.capacity(), 11);

        table.insert(5);
        assert_eq!(table.capacity(), 23);
        assert_eq!(table.len(), 6);
        for i in 0..6u32 {
            assert_eq!(table.find(&i), Some(&i));
        }
        check(&table);
    }

    #[test]
    fn rehash_reinserts_in_slot_order() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..6 {
            table.insert(Collide(i));
        }
        assert_eq!(table.capacity(), 23);

        // old slots 0, 1, 3, 4, 5, 9 held 0, 1, 5, 2, 4, 3, and are replayed
        // onto the chain 0, 1, 4, 9, 16, 2 of the new table in that order
        let positions: Vec<_> = (0..6).map(|i| table.find_pos(&Collide(i))).collect();
        assert_eq!(positions, [0, 1, 9, 2, 16, 4]);
        check(&table);
    }

    #[test]
    fn rehash_drops_tombstones() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..5u32 {
            table.insert(i);
        }
        table.remove(&0);
        table.remove(&1);
        assert_eq!(table.occupied(), 5);

        // the sixth occupied slot pushes the table over half
        table.insert(10);
        assert_eq!(table.capacity(), 23);
        assert_eq!(table.len(), 4);
        assert_eq!(table.occupied(), 4);
        check(&table);
    }

    #[test]
    fn purge_tombstones_in_place() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..5u32 {
            table.insert(i);
        }
        for i in 0..4u32 {
            table.remove(&i);
        }

        table.insert(10);
        assert_eq!(table.capacity(), 11);
        assert_eq!(table.len(), 2);
        assert_eq!(table.occupied(), 2);
        assert_eq!(table.find(&4), Some(&4));
        assert_eq!(table.find(&10), Some(&10));
        check(&table);
    }

    #[test]
    fn tombstones_keep_chains_intact() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..4 {
            table.insert(Collide(i));
        }

        assert!(table.remove(&Collide(1)));
        assert!(table.find(&Collide(1)).is_none());
        for i in [0, 2, 3] {
            assert_eq!(table.find(&Collide(i)), Some(&Collide(i)));
        }
        check(&table);
    }

    #[test]
    fn revive_deleted_slot_in_place() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..3 {
            table.insert(Collide(i));
        }

        let pos = table.find_pos(&Collide(1));
        table.remove(&Collide(1));
        assert!(table.insert(Collide(1)));
        assert_eq!(table.find_pos(&Collide(1)), pos);
        assert_eq!(table.len(), 3);
        assert_eq!(table.occupied(), 3);
    }

    #[test]
    fn churn_terminates() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..10_000u32 {
            table.insert(i);
            table.remove(&i);
            check(&table);
        }
        assert_eq!(table.len(), 0);
        assert_eq!(table.capacity(), 11);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut table = RawTable::with_capacity(11);
        for i in 0..100u32 {
            table.insert(i);
        }
        let capacity = table.capacity();

        table.clear();
        assert_eq!(table.len(), 0);
        assert_eq!(table.occupied(), 0);
        assert_eq!(table.capacity(), capacity);
        assert!(table.slots().all(|s| s.is_empty()));
    }
}

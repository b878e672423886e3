use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt::{self, Formatter};
use std::marker::PhantomData;

use crate::{HashTable, Hashable};

struct TableVisitor<T> {
    _marker: PhantomData<HashTable<T>>,
}

impl<T> Serialize for HashTable<T>
where
    T: Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl<'de, T> Deserialize<'de> for HashTable<T>
where
    T: Deserialize<'de> + Hashable + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(TableVisitor::new())
    }
}

impl<T> TableVisitor<T> {
    pub(crate) fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for TableVisitor<T>
where
    T: Deserialize<'de> + Hashable + Eq,
{
    type Value = HashTable<T>;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a set")
    }

    fn visit_seq<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: SeqAccess<'de>,
    {
        // keep the table at most half full once every element is in
        let mut values = match access.size_hint() {
            Some(size) => HashTable::with_capacity(size.saturating_mul(2)),
            None => HashTable::new(),
        };

        while let Some(value) = access.next_element()? {
            values.insert(value);
        }

        Ok(values)
    }
}

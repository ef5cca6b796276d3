//! Serde support: a map serializes as a plain map in key order.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, MapAccess, Visitor},
    ser::SerializeMap,
};

use super::CaseInsensitiveMap;
use crate::collate::{InvariantCollator, TextCollator};

impl<V, C> Serialize for CaseInsensitiveMap<V, C>
where
    V: Serialize,
    C: TextCollator,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;

        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// Deserializes with the invariant collator. Case variants after the first spelling of a key
/// are dropped, the same as for [`FromIterator`].
impl<'de, V, C> Deserialize<'de> for CaseInsensitiveMap<V, C>
where
    V: Deserialize<'de>,
    C: InvariantCollator,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MapVisitor {
            marker: PhantomData,
        })
    }
}

struct MapVisitor<V, C> {
    marker: PhantomData<fn() -> CaseInsensitiveMap<V, C>>,
}

impl<'de, V, C> Visitor<'de> for MapVisitor<V, C>
where
    V: Deserialize<'de>,
    C: InvariantCollator,
{
    type Value = CaseInsensitiveMap<V, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map =
            CaseInsensitiveMap::<V, C>::try_new().map_err(<A::Error as de::Error>::custom)?;

        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert_first_wins(key, value);
        }

        Ok(map)
    }
}

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ParameterMap;

impl Serialize for ParameterMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// Entries go through `insert`, so names differing only
// in casing collapse to the last one.
impl<'de> Deserialize<'de> for ParameterMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ParameterMapVisitor)
    }
}

struct ParameterMapVisitor;

impl<'de> Visitor<'de> for ParameterMapVisitor {
    type Value = ParameterMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of parameter names to values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut params = ParameterMap::with_capacity(access.size_hint().unwrap_or_default());
        while let Some((name, value)) = access.next_entry::<String, String>()? {
            params.insert(name, value);
        }
        Ok(params)
    }
}

use std::fmt::Display;
use std::hash::Hash;

/// Items stored in an id keyed map. In content files they are written as a plain list and the
/// key is taken from the item itself.
pub trait ItemId {
    type IdType: Clone + Eq + Hash + Display;

    fn id(&self) -> Self::IdType;
}

#[allow(clippy::module_inception)]
pub mod id_map {
    use super::ItemId;
    use indexmap::IndexMap;
    use serde::Serialize;
    use serde::de::{Deserialize, Deserializer, Error};
    use serde::ser::Serializer;
    use std::collections::HashSet;

    pub fn serialize<S, T>(map: &IndexMap<T::IdType, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: ItemId + Serialize,
    {
        serializer.collect_seq(map.values())
    }

    /// Keeps list order. A repeated id is rejected instead of silently replacing the earlier item.
    /// Ids are compared by their written form, so `1` and `"1"` collide.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<IndexMap<T::IdType, T>, D::Error>
    where
        D: Deserializer<'de>,
        T: ItemId + Deserialize<'de>,
    {
        let elements = Vec::<T>::deserialize(deserializer)?;
        let mut map = IndexMap::with_capacity(elements.len());
        let mut seen = HashSet::with_capacity(elements.len());
        for element in elements {
            let id = element.id();
            if !seen.insert(id.to_string()) {
                return Err(D::Error::custom(format!("duplicate id `{id}`")));
            }
            map.insert(id, element);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Section {
        #[serde(with = "id_map")]
        checks: IndexMap<String, Check>,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Check {
        id: String,
        correct: u32,
    }

    impl ItemId for Check {
        type IdType = String;

        fn id(&self) -> Self::IdType {
            self.id.clone()
        }
    }

    #[test]
    fn test_keeps_list_order() {
        let section: Section = serde_json::from_str(
            r#"{
            "checks": [
                {"id": "rcd-trip", "correct": 2},
                {"id": "coshh", "correct": 1}
            ]
        }"#,
        )
        .unwrap();
        let keys: Vec<_> = section.checks.keys().map(String::as_str).collect();
        assert_eq!(keys, ["rcd-trip", "coshh"]);
        assert_eq!(section.checks["coshh"].correct, 1);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let Err(err) = serde_json::from_str::<Section>(
            r#"{
            "checks": [
                {"id": "coshh", "correct": 2},
                {"id": "coshh", "correct": 1}
            ]
        }"#,
        ) else {
            panic!("expected duplicate id error");
        };
        assert!(err.to_string().contains("duplicate id `coshh`"));
    }

    #[test]
    fn test_serializes_as_list() {
        let checks = IndexMap::from([(
            "coshh".to_owned(),
            Check {
                id: "coshh".to_owned(),
                correct: 1,
            },
        )]);
        let json = serde_json::to_string(&Section { checks }).unwrap();
        assert_eq!(json, r#"{"checks":[{"id":"coshh","correct":1}]}"#);
    }
}

use crate::compat::{String, ToString, Vec};

/// Ordered key/value mapping returned by the read operations.
///
/// Each key appears once, in the order it was first inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> ParamMap<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert `value` under `key` unless the key is already present.
    pub(crate) fn insert_first(&mut self, key: &str, value: V) {
        if !self.contains_key(key) {
            self.entries.push((key.to_string(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for ParamMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> IntoIterator for ParamMap<V> {
    type Item = (String, V);
    type IntoIter = crate::compat::VecIntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<V: serde::Serialize> serde::Serialize for ParamMap<V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

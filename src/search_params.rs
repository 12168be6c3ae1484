use crate::compat::{String, ToString, Vec, trace_op};
use crate::encoding::encode_into;
use crate::mutation::Mutation;
use crate::param_map::ParamMap;
use crate::query_parser::parse_pairs;

/// Represents URL search parameters (query string).
///
/// An ordered multi-map: duplicate keys are allowed and insertion order is
/// preserved. Every mutating method returns `&mut Self` so calls can be
/// chained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    params: Vec<(String, String)>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a query string (with or without leading `?`).
    ///
    /// Never fails: malformed escapes are kept as-is.
    pub fn parse(query: &str) -> Self {
        Self {
            params: parse_pairs(query),
        }
    }

    /// Alias of [`SearchParams::parse`].
    pub fn create(query: &str) -> Self {
        Self::parse(query)
    }

    /// Append an entry, keeping any existing entries for `key`.
    pub fn add_param(&mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> &mut Self {
        let (key, value) = (key.as_ref(), value.as_ref());
        trace_op!(op = "add_param", key);
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    /// Append every pair in order. Same as calling `add_param` repeatedly.
    pub fn add_param_list<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.add_param(key, value);
        }
        self
    }

    /// Delete all entries for `key`. Absent keys are ignored.
    pub fn remove_param(&mut self, key: impl AsRef<str>) -> &mut Self {
        let key = key.as_ref();
        trace_op!(op = "remove_param", key);
        self.params.retain(|(k, _)| k != key);
        self
    }

    pub fn remove_param_list<I>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            self.remove_param(key);
        }
        self
    }

    /// Set `key` to a single value.
    ///
    /// The first existing entry keeps its position and takes the new value;
    /// later entries for `key` are dropped. A missing key is appended.
    pub fn add_or_replace_param(
        &mut self,
        key: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> &mut Self {
        let (key, value) = (key.as_ref(), value.as_ref());
        trace_op!(op = "add_or_replace_param", key);

        let mut found_first = false;
        self.params.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if found_first {
                return false;
            }
            found_first = true;
            *v = value.to_string();
            true
        });
        if !found_first {
            self.params.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Apply `add_or_replace_param` for each pair in order, so a later pair
    /// overrides an earlier one with the same key.
    pub fn add_or_replace_param_list<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in pairs {
            self.add_or_replace_param(key, value);
        }
        self
    }

    /// Apply a prepared [`Mutation`].
    pub fn apply(&mut self, mutation: Mutation) -> &mut Self {
        mutation.apply_to(self);
        self
    }

    /// Get the first value for a key.
    pub fn get_param(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Look up each requested key. Every requested key is present in the
    /// result; `None` marks a key with no entry. Only the first value of a
    /// repeated key is reported.
    pub fn get_param_list<I>(&self, keys: I) -> ParamMap<Option<&str>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut map = ParamMap::new();
        for key in keys {
            let key = key.as_ref();
            map.insert_first(key, self.get_param(key));
        }
        map
    }

    /// Every distinct key mapped to its first value, in first-seen order.
    pub fn get_all_params(&self) -> ParamMap<&str> {
        let mut map = ParamMap::new();
        for (key, value) in &self.params {
            map.insert_first(key, value.as_str());
        }
        map
    }

    /// Same as [`SearchParams::serialize`].
    pub fn get_url_search_params(&self) -> String {
        self.serialize()
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: impl AsRef<str>) -> Vec<&str> {
        let key = key.as_ref();
        self.params
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Number of entries, counting repeated keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }

    /// Convert to query string without leading `?`.
    /// JavaScript `URLSearchParams.toString()` compatible.
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            encode_into(&mut result, key);
            result.push('=');
            encode_into(&mut result, value);
        }
        result
    }
}

impl core::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl core::str::FromStr for SearchParams {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for SearchParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for SearchParams {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.add_param_list(iter);
        params
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Extend<(K, V)> for SearchParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.add_param_list(iter);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SearchParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&SearchParams::serialize(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SearchParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let query = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    #[test]
    fn test_parse_empty() {
        let params = SearchParams::parse("");
        assert!(params.is_empty());
        assert_eq!(params.serialize(), "");
    }

    #[test]
    fn test_parse_duplicate_keys() {
        let params = SearchParams::parse("key=value1&key=value2");
        assert_eq!(params.len(), 2);
        assert_eq!(params.get_param("key"), Some("value1"));
        assert_eq!(params.get_all("key"), vec!["value1", "value2"]);
    }

    #[test]
    fn test_add_param_keeps_duplicates() {
        let mut params = SearchParams::parse("key1=value1");
        params.add_param("key1", "value2").add_param("key2", "value3");
        assert_eq!(params.serialize(), "key1=value1&key1=value2&key2=value3");
    }

    #[test]
    fn test_remove_param_removes_every_entry() {
        let mut params = SearchParams::parse("a=1&b=2&a=3");
        params.remove_param("a");
        assert_eq!(params.serialize(), "b=2");
        assert_eq!(params.get_param("a"), None);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let mut params = SearchParams::parse("a=1");
        params.remove_param("zzz");
        assert_eq!(params.serialize(), "a=1");
    }

    #[test]
    fn test_add_or_replace_collapses_in_place() {
        let mut params = SearchParams::parse("a=1&b=2&a=3&c=4");
        params.add_or_replace_param("a", "x");
        assert_eq!(params.serialize(), "a=x&b=2&c=4");
        assert_eq!(params.get_all("a"), vec!["x"]);
    }

    #[test]
    fn test_add_or_replace_appends_missing_key() {
        let mut params = SearchParams::new();
        params.add_or_replace_param("key", "value");
        assert_eq!(params.serialize(), "key=value");
    }

    #[test]
    fn test_add_or_replace_list_later_pair_wins() {
        let mut params = SearchParams::new();
        params.add_or_replace_param_list([("k", "first"), ("k", "second")]);
        assert_eq!(params.serialize(), "k=second");
    }

    #[test]
    fn test_get_all_params_collapses_to_first_value() {
        let params = SearchParams::parse("a=1&b=2&a=3");
        let all = params.get_all_params();
        assert_eq!(all.len(), 2);
        assert_eq!(all.get("a"), Some(&"1"));
        assert_eq!(all.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_get_param_list_reports_absent_keys() {
        let params = SearchParams::parse("a=&b=2");
        let list = params.get_param_list(["a", "missing"]);
        assert_eq!(list.get("a"), Some(&Some("")));
        assert_eq!(list.get("missing"), Some(&None));
    }

    #[test]
    fn test_display_matches_serialize() {
        let params = SearchParams::parse("?q=rust+lang&page=2");
        assert_eq!(params.to_string(), params.serialize());
        assert_eq!(params.get_url_search_params(), "q=rust+lang&page=2");
    }

    #[test]
    fn test_from_iterator_appends() {
        let params: SearchParams = [("a", "1"), ("a", "2")].into_iter().collect();
        assert_eq!(params.serialize(), "a=1&a=2");
    }
}

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Mutable string property bag attached to one submission.
///
/// The execution side records late-bound facts here (partition boundaries,
/// resolved schemas, ...). Keys are kept sorted. Entries can be overwritten
/// but never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutableContext(BTreeMap<String, String>);

impl MutableContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn get_string_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_string(key).unwrap_or(default)
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.get_parsed(key).unwrap_or(default)
    }

    pub fn get_long(&self, key: &str, default: i64) -> i64 {
        self.get_parsed(key).unwrap_or(default)
    }

    pub fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.get_parsed(key).unwrap_or(default)
    }

    pub fn set_string<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.0.insert(key.into(), value.into());
    }

    pub fn set_int<K: Into<String>>(&mut self, key: K, value: i32) {
        self.set_string(key, value.to_string());
    }

    pub fn set_long<K: Into<String>>(&mut self, key: K, value: i64) {
        self.set_string(key, value.to_string());
    }

    pub fn set_boolean<K: Into<String>>(&mut self, key: K, value: bool) {
        self.set_string(key, value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    fn get_parsed<T>(&self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.get_string(key)?;
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, raw, %err, "context value can't be parsed, using default");
                None
            }
        }
    }
}

impl<'a> IntoIterator for &'a MutableContext {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for MutableContext {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set_string(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MutableContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        context.extend(iter);
        context
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_typed_accessors() {
        //given
        let mut context = MutableContext::new();

        //when
        context.set_int("partitions", 8);
        context.set_long("min.boundary", -9_000_000_000);
        context.set_boolean("compress", true);
        context.set_string("table", "orders");

        //then
        assert_eq!(context.len(), 4);
        assert_eq!(context.get_int("partitions", 1), 8);
        assert_eq!(context.get_long("min.boundary", 0), -9_000_000_000);
        assert!(context.get_boolean("compress", false));
        assert_eq!(context.get_string("table"), Some("orders"));
        assert_eq!(context.get_string_or("schema", "public"), "public");
    }

    #[test]
    fn test_missing_and_unparsable_values_use_default() {
        let context: MutableContext = [("partitions", "many")].into_iter().collect();

        assert_eq!(context.get_int("partitions", 3), 3);
        assert_eq!(context.get_long("absent", 7), 7);
        assert!(!context.get_boolean("partitions", false));
        assert_eq!(context.get_string("absent"), None);
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let context: MutableContext = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();

        let keys: Vec<&str> = context.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut context = MutableContext::new();
        context.set_string("k", "v");

        let json = serde_json::to_value(&context).expect("serialize");

        assert_eq!(json, serde_json::json!({ "k": "v" }));
    }
}

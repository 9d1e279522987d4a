use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

/// Localized labels for form and input names, one table per framework or
/// connector and locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle(BTreeMap<String, String>);

impl ResourceBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, label: V) {
        self.0.insert(key.into(), label.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for ResourceBundle {
    fn from(labels: BTreeMap<String, String>) -> Self {
        Self(labels)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a ResourceBundle {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "toml")]
impl ResourceBundle {
    /// parse a flat TOML table of `key = "label"` entries
    pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
        let labels: BTreeMap<String, String> =
            toml::from_str(input).map_err(|err| anyhow::anyhow!(err))?;
        tracing::debug!(labels = labels.len(), "loaded resource bundle");
        Ok(Self(labels))
    }

    pub fn from_toml_slice(input: &[u8]) -> anyhow::Result<Self> {
        Self::from_toml_str(std::str::from_utf8(input)?)
    }

    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read(path)?;
        Self::from_toml_slice(&content)
    }
}

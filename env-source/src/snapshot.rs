//! Owned environment snapshots.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

/// Owned, ordered copy of an environment mapping.
///
/// Built from any iterator of name/value pairs; later duplicates overwrite
/// earlier ones. Serializes as a flat JSON object.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a variable if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Returns `true` when the variable is present, even if empty.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` when the snapshot holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterates name/value pairs in name order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.vars.iter(),
        }
    }

    /// Iterates variable names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Environment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Borrowing iterator over an [`Environment`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Environment {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_pairs_in_order() {
        let env: Environment = [("B", "2"), ("A", "1")].into_iter().collect();

        let keys: Vec<_> = env.keys().collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn later_duplicates_win() {
        let env: Environment = [("KEY", "v1"), ("KEY", "v2")].into_iter().collect();
        assert_eq!(env.get("KEY"), Some("v2"));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn empty_value_is_present() {
        let env: Environment = [("EMPTY", "")].into_iter().collect();
        assert!(env.contains("EMPTY"));
        assert_eq!(env.get("EMPTY"), Some(""));
        assert!(!env.contains("MISSING"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let env: Environment = [("HOST", "localhost"), ("PORT", "8080")]
            .into_iter()
            .collect();
        let value = serde_json::to_value(&env).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({ "HOST": "localhost", "PORT": "8080" })
        );
    }
}

//! The lookup boundary between the resolver and a host mapping.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::Environment;

/// A flat, read-only mapping from variable name to raw text value.
///
/// Implementations must never mutate the underlying mapping. Lookups of a
/// name that is not present return `None`, which is distinct from a present
/// empty string.
///
/// Does **not** require `Send + Sync`; add the bounds at the call site when
/// sharing a source across threads.
pub trait EnvSource {
    /// Looks up a single variable.
    fn get(&self, key: &str) -> Option<String>;

    /// Copies every entry into an owned [`Environment`].
    fn snapshot(&self) -> Environment;
}

impl EnvSource for Environment {
    fn get(&self, key: &str) -> Option<String> {
        Environment::get(self, key).map(str::to_owned)
    }

    fn snapshot(&self) -> Environment {
        self.clone()
    }
}

impl<H: BuildHasher> EnvSource for HashMap<String, String, H> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn snapshot(&self) -> Environment {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }

    fn snapshot(&self) -> Environment {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

//! Static relay directory handed back by `getRelays()`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Read/write policy for one relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayPolicy {
    pub read: bool,
    pub write: bool,
}

impl RelayPolicy {
    /// Read and write enabled.
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };
}

/// Mapping from relay URL to its policy. Serializes as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelayDirectory(BTreeMap<String, RelayPolicy>);

impl RelayDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace a relay.
    pub fn insert(&mut self, url: impl Into<String>, policy: RelayPolicy) {
        self.0.insert(url.into(), policy);
    }

    /// Policy for `url`, if listed.
    pub fn get(&self, url: &str) -> Option<&RelayPolicy> {
        self.0.get(url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RelayPolicy)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RelayDirectory {
    fn default() -> Self {
        let mut relays = Self::new();
        relays.insert("wss://example-relay.com", RelayPolicy::READ_WRITE);
        relays
    }
}

impl FromIterator<(String, RelayPolicy)> for RelayDirectory {
    fn from_iter<I: IntoIterator<Item = (String, RelayPolicy)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

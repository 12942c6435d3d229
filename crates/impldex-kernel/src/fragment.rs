//! Fragment-scoped data model: trait keys, implementor entries, and the
//! per-fragment map a fragment hands to the registration hub.
//!
//! A fragment builds its map once and then gives it away by value. After
//! that hand-off nothing mutates it; the merged index copies out of it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque identifier for a trait: its fully-qualified path.
///
/// Unique within one documentation build. Keys carry no order of their
/// own; ordering in the merged index comes from first-append position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TraitKey(pub String);

impl TraitKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraitKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One pre-rendered description of a type implementing a trait,
/// including any generic/where-clause qualifiers baked into the text.
///
/// Inert payload. The kernel never parses it, never compares it for
/// semantic equality, and never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplementorEntry(pub String);

impl ImplementorEntry {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self(rendered.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One fragment's contribution: trait key → ordered implementor entries.
///
/// Entry lists keep the order the fragment built them in; that order is
/// what the merge preserves. An empty map, and empty entry lists, are
/// both legal — a fragment may mention a trait without contributing any
/// implementors for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentMap {
    entries: IndexMap<TraitKey, Vec<ImplementorEntry>>,
}

impl FragmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries for a trait key.
    ///
    /// Repeating a key during construction extends its list in place, so
    /// a fragment assembled in several passes still yields one list per
    /// key in assembly order.
    pub fn push_entries(&mut self, key: TraitKey, entries: Vec<ImplementorEntry>) {
        self.entries.entry(key).or_default().extend(entries);
    }

    /// Number of trait keys this fragment mentions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for one trait key, if the fragment mentions it.
    pub fn get(&self, key: &TraitKey) -> Option<&[ImplementorEntry]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Iterate keys and entry lists in the order the fragment built them.
    pub fn iter(&self) -> impl Iterator<Item = (&TraitKey, &[ImplementorEntry])> {
        self.entries
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }
}

impl IntoIterator for FragmentMap {
    type Item = (TraitKey, Vec<ImplementorEntry>);
    type IntoIter = indexmap::map::IntoIter<TraitKey, Vec<ImplementorEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(TraitKey, Vec<ImplementorEntry>)> for FragmentMap {
    fn from_iter<I: IntoIterator<Item = (TraitKey, Vec<ImplementorEntry>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, entries) in iter {
            map.push_entries(key, entries);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_key_extends_in_place() {
        let mut map = FragmentMap::new();
        map.push_entries(
            TraitKey::new("core::hash::Hash"),
            vec![ImplementorEntry::new("impl Hash for NSData")],
        );
        map.push_entries(
            TraitKey::new("core::iter::Iterator"),
            vec![ImplementorEntry::new("impl Iterator for NSEnumerator")],
        );
        map.push_entries(
            TraitKey::new("core::hash::Hash"),
            vec![ImplementorEntry::new("impl Hash for NSString")],
        );

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&TraitKey::new("core::hash::Hash")),
            Some(
                &[
                    ImplementorEntry::new("impl Hash for NSData"),
                    ImplementorEntry::new("impl Hash for NSString"),
                ][..]
            )
        );
    }

    #[test]
    fn iteration_follows_construction_order() {
        let mut map = FragmentMap::new();
        map.push_entries(TraitKey::new("z::Last"), vec![]);
        map.push_entries(TraitKey::new("a::First"), vec![]);

        let keys: Vec<&str> = map.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, ["z::Last", "a::First"]);
    }

    #[test]
    fn deserializes_from_plain_json_object() {
        let map: FragmentMap = serde_json::from_str(
            r#"{"core::hash::Hash": ["impl Hash for Id"], "core::iter::Iterator": []}"#,
        )
        .expect("fragment map should deserialize");

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get(&TraitKey::new("core::hash::Hash")),
            Some(&[ImplementorEntry::new("impl Hash for Id")][..])
        );
        assert_eq!(
            map.get(&TraitKey::new("core::iter::Iterator")),
            Some(&[][..])
        );
    }
}

//! The merged implementor index and the merge contract it satisfies.
//!
//! Merge semantics, in full: for each trait key in an incoming fragment,
//! append that fragment's entry list to the end of the index's existing
//! list for the key, creating the key (in first-appended position) when
//! absent. Nothing is dropped, nothing is reordered relative to its own
//! fragment, nothing is deduplicated. Registering the same fragment twice
//! therefore doubles its entries — avoiding that is the loader's job.

use crate::fragment::{FragmentMap, ImplementorEntry, TraitKey};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

pub const IMPLEMENTOR_INDEX_KIND: &str = "impldex.implementor_index.v1";
pub const IMPLEMENTOR_INDEX_SCHEMA: u32 = 1;

/// The merge contract: fold one fragment into a consumer.
///
/// `ImplementorIndex` is the canonical consumer. Any `FnMut(FragmentMap)`
/// closure also qualifies, as does `Rc<RefCell<S>>` of any sink, so a
/// renderer can attach a clone of its shared index and keep reading the
/// merged state through the handle it retained. Calls are synchronous and
/// single-threaded; a sink must not re-enter the hub that is feeding it.
pub trait FragmentSink {
    fn merge_fragment(&mut self, fragment: FragmentMap);
}

impl<F: FnMut(FragmentMap)> FragmentSink for F {
    fn merge_fragment(&mut self, fragment: FragmentMap) {
        self(fragment)
    }
}

impl<S: FragmentSink> FragmentSink for Rc<RefCell<S>> {
    fn merge_fragment(&mut self, fragment: FragmentMap) {
        self.borrow_mut().merge_fragment(fragment);
    }
}

/// The merged, page-lifetime mapping from trait key to implementor
/// entries — the union of every fragment merged so far.
///
/// Keys iterate in the order they were first appended; each entry list is
/// the concatenation, in fragment-arrival order, of every contributing
/// fragment's list for that key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImplementorIndex {
    traits: IndexMap<TraitKey, Vec<ImplementorEntry>>,
}

impl ImplementorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trait keys merged so far.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Merged entries for one trait key.
    pub fn entries(&self, key: &TraitKey) -> Option<&[ImplementorEntry]> {
        self.traits.get(key).map(Vec::as_slice)
    }

    /// Trait keys in first-appended order.
    pub fn trait_keys(&self) -> impl Iterator<Item = &TraitKey> {
        self.traits.keys()
    }

    /// Iterate keys and merged entry lists in first-appended key order.
    pub fn iter(&self) -> impl Iterator<Item = (&TraitKey, &[ImplementorEntry])> {
        self.traits
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }
}

impl FragmentSink for ImplementorIndex {
    fn merge_fragment(&mut self, fragment: FragmentMap) {
        for (key, mut entries) in fragment {
            self.traits.entry(key).or_default().append(&mut entries);
        }
    }
}

/// Deterministic JSON projection of a merged index.
///
/// Two indexes built from the same fragments in the same arrival order
/// project to the same value. This is the comparison surface for fixture
/// tests and for anything downstream that wants the index without the
/// in-memory types.
pub fn implementor_index_json(index: &ImplementorIndex) -> Value {
    let traits: Vec<Value> = index
        .iter()
        .map(|(key, entries)| {
            json!({
                "traitKey": key,
                "implementors": entries,
            })
        })
        .collect();
    json!({
        "schema": IMPLEMENTOR_INDEX_SCHEMA,
        "registryKind": IMPLEMENTOR_INDEX_KIND,
        "traits": traits,
    })
}

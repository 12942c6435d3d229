//! # Impldex Kernel
//!
//! A documentation page's "Implementors" section is assembled from many
//! independently loaded fragments, one per documented crate. This crate is
//! the data model for that assembly: what a fragment carries, and how the
//! per-trait entry lists combine into one merged index.
//!
//! The kernel is **payload-agnostic**: an implementor entry is opaque
//! pre-rendered display content. Nothing here parses, validates, or
//! deduplicates it. The only semantics the kernel prescribes is the merge:
//! append-only, order-preserving, per trait key.
//!
//! ## Architecture
//!
//! ```text
//! TraitKey                ← Fully-qualified trait path, the merge key
//!     │
//! ImplementorEntry        ← Opaque rendered description of one impl
//!     │
//! FragmentMap             ← One fragment's key → entry-list map
//!     │
//! FragmentSink            ← The merge contract: fold one fragment in
//!     │
//! ImplementorIndex        ← The merged page-lifetime index
//! ```
//!
//! Arrival-order tolerance (buffering fragments until a consumer exists)
//! lives one layer up, in `impldex-ingress`.

pub mod fragment;
pub mod index;

pub use fragment::{FragmentMap, ImplementorEntry, TraitKey};
pub use index::{FragmentSink, ImplementorIndex, implementor_index_json};

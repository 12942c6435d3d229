//! On-disk fragment files.
//!
//! Every fragment the page includes is one JSON document: a versioned
//! envelope around the per-trait implementor lists. The `fragment` name
//! identifies where the file came from (typically the documented crate)
//! and is informational only — the merge key is always the trait key
//! inside the map.
//!
//! Only the envelope is checked here. The rendered payload strings are
//! carried through untouched, and a file that fails to decode poisons
//! nothing: the hub and every previously registered fragment are exactly
//! as they were.

use crate::error::IngressError;
use impldex_kernel::FragmentMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const FRAGMENT_KIND: &str = "impldex.fragment.v1";
pub const FRAGMENT_SCHEMA: u32 = 1;

/// One decoded fragment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FragmentFile {
    pub schema: u32,
    pub fragment_kind: String,
    /// Informational fragment name; never a merge key.
    pub fragment: String,
    pub implementors: FragmentMap,
}

impl FragmentFile {
    /// A fragment file with the current envelope.
    pub fn new(fragment: impl Into<String>, implementors: FragmentMap) -> Self {
        Self {
            schema: FRAGMENT_SCHEMA,
            fragment_kind: FRAGMENT_KIND.to_string(),
            fragment: fragment.into(),
            implementors,
        }
    }
}

/// Decode one fragment document and check its envelope.
///
/// `origin` labels errors (a path, a URL, whatever the caller loads from).
pub fn parse_fragment(source: &str, origin: &str) -> Result<FragmentFile, IngressError> {
    let file: FragmentFile = serde_json::from_str(source).map_err(|e| IngressError::Json {
        path: origin.to_string(),
        detail: e.to_string(),
    })?;
    if file.schema != FRAGMENT_SCHEMA {
        return Err(IngressError::SchemaVersion {
            path: origin.to_string(),
            found: file.schema,
        });
    }
    if file.fragment_kind != FRAGMENT_KIND {
        return Err(IngressError::FragmentKind {
            path: origin.to_string(),
            found: file.fragment_kind,
        });
    }
    Ok(file)
}

/// Read and decode one fragment file from disk.
pub fn read_fragment_from_path(path: impl AsRef<Path>) -> Result<FragmentFile, IngressError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| IngressError::Io {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    parse_fragment(&source, &path.display().to_string())
}

//! Error types for the ingress layer.
//!
//! Registration itself never fails — a malformed payload string is the
//! consumer's problem and an empty fragment is a legal no-op. Errors only
//! arise at the two real boundaries: attaching a consumer twice, and
//! decoding fragment files.

/// Errors raised by the registration hub and the fragment file decoder.
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    /// A consumer is already attached; the hub keeps the first one.
    #[error("a consumer is already attached to this hub")]
    AlreadyAttached,

    #[error("{path}: I/O error: {detail}")]
    Io { path: String, detail: String },

    #[error("{path}: parse error: {detail}")]
    Json { path: String, detail: String },

    #[error("{path}: unsupported fragment schema version {found}")]
    SchemaVersion { path: String, found: u32 },

    #[error("{path}: unexpected fragment kind: {found:?}")]
    FragmentKind { path: String, found: String },
}

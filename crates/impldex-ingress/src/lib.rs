//! # Impldex Ingress
//!
//! The arrival side of the implementor index: fragments load one at a
//! time, in whatever order the host environment resolves them, and the
//! consumer that knows how to merge them may not exist yet when the first
//! fragment shows up. This crate makes that arrival order irrelevant.
//!
//! The [`RegistrationHub`] is the single entry point. Until a consumer
//! attaches, registered fragments are buffered; attachment drains the
//! buffer in arrival order and rebinds registration to forward directly.
//! The final merged index is identical for every interleaving of
//! fragments and attachment.
//!
//! Lifecycle of one hub (one page load):
//!
//! ```text
//! create → [register]* → attach → [register]*
//! ```
//!
//! A hub is an ordinary value with no ambient global state, so tests and
//! embedders construct one fresh wherever they need one. Decoding of
//! on-disk fragment files into [`FragmentMap`](impldex_kernel::FragmentMap)
//! values lives in [`decode`].

pub mod decode;
pub mod error;
pub mod hub;

pub use decode::{FragmentFile, parse_fragment, read_fragment_from_path};
pub use error::IngressError;
pub use hub::RegistrationHub;

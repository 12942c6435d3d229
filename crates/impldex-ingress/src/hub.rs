//! The registration hub: arrival-order-tolerant routing of fragments.
//!
//! Two states, selected by pattern matching rather than by probing for
//! the presence of a consumer:
//!
//! - **Buffering** (initial): no consumer yet; registered fragments queue
//!   in arrival order.
//! - **Ready** (terminal): a consumer is attached; registered fragments
//!   forward to it synchronously.
//!
//! The transition happens exactly once, at [`RegistrationHub::attach`],
//! which drains the queue to the new consumer strictly in buffered order
//! before any later fragment reaches it. There is no transition back; a
//! fresh page load is a fresh hub value.

use crate::error::IngressError;
use impldex_kernel::{FragmentMap, FragmentSink};
use tracing::{debug, warn};

enum HubState {
    Buffering { pending: Vec<FragmentMap> },
    Ready { sink: Box<dyn FragmentSink> },
}

/// Single entry point for fragment registration.
///
/// Registration never fails, never blocks, and never inspects payloads.
/// A fragment that never arrives simply never contributes; a hub whose
/// consumer never attaches buffers indefinitely, which is a legal
/// degraded state, not an error.
pub struct RegistrationHub {
    state: HubState,
}

impl Default for RegistrationHub {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationHub {
    /// A fresh hub in the buffering state.
    pub fn new() -> Self {
        Self {
            state: HubState::Buffering {
                pending: Vec::new(),
            },
        }
    }

    /// Register one fragment's map.
    ///
    /// Buffers it when no consumer is attached, forwards it synchronously
    /// when one is. Registering the same map twice produces two merge
    /// events — the hub does not deduplicate, so each fragment must call
    /// this exactly once.
    pub fn register(&mut self, fragment: FragmentMap) {
        match &mut self.state {
            HubState::Buffering { pending } => {
                pending.push(fragment);
                debug!(pending = pending.len(), "buffered fragment; no consumer attached");
            }
            HubState::Ready { sink } => {
                debug!(trait_keys = fragment.len(), "forwarding fragment to consumer");
                sink.merge_fragment(fragment);
            }
        }
    }

    /// Attach the consumer that merges fragments.
    ///
    /// Drains every buffered fragment to `sink` in arrival order, then
    /// forwards all future registrations directly. Attaching to a hub
    /// that already has a consumer returns
    /// [`IngressError::AlreadyAttached`] and leaves the first consumer
    /// (and anything it has merged) untouched.
    pub fn attach<S: FragmentSink + 'static>(&mut self, sink: S) -> Result<(), IngressError> {
        match &mut self.state {
            HubState::Ready { .. } => {
                warn!("rejected second consumer attachment");
                Err(IngressError::AlreadyAttached)
            }
            HubState::Buffering { pending } => {
                let pending = std::mem::take(pending);
                debug!(drained = pending.len(), "consumer attached; draining buffer");
                let mut sink: Box<dyn FragmentSink> = Box::new(sink);
                for fragment in pending {
                    sink.merge_fragment(fragment);
                }
                self.state = HubState::Ready { sink };
                Ok(())
            }
        }
    }

    /// Whether a consumer is attached.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, HubState::Ready { .. })
    }

    /// Fragments waiting for a consumer. Zero once attached.
    pub fn pending_len(&self) -> usize {
        match &self.state {
            HubState::Buffering { pending } => pending.len(),
            HubState::Ready { .. } => 0,
        }
    }
}

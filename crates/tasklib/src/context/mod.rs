//! Per-invocation context handed to task logic.

use std::fmt;

use crate::failure::{Failure, kinds};
use crate::transport::Transport;

/// The context object for one dispatch.
///
/// Owns the resolved transport handle, if any, for the duration of the
/// invocation. The shim never caches a handle across invocations — each
/// process run builds a fresh context.
pub struct InvocationContext {
    transport: Option<Box<dyn Transport>>,
}

impl InvocationContext {
    pub(crate) const fn new(transport: Option<Box<dyn Transport>>) -> Self {
        Self { transport }
    }

    /// Returns the resolved transport handle.
    ///
    /// # Errors
    ///
    /// Fails with a [`kinds::NO_TRANSPORT`] failure when the invocation
    /// carried no target descriptor. The error is distinct from a transport
    /// that resolved but could not connect; that case never reaches the task
    /// body at all.
    pub fn transport(&self) -> Result<&dyn Transport, Failure> {
        self.transport.as_deref().ok_or_else(|| {
            Failure::new(
                kinds::NO_TRANSPORT,
                "no target descriptor was provided for this invocation",
            )
        })
    }

    /// Returns `true` when a transport handle was resolved.
    #[must_use]
    pub const fn has_transport(&self) -> bool {
        self.transport.is_some()
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("transport", &self.transport.as_deref().map(Transport::name))
            .finish()
    }
}

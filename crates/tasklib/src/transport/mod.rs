//! Remote-execution transport resolution.
//!
//! When the input document carries a target descriptor under the reserved
//! [`TARGET_KEY`], the dispatcher asks the host-supplied
//! [`TransportRegistry`] for a live [`Transport`] handle before invoking the
//! task body. The registry call is a pass-through: the shim performs no
//! caching, no retries, and no validation of the transport's own protocol.
//! Handles live for exactly one dispatch.

use std::collections::HashMap;

use thiserror::Error;

use crate::failure::{Failure, kinds};
use crate::params::{Map, Value};

/// Reserved top-level input key holding the target descriptor.
pub const TARGET_KEY: &str = "_target";

/// Descriptor field naming the transport kind.
const PROTOCOL_KEY: &str = "protocol";

/// An opaque handle for remote execution, issued by the host registry.
///
/// Task logic may reference the handle to report which transport executed a
/// remote operation, so every handle exposes at least its name.
pub trait Transport {
    /// Returns the transport's identity.
    fn name(&self) -> &str;
}

/// Host collaborator issuing transport handles.
///
/// The shim depends on this single entry point and knows nothing about
/// specific transport protocols.
pub trait TransportRegistry {
    /// Obtains a handle for the given transport kind and configuration.
    ///
    /// The configuration is the full target descriptor mapping, including
    /// the `protocol` field itself.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] when no transport exists for the kind or
    /// the connection attempt fails.
    fn connect(
        &self,
        protocol: &str,
        config: &Map,
    ) -> Result<Box<dyn Transport>, TransportError>;
}

/// Errors raised while resolving or connecting a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The registry has no transport for the requested kind.
    #[error("no transport registered for protocol '{protocol}'")]
    UnknownProtocol {
        /// Transport kind that was requested.
        protocol: String,
    },
    /// The transport exists but the connection attempt failed.
    #[error("failed to connect transport '{protocol}': {message}")]
    Connect {
        /// Transport kind that was requested.
        protocol: String,
        /// Human-readable failure description.
        message: String,
    },
}

impl TransportError {
    /// Returns the transport kind the error refers to.
    #[must_use]
    pub const fn protocol(&self) -> &str {
        match self {
            Self::UnknownProtocol { protocol } | Self::Connect { protocol, .. } => {
                protocol.as_str()
            }
        }
    }
}

impl From<TransportError> for Failure {
    fn from(error: TransportError) -> Self {
        let mut details = Map::new();
        details.insert("protocol", error.protocol());
        Self::new(kinds::TRANSPORT_ERROR, error.to_string()).with_details(details)
    }
}

/// Extracts the target descriptor, if any, and resolves a transport handle.
///
/// Absent [`TARGET_KEY`] yields an empty transport context. A descriptor
/// that is not a mapping, or that lacks a string `protocol` field, is a
/// transport-error failure; registry errors propagate likewise.
pub(crate) fn resolve(
    registry: &dyn TransportRegistry,
    params: &Map,
) -> Result<Option<Box<dyn Transport>>, Failure> {
    let Some(descriptor) = params.get(TARGET_KEY) else {
        return Ok(None);
    };
    let config = descriptor.as_map().ok_or_else(|| {
        Failure::new(kinds::TRANSPORT_ERROR, "the target descriptor must be a mapping")
    })?;
    let protocol = config.get(PROTOCOL_KEY).and_then(Value::as_str).ok_or_else(|| {
        Failure::new(
            kinds::TRANSPORT_ERROR,
            "the target descriptor must carry a string `protocol` field",
        )
    })?;
    let transport = registry.connect(protocol, config).map_err(Failure::from)?;
    Ok(Some(transport))
}

/// Factory producing a transport handle from a target descriptor.
type TransportFactory = Box<dyn Fn(&Map) -> Result<Box<dyn Transport>, TransportError>>;

/// A simple in-process registry mapping protocol names to factories.
///
/// Suitable for hosts that wire up their transports at startup and for
/// tests. Unknown protocols yield [`TransportError::UnknownProtocol`].
///
/// # Example
///
/// ```
/// use tasklib::{Map, StaticRegistry, Transport, TransportRegistry};
///
/// struct Loopback;
///
/// impl Transport for Loopback {
///     fn name(&self) -> &str {
///         "loopback"
///     }
/// }
///
/// let mut registry = StaticRegistry::new();
/// registry.register("remote", |_config| Ok(Box::new(Loopback)));
/// let handle = registry.connect("remote", &Map::new()).expect("connect");
/// assert_eq!(handle.name(), "loopback");
/// ```
#[derive(Default)]
pub struct StaticRegistry {
    factories: HashMap<String, TransportFactory>,
}

impl StaticRegistry {
    /// Creates a registry with no transports.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for a protocol name, replacing any previous one.
    pub fn register<F>(&mut self, protocol: impl Into<String>, factory: F)
    where
        F: Fn(&Map) -> Result<Box<dyn Transport>, TransportError> + 'static,
    {
        self.factories.insert(protocol.into(), Box::new(factory));
    }
}

impl TransportRegistry for StaticRegistry {
    fn connect(
        &self,
        protocol: &str,
        config: &Map,
    ) -> Result<Box<dyn Transport>, TransportError> {
        self.factories.get(protocol).map_or_else(
            || {
                Err(TransportError::UnknownProtocol {
                    protocol: String::from(protocol),
                })
            },
            |factory| factory(config),
        )
    }
}

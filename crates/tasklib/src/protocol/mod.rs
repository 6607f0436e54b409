//! Response envelope written once per invocation.
//!
//! A dispatch produces exactly one [`Outcome`]. A success serialises the raw
//! task value; a failure serialises the [`Failure`] envelope. The document is
//! written in full with no trailing content, and the matching process exit
//! code is `0` for success and `1` for failure.

use std::io::Write;
use std::process::ExitCode;

use thiserror::Error;

use crate::failure::Failure;
use crate::params::Value;

/// The single result of one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The task body returned a value.
    Success(Value),
    /// The dispatch or the task body produced a classified failure.
    Failure(Failure),
}

impl Outcome {
    /// Returns `true` for a success outcome.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the process exit code matching this outcome.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Success(_) => ExitCode::SUCCESS,
            Self::Failure(_) => ExitCode::FAILURE,
        }
    }

    /// Writes the response envelope as a single JSON document.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvelopeError`] when serialisation or the write fails;
    /// no partial envelope is followed by further output from the shim.
    pub fn write(&self, output: &mut impl Write) -> Result<(), EnvelopeError> {
        let payload = match self {
            Self::Success(value) => serde_json::to_string(value),
            Self::Failure(failure) => serde_json::to_string(failure),
        }
        .map_err(|source| EnvelopeError::Serialise { source })?;
        output
            .write_all(payload.as_bytes())
            .map_err(|source| EnvelopeError::Write { source })?;
        output
            .flush()
            .map_err(|source| EnvelopeError::Write { source })
    }
}

/// Errors raised while emitting the response envelope.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Serialising the outcome to JSON failed.
    #[error("failed to serialise response envelope: {source}")]
    Serialise {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
    /// Writing the serialised envelope failed.
    #[error("failed to write response envelope: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

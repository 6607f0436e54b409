//! Single-shot task-execution shim over standard input/output.
//!
//! A task author implements the [`Task`] trait; the dispatcher reads one JSON
//! document from stdin, normalises it into a [`Map`] keyed by [`Key`]
//! identifiers, optionally resolves a remote-execution [`Transport`] from a
//! host-supplied [`TransportRegistry`], invokes the task body once, and
//! writes exactly one JSON response envelope to stdout. The process exit code
//! is `0` on success and `1` on any classified failure.
//!
//! The contract is strictly one request and one response per process: no
//! streaming, no retries, no concurrency, and no state survives the
//! invocation.
//!
//! # Fault policy
//!
//! Failures raised through [`Failure`] — including parse errors, missing
//! task bodies, and transport resolution errors — are serialised into the
//! response envelope. A panic inside task logic is deliberately *not*
//! coerced into an envelope: it propagates and terminates the process
//! abnormally with a non-zero status, so unclassified faults remain
//! distinguishable from structured failures.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use tasklib::{Failure, InvocationContext, Map, StaticRegistry, Task, Value};
//!
//! struct Greeter;
//!
//! impl Task for Greeter {
//!     const IMPLEMENTED: bool = true;
//!
//!     fn task(
//!         &self,
//!         params: &Map,
//!         _context: &InvocationContext,
//!     ) -> Result<Value, Failure> {
//!         let name = params.get("name").and_then(Value::as_str).unwrap_or("stranger");
//!         let mut response = Map::new();
//!         response.insert("result", format!("Hi, my name is {name}"));
//!         Ok(Value::from(response))
//!     }
//! }
//!
//! let mut input = Cursor::new(r#"{"name": "Lucy"}"#);
//! let mut output = Vec::new();
//! let mut errors = Vec::new();
//! let _exit =
//!     tasklib::run_with_io(&Greeter, &StaticRegistry::new(), &mut input, &mut output, &mut errors);
//! assert_eq!(output, br#"{"result":"Hi, my name is Lucy"}"#);
//! ```

mod context;
mod dispatch;
mod failure;
mod params;
mod protocol;
mod task;
mod transport;

pub use context::InvocationContext;
pub use dispatch::{run, run_with_io, run_with_registry};
pub use failure::{Failure, kinds};
pub use params::{Key, Map, Value};
pub use protocol::{EnvelopeError, Outcome};
pub use task::Task;
pub use transport::{StaticRegistry, TARGET_KEY, Transport, TransportError, TransportRegistry};

#[cfg(test)]
mod tests;

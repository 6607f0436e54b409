//! The author-facing task capability.

use crate::context::InvocationContext;
use crate::failure::Failure;
use crate::params::{Map, Value};

/// Task logic invoked once per process with normalised parameters.
///
/// Implementations override both items: [`IMPLEMENTED`](Self::IMPLEMENTED)
/// declares the capability, and [`task`](Self::task) provides the body. The
/// dispatcher checks the capability flag *before* invocation, so an empty
/// `impl Task` block produces the canonical not-implemented envelope without
/// the body ever running. Should an implementation set the flag without
/// overriding the body, the default body returns the same envelope rather
/// than an unclassified fault.
///
/// # Example
///
/// ```
/// use tasklib::{Failure, InvocationContext, Map, Task, Value};
///
/// struct Greeter;
///
/// impl Task for Greeter {
///     const IMPLEMENTED: bool = true;
///
///     fn task(
///         &self,
///         params: &Map,
///         _context: &InvocationContext,
///     ) -> Result<Value, Failure> {
///         let name = params.get("name").and_then(Value::as_str).unwrap_or("stranger");
///         let mut response = Map::new();
///         response.insert("result", format!("Hi, my name is {name}"));
///         Ok(Value::from(response))
///     }
/// }
/// ```
pub trait Task {
    /// Declares that a task body has been provided.
    ///
    /// Checked by the dispatcher without invoking the body.
    const IMPLEMENTED: bool = false;

    /// Executes the task body with the normalised parameters.
    ///
    /// Remote-capable tasks read the resolved transport from `context`.
    /// Structured failures are raised by returning a [`Failure`]; any other
    /// fault (a panic) terminates the process abnormally with no envelope.
    ///
    /// # Errors
    ///
    /// Returns the author-chosen [`Failure`], serialised verbatim into the
    /// response envelope with exit code 1.
    fn task(&self, params: &Map, context: &InvocationContext) -> Result<Value, Failure> {
        let _ = (params, context);
        Err(Failure::not_implemented())
    }
}

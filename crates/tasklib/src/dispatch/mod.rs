//! Orchestration core: one read, one dispatch, one response, one exit code.
//!
//! The pipeline is a linear state machine with no back-edges: read and
//! normalise parameters, resolve the transport context, check the task
//! capability, invoke the body, and emit exactly one response envelope. Any
//! classified failure along the way short-circuits into the failure
//! envelope; the exit code always matches the outcome.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use crate::context::InvocationContext;
use crate::failure::{Failure, kinds};
use crate::params::{Map, Value};
use crate::protocol::Outcome;
use crate::task::Task;
use crate::transport::{self, StaticRegistry, TransportRegistry};

/// Runs a task against real stdin/stdout with no transports registered.
///
/// Intended as the `main` body of a task binary that performs no remote
/// execution; an input carrying a target descriptor fails with a transport
/// error envelope.
///
/// # Example
///
/// ```no_run
/// use std::process::ExitCode;
///
/// use tasklib::Task;
///
/// struct EmptyTask;
///
/// impl Task for EmptyTask {}
///
/// fn main() -> ExitCode {
///     tasklib::run(&EmptyTask)
/// }
/// ```
#[must_use]
pub fn run<T: Task>(task: &T) -> ExitCode {
    run_with_registry(task, &StaticRegistry::new())
}

/// Runs a task against real stdin/stdout with a host-supplied registry.
#[must_use]
pub fn run_with_registry<T: Task>(task: &T, registry: &dyn TransportRegistry) -> ExitCode {
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut errors = io::stderr().lock();
    run_with_io(task, registry, &mut input, &mut output, &mut errors)
}

/// Runs a task with fully injected streams.
///
/// The response envelope goes to `output`; `errors` receives diagnostics
/// only when the envelope itself cannot be written. The returned exit code
/// is [`ExitCode::SUCCESS`] for a success outcome and [`ExitCode::FAILURE`]
/// otherwise.
#[must_use]
pub fn run_with_io<T, R, W, E>(
    task: &T,
    registry: &dyn TransportRegistry,
    input: &mut R,
    output: &mut W,
    errors: &mut E,
) -> ExitCode
where
    T: Task,
    R: Read,
    W: Write,
    E: Write,
{
    let outcome = dispatch(task, registry, input);
    if let Err(error) = outcome.write(output) {
        writeln!(errors, "{error}").ok();
        return ExitCode::FAILURE;
    }
    outcome.exit_code()
}

/// Produces the single outcome for one invocation.
fn dispatch<T: Task>(
    task: &T,
    registry: &dyn TransportRegistry,
    input: &mut impl Read,
) -> Outcome {
    let params = match read_params(input) {
        Ok(params) => params,
        Err(failure) => return Outcome::Failure(failure),
    };
    let context = match transport::resolve(registry, &params) {
        Ok(handle) => InvocationContext::new(handle),
        Err(failure) => return Outcome::Failure(failure),
    };
    if !T::IMPLEMENTED {
        return Outcome::Failure(Failure::not_implemented());
    }
    match task.task(&params, &context) {
        Ok(value) => Outcome::Success(value),
        Err(failure) => Outcome::Failure(failure),
    }
}

/// Reads the full input stream once and normalises the parameter tree.
///
/// An empty stream, invalid JSON syntax, or a non-object top level are all
/// parse-error failures routed through the envelope path.
fn read_params(input: &mut impl Read) -> Result<Map, Failure> {
    let mut raw = String::new();
    input.read_to_string(&mut raw).map_err(|error| {
        Failure::new(kinds::PARSE_ERROR, format!("failed to read task input: {error}"))
    })?;
    let document: serde_json::Value = serde_json::from_str(&raw).map_err(|error| {
        Failure::new(kinds::PARSE_ERROR, format!("invalid task input JSON: {error}"))
    })?;
    match Value::from(document) {
        Value::Map(params) => Ok(params),
        _ => Err(Failure::new(
            kinds::PARSE_ERROR,
            "task input must be a JSON object",
        )),
    }
}

//! Demo tasks exercising the full stdin → envelope → exit code contract.
//!
//! Each task here backs one binary under `src/bin/`; the integration tests
//! drive those binaries end to end with `assert_cmd`. The tasks mirror the
//! canonical author patterns: no body at all, a plain echo, a deliberate
//! structured failure, a remote-transport reader, a deep parameter reader,
//! and an unclassified fault.

use tasklib::{
    Failure, InvocationContext, Map, StaticRegistry, Task, Transport, TransportError, Value,
};

/// Task with no body; dispatch yields the fixed not-implemented envelope.
pub struct EmptyTask;

impl Task for EmptyTask {}

/// Greets the caller by the `name` parameter.
pub struct EchoTask;

impl Task for EchoTask {
    const IMPLEMENTED: bool = true;

    fn task(&self, params: &Map, _context: &InvocationContext) -> Result<Value, Failure> {
        let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
        let mut response = Map::new();
        response.insert("result", format!("Hi, my name is {name}"));
        Ok(Value::from(response))
    }
}

/// Raises a deliberate structured failure with author-chosen details.
pub struct ErrorTask;

impl Task for ErrorTask {
    const IMPLEMENTED: bool = true;

    fn task(&self, _params: &Map, _context: &InvocationContext) -> Result<Value, Failure> {
        Err(Failure::new("task/error-kind", "task error message")
            .with_details(Value::from("Additional details")))
    }
}

/// Reports the name of the transport that carried the invocation.
pub struct RemoteTask;

impl Task for RemoteTask {
    const IMPLEMENTED: bool = true;

    fn task(&self, params: &Map, context: &InvocationContext) -> Result<Value, Failure> {
        let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
        let transport = context.transport()?;
        let mut response = Map::new();
        response.insert(
            "result",
            format!("Hi, my name is {name}, transport: {}", transport.name()),
        );
        Ok(Value::from(response))
    }
}

/// Looks up normalised keys at depth and echoes the parameters back merged
/// with the values it found, proving normalisation reached every level.
pub struct NestedTask;

impl Task for NestedTask {
    const IMPLEMENTED: bool = true;

    fn task(&self, params: &Map, _context: &InvocationContext) -> Result<Value, Failure> {
        let nested = params
            .get("top_level")
            .and_then(Value::as_map)
            .and_then(|inner| inner.get("nested_key"))
            .cloned()
            .unwrap_or(Value::Null);
        let in_array = params
            .get("array_keys")
            .and_then(Value::as_sequence)
            .and_then(<[Value]>::first)
            .and_then(Value::as_map)
            .and_then(|element| element.get("array_key"))
            .cloned()
            .unwrap_or(Value::Null);

        let mut merged = params.clone();
        merged.insert("nested_hash", nested);
        merged.insert("array_hash", in_array);

        let mut response = Map::new();
        response.insert("result", Value::from(merged));
        Ok(Value::from(response))
    }
}

/// Panics mid-body, modelling an unclassified runtime fault.
pub struct PanicTask;

impl Task for PanicTask {
    const IMPLEMENTED: bool = true;

    #[expect(
        clippy::panic_in_result_fn,
        reason = "models an unclassified task fault terminating the process abnormally"
    )]
    fn task(&self, _params: &Map, _context: &InvocationContext) -> Result<Value, Failure> {
        panic!("task logic fault")
    }
}

/// Transport handle whose identity is derived from the target descriptor.
pub struct NamedTransport {
    name: String,
}

impl Transport for NamedTransport {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Builds the registry used by the remote demo binary.
///
/// Registers the `remote` protocol; the issued handle is named after the
/// descriptor's `remote-transport` field with a `_transport` suffix.
#[must_use]
pub fn remote_registry() -> StaticRegistry {
    let mut registry = StaticRegistry::new();
    registry.register("remote", |config| {
        let transport = config
            .get("remote-transport")
            .and_then(Value::as_str)
            .ok_or_else(|| TransportError::Connect {
                protocol: String::from("remote"),
                message: String::from("the target descriptor names no remote-transport"),
            })?;
        Ok(Box::new(NamedTransport {
            name: format!("{transport}_transport"),
        }))
    });
    registry
}

//! Behaviour-driven tests for the one-shot dispatch pipeline.

use std::io::Cursor;
use std::process::ExitCode;
use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{Failure, InvocationContext, Map, StaticRegistry, Task, Value, run_with_io};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Demo tasks
// ---------------------------------------------------------------------------

struct EchoTask;

impl Task for EchoTask {
    const IMPLEMENTED: bool = true;

    fn task(&self, params: &Map, _context: &InvocationContext) -> Result<Value, Failure> {
        let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
        let mut response = Map::new();
        response.insert("result", format!("Hi, my name is {name}"));
        Ok(Value::from(response))
    }
}

struct EmptyTask;

impl Task for EmptyTask {}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    input: String,
    output: Option<String>,
    exit: Option<ExitCode>,
}

impl TestWorld {
    fn dispatch<T: Task>(&mut self, task: &T) {
        let mut reader = Cursor::new(self.input.clone());
        let mut output = Vec::new();
        let mut errors = Vec::new();
        let exit = run_with_io(
            task,
            &StaticRegistry::new(),
            &mut reader,
            &mut output,
            &mut errors,
        );
        self.output = Some(String::from_utf8(output).expect("utf-8 envelope"));
        self.exit = Some(exit);
    }
}

#[fixture]
fn world() -> TestWorld {
    TestWorld::default()
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the task parameter {name} is {value}")]
fn given_parameter(world: &mut TestWorld, name: QuotedString, value: QuotedString) {
    world.input = format!(r#"{{"{}": "{}"}}"#, name.as_str(), value.as_str());
}

#[given("the raw task input {text}")]
fn given_raw_input(world: &mut TestWorld, text: QuotedString) {
    world.input = text.as_str().to_owned();
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the echo task is dispatched")]
fn when_echo_dispatched(world: &mut TestWorld) {
    world.dispatch(&EchoTask);
}

#[when("the empty task is dispatched")]
fn when_empty_dispatched(world: &mut TestWorld) {
    world.dispatch(&EmptyTask);
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the dispatch succeeds")]
fn then_dispatch_succeeds(world: &mut TestWorld) {
    assert_eq!(world.exit.expect("exit code should be set"), ExitCode::SUCCESS);
}

#[then("the dispatch fails")]
fn then_dispatch_fails(world: &mut TestWorld) {
    assert_eq!(world.exit.expect("exit code should be set"), ExitCode::FAILURE);
}

#[then("the response contains {snippet}")]
fn then_response_contains(world: &mut TestWorld, snippet: QuotedString) {
    let output = world.output.as_ref().expect("response should be set");
    assert!(
        output.contains(snippet.as_str()),
        "expected response to contain '{}', got: {}",
        snippet.as_str(),
        output
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/task_dispatch.feature",
    name = "A provided task body produces a success envelope"
)]
fn provided_body_succeeds(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_dispatch.feature",
    name = "A missing task body produces the fixed failure envelope"
)]
fn missing_body_fails(world: TestWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_dispatch.feature",
    name = "Malformed input is classified as a parse error"
)]
fn malformed_input_fails(world: TestWorld) {
    let _ = world;
}

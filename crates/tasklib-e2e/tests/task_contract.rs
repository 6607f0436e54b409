//! End-to-end contract tests for the demo task binaries.
//!
//! Each test feeds a JSON document to a task binary on stdin and asserts the
//! exact response envelope on stdout together with the process exit code.

use assert_cmd::Command;
use predicates::str::{contains, is_empty, starts_with};
use rstest::rstest;

fn task_cmd(name: &str) -> Command {
    Command::cargo_bin(name).expect("task binary should be built")
}

#[test]
fn empty_task_reports_the_fixed_not_implemented_envelope() {
    task_cmd("empty_task")
        .write_stdin(r#"{"name": "Lucy"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(
            "{\"kind\":\"tasklib/not-implemented\",\
             \"msg\":\"The task author must implement the `task` method in the task\",\
             \"details\":{}}",
        );
}

#[test]
fn echo_task_greets_the_caller() {
    task_cmd("echo_task")
        .write_stdin(r#"{"name": "Lucy"}"#)
        .assert()
        .success()
        .stdout(r#"{"result":"Hi, my name is Lucy"}"#);
}

#[test]
fn error_task_serialises_its_structured_failure_verbatim() {
    task_cmd("error_task")
        .write_stdin(r#"{"name": "Lucy"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(r#"{"kind":"task/error-kind","msg":"task error message","details":"Additional details"}"#);
}

#[test]
fn remote_task_reads_the_transport_from_its_context() {
    task_cmd("remote_task")
        .write_stdin(
            r#"{"name": "Lucy", "_target": {"protocol": "remote", "remote-transport": "wibble"}}"#,
        )
        .assert()
        .success()
        .stdout(r#"{"result":"Hi, my name is Lucy, transport: wibble_transport"}"#);
}

#[test]
fn remote_task_without_a_target_fails_with_no_transport() {
    task_cmd("remote_task")
        .write_stdin(r#"{"name": "Lucy"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("tasklib/no-transport"));
}

#[test]
fn target_descriptor_with_unregistered_protocol_is_a_transport_failure() {
    task_cmd("echo_task")
        .write_stdin(r#"{"name": "Lucy", "_target": {"protocol": "remote"}}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("tasklib/transport-error"));
}

#[test]
fn nested_task_sees_normalised_keys_at_every_depth() {
    task_cmd("nested_task")
        .write_stdin(r#"{"top_level": {"nested_key": "foo"}, "array_keys": [{"array_key": "bar"}]}"#)
        .assert()
        .success()
        .stdout(
            "{\"result\":{\"top_level\":{\"nested_key\":\"foo\"},\
             \"array_keys\":[{\"array_key\":\"bar\"}],\
             \"nested_hash\":\"foo\",\"array_hash\":\"bar\"}}",
        );
}

#[rstest]
#[case::malformed("this is not JSON")]
#[case::empty("")]
#[case::non_object("[1, 2, 3]")]
fn invalid_input_yields_a_parse_error_envelope(#[case] input: &str) {
    task_cmd("echo_task")
        .write_stdin(input)
        .assert()
        .failure()
        .code(1)
        .stdout(starts_with(r#"{"kind":"tasklib/parse-error""#));
}

#[test]
fn panicking_task_terminates_abnormally_without_an_envelope() {
    task_cmd("panic_task")
        .write_stdin(r#"{"name": "Lucy"}"#)
        .assert()
        .failure()
        .stdout(is_empty());
}

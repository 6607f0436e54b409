//! Task binary with no task body.

use std::process::ExitCode;

use tasklib_e2e::EmptyTask;

fn main() -> ExitCode {
    tasklib::run(&EmptyTask)
}

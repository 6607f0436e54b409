//! Task binary raising a deliberate structured failure.

use std::process::ExitCode;

use tasklib_e2e::ErrorTask;

fn main() -> ExitCode {
    tasklib::run(&ErrorTask)
}

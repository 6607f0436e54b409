//! Task binary greeting the caller by name.

use std::process::ExitCode;

use tasklib_e2e::EchoTask;

fn main() -> ExitCode {
    tasklib::run(&EchoTask)
}

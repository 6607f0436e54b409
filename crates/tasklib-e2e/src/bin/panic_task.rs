//! Task binary whose body faults without a structured failure.

use std::process::ExitCode;

use tasklib_e2e::PanicTask;

fn main() -> ExitCode {
    tasklib::run(&PanicTask)
}

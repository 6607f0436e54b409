//! Task binary echoing deeply nested parameters back to the caller.

use std::process::ExitCode;

use tasklib_e2e::NestedTask;

fn main() -> ExitCode {
    tasklib::run(&NestedTask)
}

//! Task binary reporting the transport that carried the invocation.

use std::process::ExitCode;

use tasklib_e2e::{RemoteTask, remote_registry};

fn main() -> ExitCode {
    tasklib::run_with_registry(&RemoteTask, &remote_registry())
}

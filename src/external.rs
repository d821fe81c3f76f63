//! Launching external programs as child processes.

use crate::command::ExitCode;
use crate::errors::{ShellError, ShellResult};
use std::process::{Command, ExitStatus};

/// Spawns the program `name` with `args` as its argument vector and blocks
/// until the child reaches a terminal state.
///
/// The name is resolved through the operating system's executable search
/// path, and all three standard streams are inherited from the shell.
/// A stopped child does not complete the wait; only exit or death by a
/// signal does.
///
/// Returns the child's exit code, with death by signal N reported as
/// 128+N. The caller decides what to do with it; the shell itself treats
/// every terminal state the same and keeps running.
pub fn launch(name: &str, args: &[&str]) -> ShellResult<ExitCode> {
    let mut child = Command::new(name)
        .args(args)
        .spawn()
        .map_err(|source| ShellError::Launch {
            name: name.to_string(),
            source,
        })?;
    log::debug!("spawned {} as pid {}", name, child.id());

    let exit_status = child.wait()?;
    let code = match exit_status.code() {
        Some(code) => code,
        None => terminated_by_signal(exit_status),
    };
    log::debug!("{} finished with status {}", name, code);
    Ok(code)
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match ExitStatusExt::signal(&exit_status) {
        Some(signal) => 128 + signal,
        None => -1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> ExitCode {
    -1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn successful_child_reports_exit_zero() {
        let code = launch("/bin/sh", &["-c", "exit 0"]).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    #[cfg(unix)]
    fn failing_child_reports_its_exit_code() {
        let code = launch("/bin/sh", &["-c", "exit 7"]).unwrap();
        assert_eq!(code, 7);
    }

    #[test]
    #[cfg(unix)]
    fn child_killed_by_a_signal_reports_128_plus_n() {
        let code = launch("/bin/sh", &["-c", "kill -9 $$"]).unwrap();
        assert_eq!(code, 128 + 9);
    }

    #[test]
    #[cfg(unix)]
    fn bare_name_resolves_through_the_search_path() {
        let code = launch("sh", &["-c", "exit 0"]).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let err = launch("definitely-not-a-real-program", &[]).unwrap_err();
        match err {
            ShellError::Launch { name, source } => {
                assert_eq!(name, "definitely-not-a-real-program");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected a launch error, got {:?}", other),
        }
    }
}

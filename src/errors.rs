//! Recoverable errors surfaced on the shell's error stream.
//!
//! Every variant renders as the exact one-line diagnostic the user sees;
//! the interpreter prefixes it with the program name when reporting. None
//! of these stop the shell. The only fatal condition, allocation failure,
//! aborts the process inside the allocator and never reaches this type.

use std::io;
use thiserror::Error;

/// What can go wrong while executing a single command line.
#[derive(Error, Debug)]
pub enum ShellError {
    /// `cd` was invoked without a target directory.
    #[error("expected argument to \"cd\"")]
    MissingCdTarget,

    /// The working directory change itself failed.
    #[error("cd: {path}: {source}")]
    Chdir { path: String, source: io::Error },

    /// The external program could not be started (not found, not
    /// executable, or process creation failed).
    #[error("{name}: {source}")]
    Launch { name: String, source: io::Error },

    /// A read or write on one of the shell's own streams failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_cd_target_renders_the_usage_text() {
        assert_eq!(
            ShellError::MissingCdTarget.to_string(),
            "expected argument to \"cd\""
        );
    }

    #[test]
    fn chdir_error_names_the_path_and_the_os_reason() {
        let err = ShellError::Chdir {
            path: "/no/such/dir".to_string(),
            source: io::Error::from_raw_os_error(2),
        };
        let text = err.to_string();
        assert!(text.starts_with("cd: /no/such/dir: "), "got: {}", text);
    }

    #[test]
    fn launch_error_names_the_program() {
        let err = ShellError::Launch {
            name: "frobnicate".to_string(),
            source: io::Error::from_raw_os_error(2),
        };
        assert!(err.to_string().starts_with("frobnicate: "));
    }
}

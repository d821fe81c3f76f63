//! Shared vocabulary for command execution results.

/// Exit status of an executed command, following shell conventions:
/// 0 for success, nonzero for failure, 128+N for death by signal N.
pub type ExitCode = i32;

/// Tells the main loop whether to read another line or stop.
///
/// Every execution path produces one of these; only [`crate::Interpreter`]
/// consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// Keep reading and dispatching lines.
    Continue,
    /// Terminate the shell.
    Exit,
}

//! A minimal interactive shell.
//!
//! `minish` repeatedly reads a line from its input, splits it into
//! whitespace-delimited tokens, and either runs one of a small fixed set
//! of builtins in its own process or launches the named external program
//! and waits for it to finish. There is no quoting, no pipelines, no
//! redirection and no job control; the point is the bare
//! read-dispatch-wait loop on top of the operating system's process
//! facilities.
//!
//! The entry point is [`Interpreter`], which drives the loop over any
//! input/output streams. The [`builtin`] module holds the in-process
//! commands; everything else a line names is spawned as a child process
//! and waited for.

pub mod builtin;
pub mod command;
pub mod errors;
mod external;
mod interpreter;
mod lexer;
mod reader;

/// Re-export of the interactive loop driver.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;

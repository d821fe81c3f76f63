//! The read-dispatch loop that ties the shell together.

use crate::builtin::Builtin;
use crate::command::ControlFlow;
use crate::errors::{ShellError, ShellResult};
use crate::{external, lexer, reader};
use anyhow::Context;
use std::io::{self, BufRead, Write};

/// Text written before every read.
pub const PROMPT: &str = "minish> ";

/// The interactive interpreter: reads lines from `input`, dispatches each
/// one, and writes builtin output to `out` and diagnostics to `err`.
///
/// Generic over its streams, so the whole loop runs against in-memory
/// buffers in tests exactly as it runs against the process's stdio.
///
/// Example
/// ```
/// use minish::Interpreter;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// Interpreter::new(&b"help\nexit\n"[..], &mut out, &mut err)
///     .run()
///     .unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("built in"));
/// ```
pub struct Interpreter<R, O, E> {
    input: R,
    out: O,
    err: E,
}

impl<R: BufRead, O: Write, E: Write> Interpreter<R, O, E> {
    /// Creates an interpreter over the given streams.
    pub fn new(input: R, out: O, err: E) -> Self {
        Self { input, out, err }
    }

    /// Runs the read-dispatch loop until `exit`, end of input, or a failure
    /// of the shell's own streams. Recoverable command errors are reported
    /// to the error stream and the loop keeps going.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            write!(self.out, "{}", PROMPT).context("failed to write the prompt")?;
            self.out.flush().context("failed to flush the prompt")?;

            let line = match reader::read_line(&mut self.input)
                .context("failed to read a command line")?
            {
                Some(line) => line,
                None => {
                    log::debug!("end of input, leaving the loop");
                    break;
                }
            };

            let tokens = lexer::split_into_tokens(&line);
            match self.dispatch(&tokens) {
                Ok(ControlFlow::Continue) => {}
                Ok(ControlFlow::Exit) => break,
                Err(error) => {
                    self.report(&error).context("failed to report an error")?;
                }
            }
        }
        Ok(())
    }

    /// Tokenizes and dispatches a single command line the way one loop
    /// iteration would, without prompting or reading further input.
    pub fn run_command(&mut self, line: &str) -> anyhow::Result<()> {
        let tokens = lexer::split_into_tokens(line);
        if let Err(error) = self.dispatch(&tokens) {
            self.report(&error).context("failed to report an error")?;
        }
        Ok(())
    }

    /// Routes one token sequence: an empty sequence does nothing, a first
    /// token matching a builtin runs in-process, anything else is launched
    /// as an external program. A child's exit status never stops the loop.
    pub fn dispatch(&mut self, tokens: &[&str]) -> ShellResult<ControlFlow> {
        let (name, args) = match tokens.split_first() {
            Some(split) => split,
            None => return Ok(ControlFlow::Continue),
        };
        match Builtin::lookup(name) {
            Some(builtin) => {
                log::debug!("running {} as a builtin", name);
                builtin.run(tokens, &mut self.out)
            }
            None => {
                log::debug!("launching {} as an external program", name);
                external::launch(name, args)?;
                Ok(ControlFlow::Continue)
            }
        }
    }

    fn report(&mut self, error: &ShellError) -> io::Result<()> {
        writeln!(self.err, "minish: {}", error)
    }
}

//! Commands executed inside the shell's own process.
//!
//! The set is fixed at compile time; adding a command means adding a
//! variant and a row in [`BUILTINS`]. Everything else the user types is
//! launched as an external program.

use crate::command::ControlFlow;
use crate::errors::{ShellError, ShellResult};
use std::env;
use std::io::Write;

/// ANSI sequence that blanks the terminal, used by `cls` and at startup.
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// One of the shell's built-in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
    Exit,
    Cls,
}

/// Every builtin the shell knows, in the order `help` lists them.
pub static BUILTINS: [Builtin; 4] = [Builtin::Cd, Builtin::Help, Builtin::Exit, Builtin::Cls];

impl Builtin {
    /// Canonical name of the command as typed at the prompt.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Cd => "cd",
            Builtin::Help => "help",
            Builtin::Exit => "exit",
            Builtin::Cls => "cls",
        }
    }

    /// Finds the builtin `name` refers to, by exact match over [`BUILTINS`].
    pub fn lookup(name: &str) -> Option<Builtin> {
        BUILTINS.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Runs the builtin with the full token sequence; `argv[0]` is the
    /// command's own name. Arguments beyond those documented are ignored.
    ///
    /// Only `exit` asks the loop to stop; every other outcome, including a
    /// returned error, means the shell keeps reading.
    pub fn run(self, argv: &[&str], out: &mut dyn Write) -> ShellResult<ControlFlow> {
        match self {
            Builtin::Cd => cd(argv),
            Builtin::Help => help(out),
            Builtin::Exit => Ok(ControlFlow::Exit),
            Builtin::Cls => cls(out),
        }
    }
}

/// `cd <path>`: changes the shell's working directory. Children launched
/// afterwards inherit the new directory.
fn cd(argv: &[&str]) -> ShellResult<ControlFlow> {
    let target = match argv.get(1) {
        Some(target) => *target,
        None => return Err(ShellError::MissingCdTarget),
    };
    env::set_current_dir(target).map_err(|source| ShellError::Chdir {
        path: target.to_string(),
        source,
    })?;
    Ok(ControlFlow::Continue)
}

/// `help`: prints the usage banner and the builtin list.
fn help(out: &mut dyn Write) -> ShellResult<ControlFlow> {
    writeln!(out, "minish {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Type program names and arguments, and hit enter.")?;
    writeln!(out, "The following are built in:")?;
    for builtin in BUILTINS {
        writeln!(out, "  {}", builtin.name())?;
    }
    writeln!(out, "Use the man command for information on other programs.")?;
    Ok(ControlFlow::Continue)
}

/// `cls`: clears the terminal.
fn cls(out: &mut dyn Write) -> ShellResult<ControlFlow> {
    write!(out, "{}", CLEAR_SCREEN)?;
    out.flush()?;
    Ok(ControlFlow::Continue)
}

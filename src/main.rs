use anyhow::Result;
use argh::FromArgs;
use minish::Interpreter;
use minish::builtin::CLEAR_SCREEN;
use std::io::{self, Write};

#[derive(FromArgs)]
/// A minimal interactive shell.
struct Args {
    /// run a single command line and exit
    #[argh(option, short = 'c')]
    command: Option<String>,

    /// print the version and exit
    #[argh(switch)]
    version: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();

    if args.version {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if let Some(line) = args.command {
        return Interpreter::new(io::empty(), io::stdout(), io::stderr()).run_command(&line);
    }

    let mut stdout = io::stdout();
    write!(stdout, "{}", CLEAR_SCREEN)?;

    Interpreter::new(io::stdin().lock(), stdout, io::stderr()).run()
}

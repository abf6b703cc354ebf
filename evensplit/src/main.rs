#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod session;

use bootstrap::AppConfig;
use std::{
    borrow::Cow,
    env, fs,
    io::{self, BufRead as _},
    process,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    bootstrap::init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match env::args().nth(1).as_deref() {
        Some("-h" | "--help") => {
            println!("Usage: evensplit [script-file]");
            Ok(())
        }
        Some(path) => {
            let source = fs::read_to_string(path)
                .map_err(|err| format!("Failed to read '{path}': {err}"))?;
            session::run_script(&source, &mut out, &config)
        }
        None => {
            let stdin = io::stdin();
            session::run_interactive(stdin.lock().lines(), &mut out, &config)
        }
    }
}

//! `redline`: compare two texts and print track-changes output.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let use_color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    logging::init(cli.verbose, use_color);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let outcome = commands::run(&cli.command, use_color, &mut out);
    let flushed = out.flush();

    match (outcome, flushed) {
        (Ok(outcome), Ok(())) => {
            tracing::debug!(?outcome, "comparison finished");
            ExitCode::from(outcome.exit_code())
        }
        (Err(err), _) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(commands::EXIT_ERROR)
        }
        (Ok(_), Err(err)) => {
            eprintln!("error: failed to write output: {}", err);
            ExitCode::from(commands::EXIT_ERROR)
        }
    }
}

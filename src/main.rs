//! testvid CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! pipeline, and exit with the status the runner chose.
//! For programmatic use, prefer the library API (`testvid::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("testvid: {e}");
            ExitCode::FAILURE
        }
    }
}

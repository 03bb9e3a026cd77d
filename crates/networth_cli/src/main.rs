//! `networth` command-line front end.
//!
//! # Responsibility
//! - Render derived views as text and forward edits to the core store.
//! - Ask for explicit confirmation before destructive commands.

mod cli;
mod dispatch;
mod output;

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    match dispatch::run(&cli) {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

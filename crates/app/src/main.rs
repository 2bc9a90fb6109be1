//! RocketShoes cart CLI

use std::{io, process::ExitCode};

use clap::Parser;

mod cli;

#[tokio::main]
pub async fn main() -> ExitCode {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();
    let mut out = io::stdout().lock();

    match cli.run(&mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if !error.is_reported() {
                eprintln!("{error}");
            }

            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::cli::{CliArgs, Commands};
use crate::error::CliError;

mod cli;
mod commands;
mod error;
mod media;

pub type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: CliArgs) -> CliResult<()> {
    let config = args.cipher_config();

    match args.command {
        Commands::Encrypt(encrypt) => encrypt.run(config),
        Commands::Decrypt(decrypt) => decrypt.run(config),
        Commands::Hide(hide) => hide.run(config),
        Commands::Unveil(unveil) => unveil.run(config),
        Commands::Inspect(inspect) => inspect.run(),
    }
}

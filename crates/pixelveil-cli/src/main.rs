use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = pixelveil_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();

    match args.command {
        Commands::Hide(cmd) => cmd.run(),
        Commands::Reveal(cmd) => cmd.run(),
        Commands::RevealRaw(cmd) => cmd.run(),
    }
}

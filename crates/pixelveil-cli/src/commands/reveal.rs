use std::path::PathBuf;

use clap::Args;

use pixelveil_core::api::reveal::Revealed;

use crate::CliResult;

/// Reveals the payload hidden in an image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Source image that contains hidden data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// A binary payload will be stored in that folder
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output folder",
        required = true
    )]
    pub output_folder: PathBuf,
}

impl RevealArgs {
    pub fn run(self) -> CliResult<()> {
        match pixelveil_core::commands::reveal(&self.media, &self.output_folder)? {
            Revealed::Text(text) => println!("{text}"),
            Revealed::File { kind, path } => {
                println!("revealed a {kind} payload: {}", path.display())
            }
        }

        Ok(())
    }
}

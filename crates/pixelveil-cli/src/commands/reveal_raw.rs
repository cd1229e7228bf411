use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Reveals the raw bit plane of an image, without payload framing
#[derive(Args, Debug)]
pub struct RevealRawArgs {
    /// Source image that contains hidden data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl RevealRawArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::reveal_raw(&self.media, &self.output_file)
    }
}

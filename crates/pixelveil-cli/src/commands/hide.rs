use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::CliResult;

/// Hides a text message or a payload file in a carrier image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier image such as a PNG, BMP or JPEG file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "carrier image", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file, always as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub output: PathBuf,

    /// File to hide in the image
    #[arg(
        short = 'd',
        long = "data",
        value_name = "payload file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub payload_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "payload_file"
    )]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        pixelveil_core::commands::hide(&self.image, &self.output, self.payload_file, self.message)?;

        info!("payload hidden in {}", self.output.display());
        Ok(())
    }
}

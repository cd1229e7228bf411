use std::path::{Path, PathBuf};

use crate::api;
use crate::api::reveal::Revealed;
use crate::result::Result;

/// Hides a payload file or a text message in a carrier image and writes the
/// result to `output`.
pub fn hide(
    carrier: &Path,
    output: &Path,
    payload_file: Option<PathBuf>,
    message: Option<String>,
) -> Result<()> {
    api::hide::prepare()
        .use_payload_file(payload_file)
        .use_message(message)
        .with_image(carrier)
        .with_output(output)
        .execute()
}

/// Reveals the payload of a secret image. Text comes back inline, any other
/// payload is written into `output_folder`.
pub fn reveal(secret_media: &Path, output_folder: &Path) -> Result<Revealed> {
    api::reveal::prepare()
        .from_secret_file(secret_media)
        .into_output_folder(output_folder)
        .execute()
}

/// Dumps the raw extracted byte plane of a secret image, no frame
/// interpretation is happening.
pub fn reveal_raw(secret_media: &Path, destination_file: &Path) -> Result<()> {
    api::reveal_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}

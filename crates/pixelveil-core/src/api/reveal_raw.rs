use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::media::image::Carrier;
use crate::{PixelveilError, Result};

pub fn prepare() -> RevealRawApi {
    RevealRawApi::default()
}

/// Dumps the raw extracted byte plane of a carrier to a file, without any
/// frame interpretation.
#[derive(Default, Debug)]
pub struct RevealRawApi {
    secret_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl RevealRawApi {
    /// This is the secret image that contains the data to be revealed
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the raw file where the extracted bytes will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    /// Execute the raw reveal and blocks until it is finished
    pub fn execute(self) -> Result<()> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(PixelveilError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&secret_media)?;
        let content = codec::extract_raw(&carrier)?;

        fs::write(destination_file, content)
            .map_err(|source| PixelveilError::WriteError { source })
    }
}

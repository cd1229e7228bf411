use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::codec;
use crate::media::image::{ensure_capacity, Carrier};
use crate::media::Persist;
use crate::{PixelveilError, Result};

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// File based hide pipeline: normalize the carrier, grow it once if the
/// payload would not fit, embed, save as PNG.
#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    payload_file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    /// Hide a text message. Text is embedded through the same byte codec as
    /// any other payload.
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// Hide the content of a file. Takes precedence over a text message when
    /// both are set.
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    pub fn use_payload_file(mut self, payload_file: Option<PathBuf>) -> Self {
        self.payload_file = payload_file;
        self
    }

    /// The carrier image, used readonly.
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Where the image with the embedded payload is stored, always PNG.
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(image) = self.image else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixelveilError::TargetNotSet);
        };

        let payload: Vec<u8> = if let Some(payload_file) = &self.payload_file {
            fs::read(payload_file).map_err(|source| PixelveilError::ReadError { source })?
        } else if let Some(message) = self.message {
            message.into_bytes()
        } else {
            return Err(PixelveilError::MissingPayload);
        };

        let carrier = Carrier::from_file(&image)?;
        let carrier = ensure_capacity(carrier, payload.len())?;
        let mut carrier = codec::encode(carrier, &payload)?;

        debug!(
            "embedded {} payload bytes into a {}x{} carrier",
            payload.len(),
            carrier.width(),
            carrier.height()
        );

        carrier.save_as(&output)
    }
}

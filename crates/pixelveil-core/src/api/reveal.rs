use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::codec;
use crate::media::image::Carrier;
use crate::sniff::ContentKind;
use crate::{PixelveilError, Result};

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

/// What a reveal produced: a text payload is handed back inline, any other
/// payload is materialized as a file in the output folder.
#[derive(Debug, PartialEq, Eq)]
pub enum Revealed {
    Text(String),
    File { kind: ContentKind, path: PathBuf },
}

/// File based reveal pipeline: decode the carrier, classify the payload,
/// hand back text or write a typed payload file.
#[derive(Default, Debug)]
pub struct RevealApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
}

impl RevealApi {
    /// This is the secret image that contains the data to be revealed
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where a binary payload will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Execute the reveal process and blocks until it is finished
    pub fn execute(self) -> Result<Revealed> {
        let Some(secret_media) = self.secret_media else {
            return Err(PixelveilError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(PixelveilError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&secret_media)?;
        let decoded = codec::decode(&carrier)?;

        match decoded.kind {
            ContentKind::Text => {
                // sniffing can route arbitrary binary here, so decode leniently
                let text = String::from_utf8_lossy(&decoded.data).into_owned();
                Ok(Revealed::Text(text))
            }
            kind => {
                let extension = decoded.extension.unwrap_or(".bin");
                let file_name = format!("revealed-{}{extension}", Uuid::new_v4().simple());
                let target_file = output_folder.join(file_name);

                fs::write(&target_file, &decoded.data)
                    .map_err(|source| PixelveilError::WriteError { source })?;

                Ok(Revealed::File {
                    kind,
                    path: target_file,
                })
            }
        }
    }
}

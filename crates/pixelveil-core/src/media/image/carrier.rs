use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use image::RgbImage;
use log::error;

use crate::error::PixelveilError;
use crate::media::Persist;
use crate::result::Result;

/// Upper bound on carrier size. Extraction materializes the recovered byte
/// plane, so the pixel count caps that allocation.
pub const MAX_CARRIER_PIXELS: u64 = 1 << 28;

/// A lossless RGB pixel grid, the medium a payload is embedded into.
///
/// Every carrier starts as a normalized copy of some input image: decoded to
/// its true pixel values and re-materialized as 8-bit RGB without chroma
/// subsampling or lossy quantization. It is mutated in place exactly once,
/// during embedding, and serialized as PNG so the written bits survive.
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbImage,
}

impl Carrier {
    pub fn from_image(image: RgbImage) -> Result<Self> {
        let pixels = u64::from(image.width()) * u64::from(image.height());
        if pixels > MAX_CARRIER_PIXELS {
            return Err(PixelveilError::CarrierTooLarge {
                pixels,
                max: MAX_CARRIER_PIXELS,
            });
        }

        Ok(Self { image })
    }

    /// Decodes and normalizes an image file into a carrier.
    pub fn from_file(input_file: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(input_file.as_ref())
            .map_err(|_e| PixelveilError::InvalidImageMedia)?;

        Self::from_image(image.to_rgb8())
    }

    /// Decodes and normalizes an in-memory image into a carrier. The format
    /// is guessed from the content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image =
            image::load_from_memory(bytes).map_err(|_e| PixelveilError::InvalidImageMedia)?;

        Self::from_image(image.to_rgb8())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel_count(&self) -> u64 {
        u64::from(self.image.width()) * u64::from(self.image.height())
    }

    /// Total embeddable bits: one per color channel of every pixel.
    pub fn capacity_bits(&self) -> u64 {
        self.pixel_count() * 3
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub(crate) fn image_mut(&mut self) -> &mut RgbImage {
        &mut self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Serializes the pixel grid as PNG. The container must stay lossless:
    /// any recompression of the pixel values would corrupt embedded bits.
    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        self.image
            .write_to(&mut writer, image::ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                PixelveilError::ImageEncodingError
            })
    }
}

impl Persist for Carrier {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            PixelveilError::WriteError { source: e }
        })?;

        self.save_to_writer(f)
    }
}

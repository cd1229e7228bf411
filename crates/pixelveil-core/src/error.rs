use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixelveilError {
    /// Represents an invalid carrier image, for example a broken PNG file
    #[error("Carrier image is invalid or not decodable")]
    InvalidImageMedia,

    /// Represents a decode of a carrier that holds no payload. The extracted
    /// bit plane does not start with the frame marker.
    #[error("No hidden data found")]
    NoHiddenData,

    /// Represents a corrupted or incompatible carrier: the frame header
    /// declares more payload bytes than the bit plane holds
    #[error("Hidden payload is truncated: header declares {declared} bytes but only {available} were recovered")]
    TruncatedPayload { declared: usize, available: usize },

    /// Represents a framed payload that does not fit the carrier
    #[error("Capacity error: the {width}x{height} carrier holds {capacity_bits} bits but the framed payload needs {required_bits} bits")]
    CapacityError {
        width: u32,
        height: u32,
        capacity_bits: u64,
        required_bits: u64,
    },

    /// Represents a payload above the supported maximum size
    #[error("Payload of {size} bytes exceeds the supported maximum of {max} bytes")]
    PayloadTooLarge { size: u64, max: u64 },

    /// Represents a carrier above the supported maximum pixel count
    #[error("Carrier of {pixels} pixels exceeds the supported maximum of {max} pixels")]
    CarrierTooLarge { pixels: u64, max: u64 },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when serializing the output image.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing payload")]
    MissingPayload,
}

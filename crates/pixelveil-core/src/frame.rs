//! Payload frame construction and parsing.
//!
//! The frame is the self-describing envelope around a payload. It is what
//! actually gets embedded into a carrier:
//!
//! ```text
//! [6 bytes] literal marker "STEGO|"
//! [4 bytes] payload length (big-endian u32)
//! [N bytes] payload
//! ```
//!
//! Total frame size = 10 + payload_len bytes. The length field always equals
//! the exact byte count of the trailing payload region, which is how a decode
//! finds the payload boundary inside the over-read bit plane of a carrier.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::error::PixelveilError;
use crate::result::Result;

/// Literal marker that opens every embedded frame.
pub const MAGIC: [u8; 6] = *b"STEGO|";

/// Marker plus the big-endian u32 length field.
pub const HEADER_LEN: usize = MAGIC.len() + 4;

/// Upper bound on the payload size accepted for embedding. The wire format
/// would allow up to `u32::MAX` bytes; this caps frame buffers and the
/// single-step carrier upscale at a sane memory footprint.
pub const MAX_PAYLOAD_BYTES: u64 = 64 * 1024 * 1024;

/// The envelope around a payload: marker, length field, payload bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    payload: Vec<u8>,
}

impl Frame {
    pub fn new(payload: Vec<u8>) -> Result<Self> {
        let size = payload.len() as u64;
        if size > MAX_PAYLOAD_BYTES {
            return Err(PixelveilError::PayloadTooLarge {
                size,
                max: MAX_PAYLOAD_BYTES,
            });
        }

        Ok(Self { payload })
    }

    /// Serializes the frame based on the wire format above.
    pub fn to_raw_data(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(HEADER_LEN + self.payload.len());
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&(self.payload.len() as u32).to_be_bytes());
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Number of carrier bits the serialized frame occupies.
    pub fn bit_len(&self) -> u64 {
        (HEADER_LEN as u64 + self.payload.len() as u64) * 8
    }

    /// Reconstructs a frame from a raw data stream, typically the bit plane
    /// of a carrier.
    ///
    /// The marker is validated before anything else is trusted: an arbitrary
    /// image does not contain it and is rejected cheaply with
    /// [`PixelveilError::NoHiddenData`]. After the header, exactly the
    /// declared number of payload bytes is consumed; whatever the source
    /// yields beyond that is ignored.
    pub fn from_raw_data(dec: &mut dyn Read) -> Result<Self> {
        let mut magic = [0u8; MAGIC.len()];
        if dec.read_exact(&mut magic).is_err() || magic != MAGIC {
            return Err(PixelveilError::NoHiddenData);
        }

        let declared = dec
            .read_u32::<BigEndian>()
            .map_err(|_| PixelveilError::TruncatedPayload {
                declared: 0,
                available: 0,
            })? as usize;

        let mut payload = Vec::new();
        let available = dec
            .take(declared as u64)
            .read_to_end(&mut payload)
            .map_err(|source| PixelveilError::ReadError { source })?;

        if available < declared {
            return Err(PixelveilError::TruncatedPayload {
                declared,
                available,
            });
        }

        Ok(Self { payload })
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

//! The core encode/decode entry points on pixel grids.
//!
//! Encoding: frame the payload, verify capacity, then overwrite channel LSBs
//! in embedding order until the frame is consumed. Decoding: drain the bit
//! plane in the identical order, parse the frame out of it, classify the
//! payload. Both directions own their buffers exclusively; nothing is shared
//! across calls.

use std::io::{ErrorKind, Read, Write};

use crate::error::PixelveilError;
use crate::frame::Frame;
use crate::media::image::{Carrier, LsbCodec};
use crate::result::Result;
use crate::sniff::{self, ContentKind};

pub use crate::frame::MAX_PAYLOAD_BYTES;

/// A payload recovered from a carrier, classified by magic-byte sniffing.
#[derive(Debug)]
pub struct DecodedPayload {
    pub data: Vec<u8>,
    pub kind: ContentKind,
    pub extension: Option<&'static str>,
}

/// Embeds `payload` into the carrier and returns the modified carrier.
///
/// Capacity is verified before any pixel is touched; a payload that does not
/// fit fails with [`PixelveilError::CapacityError`] and leaves no trace. On
/// success every channel beyond the frame is byte-identical to the input.
/// The carrier is taken by value: an embed that fails mid-way drops the
/// partially written grid instead of ever returning it.
pub fn encode(mut carrier: Carrier, payload: &[u8]) -> Result<Carrier> {
    let frame = Frame::new(payload.to_vec())?;

    let required_bits = frame.bit_len();
    if required_bits > carrier.capacity_bits() {
        return Err(capacity_error(&carrier, required_bits));
    }

    let (width, height, capacity_bits) = (carrier.width(), carrier.height(), carrier.capacity_bits());
    let data = frame.to_raw_data();
    {
        let mut encoder = LsbCodec::encoder(carrier.image_mut());
        encoder.write_all(&data).map_err(|e| match e.kind() {
            ErrorKind::WriteZero => PixelveilError::CapacityError {
                width,
                height,
                capacity_bits,
                required_bits,
            },
            _ => PixelveilError::ImageEncodingError,
        })?;
    }

    Ok(carrier)
}

/// Recovers the payload hidden in a carrier.
///
/// The bit plane is read in embedding order; the frame header discovered in
/// its first bytes bounds the payload, everything behind it is ignored. A
/// carrier that never went through [`encode`] fails with
/// [`PixelveilError::NoHiddenData`].
pub fn decode(carrier: &Carrier) -> Result<DecodedPayload> {
    let mut decoder = LsbCodec::decoder(carrier.image());
    let frame = Frame::from_raw_data(&mut decoder)?;

    let data = frame.into_payload();
    let (kind, extension) = sniff::sniff(&data);

    Ok(DecodedPayload {
        data,
        kind,
        extension,
    })
}

/// Dumps the full extracted bit plane grouped into bytes, without any frame
/// interpretation. The trailing partial byte is dropped.
pub fn extract_raw(carrier: &Carrier) -> Result<Vec<u8>> {
    let mut decoder = LsbCodec::decoder(carrier.image());

    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .map_err(|source| PixelveilError::ReadError { source })?;

    Ok(content)
}

fn capacity_error(carrier: &Carrier, required_bits: u64) -> PixelveilError {
    PixelveilError::CapacityError {
        width: carrier.width(),
        height: carrier.height(),
        capacity_bits: carrier.capacity_bits(),
        required_bits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gradient_image;

    fn gradient_carrier(width: u32, height: u32) -> Carrier {
        Carrier::from_image(prepare_gradient_image(width, height)).unwrap()
    }

    #[test]
    fn should_round_trip_a_payload() {
        let secret = encode(gradient_carrier(16, 16), b"around the world").unwrap();

        let decoded = decode(&secret).unwrap();
        assert_eq!(decoded.data, b"around the world");
        assert_eq!(decoded.kind, ContentKind::Text);
        assert_eq!(decoded.extension, None);
    }

    #[test]
    fn should_fail_before_touching_pixels_when_the_payload_does_not_fit() {
        // 10x10 holds 300 bits, a 1000 byte payload frames to 8080 bits
        match encode(gradient_carrier(10, 10), &[0u8; 1000]) {
            Err(PixelveilError::CapacityError {
                width: 10,
                height: 10,
                capacity_bits: 300,
                required_bits: 8080,
            }) => (),
            other => panic!("expected CapacityError, got {other:?}"),
        }
    }

    #[test]
    fn should_succeed_when_the_frame_exactly_fills_the_carrier() {
        // 10x4 = 40 pixels = 120 bits; 5 payload bytes frame to 120 bits
        let secret = encode(gradient_carrier(10, 4), b"tight").unwrap();
        assert_eq!(decode(&secret).unwrap().data, b"tight");
    }

    #[test]
    fn should_report_no_hidden_data_for_a_plain_image() {
        match decode(&gradient_carrier(32, 32)) {
            Err(PixelveilError::NoHiddenData) => (),
            other => panic!("expected NoHiddenData, got {other:?}"),
        }
    }

    #[test]
    fn should_extract_the_raw_plane_of_any_carrier() {
        let raw = extract_raw(&gradient_carrier(10, 10)).unwrap();
        // 300 bits -> 37 bytes, the 4 stray bits are dropped
        assert_eq!(raw.len(), 37);
    }

    #[test]
    fn should_classify_a_recovered_png_payload() {
        let mut payload = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        payload.extend_from_slice(&[0x42; 24]);

        let secret = encode(gradient_carrier(16, 16), &payload).unwrap();
        let decoded = decode(&secret).unwrap();

        assert_eq!(decoded.kind, ContentKind::Image);
        assert_eq!(decoded.extension, Some(".png"));
        assert_eq!(decoded.data, payload);
    }
}

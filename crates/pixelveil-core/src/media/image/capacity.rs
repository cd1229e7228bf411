//! Capacity arithmetic and the single-step carrier upscale.
//!
//! A framed payload needs `(payload_len + HEADER_LEN) * 8` channel bits. The
//! planner decides before any pixel is touched whether a carrier is large
//! enough, and if not, upscales it exactly once so that it is.

use image::imageops::{self, FilterType};
use log::debug;

use crate::error::PixelveilError;
use crate::frame;
use crate::result::Result;

use super::carrier::Carrier;

/// Number of pixels needed to hold a framed payload of `payload_len` bytes,
/// at 3 embeddable bits per pixel.
pub fn required_pixels(payload_len: usize) -> u64 {
    let frame_bits = (payload_len as u64 + frame::HEADER_LEN as u64) * 8;
    frame_bits.div_ceil(3)
}

/// Returns the carrier unchanged when the framed payload fits, otherwise a
/// smoothly upscaled copy that is guaranteed to fit.
///
/// The scale factor is the square root of the pixel deficit; one extra pixel
/// per dimension guards against rounding shortfall. Resizing happens strictly
/// before embedding, so no written bit is ever touched by interpolation.
pub fn ensure_capacity(carrier: Carrier, payload_len: usize) -> Result<Carrier> {
    let required = required_pixels(payload_len);
    if carrier.pixel_count() >= required {
        return Ok(carrier);
    }

    if carrier.pixel_count() == 0 {
        return Err(PixelveilError::CapacityError {
            width: carrier.width(),
            height: carrier.height(),
            capacity_bits: 0,
            required_bits: required * 3,
        });
    }

    let (width, height) = (carrier.width(), carrier.height());
    let scale = (required as f64 / carrier.pixel_count() as f64).sqrt();
    let new_width = (f64::from(width) * scale) as u32 + 1;
    let new_height = (f64::from(height) * scale) as u32 + 1;

    debug!(
        "upscaling carrier {width}x{height} -> {new_width}x{new_height} for a {payload_len} byte payload"
    );

    let resized = imageops::resize(carrier.image(), new_width, new_height, FilterType::CatmullRom);
    Carrier::from_image(resized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn should_account_for_the_frame_header() {
        // 5 payload bytes frame up to 15 bytes = 120 bits -> 40 pixels
        assert_eq!(required_pixels(5), 40);
        // 0 payload bytes still need the 10 byte header
        assert_eq!(required_pixels(0), 27);
        // 1000 payload bytes: ceil(1010 * 8 / 3)
        assert_eq!(required_pixels(1000), 2694);
    }

    #[test]
    fn should_leave_a_sufficient_carrier_untouched() {
        let carrier = Carrier::from_image(prepare_gradient_image(10, 10)).unwrap();
        let before = carrier.image().clone();

        let after = ensure_capacity(carrier, 5).unwrap();
        assert_eq!(after.image().as_raw(), before.as_raw());
    }

    #[test]
    fn should_upscale_until_the_payload_fits() {
        let carrier = Carrier::from_image(prepare_gradient_image(10, 10)).unwrap();

        let resized = ensure_capacity(carrier, 1000).unwrap();
        assert!(resized.pixel_count() >= required_pixels(1000));
    }

    #[test]
    fn should_always_reach_the_required_pixel_count() {
        for (w, h, payload_len) in [(1, 1, 1usize), (3, 7, 64), (10, 10, 1000), (2, 2, 9999)] {
            let carrier = Carrier::from_image(prepare_gradient_image(w, h)).unwrap();
            let resized = ensure_capacity(carrier, payload_len).unwrap();
            assert!(
                resized.pixel_count() >= required_pixels(payload_len),
                "{w}x{h} carrier was not grown enough for {payload_len} bytes"
            );
        }
    }
}

//! # Pixelveil Core
//!
//! Hides an arbitrary binary payload inside the pixel data of a carrier
//! image by overwriting the least significant bit of every color channel,
//! and recovers it losslessly later on.
//!
//! The embedded data is wrapped into a self-describing [`frame::Frame`]
//! (marker + length + payload), so a carrier can be decoded without any
//! out-of-band knowledge. Recovered payloads are classified by magic-byte
//! sniffing, see [`sniff`].
//!
//! # Usage Examples
//!
//! ## Hide a payload inside an image
//!
//! ```rust
//! use pixelveil_core::{codec, Carrier};
//!
//! let plain = image::RgbImage::from_fn(64, 64, |x, y| {
//!     image::Rgb([x as u8, y as u8, 42])
//! });
//!
//! let carrier = Carrier::from_image(plain).unwrap();
//! let secret = codec::encode(carrier, b"tell no one").unwrap();
//!
//! let decoded = codec::decode(&secret).unwrap();
//! assert_eq!(decoded.data, b"tell no one");
//! ```
//!
//! ## File based workflow
//!
//! The [`api`] builders mirror the same pipeline on files: carriers are
//! normalized to a lossless RGB grid, upscaled once if the payload would
//! not fit, and always serialized as PNG.
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let dir = tempdir().expect("Failed to create temporary directory");
//! let carrier = dir.path().join("carrier.png");
//! image::RgbImage::from_fn(64, 64, |x, y| image::Rgb([x as u8, y as u8, 0]))
//!     .save(&carrier)
//!     .expect("Failed to write carrier");
//!
//! pixelveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image(&carrier)
//!     .with_output(dir.path().join("secret.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod codec;
pub mod commands;
pub mod error;
pub mod frame;
pub mod media;
pub mod result;
pub mod sniff;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::codec::DecodedPayload;
pub use crate::error::PixelveilError;
pub use crate::frame::MAX_PAYLOAD_BYTES;
pub use crate::media::image::{Carrier, LsbCodec};
pub use crate::media::Persist;
pub use crate::result::Result;
pub use crate::sniff::ContentKind;

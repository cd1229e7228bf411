use std::io::{Read, Write};

use image::RgbImage;

use super::iterators::{RgbChannels, RgbChannelsMut};
use crate::universal_decoder::{Decoder, OneBitUnveil};
use crate::universal_encoder::{Encoder, OneBitHide};

/// Factory for the LSB image decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// builds an LSB image decoder that implements `Read`, draining the
    /// least significant bit of every color channel in embedding order
    pub fn decoder<'i>(input: &'i RgbImage) -> Box<dyn Read + 'i> {
        Box::new(Decoder::new(RgbChannels::new(input), OneBitUnveil))
    }

    /// builds an LSB image encoder that implements `Write`, overwriting the
    /// least significant bit of every color channel in embedding order
    pub fn encoder<'i>(carrier: &'i mut RgbImage) -> Box<dyn Write + 'i> {
        Box::new(Encoder::new(RgbChannelsMut::new(carrier), OneBitHide))
    }
}

use bitstream_io::{BigEndian, BitRead, BitReader};
use std::io::{Cursor, Result, Write};

/// generic hiding algorithm, the seam where a payload bit lands in a carrier
/// color channel
pub trait HideAlgorithm {
    /// encodes one bit onto a carrier channel value
    fn encode(&self, carrier: u8, information: &Result<bool>) -> u8;
}

/// default 1 bit hiding strategy: overwrite the least significant bit
pub struct OneBitHide;

impl HideAlgorithm for OneBitHide {
    fn encode(&self, carrier: u8, information: &Result<bool>) -> u8 {
        match information {
            Err(_) => carrier,
            Ok(bit) => (carrier & (u8::MAX - 1)) | if *bit { 1 } else { 0 },
        }
    }
}

/// Generic steganography encoder: consumes carrier channels from `input` and
/// writes one payload bit into each, most significant bit of every payload
/// byte first. Channels that are never reached stay byte-identical.
pub struct Encoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Encoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Encoder { input, algorithm }
    }
}

impl<'a, I, A> Write for Encoder<I, A>
where
    I: Iterator<Item = &'a mut u8>,
    A: HideAlgorithm,
{
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        let items_to_take = buf.len() << 3; // 1 bit per channel
        let mut bit_iter = BitReader::endian(Cursor::new(buf), BigEndian);

        let mut bits_written = 0;
        for channel in self.input.by_ref().take(items_to_take) {
            *channel = self.algorithm.encode(*channel, &bit_iter.read_bit());
            bits_written += 1;
        }

        Ok(bits_written >> 3)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

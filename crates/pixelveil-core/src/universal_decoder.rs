use bitstream_io::{BigEndian, BitWrite, BitWriter};
use std::io::{BufWriter, Read, Result};

/// generic recovery algorithm, the seam where a payload bit is read back
/// from a carrier color channel
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: u8) -> bool;
}

/// default 1 bit recovery strategy: the least significant bit of the channel
pub struct OneBitUnveil;

impl UnveilAlgorithm for OneBitUnveil {
    fn decode(&self, carrier: u8) -> bool {
        (carrier & 1) > 0
    }
}

/// Generic steganography decoder: drains carrier channels from `input` and
/// re-assembles one byte out of every 8 recovered bits, most significant bit
/// first.
pub struct Decoder<I, A> {
    pub input: I,
    pub algorithm: A,
}

impl<I, A> Decoder<I, A> {
    pub fn new(input: I, algorithm: A) -> Self {
        Decoder { input, algorithm }
    }
}

impl<I, A> Read for Decoder<I, A>
where
    I: Iterator<Item = u8>,
    A: UnveilAlgorithm,
{
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        // 1 bit per channel
        let items_to_take = buf.len() << 3;
        let buf_writer = BufWriter::new(buf);
        let mut bit_buffer = BitWriter::endian(buf_writer, BigEndian);

        let mut bits_read = 0;
        for carrier in self.input.by_ref().take(items_to_take) {
            let bit = self.algorithm.decode(carrier);
            bit_buffer.write_bit(bit)?;
            bits_read += 1;
        }

        // A partial byte at the end of the channel stream is aligned away and
        // not counted. The frame header bounds how many of the returned bytes
        // are meaningful, so the dropped tail can never hold payload data.
        if !bit_buffer.byte_aligned() {
            bit_buffer.byte_align()?;
        }

        Ok(bits_read >> 3)
    }
}

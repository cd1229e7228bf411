use bitstream_io::{BigEndian, BitRead, BitReader};

use pixelveil_core::bit_iterator::{from_bits, to_bits};
use pixelveil_core::BitIterator;

#[test]
fn should_return_the_8_bits_of_h_most_significant_first() {
    let b = [0b0100_1000, 0b0110_0001, 0b0110_1100];
    let mut it = BitIterator::new(&b[..]);

    assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
    assert_eq!(it.next().unwrap(), 1, "2nd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "3rd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "5th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "6th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "7th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "8th bit not correct");
}

#[test]
fn should_return_the_bits_of_a_after_skip_8() {
    let b = [0b0100_1000, 0b0110_0001];
    let mut it = BitIterator::new(&b[..]).skip(8);

    assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
    assert_eq!(it.next().unwrap(), 1, "2nd bit not correct");
    assert_eq!(it.next().unwrap(), 1, "3rd bit not correct");
    assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "5th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "6th bit not correct");
    assert_eq!(it.next().unwrap(), 0, "7th bit not correct");
    assert_eq!(it.next().unwrap(), 1, "8th bit not correct");
    assert_eq!(
        it.next(),
        None,
        "it should end after the last bit on the last byte"
    );
}

#[test]
fn should_behave_as_the_big_endian_bit_reader() {
    let b = [0b0100_1000, 0b0110_0001, 0xFF, 0x00, 0xA5];
    let mut it = BitIterator::new(&b[..]);
    let mut reader = BitReader::endian(&b[..], BigEndian);

    for i in 0..40 {
        assert_eq!(
            it.next().unwrap(),
            if reader.read_bit().unwrap() { 1 } else { 0 },
            "{} bit not correct",
            i
        );
    }
}

#[test]
fn should_expand_and_regroup_losslessly() {
    let payload: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
    let bits = to_bits(&payload);

    assert_eq!(bits.len(), payload.len() * 8);
    assert_eq!(from_bits(&bits), payload);
}

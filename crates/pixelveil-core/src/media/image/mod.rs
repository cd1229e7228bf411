mod capacity;
mod carrier;
mod iterators;
pub mod lsb_codec;

pub use capacity::{ensure_capacity, required_pixels};
pub use carrier::{Carrier, MAX_CARRIER_PIXELS};
pub use lsb_codec::LsbCodec;

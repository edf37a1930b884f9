pub mod decoder;
pub mod encoder;
pub mod lsb_codec;

pub use lsb_codec::{read_bits, write_bits, LsbCodec};

pub mod codec_options;
pub mod image;
pub mod payload;
mod primitives;
pub mod raster;

pub use codec_options::{Channel, CodecOptions, Layout, ProtocolVariant, StartPixel};
pub use primitives::*;
pub use raster::RasterBuffer;

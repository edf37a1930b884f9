mod frame;
pub mod legacy;

pub use frame::*;

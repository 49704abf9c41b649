pub mod base64;
pub mod percent;

pub use self::base64::{decode, decode_blocks};
pub use self::percent::{decode_component, encode_component};

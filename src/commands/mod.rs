pub mod decode;
pub mod link;
pub mod parse;

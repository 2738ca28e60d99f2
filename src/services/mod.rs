pub mod codec;
pub mod parser;

pub use codec::{decode_json, encode_json};
pub use parser::{parse_bytes, parse_text, VersionParser};

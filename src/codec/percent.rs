use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::FragmentError;

/// Characters left alone when encoding a URI component.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Strict URI component decoding: every `%` must start a two digit hex
/// escape and the decoded bytes must form valid UTF-8.
pub fn decode_component(input: &str) -> Result<String, FragmentError> {
    if !input.contains('%') {
        return Ok(input.to_string());
    }

    let bytes = input.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        let byte = bytes[index];
        if byte != b'%' {
            decoded.push(byte);
            index += 1;
            continue;
        }

        let escaped = bytes
            .get(index + 1)
            .zip(bytes.get(index + 2))
            .and_then(|(&high, &low)| Some(hex_value(high)? << 4 | hex_value(low)?))
            .ok_or(FragmentError::MalformedEscape { offset: index })?;
        decoded.push(escaped);
        index += 3;
    }

    String::from_utf8(decoded).map_err(|_| FragmentError::InvalidUtf8)
}

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

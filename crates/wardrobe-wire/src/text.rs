//! Base64 envelope

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine as _;
use wardrobe_core::DecodeError;

pub fn encode_text(bytes: &[u8]) -> String {
    BASE64_ENGINE.encode(bytes)
}

/// Surrounding whitespace is ignored; anything else must be valid base64.
pub fn decode_text(input: &str) -> Result<Vec<u8>, DecodeError> {
    BASE64_ENGINE
        .decode(input.trim())
        .map_err(|err| DecodeError::InvalidBase64(err.to_string()))
}

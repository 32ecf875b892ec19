//! Base64URL encoding/decoding per RFC 4648 §3.2 (unpadded)
//!
//! Thin wrapper around the `base64` crate's URL-safe, padding-free engine.
//! Input carrying `=` padding is rejected rather than tolerated.

use crate::error::{Error, Result};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

/// Encode bytes to an unpadded Base64URL string
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded Base64URL string to bytes
pub fn decode(input: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| Error::Malformed(format!("Base64URL decode failed: {e}")))
}

/// Decode Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>> {
    // Each 4 characters decode to at most 3 bytes; reject before allocating
    if input.len() / 4 * 3 > max_size {
        return Err(Error::Malformed(format!(
            "Encoded segment too large: {} characters (max decoded: {max_size} bytes)",
            input.len()
        )));
    }

    let result = decode(input)?;
    if result.len() > max_size {
        return Err(Error::Malformed(format!(
            "Decoded size exceeds limit: {} bytes (max: {max_size})",
            result.len()
        )));
    }

    Ok(result)
}

use serde_json::{Map, Value};

use crate::claims::{ClaimsValidation, validate_claims};
use crate::error::{Error, Result};
use crate::limits::MAX_DECODED_PAYLOAD_SIZE;
use crate::token::Token;
use crate::utils::base64url;

/// A token whose signature has been cryptographically verified
///
/// This is the second stage of the verify pipeline. The claims segment is
/// authenticated and may now be decoded.
///
/// Next step: [`Token`] (after claims validation)
#[derive(Debug)]
pub struct VerifiedToken<'a> {
    header: Map<String, Value>,
    payload_b64: &'a str,
}

impl<'a> VerifiedToken<'a> {
    pub(crate) fn new(header: Map<String, Value>, payload_b64: &'a str) -> Self {
        Self {
            header,
            payload_b64,
        }
    }

    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// Decode the claims and check `exp`/`nbf`
    pub fn validate(self, config: &ClaimsValidation) -> Result<Token> {
        let payload = base64url::decode_bytes(self.payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
        let claims: Map<String, Value> = serde_json::from_slice(&payload)
            .map_err(|e| Error::Malformed(format!("claims are not a JSON object: {e}")))?;

        validate_claims(&claims, config)?;

        Ok(Token::from_parts(self.header, claims))
    }
}

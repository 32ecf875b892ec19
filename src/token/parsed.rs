use serde_json::{Map, Value};

use crate::algorithm::Signer;
use crate::error::{Error, Result};
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_SIGNATURE_SIZE, MAX_TOKEN_LENGTH};
use crate::token::{Token, VerifiedToken, header};
use crate::utils::base64url;

/// A compact token whose structure and header have been checked
///
/// This is the first stage of the verify pipeline. At this point:
/// - the input split into exactly three segments
/// - the header decoded to a JSON object with `typ == "JWT"`
/// - the header carries a string `alg`
///
/// Nothing here is authenticated yet. The header may be inspected (for
/// example to pick a key by `kid`), but the claims stay encoded until
/// [`ParsedToken::verify_signature`] succeeds.
///
/// Next step: [`VerifiedToken`]
#[derive(Debug)]
pub struct ParsedToken<'a> {
    header: Map<String, Value>,
    algorithm: String,
    signing_input: &'a str,
    payload_b64: &'a str,
    signature_b64: &'a str,
}

impl<'a> ParsedToken<'a> {
    /// Parse a compact token string
    ///
    /// # Example
    /// ```ignore
    /// let parsed = ParsedToken::from_string("eyJ...")?;
    /// println!("kid: {:?}", parsed.key_id());
    /// ```
    pub fn from_string(token: &'a str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::Malformed(format!(
                "expected 3 segments, found {}",
                token.split('.').count()
            )));
        };

        let header_json = base64url::decode_bytes(header_b64, MAX_DECODED_HEADER_SIZE)?;
        let header: Map<String, Value> = serde_json::from_slice(&header_json)
            .map_err(|e| Error::Malformed(format!("header is not a JSON object: {e}")))?;
        let algorithm = header::check(&header)?.to_string();

        // The literal "header.payload" prefix of the input
        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];

        Ok(Self {
            header,
            algorithm,
            signing_input,
            payload_b64,
            signature_b64,
        })
    }

    /// The decoded, unauthenticated header
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// The unauthenticated header `alg`
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// The unauthenticated header `kid`
    pub fn key_id(&self) -> Option<&str> {
        header::string_field(&self.header, header::KID)
    }

    /// The exact bytes covered by the signature
    pub fn signing_input(&self) -> &'a str {
        self.signing_input
    }

    /// A token carrying only the header, for key-resolution callbacks
    pub fn partial_token(&self) -> Token {
        Token::from_parts(self.header.clone(), Map::new())
    }

    /// Check the signature and move to the [`VerifiedToken`] state
    ///
    /// The header `alg` must equal `signer`'s name exactly. Every failure
    /// of the signer itself is reported as [`Error::InvalidSignature`].
    pub fn verify_signature(self, signer: &Signer, key: &[u8]) -> Result<VerifiedToken<'a>> {
        if self.algorithm != signer.name() {
            return Err(Error::HeaderAlg {
                found: Some(self.algorithm),
            });
        }

        let signature = base64url::decode_bytes(self.signature_b64, MAX_DECODED_SIGNATURE_SIZE)?;

        if let Err(e) = signer.verify(self.signing_input.as_bytes(), &signature, key) {
            tracing::debug!(alg = signer.name(), error = %e, "signature rejected");
            return Err(Error::InvalidSignature);
        }

        Ok(VerifiedToken::new(self.header, self.payload_b64))
    }
}

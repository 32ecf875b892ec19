//! The in-memory token and the sign pipeline
//!
//! A [`Token`] is two open JSON maps. Signing stamps `typ`/`alg` into the
//! header, serializes both maps, and signs the literal encoded text:
//!
//! ```text
//! base64url(header_json) "." base64url(claims_json) "." base64url(signature)
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::algorithm::Signer;
use crate::claims::numeric_date;
use crate::error::{Error, Result};
use crate::registry::{self, SignerRegistry};
use crate::token::header;
use crate::utils::base64url;

/// A token's header and claims
///
/// Both maps are string-keyed JSON objects. Tokens returned by the verify
/// pipeline have passed every check; tokens built by hand are just data
/// until signed.
///
/// # Examples
///
/// ```ignore
/// use jwtseal::{HS256, Token};
///
/// let mut token = Token::new();
/// token.insert_claim("sub", "user-42")?;
/// let compact = token.sign(&HS256, b"secret")?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    pub header: Map<String, Value>,
    pub claims: Map<String, Value>,
}

impl Token {
    /// Empty header and claims
    pub fn new() -> Self {
        Self::default()
    }

    /// Token whose header is pre-seeded with `typ` and `alg`
    ///
    /// Sign it with [`Token::sign_registered`] to look the signer up by name.
    pub fn with_algorithm(alg: &str) -> Self {
        let mut token = Self::new();
        header::stamp(&mut token.header, alg);
        token
    }

    /// Build the claims from any value that serializes to a JSON object
    pub fn from_claims<T: Serialize>(claims: &T) -> Result<Self> {
        match serde_json::to_value(claims)? {
            Value::Object(claims) => Ok(Self {
                header: Map::new(),
                claims,
            }),
            other => Err(Error::SerializationError(format!(
                "claims must serialize to a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub(crate) fn from_parts(header: Map<String, Value>, claims: Map<String, Value>) -> Self {
        Self { header, claims }
    }

    /// Set a claim, replacing any previous value
    pub fn insert_claim(&mut self, name: impl Into<String>, value: impl Serialize) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.claims.insert(name.into(), value);
        Ok(())
    }

    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Deserialize the claims into a typed struct
    pub fn claims_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.claims.clone()))?)
    }

    /// The header `alg`, if it is a string
    pub fn algorithm(&self) -> Option<&str> {
        header::string_field(&self.header, header::ALG)
    }

    /// The header `kid`, if it is a string
    pub fn key_id(&self) -> Option<&str> {
        header::string_field(&self.header, header::KID)
    }

    /// The `exp` claim in Unix seconds, if numeric
    pub fn expiration(&self) -> Option<i64> {
        self.claims.get("exp").and_then(numeric_date)
    }

    /// The `nbf` claim in Unix seconds, if numeric
    pub fn not_before(&self) -> Option<i64> {
        self.claims.get("nbf").and_then(numeric_date)
    }

    /// Sign with an explicit signer and return the compact token
    ///
    /// Overwrites the header `typ` and `alg`. Key formats are described on
    /// [`Signer::sign`].
    pub fn sign(&mut self, signer: &Signer, key: &[u8]) -> Result<String> {
        header::stamp(&mut self.header, signer.name());

        let header_json = serde_json::to_vec(&self.header)?;
        let claims_json = serde_json::to_vec(&self.claims)?;

        let mut compact = format!(
            "{}.{}",
            base64url::encode(header_json),
            base64url::encode(claims_json)
        );
        let signature = signer.sign(compact.as_bytes(), key)?;
        compact.push('.');
        compact.push_str(&base64url::encode(signature));

        tracing::debug!(alg = signer.name(), "signed token");
        Ok(compact)
    }

    /// Sign with the signer the process-wide registry holds for the header `alg`
    ///
    /// Fails with [`Error::NoSigner`] when `alg` is missing or unregistered.
    pub fn sign_registered(&mut self, key: &[u8]) -> Result<String> {
        self.sign_with_registry(registry::global(), key)
    }

    /// Sign with the signer `registry` holds for the header `alg`
    pub fn sign_with_registry(&mut self, registry: &SignerRegistry, key: &[u8]) -> Result<String> {
        let signer = self
            .algorithm()
            .and_then(|alg| registry.get(alg))
            .cloned()
            .ok_or(Error::NoSigner)?;
        self.sign(&signer, key)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

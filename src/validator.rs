//! The verify pipeline
//!
//! Every entry point runs the same steps, in this order, and stops at the
//! first failure:
//!
//! 1. bound the input size and split it into exactly three segments
//! 2. decode the header; require `typ == "JWT"` and a string `alg`
//! 3. bind the algorithm: `alg` must name a signer the caller allowed
//! 4. resolve the key (static, or from a callback that sees the header)
//! 5. verify the signature over the literal `header.payload` text
//! 6. decode the claims and check `exp`/`nbf` against one clock sample
//!
//! Structural checks run before any cryptography, and claims are not
//! decoded until the signature has verified.

use std::sync::Arc;

use crate::algorithm::{AlgorithmPolicy, Signer};
use crate::claims::ClaimsValidation;
use crate::error::{Error, Result};
use crate::token::{ParsedToken, Token};

/// Key-resolution callback
///
/// Receives a token holding only the decoded (unauthenticated) header and
/// returns the verification key. Failures are returned to the caller
/// unchanged.
pub type KeyFn = Arc<dyn Fn(&Token) -> Result<Vec<u8>> + Send + Sync + 'static>;

/// Reusable token verifier
///
/// Configure once, then call [`verify`](Self::verify) for each token. Exactly
/// one of [`key`](Self::key) or [`key_fn`](Self::key_fn) must be set. The
/// default algorithm policy is empty, so [`algorithms`](Self::algorithms) or
/// [`signer`](Self::signer) must be called as well.
///
/// ```ignore
/// let validator = TokenValidator::new()
///     .signer(HS256)
///     .key(b"secret")
///     .validate(ClaimsValidation::default().clock_skew(30))
///     .build();
///
/// let token = validator.verify(&compact)?;
/// ```
#[derive(Clone, Default)]
pub struct TokenValidator {
    config_algorithms: AlgorithmPolicy,
    config_claims: ClaimsValidation,
    config_key: Option<Arc<[u8]>>,
    config_key_fn: Option<KeyFn>,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("algorithms", &self.config_algorithms)
            .field("claims", &self.config_claims)
            .field("key", &self.config_key.as_ref().map(|_| "<redacted>"))
            .field("key_fn", &self.config_key_fn.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl TokenValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the set of accepted signers
    pub fn algorithms(&mut self, policy: AlgorithmPolicy) -> &mut Self {
        self.config_algorithms = policy;
        self
    }

    /// Accept exactly one signer
    pub fn signer(&mut self, signer: Signer) -> &mut Self {
        self.algorithms(AlgorithmPolicy::from(signer))
    }

    /// Configure claims validation
    pub fn validate(&mut self, config: ClaimsValidation) -> &mut Self {
        self.config_claims = config;
        self
    }

    /// Configure a static verification key
    pub fn key(&mut self, key: &[u8]) -> &mut Self {
        self.config_key = Some(key.into());
        self
    }

    /// Configure a key-resolution callback
    pub fn key_fn<F>(&mut self, resolve: F) -> &mut Self
    where
        F: Fn(&Token) -> Result<Vec<u8>> + Send + Sync + 'static,
    {
        self.config_key_fn = Some(Arc::new(resolve));
        self
    }

    pub fn build(&mut self) -> Self {
        self.clone()
    }

    /// Verify a compact token string
    pub fn verify(&self, token: &str) -> Result<Token> {
        match (&self.config_key, &self.config_key_fn) {
            (Some(key), None) => run(
                &self.config_algorithms,
                token,
                |_| Ok(&key[..]),
                &self.config_claims,
            ),
            (None, Some(resolve)) => run(
                &self.config_algorithms,
                token,
                |partial| resolve(partial),
                &self.config_claims,
            ),
            (Some(_), Some(_)) => Err(Error::ConfigurationInvalid(
                "both a static key and a key function are configured".to_string(),
            )),
            (None, None) => Err(Error::ConfigurationInvalid(
                "no verification key configured".to_string(),
            )),
        }
    }
}

/// Verify `token` against an explicit signer and key
///
/// The header `alg` must equal `signer`'s name; it is never used to pick a
/// different algorithm.
pub fn parse(signer: &Signer, token: &str, key: &[u8]) -> Result<Token> {
    parse_with_key_fn(signer, token, |_| Ok(key))
}

/// Verify `token` against an explicit signer, resolving the key from the header
///
/// Use this when the key depends on header metadata such as `kid`.
pub fn parse_with_key_fn<F, K>(signer: &Signer, token: &str, key_fn: F) -> Result<Token>
where
    F: FnOnce(&Token) -> Result<K>,
    K: AsRef<[u8]>,
{
    let policy = AlgorithmPolicy::from(signer.clone());
    run(&policy, token, key_fn, &ClaimsValidation::default())
}

/// Verify `token` against a caller-chosen set of signers
pub fn parse_with_policy<F, K>(policy: &AlgorithmPolicy, token: &str, key_fn: F) -> Result<Token>
where
    F: FnOnce(&Token) -> Result<K>,
    K: AsRef<[u8]>,
{
    run(policy, token, key_fn, &ClaimsValidation::default())
}

fn run<F, K>(
    policy: &AlgorithmPolicy,
    token: &str,
    key_fn: F,
    claims: &ClaimsValidation,
) -> Result<Token>
where
    F: FnOnce(&Token) -> Result<K>,
    K: AsRef<[u8]>,
{
    verify_token(policy, token, key_fn, claims)
        .inspect_err(|e| tracing::debug!(error = %e, "token rejected"))
}

fn verify_token<F, K>(
    policy: &AlgorithmPolicy,
    token: &str,
    key_fn: F,
    claims: &ClaimsValidation,
) -> Result<Token>
where
    F: FnOnce(&Token) -> Result<K>,
    K: AsRef<[u8]>,
{
    if policy.is_empty() {
        return Err(Error::NoSigner);
    }

    // 1-2. Structure and header
    let parsed = ParsedToken::from_string(token)?;

    // 3. Algorithm binding
    let signer = policy.resolve(parsed.algorithm())?;

    // 4. Key resolution sees the header only
    let key = key_fn(&parsed.partial_token())?;

    // 5. Signature
    let verified = parsed.verify_signature(signer, key.as_ref())?;

    // 6. Claims
    let token = verified.validate(claims)?;
    tracing::trace!(alg = signer.name(), "token verified");
    Ok(token)
}

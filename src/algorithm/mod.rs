//! Signers: named algorithms that sign and verify byte strings
//!
//! A [`Signer`] is plain data (a wire name, a family and a digest) and
//! dispatches over the closed set of families in [`Family`]. It owns no
//! key material; keys are supplied per call, which keeps every signer
//! stateless and freely shareable across threads.

mod traits;

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

pub use traits::Algorithm;

use std::borrow::Cow;

use crate::error::{Error, Result};

/// Digest used inside a signer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digest {
    Sha256,
    Sha384,
    Sha512,
}

impl Digest {
    /// Output size in bytes
    pub const fn output_len(self) -> usize {
        match self {
            Digest::Sha256 => 32,
            Digest::Sha384 => 48,
            Digest::Sha512 => 64,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Digest::Sha256 => "SHA-256",
            Digest::Sha384 => "SHA-384",
            Digest::Sha512 => "SHA-512",
        }
    }
}

/// Signature scheme family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Keyed hash over a raw shared secret
    Hmac,
    /// RSASSA-PKCS1-v1_5
    Rsa,
    /// ECDSA with fixed-width `r ‖ s` signatures
    Ecdsa,
}

/// A named signature algorithm
///
/// The name is the wire `alg` value and the registry key. Built-in signers
/// are available as constants ([`HS256`], [`RS256`], [`ES256`], ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signer {
    name: Cow<'static, str>,
    family: Family,
    digest: Digest,
}

/// HMAC with SHA-256
pub const HS256: Signer = Signer::hmac("HS256", Digest::Sha256);
/// HMAC with SHA-384
pub const HS384: Signer = Signer::hmac("HS384", Digest::Sha384);
/// HMAC with SHA-512
pub const HS512: Signer = Signer::hmac("HS512", Digest::Sha512);
/// RSASSA-PKCS1-v1_5 with SHA-256
pub const RS256: Signer = Signer::rsa("RS256", Digest::Sha256);
/// RSASSA-PKCS1-v1_5 with SHA-384
pub const RS384: Signer = Signer::rsa("RS384", Digest::Sha384);
/// RSASSA-PKCS1-v1_5 with SHA-512
pub const RS512: Signer = Signer::rsa("RS512", Digest::Sha512);
/// ECDSA with P-256 and SHA-256
pub const ES256: Signer = Signer::ecdsa("ES256", Digest::Sha256);
/// ECDSA with P-384 and SHA-384
pub const ES384: Signer = Signer::ecdsa("ES384", Digest::Sha384);
/// ECDSA with P-521 and SHA-512
pub const ES512: Signer = Signer::ecdsa("ES512", Digest::Sha512);

/// Every built-in signer
pub const BUILTIN: [Signer; 9] = [HS256, HS384, HS512, RS256, RS384, RS512, ES256, ES384, ES512];

impl Signer {
    pub const fn hmac(name: &'static str, digest: Digest) -> Self {
        Self {
            name: Cow::Borrowed(name),
            family: Family::Hmac,
            digest,
        }
    }

    pub const fn rsa(name: &'static str, digest: Digest) -> Self {
        Self {
            name: Cow::Borrowed(name),
            family: Family::Rsa,
            digest,
        }
    }

    pub const fn ecdsa(name: &'static str, digest: Digest) -> Self {
        Self {
            name: Cow::Borrowed(name),
            family: Family::Ecdsa,
            digest,
        }
    }

    /// Signer with a non-standard wire name
    pub fn custom(name: impl Into<String>, family: Family, digest: Digest) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            family,
            digest,
        }
    }

    /// Look up a built-in signer by its exact wire name
    ///
    /// Returns `None` for `"none"` and for any name that differs in case.
    pub fn from_name(name: &str) -> Option<Signer> {
        BUILTIN.iter().find(|s| s.name() == name).cloned()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// Sign `message` with `key`
    ///
    /// `key` is the raw secret for HMAC, an `RSA PRIVATE KEY` PEM block for
    /// RSA, and an `EC PRIVATE KEY` PEM block for ECDSA.
    pub fn sign(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.algorithm().sign(message, key)
    }

    /// Verify `signature` over `message` with `key`
    ///
    /// `key` is the raw secret for HMAC and a `PUBLIC KEY` PEM block for RSA
    /// and ECDSA.
    pub fn verify(&self, message: &[u8], signature: &[u8], key: &[u8]) -> Result<()> {
        self.algorithm().verify(message, signature, key)
    }

    fn algorithm(&self) -> &'static dyn Algorithm {
        match (self.family, self.digest) {
            (Family::Hmac, Digest::Sha256) => &hmac::HMAC_SHA256,
            (Family::Hmac, Digest::Sha384) => &hmac::HMAC_SHA384,
            (Family::Hmac, Digest::Sha512) => &hmac::HMAC_SHA512,
            (Family::Rsa, Digest::Sha256) => &rsa::RSA_SHA256,
            (Family::Rsa, Digest::Sha384) => &rsa::RSA_SHA384,
            (Family::Rsa, Digest::Sha512) => &rsa::RSA_SHA512,
            (Family::Ecdsa, Digest::Sha256) => &ecdsa::ECDSA_SHA256,
            (Family::Ecdsa, Digest::Sha384) => &ecdsa::ECDSA_SHA384,
            (Family::Ecdsa, Digest::Sha512) => &ecdsa::ECDSA_SHA512,
        }
    }
}

impl std::fmt::Display for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// The caller-controlled set of signers a verifier accepts
///
/// The header `alg` is only ever compared against these names; it never
/// selects a verification routine on its own. The default policy is empty
/// and rejects everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlgorithmPolicy {
    allowed: Vec<Signer>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific signers
    pub fn allow_only(signers: impl IntoIterator<Item = Signer>) -> Self {
        Self {
            allowed: signers.into_iter().collect(),
        }
    }

    /// Policy that allows every built-in signer
    ///
    /// # Security Warning
    ///
    /// Mixing families under one policy only stays safe as long as each key
    /// is only valid for one family. Prefer a single-signer policy.
    pub fn allow_all() -> Self {
        Self::allow_only(BUILTIN)
    }

    pub fn hs256_only() -> Self {
        Self::allow_only([HS256])
    }

    pub fn hs384_only() -> Self {
        Self::allow_only([HS384])
    }

    pub fn hs512_only() -> Self {
        Self::allow_only([HS512])
    }

    pub fn rs256_only() -> Self {
        Self::allow_only([RS256])
    }

    pub fn es256_only() -> Self {
        Self::allow_only([ES256])
    }

    pub fn hmac_all() -> Self {
        Self::allow_only([HS256, HS384, HS512])
    }

    pub fn rsa_all() -> Self {
        Self::allow_only([RS256, RS384, RS512])
    }

    pub fn ecdsa_all() -> Self {
        Self::allow_only([ES256, ES384, ES512])
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn is_allowed(&self, alg: &str) -> bool {
        self.allowed.iter().any(|s| s.name() == alg)
    }

    /// Resolve a header `alg` to one of the allowed signers
    ///
    /// The comparison is exact: `"hs256"` does not match `HS256`.
    pub fn resolve(&self, alg: &str) -> Result<&Signer> {
        if self.allowed.is_empty() {
            return Err(Error::NoSigner);
        }
        self.allowed
            .iter()
            .find(|s| s.name() == alg)
            .ok_or_else(|| Error::HeaderAlg {
                found: Some(alg.to_string()),
            })
    }

    pub fn allowed(&self) -> &[Signer] {
        &self.allowed
    }
}

impl From<Signer> for AlgorithmPolicy {
    fn from(signer: Signer) -> Self {
        Self::allow_only([signer])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let builtin = BUILTIN;
        let names: Vec<&str> = builtin.iter().map(Signer::name).collect();
        assert_eq!(
            names,
            ["HS256", "HS384", "HS512", "RS256", "RS384", "RS512", "ES256", "ES384", "ES512"]
        );
        assert_eq!(ES512.digest(), Digest::Sha512);
        assert_eq!(ES512.family(), Family::Ecdsa);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Signer::from_name("RS384"), Some(RS384));
        assert_eq!(Signer::from_name("none"), None);
        assert_eq!(Signer::from_name("hs256"), None);
        assert_eq!(Signer::from_name(""), None);
    }

    #[test]
    fn test_custom_signer() {
        let signer = Signer::custom("HS256-legacy", Family::Hmac, Digest::Sha256);
        assert_eq!(signer.name(), "HS256-legacy");
        assert_eq!(signer.to_string(), "HS256-legacy");
        assert_ne!(signer, HS256);

        let a = signer.sign(b"data", b"secret").unwrap();
        let b = HS256.sign(b"data", b"secret").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_policy_resolve() {
        let policy = AlgorithmPolicy::hmac_all();
        assert_eq!(policy.resolve("HS384").unwrap(), &HS384);
        assert!(matches!(
            policy.resolve("RS256"),
            Err(Error::HeaderAlg { found: Some(alg) }) if alg == "RS256"
        ));
        assert!(matches!(
            policy.resolve("hs256"),
            Err(Error::HeaderAlg { .. })
        ));
        assert!(matches!(
            policy.resolve("none"),
            Err(Error::HeaderAlg { .. })
        ));
    }

    #[test]
    fn test_policy_default_is_empty() {
        let policy = AlgorithmPolicy::default();
        assert!(policy.is_empty());
        assert!(matches!(policy.resolve("HS256"), Err(Error::NoSigner)));
    }

    #[test]
    fn test_policy_presets() {
        assert!(AlgorithmPolicy::hs256_only().is_allowed("HS256"));
        assert!(!AlgorithmPolicy::hs256_only().is_allowed("HS512"));
        assert_eq!(AlgorithmPolicy::allow_all().allowed().len(), 9);
        assert!(AlgorithmPolicy::ecdsa_all().is_allowed("ES512"));
        assert_eq!(AlgorithmPolicy::from(RS512).allowed(), &[RS512]);
    }
}

//! # jwtseal - Sign and Verify Compact JSON Web Tokens
//!
//! **jwtseal** issues and verifies compact, signed tokens: a JSON header and a
//! JSON claim set, bound together by an HMAC, RSA or ECDSA signature so that
//! any tampering is detectable.
//!
//! ## Overview
//!
//! The wire format is three Base64URL segments joined by `.`:
//!
//! ```text
//! base64url(header_json) "." base64url(claims_json) "." base64url(signature)
//! ```
//!
//! The first two segments, joined by the `.`, are the signing input. Both
//! sides sign and verify that literal text; parsed values are never
//! re-serialized for verification.
//!
//! The verifier never lets the token choose its own algorithm. Callers name
//! the [`Signer`] (or an [`AlgorithmPolicy`] of signers) they expect, and
//! the header `alg` is only compared against it. A token signed with `HS256`
//! checked against `HS384`, `"hs256"` or `"none"` fails with
//! [`Error::HeaderAlg`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtseal::*;
//!
//! let mut token = Token::new();
//! token.insert_claim("sub", "user-42")?;
//! token.insert_claim("exp", now + 3600)?;
//! let compact = token.sign(&HS256, b"secret")?;
//!
//! let verified = parse(&HS256, &compact, b"secret")?;
//! assert_eq!(verified.claim("sub"), token.claim("sub"));
//! ```
//!
//! ## Verification Flow
//!
//! ```text
//! &str
//!     │ ParsedToken::from_string()     3 segments, typ == "JWT", alg is a string
//!     ▼
//! ParsedToken (header decoded, nothing trusted)
//!     │ .verify_signature(signer, key) alg == signer name, signature checks out
//!     ▼
//! VerifiedToken (signature verified)
//!     │ .validate(&ClaimsValidation)   claims decoded, exp/nbf checked
//!     ▼
//! Token
//! ```
//!
//! [`parse`], [`parse_with_key_fn`], [`parse_with_policy`] and
//! [`TokenValidator`] run the whole flow in one call.
//!
//! ## Keys
//!
//! | Family | Sign key                 | Verify key          |
//! |--------|--------------------------|---------------------|
//! | HMAC   | raw secret bytes         | raw secret bytes    |
//! | RSA    | `RSA PRIVATE KEY` (PEM)  | `PUBLIC KEY` (PEM)  |
//! | ECDSA  | `EC PRIVATE KEY` (PEM)   | `PUBLIC KEY` (PEM)  |
//!
//! ECDSA signatures are fixed-width `r ‖ s`; the curve comes from the key
//! and must match the signer's digest (P-256/ES256, P-384/ES384,
//! P-521/ES512).
//!
//! ## Logging
//!
//! Rejections are reported through `tracing` at `debug` level. Keys,
//! signatures and claim values are never logged. No subscriber is installed.

mod error;

pub mod algorithm;
pub mod claims;
pub mod keys;
pub mod registry;
pub mod token;
pub mod utils;

pub(crate) mod limits;
pub(crate) mod validator;

// Public Interface
pub use algorithm::{
    AlgorithmPolicy, BUILTIN, Digest, ES256, ES384, ES512, Family, HS256, HS384, HS512, RS256,
    RS384, RS512, Signer,
};
pub use claims::ClaimsValidation;
pub use error::{Error, Result};
pub use keys::EcdsaCurve;
pub use registry::SignerRegistry;
pub use token::{ParsedToken, Token, VerifiedToken};
pub use validator::{KeyFn, TokenValidator, parse, parse_with_key_fn, parse_with_policy};

//! DER decoding of the key structures the signers consume
//!
//! This module uses the RustCrypto `spki` and `der` crates. Only the
//! algorithm identifier, the curve and the raw key bytes are extracted;
//! full validation of key contents is left to aws-lc-rs.

use crate::error::{Error, Result};
use der::{
    Decode, Encode, Sequence,
    asn1::{BitStringRef, OctetStringRef, UintRef},
};
use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};

/// rsaEncryption
pub(crate) const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
/// id-ecPublicKey
pub(crate) const EC_PUBLIC_KEY_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
/// secp256r1
pub(crate) const P256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
/// secp384r1
pub(crate) const P384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");
/// secp521r1
pub(crate) const P521_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

fn key_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::InvalidKey(format!("der: {operation}: {details}"))
}

/// EC private key structure as defined in RFC 5915:
/// ECPrivateKey ::= SEQUENCE {
///     version        INTEGER { ecPrivkeyVer1(1) },
///     privateKey     OCTET STRING,
///     parameters [0] ECParameters {{ NamedCurve }} OPTIONAL,
///     publicKey  [1] BIT STRING OPTIONAL
/// }
#[derive(Sequence)]
struct EcPrivateKey<'a> {
    version: u8,
    private_key: OctetStringRef<'a>,
    #[asn1(context_specific = "0", tag_mode = "EXPLICIT", optional = "true")]
    parameters: Option<ObjectIdentifier>,
    #[asn1(context_specific = "1", tag_mode = "EXPLICIT", optional = "true")]
    public_key: Option<BitStringRef<'a>>,
}

/// ECDSA-Sig-Value ::= SEQUENCE { r INTEGER, s INTEGER }
#[derive(Sequence)]
struct EcdsaSignature<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

/// Fields of a SubjectPublicKeyInfo the signers need
#[derive(Debug, Clone, Copy)]
pub(crate) struct PublicKeyInfo<'a> {
    pub(crate) algorithm: ObjectIdentifier,
    /// Named curve from the algorithm parameters (EC keys only)
    pub(crate) curve: Option<ObjectIdentifier>,
    /// BIT STRING contents
    pub(crate) public_key: &'a [u8],
}

/// Parse a DER SubjectPublicKeyInfo
pub(crate) fn spki(der: &[u8]) -> Result<PublicKeyInfo<'_>> {
    let info = SubjectPublicKeyInfoRef::try_from(der)
        .map_err(|e| key_error("invalid SubjectPublicKeyInfo", e))?;

    let public_key = info
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| key_error("public key BIT STRING", "unused bits must be zero"))?;

    Ok(PublicKeyInfo {
        algorithm: info.algorithm.oid,
        curve: info.algorithm.parameters_oid().ok(),
        public_key,
    })
}

/// Named-curve OID of a SEC1 ECPrivateKey, if the key carries one
pub(crate) fn ec_private_key_curve(der: &[u8]) -> Result<Option<ObjectIdentifier>> {
    let key = EcPrivateKey::from_der(der).map_err(|e| key_error("invalid ECPrivateKey", e))?;
    if key.version != 1 {
        return Err(key_error("unsupported ECPrivateKey version", key.version));
    }
    Ok(key.parameters)
}

/// Re-encode a fixed-width `r ‖ s` signature as an ASN.1 ECDSA-Sig-Value
pub(crate) fn ecdsa_signature_to_asn1(signature: &[u8]) -> Result<Vec<u8>> {
    if signature.is_empty() || signature.len() % 2 != 0 {
        return Err(Error::InvalidSignature);
    }
    let (r, s) = signature.split_at(signature.len() / 2);

    // UintRef strips leading zeros and adds the sign byte where needed
    let value = EcdsaSignature {
        r: UintRef::new(r).map_err(|_| Error::InvalidSignature)?,
        s: UintRef::new(s).map_err(|_| Error::InvalidSignature)?,
    };
    value.to_der().map_err(|_| Error::InvalidSignature)
}

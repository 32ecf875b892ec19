use crate::algorithm::{Algorithm, Digest};
use crate::error::{Error, Result};
use crate::keys::{self, EcdsaCurve};
use crate::utils::der;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{
    self, EcdsaKeyPair, EcdsaSigningAlgorithm, EcdsaVerificationAlgorithm, UnparsedPublicKey,
};

/// ECDSA with fixed-width `r ‖ s` signatures
///
/// The curve comes from the key and any digest verifies on any curve.
/// Signing with a digest other than the curve's own is available on P-521
/// only; P-256 and P-384 keys fail there with `Error::HashUnavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaAlgorithm {
    digest: Digest,
}

pub(crate) static ECDSA_SHA256: EcdsaAlgorithm = EcdsaAlgorithm::new(Digest::Sha256);
pub(crate) static ECDSA_SHA384: EcdsaAlgorithm = EcdsaAlgorithm::new(Digest::Sha384);
pub(crate) static ECDSA_SHA512: EcdsaAlgorithm = EcdsaAlgorithm::new(Digest::Sha512);

/// Wire format the backend expects for a verification algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignatureFormat {
    Fixed,
    Asn1,
}

fn signing_algorithm(curve: EcdsaCurve, digest: Digest) -> Option<&'static EcdsaSigningAlgorithm> {
    match (curve, digest) {
        (EcdsaCurve::P256, Digest::Sha256) => Some(&signature::ECDSA_P256_SHA256_FIXED_SIGNING),
        (EcdsaCurve::P384, Digest::Sha384) => Some(&signature::ECDSA_P384_SHA384_FIXED_SIGNING),
        (EcdsaCurve::P521, Digest::Sha256) => Some(&signature::ECDSA_P521_SHA256_FIXED_SIGNING),
        (EcdsaCurve::P521, Digest::Sha384) => Some(&signature::ECDSA_P521_SHA384_FIXED_SIGNING),
        (EcdsaCurve::P521, Digest::Sha512) => Some(&signature::ECDSA_P521_SHA512_FIXED_SIGNING),
        _ => None,
    }
}

fn verification_algorithm(
    curve: EcdsaCurve,
    digest: Digest,
) -> (&'static EcdsaVerificationAlgorithm, SignatureFormat) {
    use SignatureFormat::{Asn1, Fixed};

    match (curve, digest) {
        (EcdsaCurve::P256, Digest::Sha256) => (&signature::ECDSA_P256_SHA256_FIXED, Fixed),
        (EcdsaCurve::P256, Digest::Sha384) => (&signature::ECDSA_P256_SHA384_ASN1, Asn1),
        (EcdsaCurve::P256, Digest::Sha512) => (&signature::ECDSA_P256_SHA512_ASN1, Asn1),
        (EcdsaCurve::P384, Digest::Sha256) => (&signature::ECDSA_P384_SHA256_ASN1, Asn1),
        (EcdsaCurve::P384, Digest::Sha384) => (&signature::ECDSA_P384_SHA384_FIXED, Fixed),
        (EcdsaCurve::P384, Digest::Sha512) => (&signature::ECDSA_P384_SHA512_ASN1, Asn1),
        (EcdsaCurve::P521, Digest::Sha256) => (&signature::ECDSA_P521_SHA256_FIXED, Fixed),
        (EcdsaCurve::P521, Digest::Sha384) => (&signature::ECDSA_P521_SHA384_FIXED, Fixed),
        (EcdsaCurve::P521, Digest::Sha512) => (&signature::ECDSA_P521_SHA512_FIXED, Fixed),
    }
}

/// Curve of a SEC1 key without parameters, found by trial load
fn detect_curve(der: &[u8]) -> Result<EcdsaCurve> {
    EcdsaCurve::ALL
        .into_iter()
        .find(|&curve| {
            signing_algorithm(curve, curve.digest())
                .is_some_and(|alg| EcdsaKeyPair::from_private_key_der(alg, der).is_ok())
        })
        .ok_or_else(|| Error::InvalidKey("EC private key rejected".to_string()))
}

impl EcdsaAlgorithm {
    pub const fn new(digest: Digest) -> Self {
        Self { digest }
    }

    /// Load a SEC1 key, inferring the curve when the key omits it
    fn key_pair(&self, key: &[u8]) -> Result<EcdsaKeyPair> {
        let private = keys::ec_private_key(key)?;
        let curve = match private.curve {
            Some(curve) => curve,
            None => detect_curve(&private.der)?,
        };

        let algorithm = signing_algorithm(curve, self.digest).ok_or_else(|| {
            Error::HashUnavailable(format!(
                "{} signing is not available on curve {curve}",
                self.digest.name()
            ))
        })?;

        EcdsaKeyPair::from_private_key_der(algorithm, &private.der)
            .map_err(|_| Error::InvalidKey("EC private key rejected".to_string()))
    }
}

impl Algorithm for EcdsaAlgorithm {
    fn sign(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let key_pair = self.key_pair(key)?;

        let rng = SystemRandom::new();
        let signature = key_pair
            .sign(&rng, message)
            .map_err(|_| Error::SigningFailed("ECDSA signing failed".to_string()))?;

        Ok(signature.as_ref().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8], key: &[u8]) -> Result<()> {
        let public = keys::ec_public_key(key)?;

        // Fixed width: reject before any curve math
        if signature.len() != public.curve.signature_len() {
            return Err(Error::InvalidSignature);
        }

        let (algorithm, format) = verification_algorithm(public.curve, self.digest);
        let public_key = UnparsedPublicKey::new(algorithm, &public.point);
        let result = match format {
            SignatureFormat::Fixed => public_key.verify(message, signature),
            SignatureFormat::Asn1 => {
                public_key.verify(message, &der::ecdsa_signature_to_asn1(signature)?)
            }
        };
        result.map_err(|_| Error::InvalidSignature)
    }
}

use crate::algorithm::{Algorithm, Digest};
use crate::error::{Error, Result};
use crate::keys;

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, RsaEncoding, RsaKeyPair, UnparsedPublicKey};

/// RSASSA-PKCS1-v1_5
///
/// Signs with an `RSA PRIVATE KEY` (PKCS#1) block and verifies with a
/// `PUBLIC KEY` (SubjectPublicKeyInfo) block. Moduli between 2048 and 8192
/// bits are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaAlgorithm {
    digest: Digest,
}

pub(crate) static RSA_SHA256: RsaAlgorithm = RsaAlgorithm::new(Digest::Sha256);
pub(crate) static RSA_SHA384: RsaAlgorithm = RsaAlgorithm::new(Digest::Sha384);
pub(crate) static RSA_SHA512: RsaAlgorithm = RsaAlgorithm::new(Digest::Sha512);

impl RsaAlgorithm {
    pub const fn new(digest: Digest) -> Self {
        Self { digest }
    }

    fn encoding(&self) -> &'static dyn RsaEncoding {
        match self.digest {
            Digest::Sha256 => &signature::RSA_PKCS1_SHA256,
            Digest::Sha384 => &signature::RSA_PKCS1_SHA384,
            Digest::Sha512 => &signature::RSA_PKCS1_SHA512,
        }
    }

    fn verification(&self) -> &'static dyn signature::VerificationAlgorithm {
        match self.digest {
            Digest::Sha256 => &signature::RSA_PKCS1_2048_8192_SHA256,
            Digest::Sha384 => &signature::RSA_PKCS1_2048_8192_SHA384,
            Digest::Sha512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        }
    }
}

impl Algorithm for RsaAlgorithm {
    fn sign(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        let der = keys::rsa_private_key(key)?;
        let key_pair = RsaKeyPair::from_der(&der)
            .map_err(|e| Error::InvalidKey(format!("RSA private key rejected: {e}")))?;

        let rng = SystemRandom::new();
        let mut signature = vec![0u8; key_pair.public_modulus_len()];
        key_pair
            .sign(self.encoding(), &rng, message, &mut signature)
            .map_err(|_| Error::SigningFailed("RSA signing failed".to_string()))?;

        Ok(signature)
    }

    fn verify(&self, message: &[u8], signature: &[u8], key: &[u8]) -> Result<()> {
        let public_key_der = keys::rsa_public_key(key)?;

        UnparsedPublicKey::new(self.verification(), &public_key_der)
            .verify(message, signature)
            .map_err(|_| Error::InvalidSignature)
    }
}

use crate::algorithm::{Algorithm, Digest};
use crate::error::{Error, Result};
use crate::utils::constant_time_equal;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// HMAC over a raw shared secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HmacAlgorithm {
    digest: Digest,
}

pub(crate) static HMAC_SHA256: HmacAlgorithm = HmacAlgorithm::new(Digest::Sha256);
pub(crate) static HMAC_SHA384: HmacAlgorithm = HmacAlgorithm::new(Digest::Sha384);
pub(crate) static HMAC_SHA512: HmacAlgorithm = HmacAlgorithm::new(Digest::Sha512);

impl HmacAlgorithm {
    pub const fn new(digest: Digest) -> Self {
        Self { digest }
    }

    fn compute(&self, message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        match self.digest {
            Digest::Sha256 => compute::<Hmac<Sha256>>(message, secret),
            Digest::Sha384 => compute::<Hmac<Sha384>>(message, secret),
            Digest::Sha512 => compute::<Hmac<Sha512>>(message, secret),
        }
    }
}

fn compute<M: Mac + KeyInit>(message: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|_| Error::InvalidKey("HMAC key rejected".to_string()))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl Algorithm for HmacAlgorithm {
    fn sign(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        self.compute(message, key)
    }

    /// Recompute the MAC and compare in constant time
    fn verify(&self, message: &[u8], signature: &[u8], key: &[u8]) -> Result<()> {
        let expected = self.compute(message, key)?;

        if constant_time_equal(signature, &expected) {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }
}

use crate::error::Result;

/// Core contract every signer family implements
///
/// Implementations operate on raw bytes: `message` is the signing input,
/// `signature` the decoded signature bytes, `key` the key material in the
/// family's format (raw secret or PEM block).
pub trait Algorithm: Send + Sync {
    /// Produce a signature over `message`
    fn sign(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>>;

    /// Check `signature` over `message`
    ///
    /// Returns `Error::InvalidSignature` when the signature does not verify.
    /// Key problems surface as `Error::InvalidKey` or `Error::HashUnavailable`.
    fn verify(&self, message: &[u8], signature: &[u8], key: &[u8]) -> Result<()>;
}

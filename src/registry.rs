//! Name → signer lookup for the sign side
//!
//! The registry only ever answers "which signer does this name mean" for
//! tokens the caller is about to sign, or builds an [`AlgorithmPolicy`]
//! the caller then hands to the verifier explicitly. Verification never
//! consults the process-wide table on its own.
//!
//! Registration is a load-time activity. Registering a name twice, or
//! installing the process-wide table after it has been set or read, is a
//! programmer error and panics.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::algorithm::{AlgorithmPolicy, BUILTIN, Signer};
use crate::error::{Error, Result};

/// A table of signers keyed by wire name
#[derive(Debug, Clone, Default)]
pub struct SignerRegistry {
    signers: HashMap<String, Signer>,
}

impl SignerRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in signer
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for signer in BUILTIN {
            registry.register(signer);
        }
        registry
    }

    /// Add a signer under its name
    ///
    /// # Panics
    ///
    /// Panics if a signer with the same name is already registered.
    pub fn register(&mut self, signer: Signer) -> &mut Self {
        let name = signer.name().to_string();
        assert!(
            !self.signers.contains_key(&name),
            "signer {name:?} is already registered"
        );
        self.signers.insert(name, signer);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Signer> {
        self.signers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.signers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    /// Build a verification policy from the named signers
    ///
    /// Every name must be registered; the caller picks the set, never the
    /// token.
    pub fn policy(&self, names: &[&str]) -> Result<AlgorithmPolicy> {
        let signers = names
            .iter()
            .map(|name| {
                self.get(name).cloned().ok_or_else(|| {
                    Error::ConfigurationInvalid(format!("no signer registered for {name:?}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AlgorithmPolicy::allow_only(signers))
    }
}

static GLOBAL: OnceLock<SignerRegistry> = OnceLock::new();

/// Install the process-wide registry
///
/// Call once at startup, before any token is signed by name.
///
/// # Panics
///
/// Panics if a registry was already installed, or if [`global`] has
/// already been read (which installs the defaults).
pub fn install(registry: SignerRegistry) {
    if GLOBAL.set(registry).is_err() {
        panic!("signer registry is already installed");
    }
    tracing::debug!("installed signer registry");
}

/// The process-wide registry
///
/// Installs [`SignerRegistry::with_defaults`] on first use if nothing was
/// installed.
pub fn global() -> &'static SignerRegistry {
    GLOBAL.get_or_init(SignerRegistry::with_defaults)
}

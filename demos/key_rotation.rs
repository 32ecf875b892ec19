//! Key rotation example: pick the verification key by `kid`
//!
//! Tokens signed with the current and the previous key both verify while the
//! rotation is in progress; tokens naming an unknown key are refused without
//! touching the signature.

use std::collections::HashMap;

use jwtseal::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CURRENT_PRIVATE: &[u8] = include_bytes!("../tests/fixtures/ec_p256_private.pem");
const CURRENT_PUBLIC: &[u8] = include_bytes!("../tests/fixtures/ec_p256_public.pem");
const PREVIOUS_PRIVATE: &[u8] = include_bytes!("../tests/fixtures/ec_p256_other_private.pem");
const PREVIOUS_PUBLIC: &[u8] = include_bytes!("../tests/fixtures/ec_p256_other_public.pem");

fn issue(kid: &str, key: &[u8]) -> Result<String> {
    let mut token = Token::new();
    token.header.insert("kid".to_string(), kid.into());
    token.insert_claim("sub", "service-a")?;
    token.sign(&ES256, key)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtseal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== jwtseal - Key Rotation Example ===\n");

    let keys: HashMap<&'static str, &'static [u8]> = HashMap::from([
        ("2025-01", PREVIOUS_PUBLIC),
        ("2025-07", CURRENT_PUBLIC),
    ]);

    let validator = TokenValidator::new()
        .signer(ES256)
        .key_fn(move |partial| {
            let kid = partial
                .key_id()
                .ok_or_else(|| Error::KeyUnavailable("token has no kid".to_string()))?;
            keys.get(kid)
                .map(|key| key.to_vec())
                .ok_or_else(|| Error::KeyUnavailable(format!("unknown kid {kid:?}")))
        })
        .build();

    for (label, compact) in [
        ("current key", issue("2025-07", CURRENT_PRIVATE)?),
        ("previous key", issue("2025-01", PREVIOUS_PRIVATE)?),
        ("retired key", issue("2024-07", PREVIOUS_PRIVATE)?),
        ("wrong key for kid", issue("2025-07", PREVIOUS_PRIVATE)?),
    ] {
        match validator.verify(&compact) {
            Ok(token) => println!("{label}: accepted, kid={:?}", token.key_id()),
            Err(e) => println!("{label}: rejected: {e}"),
        }
    }

    Ok(())
}

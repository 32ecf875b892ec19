//! Basic example: issue a token, then verify it
//!
//! Run with `RUST_LOG=jwtseal=debug` to see why rejected tokens fail.

use jwtseal::*;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Serialize, Deserialize)]
struct Session {
    iss: String,
    sub: String,
    exp: i64,
    roles: Vec<String>,
}

const SECRET: &[u8] = b"your-256-bit-secret-key-here!";

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jwtseal=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== jwtseal - Basic Example ===\n");

    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;

    // Issue
    let session = Session {
        iss: "https://example.com".to_string(),
        sub: "user123".to_string(),
        exp: now + 3600,
        roles: vec!["reader".to_string()],
    };
    let compact = Token::from_claims(&session)?.sign(&HS256, SECRET)?;
    println!("Token: {compact}\n");

    // Verify
    let validator = TokenValidator::new()
        .signer(HS256)
        .key(SECRET)
        .validate(ClaimsValidation::default().clock_skew(60))
        .build();

    let token = validator.verify(&compact)?;
    let session: Session = token.claims_as()?;
    println!("Algorithm: {:?}", token.algorithm());
    println!("Expires at: {:?}", token.expiration());
    println!("Session: {session:?}\n");

    // A token claiming another algorithm is rejected before any crypto runs
    let other = Token::from_claims(&session)?.sign(&HS512, SECRET)?;
    match validator.verify(&other) {
        Ok(_) => println!("HS512 token unexpectedly accepted"),
        Err(e) => println!("HS512 token rejected: {e}"),
    }

    Ok(())
}

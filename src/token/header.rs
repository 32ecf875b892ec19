use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Header field naming the signing algorithm
pub const ALG: &str = "alg";

/// Header field naming the token type
pub const TYP: &str = "typ";

/// Header field naming the signing key
pub const KID: &str = "kid";

/// The only accepted `typ` value
pub const JWT: &str = "JWT";

/// Set `alg` and `typ`, overwriting earlier values
pub(crate) fn stamp(header: &mut Map<String, Value>, alg: &str) {
    header.insert(ALG.to_string(), Value::String(alg.to_string()));
    header.insert(TYP.to_string(), Value::String(JWT.to_string()));
}

/// Check `typ == "JWT"` and return the `alg` string
pub(crate) fn check(header: &Map<String, Value>) -> Result<&str> {
    match header.get(TYP) {
        Some(Value::String(typ)) if typ == JWT => {}
        _ => return Err(Error::HeaderTyp),
    }

    match header.get(ALG) {
        Some(Value::String(alg)) => Ok(alg),
        _ => Err(Error::HeaderAlg { found: None }),
    }
}

/// Look up a string-valued header field
pub(crate) fn string_field<'a>(header: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    header.get(name).and_then(Value::as_str)
}

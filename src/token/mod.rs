// Internal modules
pub mod header;
mod parsed;
#[allow(clippy::module_inception)]
mod token;
mod verified;

// Public API exports
pub use parsed::ParsedToken;
pub use token::Token;
pub use verified::VerifiedToken;

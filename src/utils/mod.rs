pub mod base64url;
pub mod compare;

pub(crate) mod der;

pub use base64url::{decode, encode};
pub use compare::constant_time_equal;

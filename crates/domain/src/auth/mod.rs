//! Credential configuration and token types

mod credentials;
mod token;

pub use credentials::Credentials;
pub use token::{AccessToken, TokenClaims};

//! Token lifecycle management and the authenticated client

mod cache;
mod client;

pub use cache::{DEFAULT_STALENESS_MARGIN_SECONDS, TokenCache, TokenState};
pub use client::AuthenticatedClient;

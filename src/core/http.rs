//! HTTP utilities for Sleeper API communication

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

const USER_AGENT: &str = concat!("sleeper-keepers/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every upstream request.
pub fn common_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the outbound client shared by every request.
///
/// The client pools connections internally and is never mutated after
/// construction, so clones can be handed to each worker freely. Transport
/// timeouts are left at the reqwest defaults.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(common_headers())
        .build()?;
    Ok(client)
}

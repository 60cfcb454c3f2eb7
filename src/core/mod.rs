//! Core utilities shared across the service
//!
//! - `http`: construction of the pooled outbound HTTP client

pub mod http;

pub use http::build_client;

//! Error types for the Sleeper keepers service

use std::sync::Arc;
use thiserror::Error;

use crate::ids::{PlayerId, UserId};


pub type Result<T> = std::result::Result<T, KeeperError>;

#[derive(Error, Debug)]
pub enum KeeperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Sleeper API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Sleeper API returned no data for {resource}")]
    NoData { resource: &'static str },

    #[error("Owner Id not found: {owner_id}")]
    OwnerNotFound { owner_id: UserId },

    #[error("Player Id not found: {player_id}")]
    PlayerNotFound { player_id: PlayerId },

    /// A failure from a fetch whose result was shared between waiting requests.
    #[error(transparent)]
    Shared(Arc<KeeperError>),
}

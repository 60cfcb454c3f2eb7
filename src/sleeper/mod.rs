//! Sleeper API access: wire types, the HTTP client, and the player directory cache.

pub mod cache_players;
pub mod http;
pub mod types;

pub use cache_players::PlayerDirectoryCache;
pub use http::{SleeperClient, SLEEPER_BASE_URL};
pub use types::{Owner, OwnerMetadata, Player, PlayerDirectory, Roster};

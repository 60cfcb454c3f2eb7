//! Sleeper Fantasy Football Keepers Library
//!
//! Builds a text listing of which owner is keeping which player in a Sleeper
//! league, served over HTTP for a serverless front end.
//!
//! ## Features
//!
//! - **League Data Retrieval**: Fetch rosters and users for a league from the Sleeper API
//! - **Player Directory**: Resolve keeper ids against the full NFL player directory
//! - **Keeper Listing**: Join owners, rosters, and players into sorted text lines
//! - **HTTP Endpoint**: `GET|POST /keepers/{league_id}` with correlated error responses
//! - **Optional Caching**: Time-bounded in-memory cache for the player directory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sleeper_keepers::{
//!     core::build_client,
//!     keepers::collect_keepers,
//!     sleeper::{PlayerDirectoryCache, SleeperClient},
//!     LeagueId,
//! };
//!
//! # async fn example() -> sleeper_keepers::Result<()> {
//! let sleeper = SleeperClient::new(build_client()?)?;
//! let listing = collect_keepers(
//!     &sleeper,
//!     &PlayerDirectoryCache::disabled(),
//!     &LeagueId::new("784512345678901234"),
//! )
//! .await?;
//!
//! print!("{}", listing.render());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! The serverless host tells the handler which port to listen on:
//! ```bash
//! export FUNCTIONS_CUSTOMHANDLER_PORT=3000
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod ids;
pub mod keepers;
pub mod server;
pub mod sleeper;

// Re-export commonly used types
pub use error::{KeeperError, Result};
pub use ids::{LeagueId, PlayerId, UserId};
pub use keepers::{KeeperListing, KeeperResult};

pub const HOST_ENV_VAR: &str = "KEEPERS_HOST";
pub const PORT_ENV_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";
pub const WORKERS_ENV_VAR: &str = "KEEPERS_WORKERS";
pub const PLAYERS_CACHE_TTL_ENV_VAR: &str = "KEEPERS_PLAYERS_CACHE_TTL_SECS";

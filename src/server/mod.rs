//! HTTP surface: shared state and route registration.

pub mod correlation;
pub mod keepers;

use actix_web::web;

use crate::sleeper::{PlayerDirectoryCache, SleeperClient};

/// Application state shared across all handlers
///
/// Built once at startup; nothing in it is mutated afterwards apart from
/// the connection pool and the optional player cache, both internally
/// synchronized.
#[derive(Clone)]
pub struct AppState {
    pub sleeper: SleeperClient,
    pub players_cache: PlayerDirectoryCache,
}

impl AppState {
    pub fn new(sleeper: SleeperClient, players_cache: PlayerDirectoryCache) -> Self {
        Self {
            sleeper,
            players_cache,
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(keepers::configure);
}

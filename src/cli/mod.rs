//! Server settings, read from flags or the environment.

use clap::Parser;
use std::time::Duration;

use crate::{HOST_ENV_VAR, PLAYERS_CACHE_TTL_ENV_VAR, PORT_ENV_VAR, WORKERS_ENV_VAR};

#[derive(Debug, Clone, Parser)]
#[clap(name = "sleeper-keepers", about = "Sleeper league keeper listing service")]
pub struct ServerArgs {
    /// Address to bind the HTTP listener to.
    #[clap(long, env = HOST_ENV_VAR, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (set by the serverless host for custom handlers).
    #[clap(long, env = PORT_ENV_VAR, default_value_t = 3000)]
    pub port: u16,

    /// Number of worker threads (defaults to the number of CPUs).
    #[clap(long, env = WORKERS_ENV_VAR)]
    pub workers: Option<usize>,

    /// How long to keep the NFL player directory in memory. `0` refetches it on every request.
    #[clap(long, env = PLAYERS_CACHE_TTL_ENV_VAR, default_value_t = 0)]
    pub players_cache_ttl_secs: u64,
}

impl ServerArgs {
    /// Player directory TTL, or `None` when caching is disabled.
    pub fn players_cache_ttl(&self) -> Option<Duration> {
        match self.players_cache_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

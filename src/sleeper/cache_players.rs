//! Optional in-memory cache for the NFL player directory.
//!
//! The directory is large and identical for every league, but the service
//! refetches it on every request unless a TTL is configured.

use moka::future::Cache;
use std::{sync::Arc, time::Duration};

use crate::{
    sleeper::{http::SleeperClient, types::PlayerDirectory},
    KeeperError, Result,
};

/// Single-entry, time-bounded holder for the player directory.
#[derive(Clone)]
pub struct PlayerDirectoryCache {
    inner: Option<Cache<(), Arc<PlayerDirectory>>>,
}

impl PlayerDirectoryCache {
    /// `None` disables caching entirely.
    pub fn new(ttl: Option<Duration>) -> Self {
        let inner = ttl.map(|ttl| Cache::builder().max_capacity(1).time_to_live(ttl).build());
        Self { inner }
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Return the cached directory, or fetch it.
    ///
    /// Concurrent misses share a single fetch. Failed fetches are not cached.
    pub async fn load_or_fetch(&self, sleeper: &SleeperClient) -> Result<Arc<PlayerDirectory>> {
        let Some(cache) = &self.inner else {
            return Ok(Arc::new(sleeper.get_players().await?));
        };

        let players = cache
            .try_get_with((), async {
                tracing::debug!("player directory cache miss");
                sleeper.get_players().await.map(Arc::new)
            })
            .await
            .map_err(|e| Arc::try_unwrap(e).unwrap_or_else(KeeperError::Shared))?;

        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::build_client, ids::PlayerId};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    async fn mount_players(server: &MockServer, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "101": { "player_id": "101", "first_name": "Bob", "last_name": "Smith" }
            })))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_disabled_cache_fetches_every_time() {
        let server = MockServer::start().await;
        mount_players(&server, 2).await;

        let sleeper = SleeperClient::with_base_url(build_client().unwrap(), &server.uri()).unwrap();
        let cache = PlayerDirectoryCache::disabled();
        assert!(!cache.is_enabled());

        cache.load_or_fetch(&sleeper).await.unwrap();
        let players = cache.load_or_fetch(&sleeper).await.unwrap();
        assert!(players.get(&PlayerId::new("101")).is_ok());
    }

    #[tokio::test]
    async fn test_enabled_cache_fetches_once() {
        let server = MockServer::start().await;
        mount_players(&server, 1).await;

        let sleeper = SleeperClient::with_base_url(build_client().unwrap(), &server.uri()).unwrap();
        let cache = PlayerDirectoryCache::new(Some(Duration::from_secs(300)));
        assert!(cache.is_enabled());

        let first = cache.load_or_fetch(&sleeper).await.unwrap();
        let second = cache.load_or_fetch(&sleeper).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_concurrent_misses_share_one_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "101": { "first_name": "Bob", "last_name": "Smith" } }))
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let sleeper = SleeperClient::with_base_url(build_client().unwrap(), &server.uri()).unwrap();
        let cache = PlayerDirectoryCache::new(Some(Duration::from_secs(300)));

        let (first, second) = tokio::join!(
            cache.load_or_fetch(&sleeper),
            cache.load_or_fetch(&sleeper)
        );
        assert!(Arc::ptr_eq(&first.unwrap(), &second.unwrap()));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/players/nfl"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_players(&server, 1).await;

        let sleeper = SleeperClient::with_base_url(build_client().unwrap(), &server.uri()).unwrap();
        let cache = PlayerDirectoryCache::new(Some(Duration::from_secs(300)));

        let err = cache.load_or_fetch(&sleeper).await.unwrap_err();
        assert!(err.to_string().contains("500"));
        let players = cache.load_or_fetch(&sleeper).await.unwrap();
        assert_eq!(players.len(), 1);
    }
}

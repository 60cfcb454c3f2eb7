use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use url::ParseError;

use crate::{
    error::{KeeperError, Result},
    ids::LeagueId,
    sleeper::types::{Owner, PlayerDirectory, Roster},
};


/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Read-only client for the three Sleeper resources the keeper listing needs.
///
/// Cloning is cheap: the inner `reqwest::Client` shares one connection pool.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    base_url: Url,
}

impl SleeperClient {
    pub fn new(client: Client) -> Result<Self> {
        Self::with_base_url(client, SLEEPER_BASE_URL)
    }

    /// Point the client somewhere other than the public API (mock servers).
    pub fn with_base_url(client: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /league/{league_id}/rosters`
    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        let url = self.endpoint(&["league", league_id.as_str(), "rosters"])?;
        self.get_json(url, "rosters").await
    }

    /// `GET /league/{league_id}/users`
    pub async fn get_users(&self, league_id: &LeagueId) -> Result<Vec<Owner>> {
        let url = self.endpoint(&["league", league_id.as_str(), "users"])?;
        self.get_json(url, "users").await
    }

    /// `GET /players/nfl`, the whole directory.
    pub async fn get_players(&self) -> Result<PlayerDirectory> {
        let url = self.endpoint(&["players", "nfl"])?;
        self.get_json(url, "players").await
    }

    /// Append path segments to the base URL, percent-encoding each one so a
    /// league id can never spill into the query, fragment, or another segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Fetch and decode one resource. A JSON `null` body counts as no data.
    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: &'static str) -> Result<T> {
        tracing::debug!(%url, resource, "fetching from Sleeper API");

        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        serde_json::from_slice::<Option<T>>(&body)?.ok_or(KeeperError::NoData { resource })
    }
}

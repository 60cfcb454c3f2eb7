//! Keeper listing: fetch, join, and format.

pub mod format;
pub mod join;


pub use format::{render_keepers, sort_keepers, KeeperListing};
pub use join::{join_keepers, keeper_rosters, KeeperResult};

use crate::{
    sleeper::{PlayerDirectoryCache, SleeperClient},
    LeagueId, Result,
};

/// Build the keeper listing for one league.
///
/// Rosters and users are fetched first; the player directory is only pulled
/// when some roster actually has keepers. Any fetch or lookup failure aborts
/// the whole listing.
pub async fn collect_keepers(
    sleeper: &SleeperClient,
    players_cache: &PlayerDirectoryCache,
    league_id: &LeagueId,
) -> Result<KeeperListing> {
    let rosters = sleeper.get_rosters(league_id).await?;
    let owners = sleeper.get_users(league_id).await?;

    let rosters = keeper_rosters(&rosters);
    if rosters.is_empty() {
        tracing::info!(%league_id, "No keepers found");
        return Ok(KeeperListing::NoKeepers {
            league_id: league_id.clone(),
        });
    }

    let players = players_cache.load_or_fetch(sleeper).await?;
    let results = join_keepers(&rosters, &owners, &players)?;

    tracing::info!(
        %league_id,
        rosters = rosters.len(),
        keepers = results.len(),
        "Resolved keepers"
    );

    Ok(KeeperListing::from_results(results))
}

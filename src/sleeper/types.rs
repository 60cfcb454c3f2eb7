use crate::ids::{PlayerId, UserId};
use crate::error::{KeeperError, Result};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

#[cfg(test)]
mod tests;

/// Sleeper sends `null` for fields it has no value for (a free agent's team,
/// an owner who never named their team). Treat those the same as absent.
fn de_null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One team in a league, from `/league/{league_id}/rosters`.
#[derive(Debug, Clone, Deserialize)]
pub struct Roster {
    /// Orphaned rosters have a null owner; the empty id never matches a user.
    #[serde(default, deserialize_with = "de_null_default")]
    pub owner_id: UserId,
    #[serde(default)]
    pub keepers: Option<Vec<PlayerId>>,
}

impl Roster {
    /// Keeper ids in upstream order, empty when none are designated.
    pub fn keeper_ids(&self) -> &[PlayerId] {
        self.keepers.as_deref().unwrap_or_default()
    }

    pub fn has_keepers(&self) -> bool {
        !self.keeper_ids().is_empty()
    }
}

/// League member, from `/league/{league_id}/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct Owner {
    pub user_id: UserId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub metadata: OwnerMetadata,
}

impl Owner {
    /// Wire `metadata.team_name`, flattened onto the owner.
    pub fn team_name(&self) -> &str {
        &self.metadata.team_name
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerMetadata {
    #[serde(default, deserialize_with = "de_null_default")]
    pub team_name: String,
}

/// Entry in the `/players/nfl` directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "de_null_default")]
    pub player_id: PlayerId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub position: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub team: String,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The full NFL player directory, keyed by player id.
///
/// Sleeper serves it as one JSON object of several thousand entries; it does
/// not vary by league.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct PlayerDirectory(HashMap<PlayerId, Player>);

impl PlayerDirectory {
    /// Look up a player, failing with [`KeeperError::PlayerNotFound`] on a miss.
    pub fn get(&self, player_id: &PlayerId) -> Result<&Player> {
        self.0
            .get(player_id)
            .ok_or_else(|| KeeperError::PlayerNotFound {
                player_id: player_id.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(PlayerId, Player)> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = (PlayerId, Player)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

//! Resolve each roster's keepers against the league's owners and the player directory.

use crate::{
    error::{KeeperError, Result},
    sleeper::types::{Owner, Player, PlayerDirectory, Roster},
};

/// One kept player, with the owner who is keeping them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeeperResult {
    pub owner: String,
    pub team_name: String,
    pub player: String,
    pub position: String,
    pub team: String,
}

impl KeeperResult {
    pub fn new(owner: &Owner, player: &Player) -> Self {
        Self {
            owner: owner.display_name.clone(),
            team_name: owner.team_name().to_string(),
            player: player.full_name(),
            position: player.position.clone(),
            team: player.team.clone(),
        }
    }
}

/// Rosters that designate at least one keeper, in upstream order.
pub fn keeper_rosters(rosters: &[Roster]) -> Vec<&Roster> {
    rosters.iter().filter(|r| r.has_keepers()).collect()
}

/// Join keeper rosters with their owners and players.
///
/// Emits one result per keeper id, in roster order then keeper order. A
/// keeper id listed twice yields two results. The first roster whose owner
/// or keeper cannot be resolved aborts the whole join.
pub fn join_keepers(
    rosters: &[&Roster],
    owners: &[Owner],
    players: &PlayerDirectory,
) -> Result<Vec<KeeperResult>> {
    let mut results = Vec::new();

    for roster in rosters {
        let owner = owners
            .iter()
            .find(|o| o.user_id == roster.owner_id)
            .ok_or_else(|| KeeperError::OwnerNotFound {
                owner_id: roster.owner_id.clone(),
            })?;

        for player_id in roster.keeper_ids() {
            let player = players.get(player_id)?;
            results.push(KeeperResult::new(owner, player));
        }
    }

    Ok(results)
}

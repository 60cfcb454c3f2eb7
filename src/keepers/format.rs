//! Text rendering of the keeper listing.

use std::fmt;

use super::join::KeeperResult;
use crate::ids::LeagueId;

/// Outcome of a keeper lookup for one league.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeeperListing {
    /// No roster in the league designates a keeper. Not an error.
    NoKeepers { league_id: LeagueId },
    /// Resolved keepers, already sorted for display.
    Keepers(Vec<KeeperResult>),
}

impl KeeperListing {
    /// Wrap joined results, putting them in display order.
    pub fn from_results(mut results: Vec<KeeperResult>) -> Self {
        sort_keepers(&mut results);
        KeeperListing::Keepers(results)
    }

    /// Response body for this listing.
    pub fn render(&self) -> String {
        match self {
            KeeperListing::NoKeepers { league_id } => {
                format!("no keepers found for leagueId: {}", league_id)
            }
            KeeperListing::Keepers(results) => render_keepers(results),
        }
    }
}

/// Sort by owner display name, then player name. Ties keep their join order.
pub fn sort_keepers(results: &mut [KeeperResult]) {
    results.sort_by(|a, b| a.owner.cmp(&b.owner).then_with(|| a.player.cmp(&b.player)));
}

/// One line per keeper, each terminated by `\n`.
pub fn render_keepers(results: &[KeeperResult]) -> String {
    results.iter().map(|k| format!("{}\n", k)).collect()
}

impl fmt::Display for KeeperResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} ({} - {})",
            self.owner, self.team_name, self.player, self.position, self.team
        )
    }
}

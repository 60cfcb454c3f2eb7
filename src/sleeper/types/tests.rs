//! Unit tests for Sleeper wire types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_roster_deserialization_with_keepers() {
        let json = json!({
            "roster_id": 1,
            "owner_id": "5",
            "league_id": "784512345678901234",
            "keepers": ["101", "4046"],
            "players": ["101", "4046", "6794"],
            "settings": { "wins": 9, "losses": 5 }
        });

        let roster: Roster = serde_json::from_value(json).unwrap();
        assert_eq!(roster.owner_id, UserId::new("5"));
        assert_eq!(
            roster.keeper_ids(),
            &[PlayerId::new("101"), PlayerId::new("4046")]
        );
        assert!(roster.has_keepers());
    }

    #[test]
    fn test_roster_null_and_missing_keepers() {
        let null_keepers: Roster =
            serde_json::from_value(json!({ "owner_id": "5", "keepers": null })).unwrap();
        assert!(null_keepers.keepers.is_none());
        assert!(!null_keepers.has_keepers());

        let missing_keepers: Roster = serde_json::from_value(json!({ "owner_id": "5" })).unwrap();
        assert!(missing_keepers.keeper_ids().is_empty());

        let empty_keepers: Roster =
            serde_json::from_value(json!({ "owner_id": "5", "keepers": [] })).unwrap();
        assert!(!empty_keepers.has_keepers());
    }

    #[test]
    fn test_roster_orphaned_owner_is_empty_id() {
        let roster: Roster =
            serde_json::from_value(json!({ "owner_id": null, "keepers": ["101"] })).unwrap();
        assert_eq!(roster.owner_id.as_str(), "");
    }

    #[test]
    fn test_owner_team_name_from_metadata() {
        let json = json!({
            "user_id": "5",
            "display_name": "Alice",
            "avatar": "abc123",
            "metadata": { "team_name": "Aces", "mention_pn": "on" }
        });

        let owner: Owner = serde_json::from_value(json).unwrap();
        assert_eq!(owner.user_id, UserId::new("5"));
        assert_eq!(owner.display_name, "Alice");
        assert_eq!(owner.team_name(), "Aces");
    }

    #[test]
    fn test_owner_without_team_name() {
        let no_team: Owner = serde_json::from_value(json!({
            "user_id": "6",
            "display_name": "Bob",
            "metadata": { "avatar": "x" }
        }))
        .unwrap();
        assert_eq!(no_team.team_name(), "");

        let null_metadata: Owner = serde_json::from_value(json!({
            "user_id": "7",
            "display_name": "Carol",
            "metadata": null
        }))
        .unwrap();
        assert_eq!(null_metadata.team_name(), "");

        let no_metadata: Owner =
            serde_json::from_value(json!({ "user_id": "8", "display_name": "Dan" })).unwrap();
        assert_eq!(no_metadata.team_name(), "");
    }

    #[test]
    fn test_owner_requires_user_id() {
        let result = serde_json::from_value::<Owner>(json!({ "display_name": "Nobody" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_player_full_name_and_null_team() {
        let player: Player = serde_json::from_value(json!({
            "player_id": "101",
            "first_name": "Bob",
            "last_name": "Smith",
            "position": "WR",
            "team": null,
            "fantasy_positions": ["WR"],
            "age": 27
        }))
        .unwrap();

        assert_eq!(player.full_name(), "Bob Smith");
        assert_eq!(player.position, "WR");
        assert_eq!(player.team, "");
    }

    #[test]
    fn test_player_directory_lookup() {
        let directory: PlayerDirectory = serde_json::from_value(json!({
            "101": {
                "player_id": "101",
                "first_name": "Bob",
                "last_name": "Smith",
                "position": "WR",
                "team": "NYJ"
            },
            "DEN": {
                "player_id": "DEN",
                "first_name": "Denver",
                "last_name": "Broncos",
                "position": "DEF",
                "team": "DEN"
            }
        }))
        .unwrap();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get(&PlayerId::new("DEN")).unwrap().position, "DEF");
        assert_eq!(
            directory.get(&PlayerId::new("101")).unwrap().full_name(),
            "Bob Smith"
        );
    }

    #[test]
    fn test_player_directory_miss_is_not_found() {
        let directory = PlayerDirectory::default();
        assert!(directory.is_empty());

        match directory.get(&PlayerId::new("9999")) {
            Err(KeeperError::PlayerNotFound { player_id }) => {
                assert_eq!(player_id, PlayerId::new("9999"))
            }
            other => panic!("Expected PlayerNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_player_directory_from_iter() {
        let directory: PlayerDirectory = vec![(
            PlayerId::new("1"),
            Player {
                player_id: PlayerId::new("1"),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                ..Player::default()
            },
        )]
        .into_iter()
        .collect();

        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(&PlayerId::new("1")).unwrap().full_name(), "A B");
    }
}

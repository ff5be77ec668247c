use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A summoner's standing in one ranked queue.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntry {
    // Absent on entries for queues without a league, such as Hyper Roll.
    #[serde(default)]
    pub league_id: String,
    pub summoner_id: String,
    pub summoner_name: String,

    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i64,

    /// First place finishes.
    pub wins: i64,
    /// Second through eighth place finishes.
    pub losses: i64,

    // Hyper Roll entries carry none of the status flags.
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
}

/// Narrows the list the league endpoint answers with to its first entry.
///
/// The endpoint is shared with the multi-queue ranked API and always answers
/// with a list, even though it holds a single entry for TFT.
pub(crate) fn first_entry(entries: Vec<LeagueEntry>, endpoint: &str) -> Result<LeagueEntry> {
    entries.into_iter().next().ok_or_else(|| {
        tracing::debug!(endpoint, "no league entries");
        Error::EmptyResult {
            endpoint: endpoint.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(queue_type: &str) -> LeagueEntry {
        LeagueEntry {
            queue_type: queue_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn decodes_wire_payload() {
        let payload = r#"{
            "leagueId": "L1", "summonerId": "S1", "summonerName": "Faker",
            "queueType": "RANKED_TFT", "tier": "GOLD", "rank": "II",
            "leaguePoints": 42, "wins": 10, "losses": 30,
            "hotStreak": true, "veteran": false, "freshBlood": true, "inactive": false
        }"#;
        let entry: LeagueEntry = serde_json::from_str(payload).unwrap();
        assert_eq!(entry.tier, "GOLD");
        assert_eq!(entry.rank, "II");
        assert_eq!(entry.league_points, 42);
        assert_eq!(entry.wins, 10);
        assert_eq!(entry.losses, 30);
        assert!(entry.hot_streak && entry.fresh_blood);
        assert!(!entry.veteran && !entry.inactive);
    }

    #[test]
    fn hyper_roll_entry_first_in_list() {
        let payload = r#"[
            {"queueType": "RANKED_TFT_TURBO", "summonerId": "S", "summonerName": "N",
             "ratedTier": "ORANGE", "ratedRating": 4200, "wins": 3, "losses": 9},
            {"leagueId": "L1", "summonerId": "S", "summonerName": "N",
             "queueType": "RANKED_TFT", "tier": "GOLD", "rank": "II",
             "leaguePoints": 42, "wins": 10, "losses": 30,
             "hotStreak": true, "veteran": false, "freshBlood": true, "inactive": false}
        ]"#;
        let entries: Vec<LeagueEntry> = serde_json::from_str(payload).unwrap();
        assert_eq!(entries.len(), 2);

        let turbo = first_entry(entries, "/e").unwrap();
        assert_eq!(turbo.queue_type, "RANKED_TFT_TURBO");
        assert_eq!(turbo.wins, 3);
        assert_eq!(turbo.losses, 9);
        assert_eq!(turbo.tier, "");
        assert_eq!(turbo.league_points, 0);
        assert!(!turbo.hot_streak && !turbo.veteran && !turbo.fresh_blood && !turbo.inactive);
    }

    #[test]
    fn empty_list_is_an_error() {
        let res = first_entry(Vec::new(), "/e");
        assert!(matches!(res, Err(Error::EmptyResult { endpoint }) if endpoint == "/e"));
    }

    #[test]
    fn first_entry_wins() {
        let only = first_entry(vec![entry("RANKED_TFT")], "/e").unwrap();
        assert_eq!(only, entry("RANKED_TFT"));

        let entries = vec![entry("RANKED_TFT"), entry("RANKED_TFT_TURBO")];
        let first = first_entry(entries, "/e").unwrap();
        assert_eq!(first.queue_type, "RANKED_TFT");
    }
}

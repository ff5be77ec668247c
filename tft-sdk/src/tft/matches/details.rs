use serde::{Deserialize, Serialize};

/// One completed game.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub metadata: Metadata,
    pub info: Info,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub data_version: String,
    pub match_id: String,
    /// Encrypted PUUIDs of the players, in API order.
    pub participants: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// Unix timestamp in milliseconds.
    pub game_datetime: i64,
    /// Seconds, fractional.
    pub game_length: f64,
    /// Opaque variation key. Its meaning changed between sets and newer payloads omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_variation: Option<String>,
    /// Patch the game was played on, as reported. Not a semantic version.
    pub game_version: String,
    /// Per-player game data. Not aligned with `Metadata::participants`.
    pub participants: Vec<Participant>,
    pub queue_id: i64,
    pub tft_set_number: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub augments: Vec<String>,
    pub gold_left: i64,
    pub last_round: i64,
    pub level: i64,
    /// 1 through 8.
    pub placement: i64,
    pub players_eliminated: i64,
    pub puuid: String,
    /// Seconds into the game.
    pub time_eliminated: f64,
    pub total_damage_to_players: i64,
    pub traits: Vec<Trait>,
    pub units: Vec<Unit>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub name: String,
    pub num_units: i64,
    #[serde(default)]
    pub style: i64,
    pub tier_current: i64,
    #[serde(default)]
    pub tier_total: i64,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Item ids in slot order.
    #[serde(default)]
    pub items: Vec<i64>,
    #[serde(default, rename = "itemNames")]
    pub item_names: Vec<String>,
    pub character_id: String,
    #[serde(default)]
    pub name: String,
    pub rarity: i64,
    pub tier: i64,
}

use serde::{Deserialize, Serialize};

use crate::matches::Region;
use crate::summoner::Platform;

/// A TFT account.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub name: String,
    /// Epoch milliseconds of the last name, level or profile icon change.
    pub revision_date: i64,
    pub summoner_level: i64,
    pub profile_icon_id: i64,

    // The three ids are not interchangeable, each endpoint expects a specific one.
    /// Encrypted account id, at most 56 characters.
    pub account_id: String,
    /// Encrypted summoner id, at most 63 characters.
    pub id: String,
    /// Encrypted PUUID, at most 78 characters.
    pub puuid: String,

    /// Platform the summoner was fetched from. Not part of the payload.
    #[serde(skip)]
    pub platform: Option<Platform>,
    /// Region serving this summoner's matches. Not part of the payload.
    #[serde(skip)]
    pub region: Option<Region>,
}

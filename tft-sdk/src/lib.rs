pub mod config;
pub mod context;
pub mod endpoint;
pub mod error;
pub mod matches;
pub mod summoner;
pub mod tft;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::config::Config;
pub use crate::context::{CancelHandle, Context};
pub use crate::error::{Error, Result, TransportError};
pub use crate::matches::Region;
pub use crate::summoner::Platform;
pub use crate::tft::matches::{Info, Match, Metadata, Participant, Trait, Unit};
pub use crate::tft::summoner::{LeagueEntry, Summoner};
pub use crate::transport::{HttpTransport, Route, Transport};

use std::fmt::Display;
use std::sync::Arc;
use tracing::instrument;

/// Client for the Teamfight Tactics Riot APIs.
///
/// Cloning is cheap, every clone shares the same transport.
pub struct TftClient<T: ?Sized = HttpTransport> {
    transport: Arc<T>,
}

impl TftClient<HttpTransport> {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::from_config(&Config::new(api_key))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }

    /// Builds a client from `TFT_RIOT_API_KEY` and `TFT_RIOT_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&Config::from_env()?)
    }
}

impl<T: Transport> TftClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }
}

impl<T: Transport + ?Sized> TftClient<T> {
    pub fn from_shared(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn summoner(&self, platform: Platform) -> tft::summoner::SummonerClient<T> {
        tft::summoner::SummonerClient::new(self.transport.clone(), platform)
    }

    pub fn matches(&self, region: Region) -> tft::matches::MatchClient<T> {
        tft::matches::MatchClient::new(self.transport.clone(), region)
    }

    /// Fetch a summoner by name on `platform`.
    ///
    /// The returned summoner has `platform` set to the argument and `region`
    /// set to the region serving that platform.
    pub async fn summoner_by_name(
        &self,
        ctx: &Context,
        platform: Platform,
        name: &str,
    ) -> Result<Summoner> {
        self.summoner(platform).get_by_name(ctx, name).await
    }

    /// Fetch the ranked standing of a summoner on the platform it was fetched from.
    #[instrument(skip(self, ctx, summoner), fields(summoner_id = %summoner.id))]
    pub async fn league(&self, ctx: &Context, summoner: &Summoner) -> Result<LeagueEntry> {
        let platform = summoner.platform.ok_or(Error::MissingPlatform)?;
        self.summoner(platform)
            .get_league_entry(ctx, &summoner.id)
            .await
    }

    pub async fn match_by_id(
        &self,
        ctx: &Context,
        region: Region,
        match_id: &str,
    ) -> Result<Match> {
        self.matches(region).get_details(ctx, match_id).await
    }
}

impl<T: ?Sized> Clone for TftClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

trait ServiceUrl
where
    Self: Display,
{
    fn base_url(&self) -> String {
        format!("https://{}.api.riotgames.com", self)
    }
}

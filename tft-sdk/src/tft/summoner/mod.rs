use std::sync::Arc;
use tracing::instrument;

use crate::endpoint::{self, RANKED_PREFIX, SUMMONER_PREFIX};
use crate::summoner::Platform;
use crate::transport::{fetch, Transport};
use crate::{Context, Result};

pub use self::league::LeagueEntry;
pub use self::name::Summoner;

pub mod league;
pub mod name;

/// Summoner and league endpoints for one platform.
pub struct SummonerClient<T: ?Sized> {
    transport: Arc<T>,
    platform: Platform,
}

impl<T: Transport + ?Sized> SummonerClient<T> {
    pub fn new(transport: Arc<T>, platform: Platform) -> Self {
        Self { transport, platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Get a summoner by name. The result carries this client's platform and its region.
    #[instrument(skip(self, ctx), fields(platform = %self.platform))]
    pub async fn get_by_name(&self, ctx: &Context, summoner_name: &str) -> Result<Summoner> {
        let ep = endpoint::join(&[SUMMONER_PREFIX, "by-name", summoner_name]);
        let mut summoner: Summoner =
            fetch(self.transport.as_ref(), ctx, self.platform.into(), &ep).await?;
        summoner.platform = Some(self.platform);
        summoner.region = Some(self.platform.region());
        Ok(summoner)
    }

    /// Get league entries in all queues for a given encrypted summoner ID.
    #[instrument(skip(self, ctx), fields(platform = %self.platform))]
    pub async fn get_league_entries(
        &self,
        ctx: &Context,
        summoner_id: &str,
    ) -> Result<Vec<LeagueEntry>> {
        let ep = league_endpoint(summoner_id);
        fetch(self.transport.as_ref(), ctx, self.platform.into(), &ep).await
    }

    /// Get the league entry for a given encrypted summoner ID.
    ///
    /// Fails with [`Error::EmptyResult`](crate::Error::EmptyResult) when the
    /// summoner has no ranked standing.
    #[instrument(skip(self, ctx), fields(platform = %self.platform))]
    pub async fn get_league_entry(&self, ctx: &Context, summoner_id: &str) -> Result<LeagueEntry> {
        let ep = league_endpoint(summoner_id);
        let entries: Vec<LeagueEntry> =
            fetch(self.transport.as_ref(), ctx, self.platform.into(), &ep).await?;
        league::first_entry(entries, &ep)
    }
}

impl<T: ?Sized> Clone for SummonerClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            platform: self.platform,
        }
    }
}

fn league_endpoint(summoner_id: &str) -> String {
    endpoint::join(&[RANKED_PREFIX, "entries/by-summoner", summoner_id])
}

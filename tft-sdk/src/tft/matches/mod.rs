use std::sync::Arc;
use tracing::instrument;

use self::ids::IdsRequestBuilder;
use crate::endpoint::{self, MATCH_PREFIX};
use crate::matches::Region;
use crate::transport::{fetch, Transport};
use crate::{Context, Result};

pub use self::details::{Info, Match, Metadata, Participant, Trait, Unit};

pub mod details;
pub mod ids;

/// Match endpoints for one region.
pub struct MatchClient<T: ?Sized> {
    transport: Arc<T>,
    region: Region,
}

impl<T: Transport + ?Sized> MatchClient<T> {
    pub fn new(transport: Arc<T>, region: Region) -> Self {
        Self { transport, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    #[instrument(skip(self, ctx), fields(region = %self.region))]
    pub async fn get_details(&self, ctx: &Context, match_id: &str) -> Result<Match> {
        let ep = endpoint::join(&[MATCH_PREFIX, match_id]);
        fetch(self.transport.as_ref(), ctx, self.region.into(), &ep).await
    }

    /// Match ids played by `summoner_puuid`, most recent first.
    pub fn get_ids(&self, summoner_puuid: &str) -> IdsRequestBuilder<T> {
        let ep = endpoint::join(&[MATCH_PREFIX, "by-puuid", summoner_puuid, "ids"]);
        IdsRequestBuilder::new(self.transport.clone(), self.region, ep)
    }
}

impl<T: ?Sized> Clone for MatchClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            region: self.region,
        }
    }
}

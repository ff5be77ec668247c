use std::sync::Arc;

use crate::matches::Region;
use crate::transport::{fetch, Transport};
use crate::{Context, Result};

pub struct IdsRequestBuilder<T: ?Sized> {
    transport: Arc<T>,
    region: Region,
    path: String,
    start: Option<u32>,
    count: Option<u32>,
    start_time: Option<i64>,
    end_time: Option<i64>,
}

impl<T: Transport + ?Sized> IdsRequestBuilder<T> {
    pub fn new(transport: Arc<T>, region: Region, path: String) -> Self {
        Self {
            transport,
            region,
            path,
            start: None,
            count: None,
            start_time: None,
            end_time: None,
        }
    }
    /// Index of the first id to return. The API defaults to 0.
    pub fn start(mut self, start: u32) -> Self {
        self.start = Some(start);
        self
    }
    /// Set the number of ids to be returned.
    ///
    /// The API defaults to 20
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
    /// Epoch seconds.
    pub fn start_time(mut self, start_time: i64) -> Self {
        self.start_time = Some(start_time);
        self
    }
    /// Epoch seconds.
    pub fn end_time(mut self, end_time: i64) -> Self {
        self.end_time = Some(end_time);
        self
    }

    fn endpoint(&self) -> String {
        let params: Vec<String> = [
            ("start", self.start.map(i64::from)),
            ("count", self.count.map(i64::from)),
            ("startTime", self.start_time),
            ("endTime", self.end_time),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
        .collect();

        if params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, params.join("&"))
        }
    }

    pub async fn send(self, ctx: &Context) -> Result<Vec<String>> {
        let ep = self.endpoint();
        tracing::debug!(region = %self.region, endpoint = %ep, "match ids");
        fetch(self.transport.as_ref(), ctx, self.region.into(), &ep).await
    }
}

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::str::FromStr;

use crate::config::Config;
use crate::error::TransportError;
use crate::matches::Region;
use crate::summoner::Platform;
use crate::{Context, Error, Result, ServiceUrl};

/// Where a request is sent: platform-scoped or region-scoped hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Platform(Platform),
    Region(Region),
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Platform(platform) => platform.fmt(f),
            Route::Region(region) => region.fmt(f),
        }
    }
}
impl ServiceUrl for Route {}

impl From<Platform> for Route {
    fn from(platform: Platform) -> Self {
        Route::Platform(platform)
    }
}
impl From<Region> for Route {
    fn from(region: Region) -> Self {
        Route::Region(region)
    }
}

/// Issues a GET for `endpoint` on the host for `route` and returns the raw body.
///
/// Implementations own base-url resolution, authentication and turning
/// non-success statuses into a [`TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(
        &self,
        route: Route,
        endpoint: &str,
    ) -> core::result::Result<Vec<u8>, TransportError>;
}

/// GETs `endpoint` through `transport` under `ctx` and decodes the body as `T`.
pub(crate) async fn fetch<T, R>(
    transport: &R,
    ctx: &Context,
    route: Route,
    endpoint: &str,
) -> Result<T>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    tracing::debug!(%route, endpoint, "GET");
    let body = ctx.run(transport.get(route, endpoint)).await??;
    serde_json::from_slice(&body).map_err(|source| Error::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// The default [`Transport`], a `reqwest` client carrying the API key header.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    web: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut shared_headers = HeaderMap::new();
        let token = HeaderValue::from_str(&config.api_key)
            .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
        shared_headers.insert("X-Riot-Token", token);

        let mut builder = reqwest::Client::builder().default_headers(shared_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let web = builder
            .build()
            .map_err(|e| Error::Config(format!("no TLS backend found: {e}")))?;
        Ok(Self { web })
    }

    /// Wraps an already configured client. The caller is responsible for the auth header.
    pub fn with_client(web: reqwest::Client) -> Self {
        Self { web }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        route: Route,
        endpoint: &str,
    ) -> core::result::Result<Vec<u8>, TransportError> {
        let url = format!("{}{}", route.base_url(), endpoint);
        let url = reqwest::Url::from_str(&url).map_err(|_| TransportError::InvalidUrl { url })?;

        let res = self.web.get(url).send().await?;
        if let Some(err) = status_error(res.status()) {
            tracing::warn!(%route, endpoint, status = res.status().as_u16(), "request failed");
            return Err(err);
        }

        Ok(res.bytes().await?.to_vec())
    }
}

fn status_error(status: reqwest::StatusCode) -> Option<TransportError> {
    if status.is_success() {
        return None;
    }
    let err = match status {
        reqwest::StatusCode::BAD_REQUEST => TransportError::BadRequest,
        reqwest::StatusCode::UNAUTHORIZED => TransportError::Unauthorized,
        reqwest::StatusCode::FORBIDDEN => TransportError::Forbidden,
        reqwest::StatusCode::NOT_FOUND => TransportError::NotFound,
        reqwest::StatusCode::TOO_MANY_REQUESTS => TransportError::TooManyRequests,
        s if s.is_server_error() => TransportError::Server(s.as_u16()),
        s => TransportError::UnexpectedStatus(s.as_u16()),
    };
    Some(err)
}

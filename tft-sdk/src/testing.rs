use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::TransportError;
use crate::transport::{Route, Transport};

enum Canned {
    Body(Vec<u8>),
    Fail(TransportError),
}

/// In-memory transport keyed by endpoint. Unknown endpoints answer `NotFound`.
#[derive(Default)]
pub struct StubTransport {
    canned: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<(Route, String)>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, endpoint: &str, body: &str) -> Self {
        self.canned
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Canned::Body(body.as_bytes().to_vec()));
        self
    }

    /// The first request to `endpoint` fails with `err`, later ones answer `NotFound`.
    pub fn fail(self, endpoint: &str, err: TransportError) -> Self {
        self.canned
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), Canned::Fail(err));
        self
    }

    pub fn requests(&self) -> Vec<(Route, String)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, route: Route, endpoint: &str) -> Result<Vec<u8>, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push((route, endpoint.to_string()));

        let mut canned = self.canned.lock().unwrap();
        if let Some(Canned::Body(body)) = canned.get(endpoint) {
            return Ok(body.clone());
        }
        match canned.remove(endpoint) {
            Some(Canned::Fail(err)) => Err(err),
            _ => Err(TransportError::NotFound),
        }
    }
}

use reqwest::Client;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use super::suggestions::parse_suggestions;
use super::{SearchEngine, SearchError};

/// Fetches search suggestions while the user types.
///
/// Only the latest query matters: starting a fetch cancels the one still in
/// flight, which then resolves to an empty list.
pub struct SuggestionsClient {
    http_client: Client,
    /// Token of the latest fetch, tagged with its request number
    in_flight: Mutex<Option<(u64, CancellationToken)>>,
    next_request: AtomicU64,
}

impl SuggestionsClient {
    pub fn new(timeout: Duration) -> Result<Self, SearchError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            in_flight: Mutex::new(None),
            next_request: AtomicU64::new(0),
        })
    }

    pub async fn fetch(
        &self,
        engine: &SearchEngine,
        query: &str,
    ) -> Result<Vec<String>, SearchError> {
        let Some(url) = engine.suggestions_url(query) else {
            debug!("Engine {} has no suggestions endpoint", engine.identifier);
            return Ok(Vec::new());
        };

        let token = CancellationToken::new();
        let request_id = self.next_request.fetch_add(1, Ordering::Relaxed);
        if let Some((_, previous)) = self.in_flight.lock().await.replace((request_id, token.clone())) {
            previous.cancel();
        }

        trace!("Fetching suggestions from {}", url);
        let request = async {
            let response = self.http_client.get(&url).send().await?.error_for_status()?;
            response.text().await
        };

        let body = tokio::select! {
            _ = token.cancelled() => {
                debug!("Suggestions request for {:?} superseded", query);
                return Ok(Vec::new());
            }
            body = request => body,
        };

        {
            let mut in_flight = self.in_flight.lock().await;
            if in_flight.as_ref().is_some_and(|(id, _)| *id == request_id) {
                in_flight.take();
            }
        }

        Ok(parse_suggestions(&body?))
    }

    /// Cancel the in-flight request, if any
    pub async fn cancel_pending(&self) {
        if let Some((_, token)) = self.in_flight.lock().await.take() {
            token.cancel();
        }
    }

    pub async fn has_pending(&self) -> bool {
        self.in_flight.lock().await.is_some()
    }
}

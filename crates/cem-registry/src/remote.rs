//! Fetches a package's `package.json` (and the manifest it points to)
//! over HTTP, with the retry/backoff contract from §5: bounded timeout,
//! three attempts, exponential backoff.

use std::time::Duration;

use tracing::warn;

use crate::error::RegistryError;

const MAX_ATTEMPTS: u32 = 3;
const TIMEOUT: Duration = Duration::from_secs(10);

/// Abstracts the network so tests can supply canned responses instead
/// of making real HTTP calls, mirroring `cem_alias::SourceLoader`.
#[async_trait::async_trait]
pub trait RemoteFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, RegistryError>;
}

pub struct HttpRemoteFetcher {
    client: reqwest::Client,
}

impl HttpRemoteFetcher {
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder().timeout(TIMEOUT).build().unwrap_or_default();
        Self { client }
    }
}

impl Default for HttpRemoteFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RemoteFetcher for HttpRemoteFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, RegistryError> {
        let mut last_error = String::new();
        for attempt in 0..MAX_ATTEMPTS {
            match self.client.get(url).send().await {
                Ok(response) => match response.error_for_status() {
                    Ok(response) => match response.text().await {
                        Ok(text) => return Ok(text),
                        Err(err) => last_error = err.to_string(),
                    },
                    Err(err) => last_error = err.to_string(),
                },
                Err(err) => last_error = err.to_string(),
            }
            if attempt + 1 < MAX_ATTEMPTS {
                let backoff = Duration::from_millis(200 * 2u64.pow(attempt));
                warn!(url, attempt, ?backoff, "remote fetch failed, retrying");
                tokio::time::sleep(backoff).await;
            }
        }
        Err(RegistryError::RemoteFetch { url: url.to_string(), attempts: MAX_ATTEMPTS, message: last_error })
    }
}

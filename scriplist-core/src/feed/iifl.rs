//! IIFL scrip-master provider.
//!
//! Downloads the bulk Scripmaster CSV over plain HTTP. The endpoint is a
//! static file behind a CDN, so there is no rate limiting to speak of, but
//! transient failures do happen — hence the fixed retry loop.

use super::provider::{FeedError, ScripMasterProvider};
use log::warn;
use std::time::Duration;

/// Canonical scrip-master location.
pub const DEFAULT_FEED_URL: &str = "http://content.indiainfoline.com/IIFLTT/Scripmaster.csv";

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const MAX_RETRIES: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// HTTP provider for the IIFL scrip master.
pub struct IiflProvider {
    client: reqwest::blocking::Client,
    url: String,
}

impl IiflProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            url: url.into(),
        }
    }

    fn fetch_with_retry(&self) -> Result<String, FeedError> {
        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                std::thread::sleep(RETRY_DELAY);
            }

            match self.client.get(&self.url).send() {
                Ok(resp) => {
                    let status = resp.status();

                    if !status.is_success() {
                        warn!("attempt {}: HTTP {status} from {}", attempt + 1, self.url);
                        last_error = Some(FeedError::HttpStatus {
                            status: status.as_u16(),
                        });
                        continue;
                    }

                    let body = resp
                        .text()
                        .map_err(|e| FeedError::NetworkUnreachable(e.to_string()))?;

                    if body.trim().is_empty() {
                        return Err(FeedError::EmptyFeed);
                    }

                    return Ok(body);
                }
                Err(e) => {
                    if e.is_connect() || e.is_timeout() {
                        warn!("attempt {}: {e}", attempt + 1);
                        last_error = Some(FeedError::NetworkUnreachable(e.to_string()));
                        continue;
                    }
                    return Err(FeedError::NetworkUnreachable(e.to_string()));
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| FeedError::NetworkUnreachable("max retries exceeded".into())))
    }
}

impl ScripMasterProvider for IiflProvider {
    fn name(&self) -> &str {
        "iifl_scrip_master"
    }

    fn source(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, FeedError> {
        self.fetch_with_retry()
    }
}

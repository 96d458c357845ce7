// src/core/net.rs
// Outbound HTTP. One blocking GET per lookup, bounded by the configured timeout.

use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::LookupError;

/// Anything that can turn a URL into an HTML body.
/// `HttpFetcher` talks to the network; tests plug in canned pages.
pub trait Fetch: Send + Sync {
    fn get(&self, url: &str) -> Result<String, LookupError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, LookupError> {
        let t = std::time::Instant::now();
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LookupError::Network(format!("HTTP {status} for {url}")));
        }
        let body = resp.text()?;
        logd!("GET {url} -> {status} ({} bytes) in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

/// `base/word`, with `word` percent-encoded as a single path segment.
pub fn word_url(base: &str, word: &str) -> Result<String, LookupError> {
    let mut url = Url::parse(base).map_err(|e| LookupError::Parse(format!("{base}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| LookupError::Parse(format!("{base}: cannot be a base URL")))?
        .pop_if_empty()
        .push(word.trim());
    Ok(url.into())
}

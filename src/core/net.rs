// src/core/net.rs
// Blocking HTTP GET behind a small trait so parsing can be driven offline.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;
use url::Url;

use crate::config::consts::BASE_URL;
use crate::config::options::ClientOptions;
use crate::error::{Error, Result};

/// Source of page bodies. Everything that talks to the site goes through this.
pub trait Fetch {
    /// GET `url` and return the decoded body of a successful response.
    fn get(&self, url: &str) -> Result<String>;

    /// Site root that endpoint paths are appended to.
    fn base_url(&self) -> &str {
        BASE_URL
    }

    /// `base_url` + `path` with `pairs` form-encoded into the query string.
    fn endpoint(&self, path: &str, pairs: &[(String, String)]) -> Result<String> {
        let mut url = Url::parse(self.base_url())?.join(path)?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url.into())
    }
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Header(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::Header(format!("{}: {}", name, value)))?;
            headers.insert(name, value);
        }

        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .timeout(options.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { status: status.as_u16(), url: url.to_string() });
        }
        Ok(response.text()?)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}

// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Transport settings for [`crate::core::net::HttpFetcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Extra request headers sent with every request, e.g. `("Accept-Language", "en")`.
    pub headers: Vec<(String, String)>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            headers: Vec::new(),
        }
    }
}

impl ClientOptions {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Filters for the photo advanced search.
///
/// The site refuses to answer unfiltered or overly broad queries, so at
/// least one filter must be set before [`crate::photo::Photo::search`]
/// will send a request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoQuery {
    pub user: Option<String>,
    /// Ancestor taxon node id.
    pub taxon: Option<String>,
    pub description: Option<String>,
    pub county: Option<String>,
    pub city_location: Option<String>,
    pub adult: Option<bool>,
    pub immature: Option<bool>,
    pub male: Option<bool>,
    pub female: Option<bool>,
    pub representative: Option<bool>,
    /// Two-letter US state or Canadian province codes.
    pub locations: Vec<String>,
    /// Months of the year, 1-12.
    pub months: Vec<u8>,
}

impl PhotoQuery {
    pub fn user(mut self, id: impl ToString) -> Self {
        self.user = Some(id.to_string());
        self
    }

    pub fn taxon(mut self, id: impl ToString) -> Self {
        self.taxon = Some(id.to_string());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn county(mut self, county: impl Into<String>) -> Self {
        self.county = Some(county.into());
        self
    }

    pub fn city_location(mut self, city: impl Into<String>) -> Self {
        self.city_location = Some(city.into());
        self
    }

    pub fn adult(mut self, v: bool) -> Self {
        self.adult = Some(v);
        self
    }

    pub fn immature(mut self, v: bool) -> Self {
        self.immature = Some(v);
        self
    }

    pub fn male(mut self, v: bool) -> Self {
        self.male = Some(v);
        self
    }

    pub fn female(mut self, v: bool) -> Self {
        self.female = Some(v);
        self
    }

    pub fn representative(mut self, v: bool) -> Self {
        self.representative = Some(v);
        self
    }

    pub fn location(mut self, code: impl Into<String>) -> Self {
        self.locations.push(code.into());
        self
    }

    pub fn month(mut self, month: u8) -> Self {
        self.months.push(month);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }

    /// Query pairs in the order the search form submits them.
    /// Blank text filters are dropped; `Some(false)` is sent as `0`.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let text = [
            ("user", &self.user),
            ("taxon", &self.taxon),
            ("description", &self.description),
            ("county", &self.county),
            ("city_location", &self.city_location),
        ];
        let flags = [
            ("adult", self.adult),
            ("immature", self.immature),
            ("male", self.male),
            ("female", self.female),
            ("representative", self.representative),
        ];

        let mut pairs = Vec::new();
        for (key, value) in text {
            if let Some(v) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key.to_string(), v.to_string()));
            }
        }
        for (key, value) in flags {
            if let Some(v) = value {
                pairs.push((key.to_string(), if v { "1" } else { "0" }.to_string()));
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        for code in self.locations.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
            if !seen.contains(&code) {
                seen.push(code);
                pairs.push(("location[]".to_string(), code.to_string()));
            }
        }
        for month in &self.months {
            pairs.push(("month[]".to_string(), month.to_string()));
        }
        pairs
    }
}

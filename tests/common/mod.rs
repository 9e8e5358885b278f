// tests/common/mod.rs
//
// Offline `Fetch` that serves canned bodies and records every request.
//
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use bugguide::config::consts::BASE_URL;
use bugguide::{Error, Fetch, Result};

pub const BOMBYLIIDAE_TREE: &str = include_str!("../fixtures/bombyliidae_tree.html");
pub const APIS_TREE: &str = include_str!("../fixtures/apis_mellifera_tree.html");
pub const PHOTO_RESULTS: &str = include_str!("../fixtures/photo_results.html");

#[derive(Default)]
pub struct MockFetch {
    routes: HashMap<String, String>,
    base_url: Option<String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base: &str) -> Self {
        self.base_url = Some(base.to_string());
        self
    }

    pub fn route(mut self, url: &str, body: &str) -> Self {
        self.routes.insert(url.to_string(), body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Fetch for MockFetch {
    fn get(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status { status: 404, url: url.to_string() })
    }

    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(BASE_URL)
    }
}

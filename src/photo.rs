// src/photo.rs
//! A single photo record from the advanced search.
//!
//! The subject taxon is attached as a plain [`Taxon`]; its classification is
//! never loaded here. Call `photo.taxon.ancestors(..)` explicitly if needed.

use serde::Serialize;
use tracing::{debug, info};

use crate::config::consts::{PHOTO_SEARCH_PATH, PUBLISHER};
use crate::config::options::PhotoQuery;
use crate::core::net::Fetch;
use crate::core::sanitize::{non_blank, trailing_digits};
use crate::error::{Error, Result};
use crate::specs::photos::{self, PhotoRow};
use crate::taxon::{Taxon, TaxonFields};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Photo {
    pub id: u64,
    pub thumbnail_url: Option<String>,
    pub url: Option<String>,
    pub title: String,
    pub date: String,
    pub state: String,
    pub county: String,
    pub city_location: String,
    pub taxon: Taxon,
}

impl Photo {
    /// Run the advanced search.
    ///
    /// Fails with [`Error::NoParameters`] before any request when `query` sets
    /// no filter, and with [`Error::TooManyResults`] when the site refuses a
    /// broad query.
    pub fn search(fetch: &dyn Fetch, query: &PhotoQuery) -> Result<Vec<Photo>> {
        let pairs = query.to_pairs();
        if pairs.is_empty() {
            return Err(Error::NoParameters);
        }

        let url = fetch.endpoint(PHOTO_SEARCH_PATH, &pairs)?;
        let body = fetch.get(&url)?;
        if let Some(n) = photos::too_many_results(&body) {
            return Err(Error::TooManyResults(n));
        }

        let photos: Vec<Photo> = photos::parse_rows(&body)?
            .into_iter()
            .filter_map(Photo::from_row)
            .collect();
        info!(count = photos.len(), "photo search");
        Ok(photos)
    }

    fn from_row(row: PhotoRow) -> Option<Photo> {
        let Ok(id) = row.id.parse::<u64>() else {
            debug!(id = %row.id, "photo row with non-numeric id skipped");
            return None;
        };

        let taxon = Taxon::new(TaxonFields {
            id: row.taxon_url.as_deref().and_then(trailing_digits).map(str::to_string),
            name: Some(row.taxon_label),
            url: row.taxon_url,
            ..TaxonFields::default()
        });

        Some(Photo {
            id,
            thumbnail_url: row.thumbnail_url,
            url: row.url,
            title: row.title,
            date: row.date,
            state: row.state,
            county: row.county,
            city_location: non_blank(&row.city_location).unwrap_or_default(),
            taxon,
        })
    }

    /* ---------- DarwinCore Simple Multimedia ---------- */

    pub fn identifier(&self) -> u64 {
        self.id
    }

    pub fn references(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn created(&self) -> &str {
        &self.date
    }

    pub fn media_type(&self) -> &'static str {
        "StillImage"
    }

    pub fn format(&self) -> &'static str {
        "image/jpeg"
    }

    pub fn publisher(&self) -> &'static str {
        PUBLISHER
    }
}

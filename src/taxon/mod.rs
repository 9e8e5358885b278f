// src/taxon/mod.rs
//! A single taxon on the site.
//!
//! Taxa are usually built from search rows, so the classification (ancestors
//! and, when not already known, the rank) is loaded on first use with one
//! extra request and then kept for the life of the instance.
//!
//! Several accessors mirror the DarwinCore names (`taxon_id`,
//! `vernacular_name`, `taxon_rank`, `higher_classification`).

pub mod label;
pub mod lineage;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::info;

use crate::config::consts::{
    BASE_URL, HIGHER_CLASSIFICATION_SEP, NODE_PATH, TAXON_SEARCH_PATH, TREE_SUFFIX,
};
use crate::core::net::Fetch;
use crate::core::sanitize::non_blank;
use crate::error::{Error, Result};
use crate::specs::{taxa, tree::TreePage};

use label::{normalize_rank, parse_name};

/// Lazily computed per-instance state.
#[derive(Clone, Debug)]
pub enum Resolution<T> {
    Unresolved,
    Resolved(T),
}

/// What one fetch of the classification page yields.
#[derive(Debug)]
struct Classification {
    page: TreePage,
    ancestors: Vec<Taxon>,
}

/// Recognized construction fields. Explicit names win over names inferred
/// from `name`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaxonFields {
    pub id: Option<String>,
    pub name: Option<String>,
    pub scientific_name: Option<String>,
    pub common_name: Option<String>,
    pub rank: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Taxon {
    id: Option<String>,
    name: Option<String>,
    scientific_name: Option<String>,
    common_name: Option<String>,
    rank: Option<String>,
    url: Option<String>,
    #[serde(skip)]
    classification: Mutex<Resolution<Arc<Classification>>>,
}

impl Taxon {
    pub fn new(fields: TaxonFields) -> Self {
        let explicit = |v: &Option<String>| v.as_deref().and_then(non_blank);

        let mut taxon = Self {
            id: explicit(&fields.id),
            name: None,
            scientific_name: explicit(&fields.scientific_name),
            common_name: explicit(&fields.common_name),
            rank: fields.rank.as_deref().and_then(normalize_rank),
            url: explicit(&fields.url),
            classification: Mutex::new(Resolution::Unresolved),
        };
        if let Some(raw) = fields.name.as_deref() {
            taxon.set_name(raw);
        }
        if taxon.url.is_none() {
            taxon.url = taxon.id.as_deref().map(node_url);
        }
        taxon
    }

    pub fn from_label(raw_name: &str, rank: Option<&str>, id: Option<&str>, url: Option<&str>) -> Self {
        Self::new(TaxonFields {
            id: id.map(str::to_string),
            name: Some(raw_name.to_string()),
            rank: rank.map(str::to_string),
            url: url.map(str::to_string),
            ..TaxonFields::default()
        })
    }

    /* ---------- fields ---------- */

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The raw label, trimmed.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn scientific_name(&self) -> Option<&str> {
        self.scientific_name.as_deref()
    }

    pub fn common_name(&self) -> Option<&str> {
        self.common_name.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Rank known without loading the classification.
    pub fn known_rank(&self) -> Option<&str> {
        self.rank.as_deref()
    }

    /// Set the display label and fill in any names not already set.
    /// A blank label is ignored.
    pub fn set_name(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            return;
        }
        let (scientific, common) =
            parse_name(raw, self.scientific_name.as_deref(), self.common_name.as_deref());
        self.scientific_name = scientific;
        self.common_name = common;
        self.name = Some(raw.trim().to_string());
    }

    pub fn set_scientific_name(&mut self, value: &str) {
        if let Some(v) = non_blank(value) {
            self.scientific_name = Some(v);
        }
    }

    pub fn set_common_name(&mut self, value: &str) {
        if let Some(v) = non_blank(value) {
            self.common_name = Some(v);
        }
    }

    pub fn set_rank(&mut self, raw: &str) {
        self.rank = normalize_rank(raw);
    }

    /* ---------- classification ---------- */

    pub fn is_resolved(&self) -> bool {
        matches!(*self.state(), Resolution::Resolved(_))
    }

    /// Ancestors root first (e.g. phylum … superfamily), excluding this taxon.
    ///
    /// The first call fetches the classification page; later calls reuse it.
    pub fn ancestors(&self, fetch: &dyn Fetch) -> Result<Vec<Taxon>> {
        Ok(self.classification(fetch)?.ancestors.clone())
    }

    /// The known rank, or the one the classification page gives this taxon.
    pub fn rank(&self, fetch: &dyn Fetch) -> Result<Option<String>> {
        if let Some(rank) = &self.rank {
            return Ok(Some(rank.clone()));
        }
        Ok(lineage::own_rank(&self.classification(fetch)?.page))
    }

    fn state(&self) -> MutexGuard<'_, Resolution<Arc<Classification>>> {
        self.classification.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // The lock is held across the fetch so concurrent callers share one request.
    fn classification(&self, fetch: &dyn Fetch) -> Result<Arc<Classification>> {
        let mut state = self.state();
        if let Resolution::Resolved(c) = &*state {
            return Ok(Arc::clone(c));
        }

        let id = self.id.as_deref().ok_or(Error::MissingId)?;
        let page = TreePage::parse(&fetch.get(&tree_url(fetch, id)?)?)?;
        let resolved = Arc::new(self.classify(page, fetch.base_url()));
        *state = Resolution::Resolved(Arc::clone(&resolved));
        Ok(resolved)
    }

    fn classify(&self, page: TreePage, base_url: &str) -> Classification {
        let ancestors = lineage::ancestors(&page, self.scientific_name(), base_url);
        Classification { page, ancestors }
    }

    /* ---------- remote lookups ---------- */

    /// Autocomplete search by name fragment.
    pub fn search(fetch: &dyn Fetch, query: &str) -> Result<Vec<Taxon>> {
        let url = fetch.endpoint(TAXON_SEARCH_PATH, &[("q".to_string(), query.to_string())])?;
        let body = fetch.get(&url)?;

        let taxa = taxa::parse_rows(&body)
            .into_iter()
            .map(|row| -> Result<Taxon> {
                Ok(Taxon::new(TaxonFields {
                    url: Some(fetched_node_url(fetch, &row.id)?),
                    id: Some(row.id),
                    name: Some(row.label),
                    common_name: row.secondary,
                    ..TaxonFields::default()
                }))
            })
            .collect::<Result<Vec<Taxon>>>()?;

        info!(query, count = taxa.len(), "taxon search");
        Ok(taxa)
    }

    /// Load one taxon by node id. The fetched page also serves later
    /// `ancestors`/`rank` calls on the returned taxon.
    pub fn find(fetch: &dyn Fetch, id: &str) -> Result<Taxon> {
        let page = TreePage::parse(&fetch.get(&tree_url(fetch, id)?)?)?;

        let taxon = Taxon::new(TaxonFields {
            id: Some(id.to_string()),
            name: page.heading.clone(),
            scientific_name: page.italic.clone(),
            common_name: page.heading_common_name(),
            url: Some(fetched_node_url(fetch, id)?),
            ..TaxonFields::default()
        });
        let resolved = Arc::new(taxon.classify(page, fetch.base_url()));
        *taxon.state() = Resolution::Resolved(resolved);
        Ok(taxon)
    }

    /* ---------- DarwinCore ---------- */

    pub fn taxon_id(&self) -> Option<&str> {
        self.id()
    }

    pub fn vernacular_name(&self) -> Option<&str> {
        self.common_name()
    }

    pub fn taxon_rank(&self, fetch: &dyn Fetch) -> Result<Option<String>> {
        self.rank(fetch)
    }

    /// Ancestor scientific names joined with `" | "`.
    pub fn higher_classification(&self, fetch: &dyn Fetch) -> Result<String> {
        let classification = self.classification(fetch)?;
        let names: Vec<&str> = classification
            .ancestors
            .iter()
            .map(|t| t.scientific_name().unwrap_or(""))
            .collect();
        Ok(names.join(HIGHER_CLASSIFICATION_SEP))
    }
}

impl Clone for Taxon {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            scientific_name: self.scientific_name.clone(),
            common_name: self.common_name.clone(),
            rank: self.rank.clone(),
            url: self.url.clone(),
            classification: Mutex::new((*self.state()).clone()),
        }
    }
}

/// Record equality; resolution state is ignored.
impl PartialEq for Taxon {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.scientific_name == other.scientific_name
            && self.common_name == other.common_name
            && self.rank == other.rank
            && self.url == other.url
    }
}

/// Default `url` for taxa built offline. Taxa produced through a [`Fetch`]
/// get their url from [`fetched_node_url`] instead.
fn node_url(id: &str) -> String {
    format!("{BASE_URL}{NODE_PATH}{id}")
}

fn fetched_node_url(fetch: &dyn Fetch, id: &str) -> Result<String> {
    fetch.endpoint(&format!("{NODE_PATH}{id}"), &[])
}

fn tree_url(fetch: &dyn Fetch, id: &str) -> Result<String> {
    fetch.endpoint(&format!("{NODE_PATH}{id}{TREE_SUFFIX}"), &[])
}

// src/taxon/lineage.rs
//! Turning a classification page into an ordered list of ancestor taxa.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use super::label::{lineage_split, normalize_rank};
use super::{Taxon, TaxonFields};
use crate::specs::tree::{RootLink, TreePage};

/// Only breadcrumb links into another node's classification count.
static RE_TREE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"node/view/(\d+)/tree").expect("invalid regex: tree link")
});

/// Breadcrumb links that point at a classification page, with their node id.
pub fn entries(page: &TreePage) -> impl Iterator<Item = (&RootLink, &str)> {
    page.roots.iter().filter_map(|link| {
        let caps = RE_TREE_LINK.captures(&link.href)?;
        Some((link, caps.get(1)?.as_str()))
    })
}

/// Ancestors root first, minus any entry naming `owner_scientific`.
pub fn ancestors(page: &TreePage, owner_scientific: Option<&str>, base_url: &str) -> Vec<Taxon> {
    let out: Vec<Taxon> = entries(page)
        .map(|(link, id)| candidate(link, id, base_url))
        .filter(|t| t.scientific_name() != owner_scientific)
        .collect();
    debug!(entries = page.roots.len(), ancestors = out.len(), "lineage resolved");
    out
}

/// Rank of the page's own taxon: the title of the last lineage entry.
pub fn own_rank(page: &TreePage) -> Option<String> {
    let (last, _) = entries(page).last()?;
    normalize_rank(last.title.as_deref()?)
}

fn candidate(link: &RootLink, id: &str, base_url: &str) -> Taxon {
    let split = lineage_split(&link.text);
    Taxon::new(TaxonFields {
        id: Some(id.to_string()),
        name: Some(link.text.clone()),
        scientific_name: split.scientific,
        common_name: split.common,
        rank: link.title.clone(),
        url: Some(absolute(base_url, &link.href)),
    })
}

fn absolute(base_url: &str, href: &str) -> String {
    Url::parse(base_url)
        .and_then(|base| base.join(href))
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

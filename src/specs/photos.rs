// src/specs/photos.rs
//! Spec for the photo advanced search (`/adv_search/bgsearch.php`).
//!
//! Results come back as a bare table directly under `<body>`, one photo per
//! row, header rows made of `<th>`. Columns:
//!
//! | 0         | 1        | 2     | 3    | 4     | 5      | 6             | 7          |
//! |-----------|----------|-------|------|-------|--------|---------------|------------|
//! | thumbnail | id, link | title | date | state | county | city/location | taxon link |
//!
//! When a query matches too much the site answers with a
//! `Too many results (N)` message instead of a table.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::consts::PHOTO_ROWS;
use crate::core::html::{Document, Node};
use crate::core::sanitize::normalize_ws;
use crate::error::Result;

static RE_TOO_MANY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Too many results \((\d+)\)").expect("invalid regex: too many results")
});

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotoRow {
    pub thumbnail_url: Option<String>,
    pub id: String,
    pub url: Option<String>,
    pub title: String,
    pub date: String,
    pub state: String,
    pub county: String,
    pub city_location: String,
    pub taxon_label: String,
    pub taxon_url: Option<String>,
}

/// Result count from a "Too many results (N)" refusal.
pub fn too_many_results(body: &str) -> Option<u64> {
    let caps = RE_TOO_MANY.captures(body)?;
    caps.get(1)?.as_str().parse().ok()
}

pub fn parse_rows(body: &str) -> Result<Vec<PhotoRow>> {
    let doc = Document::parse(body);
    let mut rows = Vec::new();

    for tr in doc.select(PHOTO_ROWS)? {
        if tr.first("th")?.is_some() {
            continue;
        }
        let cells: Vec<Node<'_>> = tr.children().into_iter().filter(|c| c.tag() == "td").collect();
        if cells.len() < 8 {
            debug!(cells = cells.len(), "short photo row skipped");
            continue;
        }

        let thumbnail_url = tr
            .first("img")?
            .and_then(|img| img.attr("src"))
            .map(str::to_string);

        rows.push(PhotoRow {
            thumbnail_url,
            id: cell_text(&cells[1]),
            url: first_href(&cells[1])?,
            title: cell_text(&cells[2]),
            date: cell_text(&cells[3]),
            state: cell_text(&cells[4]),
            county: cell_text(&cells[5]),
            city_location: cell_text(&cells[6]),
            taxon_label: cell_text(&cells[7]),
            taxon_url: first_href(&cells[7])?,
        });
    }
    Ok(rows)
}

fn cell_text(node: &Node<'_>) -> String {
    normalize_ws(&node.text())
}

fn first_href(node: &Node<'_>) -> Result<Option<String>> {
    Ok(node
        .first("a")?
        .and_then(|a| a.attr("href"))
        .map(|h| h.trim().to_string()))
}

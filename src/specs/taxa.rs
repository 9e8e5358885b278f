// src/specs/taxa.rs
//! Spec for the taxon autocomplete endpoint (`/adv_search/taxon.php?q=`).
//!
//! The response is plain text, one taxon per line, fields separated by `|`:
//!
//! ```text
//! 117327||Apoid Wasps (Apoidea)- traditional Sphecidae|2302
//! 135|Sphecidae|Thread-waisted Wasps|2700
//! ```
//!
//! The first field is the node id. The combined label is the first non-empty,
//! non-numeric field after it; the next such field, when present, is a
//! secondary (common) label. Numeric trailing fields are counts and ignored.

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxonRow {
    pub id: String,
    pub label: String,
    pub secondary: Option<String>,
}

pub fn parse_rows(body: &str) -> Vec<TaxonRow> {
    body.lines().filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<TaxonRow> {
    if line.trim().is_empty() {
        return None;
    }
    let mut fields = line.split('|').map(str::trim);
    let id = fields.next().filter(|id| !id.is_empty());
    let Some(id) = id else {
        debug!(line, "taxon row without id");
        return None;
    };

    let mut labels = fields.filter(|f| !f.is_empty() && !is_numeric(f));
    let Some(label) = labels.next() else {
        debug!(line, "taxon row without label");
        return None;
    };

    Some(TaxonRow {
        id: id.to_string(),
        label: label.to_string(),
        secondary: labels.next().map(str::to_string),
    })
}

fn is_numeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

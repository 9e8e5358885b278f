// src/csv.rs
use std::io::{self, Write};

use crate::photo::Photo;
use crate::taxon::Taxon;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    #[default]
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self {
            Delim::Csv => ',',
            Delim::Tsv => '\t',
        }
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: Delim) -> io::Result<()> {
    let sep = delim.sep();
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write `rows`, preceded by `headers` when given.
pub fn write_table<W: Write>(
    mut w: W,
    headers: Option<&[String]>,
    rows: &[Vec<String>],
    delim: Delim,
) -> io::Result<()> {
    if let Some(h) = headers {
        write_row(&mut w, h, delim)?;
    }
    for r in rows {
        write_row(&mut w, r, delim)?;
    }
    Ok(())
}

/* ---------------- Record layouts ---------------- */

fn cell(v: Option<&str>) -> String {
    v.unwrap_or_default().to_string()
}

pub fn taxon_headers() -> Vec<String> {
    ["id", "name", "scientific_name", "common_name", "rank", "url"]
        .map(String::from)
        .to_vec()
}

/// Record fields only; nothing here triggers a classification fetch.
pub fn taxon_row(t: &Taxon) -> Vec<String> {
    vec![
        cell(t.id()),
        cell(t.name()),
        cell(t.scientific_name()),
        cell(t.common_name()),
        cell(t.known_rank()),
        cell(t.url()),
    ]
}

pub fn photo_headers() -> Vec<String> {
    [
        "id", "title", "date", "state", "county", "city_location",
        "taxon_id", "taxon", "url", "thumbnail_url",
    ]
    .map(String::from)
    .to_vec()
}

pub fn photo_row(p: &Photo) -> Vec<String> {
    vec![
        p.id.to_string(),
        p.title.clone(),
        p.date.clone(),
        p.state.clone(),
        p.county.clone(),
        p.city_location.clone(),
        cell(p.taxon.id()),
        cell(p.taxon.name()),
        cell(p.url.as_deref()),
        cell(p.thumbnail_url.as_deref()),
    ]
}

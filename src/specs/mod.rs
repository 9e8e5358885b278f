// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote endpoint. Each spec knows *where the data lives* in
//! that endpoint's response and turns a body into plain rows. Specs do no
//! networking, no caching and no name heuristics; the `taxon` and `photo`
//! modules decide when to fetch and how to interpret the rows.
//!
//! ```text
//! Taxon::search  → specs::taxa::parse_rows     (pipe-delimited autocomplete)
//! Taxon::find    → specs::tree::TreePage::parse (classification page)
//! Taxon::ancestors / rank → (same TreePage, memoized on the taxon)
//! Photo::search  → specs::photos::parse_rows    (advanced search table)
//! ```
//!
//! All specs are testable offline against inline fixtures.
pub mod photos;
pub mod taxa;
pub mod tree;

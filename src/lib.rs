// src/lib.rs
//! Client for BugGuide.net: taxon search and lookup, lazily loaded
//! classification (ancestors and rank), and photo advanced search.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
#[cfg(feature = "cli")]
pub mod log;
pub mod photo;
pub mod specs;
pub mod taxon;

pub use crate::config::options::{ClientOptions, PhotoQuery};
pub use crate::core::net::{Fetch, HttpFetcher};
pub use crate::error::{Error, Result};
pub use crate::photo::Photo;
pub use crate::taxon::{Resolution, Taxon, TaxonFields};

// src/core/html.rs
//! Queryable view over a fetched page.
//!
//! Thin wrapper around `scraper` so page specs only see three operations:
//! select by CSS path, read text, read an attribute. Text always comes back
//! with non-breaking spaces turned into ordinary spaces; everything else
//! (trimming, whitespace collapsing) is left to the caller.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_nbsp;
use crate::error::{Error, Result};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(body: &str) -> Self {
        Self { html: Html::parse_document(body) }
    }

    /// All elements matching `css`, in document order.
    pub fn select(&self, css: &str) -> Result<Vec<Node<'_>>> {
        let sel = selector(css)?;
        Ok(self.html.select(&sel).map(Node).collect())
    }

    /// Concatenated text of every match (empty when nothing matches).
    pub fn text_of(&self, css: &str) -> Result<String> {
        Ok(self.select(css)?.iter().map(Node::text).collect())
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    pub fn text(&self) -> String {
        normalize_nbsp(&self.0.text().collect::<String>())
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn select(&self, css: &str) -> Result<Vec<Node<'a>>> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).map(Node).collect())
    }

    /// First descendant matching `css`.
    pub fn first(&self, css: &str) -> Result<Option<Node<'a>>> {
        let sel = selector(css)?;
        Ok(self.0.select(&sel).next().map(Node))
    }

    /// Direct element children (text nodes skipped).
    pub fn children(&self) -> Vec<Node<'a>> {
        self.0.children().filter_map(ElementRef::wrap).map(Node).collect()
    }

    pub fn tag(&self) -> &'a str {
        self.0.value().name()
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(css.to_string()))
}
